use crate::config::RouterConfig;
use crate::parser::TemplateParser;

fn default_parser() -> TemplateParser {
    TemplateParser::from_config(&RouterConfig::default()).expect("default selectors are valid")
}

// the content region's inner markup and the meta title are pulled apart
#[test]
fn test_parse_full_template() {
    let body = r#"<div class="meta" data-title="Projects"></div>
<section class="content"><p>X</p></section>"#;

    let template = default_parser().parse(body);

    assert_eq!(template.content, "<p>X</p>");
    assert_eq!(template.title, "Projects");
}

// nested markup inside the content region survives untouched
#[test]
fn test_parse_keeps_nested_markup() {
    let body = r##"<div class="content"><ul><li><a href="#about">about</a></li></ul></div>"##;

    let template = default_parser().parse(body);

    assert_eq!(template.content, r##"<ul><li><a href="#about">about</a></li></ul>"##);
}

// a template that forgot its content wrapper is shown whole
#[test]
fn test_parse_without_content_region() {
    let body = "<h1>Loose</h1><p>no wrapper</p>";

    let template = default_parser().parse(body);

    assert_eq!(template.content, body);
    assert_eq!(template.title, "window");
}

// missing meta, missing attribute and empty attribute all fall back
#[test]
fn test_parse_title_fallbacks() {
    let parser = default_parser();

    let no_meta = parser.parse(r#"<div class="content">a</div>"#);
    let no_attr = parser.parse(r#"<div class="meta"></div><div class="content">a</div>"#);
    let empty_attr =
        parser.parse(r#"<div class="meta" data-title=""></div><div class="content">a</div>"#);

    assert_eq!(no_meta.title, "window");
    assert_eq!(no_attr.title, "window");
    assert_eq!(empty_attr.title, "window");
}

// only the first region counts when a template has several
#[test]
fn test_parse_uses_first_match() {
    let body = r#"<div class="meta" data-title="One"></div><div class="meta" data-title="Two"></div>
<div class="content">first</div><div class="content">second</div>"#;

    let template = default_parser().parse(body);

    assert_eq!(template.title, "One");
    assert_eq!(template.content, "first");
}

// selectors and attribute names follow the config
#[test]
fn test_parse_with_custom_selectors() {
    let parser = TemplateParser::new("#body", "header", "title", "untitled").unwrap();
    let body = r#"<header title="Custom"></header><main id="body"><em>hi</em></main>"#;

    let template = parser.parse(body);

    assert_eq!(template.title, "Custom");
    assert_eq!(template.content, "<em>hi</em>");
}

#[test]
fn test_invalid_selector_is_rejected() {
    assert!(TemplateParser::new("..content", ".meta", "data-title", "window").is_err());
    assert!(TemplateParser::new(".content", "[", "data-title", "window").is_err());
}

use crate::features::input::{ChordState, ClickOutcome, KeyOutcome, KeyPress};
use crate::page::History;
use crate::services::RenderOutcome;
use crate::tests::integration_renderer::setup_site;
use std::time::Duration;

fn rendered(key: &str, title: &str) -> RenderOutcome {
    RenderOutcome::Rendered {
        route_key: key.into(),
        title: title.into(),
    }
}

// on first load the router shows whatever the address bar points at
#[tokio::test]
async fn test_boot_uses_current_fragment() {
    let site = setup_site("#about");
    assert_eq!(site.app.boot().await, rendered("#about", "About"));
    assert_eq!(site.page.snapshot().content, "<p>about</p>");
}

// ...and home when it points at nothing
#[tokio::test]
async fn test_boot_defaults_to_home() {
    let site = setup_site("");
    assert_eq!(site.app.boot().await, rendered("#home", "Home"));
    assert_eq!(site.history.fragment(), "#home");
}

// in-page links are taken over, everything else is left to the browser
#[tokio::test]
async fn test_click_interception() {
    let site = setup_site("");

    let outcome = site.app.input.handle_click(Some("#projects")).await;
    assert_eq!(outcome, ClickOutcome::Intercepted(rendered("#projects", "Projects")));
    assert_eq!(site.history.fragment(), "#projects");

    for href in [Some("https://github.com"), Some("/cv.pdf"), Some("mailto:me@example.com"), None] {
        assert_eq!(site.app.input.handle_click(href).await, ClickOutcome::PassThrough);
    }
    assert_eq!(site.history.fragment(), "#projects");
    assert_eq!(site.history.len(), 1);
}

// back/forward and manual edits re-render from the address bar without touching history
#[tokio::test]
async fn test_hash_change_follows_history() {
    let site = setup_site("#home");
    site.app.boot().await;

    site.history.push("#about");
    assert_eq!(site.app.input.handle_hash_change().await, rendered("#about", "About"));

    site.history.push("#projects");
    site.app.input.handle_hash_change().await;
    assert_eq!(site.page.snapshot().content, "<p>X</p>");

    assert!(site.history.back());
    assert_eq!(site.app.input.handle_hash_change().await, rendered("#about", "About"));
    assert_eq!(site.history.len(), 3);
    assert_eq!(
        site.history.entries(),
        vec!["#home".to_string(), "#about".to_string(), "#projects".to_string()]
    );

    assert!(site.history.forward());
    site.app.input.handle_hash_change().await;
    assert_eq!(site.page.snapshot().active_icons, vec!["#projects".to_string()]);
}

// g then a route letter navigates and disarms the chord
#[tokio::test(start_paused = true)]
async fn test_chord_navigates() {
    let site = setup_site("");

    assert_eq!(site.app.input.handle_key(&KeyPress::plain("g")).await, KeyOutcome::Armed);
    assert!(matches!(site.app.input.chord_state(), ChordState::Armed { .. }));

    let outcome = site.app.input.handle_key(&KeyPress::plain("p")).await;
    assert_eq!(
        outcome,
        KeyOutcome::Navigated {
            outcome: rendered("#projects", "Projects"),
            prevent_default: false
        }
    );
    assert_eq!(site.app.input.chord_state(), ChordState::Idle);

    // disarmed, so a second letter does nothing
    assert_eq!(site.app.input.handle_key(&KeyPress::plain("a")).await, KeyOutcome::Ignored);
    assert_eq!(site.history.fragment(), "#projects");
}

// keys are matched case-insensitively
#[tokio::test(start_paused = true)]
async fn test_chord_ignores_case() {
    let site = setup_site("");

    site.app.input.handle_key(&KeyPress::plain("G")).await;
    let outcome = site.app.input.handle_key(&KeyPress::plain("E")).await;

    assert!(matches!(outcome, KeyOutcome::Navigated { .. }));
    assert_eq!(site.history.fragment(), "#experience");
}

// the chord only stays armed for the timeout
#[tokio::test(start_paused = true)]
async fn test_chord_expires() {
    let site = setup_site("");

    site.app.input.handle_key(&KeyPress::plain("g")).await;
    tokio::time::advance(Duration::from_millis(799)).await;
    assert!(matches!(site.app.input.chord_state(), ChordState::Armed { .. }));

    tokio::time::advance(Duration::from_millis(2)).await;
    assert_eq!(site.app.input.chord_state(), ChordState::Idle);
    assert_eq!(site.app.input.handle_key(&KeyPress::plain("a")).await, KeyOutcome::Ignored);
    assert_eq!(site.history.fragment(), "");
}

// pressing g again restarts the window
#[tokio::test(start_paused = true)]
async fn test_chord_rearm_extends_deadline() {
    let site = setup_site("");

    site.app.input.handle_key(&KeyPress::plain("g")).await;
    tokio::time::advance(Duration::from_millis(600)).await;
    site.app.input.handle_key(&KeyPress::plain("g")).await;
    tokio::time::advance(Duration::from_millis(600)).await;

    let outcome = site.app.input.handle_key(&KeyPress::plain("c")).await;
    assert!(matches!(outcome, KeyOutcome::Navigated { .. }));
    assert_eq!(site.history.fragment(), "#contact");
}

// unmapped keys neither navigate nor disarm
#[tokio::test(start_paused = true)]
async fn test_unmapped_key_keeps_chord_armed() {
    let site = setup_site("");

    assert_eq!(site.app.input.handle_key(&KeyPress::plain("p")).await, KeyOutcome::Ignored);

    site.app.input.handle_key(&KeyPress::plain("g")).await;
    assert_eq!(site.app.input.handle_key(&KeyPress::plain("x")).await, KeyOutcome::Ignored);
    assert_eq!(site.app.input.handle_key(&KeyPress::plain("Enter")).await, KeyOutcome::Ignored);
    assert!(matches!(site.app.input.chord_state(), ChordState::Armed { .. }));

    site.app.input.handle_key(&KeyPress::plain("a")).await;
    assert_eq!(site.history.fragment(), "#about");
}

// Ctrl+K and Cmd+K always go home, armed or not
#[tokio::test(start_paused = true)]
async fn test_home_combo() {
    let site = setup_site("");
    site.app.navigator.navigate("#about").await;

    let outcome = site.app.input.handle_key(&KeyPress::ctrl("k")).await;
    assert_eq!(
        outcome,
        KeyOutcome::Navigated {
            outcome: rendered("#home", "Home"),
            prevent_default: true
        }
    );

    site.app.navigator.navigate("#about").await;
    site.app.input.handle_key(&KeyPress::plain("g")).await;
    site.app.input.handle_key(&KeyPress::meta("K")).await;
    assert_eq!(site.history.fragment(), "#home");

    // a bare k is just a key
    assert_eq!(site.app.input.handle_key(&KeyPress::plain("k")).await, KeyOutcome::Ignored);
}

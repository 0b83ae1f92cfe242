pub mod template;

pub use self::template::TemplateParser;

pub mod template_cache;
pub mod template_store;

pub use self::template_cache::TemplateCache;
pub use self::template_store::TemplateStore;

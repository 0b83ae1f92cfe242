pub mod route;
pub mod template;

pub use self::route::RouteEntry;
pub use self::template::Template;

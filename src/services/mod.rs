pub mod navigator;
pub mod render;
pub mod routes;
pub mod store;

pub use self::navigator::Navigator;
pub use self::render::{RenderOutcome, Renderer};
pub use self::routes::RouteTable;
pub use self::store::TemplateStore;

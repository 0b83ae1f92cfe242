pub mod app;
pub mod config;
pub mod domain;
pub mod features;
pub mod io;
pub mod page;
pub mod parser;
pub mod services;

#[cfg(test)]
mod tests;

pub use crate::app::App;
pub use crate::config::RouterConfig;

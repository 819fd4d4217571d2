pub mod config;
pub mod core;
pub mod ui;

pub use config::SiteConfig;
pub use core::catalog::{Catalog, CatalogError, ProjectRecord, ResultImage};
pub use ui::{App, Route, Site};

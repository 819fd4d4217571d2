#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::core::state::{
    Accordion, ContactField, ContactForm, ContactRelay, DEFAULT_SUBMIT_DELAY,
    DEFAULT_SUBMIT_DELAY_MS, NavBarState, SCROLL_THRESHOLD, Section, SimulatedRelay, SubmitError,
    SubmitStatus,
};
pub use portfolio::{Catalog, CatalogError, ProjectRecord, Route, SiteConfig};

//! View-local state. Each view owns its own instance; nothing here is shared.

mod accordion;
mod contact;
mod nav;

pub use accordion::Accordion;
pub use contact::{
    ContactField, ContactForm, ContactRelay, ContactSubmission, DEFAULT_SUBMIT_DELAY,
    DEFAULT_SUBMIT_DELAY_MS, FormData, SimulatedRelay, SubmitError, SubmitStatus,
};
pub use nav::{NavBarState, SCROLL_THRESHOLD, Section};

//! Contact form: inline validation, guarded submit, simulated send.

pub mod controller;
pub mod view;

pub use controller::{ContactFormController, SubmitOutcome, CONTROLS_SELECTOR};
pub use view::attach;

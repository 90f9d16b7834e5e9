pub mod controller;
pub mod form;
pub mod session;
pub mod validation;

pub use controller::{BookingController, SubmitOutcome};
pub use session::{BookingModal, BookingSession};

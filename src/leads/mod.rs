pub mod airtable;
pub mod capture;

pub use airtable::AirtableClient;
pub use capture::{Confirmation, LeadCapture, SubmissionError};

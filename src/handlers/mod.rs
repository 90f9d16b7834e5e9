pub mod booking;
pub mod leads;
pub mod videos;

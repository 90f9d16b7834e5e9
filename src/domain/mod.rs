pub mod content;
pub mod lead;
pub mod schedule;
pub mod video;

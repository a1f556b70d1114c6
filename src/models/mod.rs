//! Data models for the events page export.

pub mod event;
pub mod page;

// Re-export commonly used types
pub use event::EventEntry;
pub use page::{EventsPage, MonthGroup};

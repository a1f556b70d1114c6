//! Input handler modules for different TUI contexts.

pub mod main;
pub mod theme;

// Re-export handler functions
pub use main::handle_main_input;
pub use theme::handle_theme_picker_input;

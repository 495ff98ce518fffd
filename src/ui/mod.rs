// UI module organization
pub mod components;
pub mod layout;
pub mod table;

// Re-export the main UI function
pub use layout::render_ui;

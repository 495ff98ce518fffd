// App module structure for better organization

pub mod core;
pub mod countdown;

// Re-export the main App struct and key types
pub use core::App;
pub use countdown::Countdown;

//! Host system interaction.
//!
//! - [`platform`] - operating system detection
//! - [`cli`] - external command execution
//! - [`ping`] - the platform `ping` utility

mod cli;
mod ping;
mod platform;

// Re-export public types and functions
pub use cli::run;
pub use ping::{ping, ping_command, PingOptions};
pub use platform::Platform;

#[cfg(feature = "cli")]
pub mod cli;
pub mod scenario;

#[cfg(feature = "cli")]
pub use cli::CliArgs;
pub use scenario::{NotificationConfig, Scenario};

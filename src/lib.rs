pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{MemoryConsole, StdoutConsole};
pub use config::Scenario;
pub use crate::core::demo::SolidDemo;
pub use crate::core::devices::{MultifunctionDevice, SimplePrinter, SimpleScanner};
pub use crate::core::notification::{EmailSender, NotificationService, SmsSender};
pub use crate::core::shapes::{format_area, print_area, total_area};
pub use domain::model::{Circle, DemoSummary, LineItem, Order, Rectangle, ShapeSpec};
pub use domain::ports::{Console, MessageSender, Multifunction, Printer, Scanner, Shape};
pub use utils::error::{DemoError, Result};

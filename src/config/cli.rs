use crate::config::scenario::Scenario;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-demo")]
#[command(about = "Walks through one small example per SOLID principle")]
pub struct CliArgs {
    /// Optional TOML scenario; the built-in example is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Format of diagnostic logs written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliArgs {
    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.config {
            Some(path) => {
                tracing::info!("Loading scenario from: {}", path.display());
                Scenario::from_file(path)
            }
            None => {
                tracing::debug!("No scenario file given, using built-in example");
                Ok(Scenario::default())
            }
        }
    }
}

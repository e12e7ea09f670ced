use anyhow::Context;
use clap::Parser;
use solid_demo::utils::{logger, validation::Validate};
use solid_demo::{CliArgs, SolidDemo, StdoutConsole};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose, args.log_format);

    tracing::info!("Starting solid-demo");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let scenario = match args.load_scenario().and_then(|s| s.validate().map(|_| s)) {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::error!("Scenario rejected: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let demo = SolidDemo::new(StdoutConsole, scenario);
    let summary = demo.run();
    tracing::debug!(
        order_total = summary.order_total,
        total_area = summary.total_area,
        "Demo summary"
    );

    std::io::Write::flush(&mut std::io::stdout()).context("failed to flush demo output")?;
    Ok(())
}

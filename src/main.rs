use clap::Parser;
use log::debug;

use herald::{cli, Logger};

mod diagnostics;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    diagnostics::setup();

    let args = cli::Args::parse();
    args.color.apply();

    let mut logger = Logger::default();
    args.apply_level(&mut logger);

    debug!("running {:?} at log level {}", args.command, logger.log_level());

    args.command.run(&mut logger, std::io::stdin().lock())
}

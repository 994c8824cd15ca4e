use std::io;

use clap::Parser;
use tracing::debug;

use consumption_tax_cli::{Cli, Command, app, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init_logging(&config)?;
    debug!(?config, "resolved configuration");

    let command = cli.command.unwrap_or(Command::Form);
    app::run(command, &config, io::stdin().lock(), &mut io::stdout().lock())
}

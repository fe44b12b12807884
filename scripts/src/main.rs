use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, utils::setup_logging};

fn main() -> Result<(), ScriptError> {
    let cli = Cli::parse();
    setup_logging(cli.log_mode);

    let config = cli.mimc_config()?;
    cli.command.run(&config)
}

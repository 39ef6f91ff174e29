//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`check`], or [`health`]. Each handler
//! lives in its own submodule.

pub mod check;
pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::FloristError;

pub async fn dispatch(cli: Cli) -> Result<(), FloristError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(&args),
        Some(Commands::Check(ref args)) => check::execute(args),
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  florist v{version} \u{2014} Flower launcher\n\n  \
         No command provided. To get started:\n\n    \
         florist check                     Validate configuration without starting\n    \
         florist run                       Configure from the environment and start Flower\n    \
         florist health                    Probe a running instance\n    \
         florist --help                    See all commands and options\n"
    );
}

//! slanglit: rewrite Russian youth slang into literary Russian

use anyhow::Result;
use clap::Parser;
use slanglit_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "slanglit")]
#[command(version)]
#[command(
    about = "Context-aware replacement of Russian youth slang with literary Russian",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}

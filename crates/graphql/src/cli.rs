use clap::CommandFactory;
use crate::commands;

/// Command-line access to GraphQL completion: point it at a schema and a
/// document position and it prints what an editor would offer there.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose (debug) logging on stderr.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}

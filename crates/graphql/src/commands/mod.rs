mod complete;

use crate::Cli;
use crate::CommandResult;
use complete::CompleteCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print completion candidates for a cursor position in a GraphQL
    /// document.
    Complete(Box<CompleteCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Complete(cmd) => cmd.run(cli).await
        }
    }
}

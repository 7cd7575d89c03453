use crate::demo::{run_demo, run_suggest, DemoArgs, SuggestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_agent::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Outreach Agent",
    about = "Score, rank, and review outbound sales leads from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked outreach suggestions for a JSON or CSV lead batch
    Suggest(SuggestArgs),
    /// Walk a sample batch through suggestions, feedback, and weight updates
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Suggest(args) => run_suggest(args),
        Command::Demo(args) => run_demo(args),
    }
}

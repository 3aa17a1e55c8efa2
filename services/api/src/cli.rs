use crate::demo::{
    run_decisions_export, run_feedback_export, run_search, DecisionsExportArgs, FeedbackExportArgs,
    SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use regulated_professions::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Register of Regulated Professions",
    about = "Run the register service or exercise its search and export flows from the command line",
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
    /// Search the seeded register from the command line
    Search(SearchArgs),
    /// Feedback administration commands
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },
    /// Recognition decision data commands
    Decisions {
        #[command(subcommand)]
        command: DecisionsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FeedbackCommand {
    /// Export collected feedback as CSV
    Export(FeedbackExportArgs),
}

#[derive(Subcommand, Debug)]
enum DecisionsCommand {
    /// Export recognition decision datasets as CSV
    Export(DecisionsExportArgs),
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
        Command::Search(args) => run_search(args),
        Command::Feedback {
            command: FeedbackCommand::Export(args),
        } => run_feedback_export(args),
        Command::Decisions {
            command: DecisionsCommand::Export(args),
        } => run_decisions_export(args),
    }
}

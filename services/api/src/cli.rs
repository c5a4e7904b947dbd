use crate::demo::{run_demo, run_estimate, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use devis_travaux::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DevisTravauxFacile",
    about = "Serve or walk the renovation estimator from the command line",
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
    /// Walk one estimator category with scripted answers and print the total
    Estimate(EstimateArgs),
    /// Run an end-to-end demo: estimate, lead intake and directory search
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
        Command::Estimate(args) => run_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::demo::{run_catalog_listing, run_demo, CatalogArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kindred::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Kindred Compatibility Engine",
    about = "Score questionnaire answers and rank compatible users from the command line",
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
    /// Print the question catalog, or the questions a set of answers leaves open
    Catalog(CatalogArgs),
    /// Score and rank a built-in sample cohort
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
        Command::Catalog(args) => run_catalog_listing(args),
        Command::Demo(args) => run_demo(args),
    }
}

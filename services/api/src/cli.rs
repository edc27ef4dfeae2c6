use crate::browse::{run_browse, run_show, BrowseArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rental_listings::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rental Listings",
    about = "Serve and search the rental listing catalog from the command line",
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
    /// Filter the catalog the same way the browse page does
    Browse(BrowseArgs),
    /// Print the full details of one listing
    Show(ShowArgs),
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
        Command::Browse(args) => run_browse(args),
        Command::Show(args) => run_show(args),
    }
}

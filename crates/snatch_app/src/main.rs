mod app;
mod cli;
mod report;

use clap::Parser;
use snatch_logging::snatch_error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();
    snatch_logging::initialize(args.log_destination(), args.log_level());

    if let Err(err) = app::run(args).await {
        snatch_error!("{:#}", err);
        std::process::exit(1);
    }
}

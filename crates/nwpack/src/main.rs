use clap::Parser;

mod cli;
mod commands;

fn main() {
    // Parse CLI arguments
    let parsed = cli::Cli::parse();

    // Every failure collapses to exit status 1; the logged message is the only
    // place failure modes are distinguished.
    if let Err(err) = parsed.dispatch() {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

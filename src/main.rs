use clap::Parser;
use std::process::ExitCode;

use mpls::cli::Cli;
use mpls::core::list;
use mpls::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = mpls::logging::init() {
        eprintln!("mpls: logging disabled: {err}");
    }

    match list(&RealFileSystem, &cli.path).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("mpls: {err:#}");
            ExitCode::from(1)
        }
    }
}

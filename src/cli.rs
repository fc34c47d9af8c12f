use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mpls", version)]
#[command(
    about = "List one directory as a JSON array of {name, isDir} entries",
    long_about = None
)]
pub struct Cli {
    /// Directory to list (a single trailing `/` is ignored)
    pub path: String,
}

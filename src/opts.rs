use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mediwatch-sim", version, about = "Smartwatch display mock-up for an emergency-medical monitoring scenario")]
pub struct Opts {
    /// Also append log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

use clap::Parser;
use log::info;
use mediwatch_sim::{init_logging, run};
use mediwatch_sim::error::{error_msgbox, AppRunError};
use mediwatch_sim::opts::Opts;

fn main() -> Result<(), AppRunError> {
    let opts = Opts::parse();

    init_logging(&opts);
    info!(concat!("MediWatch Sim ", env!("CARGO_PKG_VERSION")));

    match run(opts) {
        Err(err) => {
            error_msgbox("Unexpected error", &err);
            Err(err)
        }
        Ok(_) => Ok(())
    }
}

use crate::gui::application::run_application;
use crate::error::AppRunError;
use crate::opts::Opts;

pub mod device;
pub mod gui;
pub mod error;
pub mod nav;
pub mod opts;
pub mod patient;
pub mod vitals;
pub mod waveform;

pub fn init_logging(opts: &Opts) {
    let level = if opts.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = &opts.log_file {
        dispatch = dispatch.chain(
            fern::log_file(log_file).expect("Failed to open log file")
        );
    }

    dispatch.apply().expect("Failed to initialize logger");
}

pub fn run(_opts: Opts) -> Result<(), AppRunError> {
    run_application()?;
    Ok(())
}

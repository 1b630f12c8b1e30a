use filedatesync::args::{self, Invocation};
use filedatesync::error::SyncError;
use filedatesync::output;
use filedatesync::syncer::Syncer;
use log::info;
use std::env;
use std::io;
use std::process::ExitCode;

fn run(args: &[String]) -> Result<(), SyncError> {
    let (config, mode_defaulted) = match args::parse(args)? {
        Invocation::Help => {
            println!("{}", output::help_page());
            return Ok(());
        }
        Invocation::Run {
            config,
            mode_defaulted,
        } => (config, mode_defaulted),
    };

    if mode_defaulted {
        println!("Operating mode not set, assuming \"{}\"", config.mode);
    }

    let mut syncer = Syncer::new(config, io::stdout().lock());
    let summary = syncer.run()?;
    info!("Updated {} files", summary.files);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    info!("Logging initialized");

    println!("{}", output::banner());

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            if e.is_usage() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

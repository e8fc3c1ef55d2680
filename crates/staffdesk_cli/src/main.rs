//! staffdesk: interactive employee record manager.
//!
//! # Responsibility
//! - Parse configuration, optionally start logging, and run the menu loop.
//! - Map the session result to a process exit code.

mod config;
mod menu;
mod prompt;
mod table;

use clap::Parser;
use config::Config;
use menu::{MenuError, MenuLoop};
use prompt::TerminalPrompter;
use staffdesk_core::{init_logging, EmployeeService, InMemoryEmployeeRepository};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(err) = start_logging(&config) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_session_end() => {
            log::info!("event=session_end module=cli status=closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=session_end module=cli status=error error={err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let Some(log_dir) = config.resolved_log_dir()? else {
        return Ok(());
    };
    init_logging(config.log_level(), log_dir)?;
    Ok(())
}

fn run() -> Result<(), MenuError> {
    let prompter = TerminalPrompter::new()?;
    let service = EmployeeService::new(InMemoryEmployeeRepository::new());
    MenuLoop::new(service, prompter, io::stdout()).run()
}

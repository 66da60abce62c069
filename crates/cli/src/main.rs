use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use student_records_core::error::{Error, Result};
use student_records_core::registry::Registry;
use student_records_core::{config, file_handling};
use student_records_cli::cli_args::{Args, Mode};
use student_records_cli::menu::{Prompter, Renderer};
use student_records_cli::session;

fn open_script(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(stdin().lock()));
    }

    let file = File::open(path)
        .map_err(|e| Error::io_error("script".to_string(), path.to_string(), e))?;
    Ok(Box::new(BufReader::new(file)))
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let settings = file_handling::get_settings(&config_path)?;

    let mut registry = Registry::from_settings(&settings);
    info!("Course cost is {}", registry.course_cost());

    let renderer = Renderer::new(!args.no_color && stdout().is_terminal());

    match args.mode() {
        Mode::Interactive => {
            let mut prompter = Prompter::new(stdin().lock(), stdout());
            session::run_interactive(&mut registry, &mut prompter, &renderer)
        }
        Mode::Script(path) => {
            let script = open_script(&path)?;
            session::run_script(&mut registry, script, &mut stdout(), &renderer)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

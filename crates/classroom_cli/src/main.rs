//! Interactive console front end for the classroom registry.
//!
//! # Responsibility
//! - Parse logging flags and bootstrap core logging.
//! - Own the single `ClassroomManager` for this process and hand it to the
//!   menu session.

mod session;

use clap::Parser;
use classroom_core::{core_version, default_log_level, init_logging, ClassroomManager};
use log::error;
use session::Session;
use std::io::{self, BufWriter};
use std::process::ExitCode;

/// Virtual Classroom Manager
///
/// Create classrooms, enroll students, schedule and submit assignments.
#[derive(Parser, Debug)]
#[command(name = "classroom")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log level: trace|debug|info|warn|error (default depends on build mode)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files (default: stderr)
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, args.log_dir.as_deref()) {
        eprintln!("warning: logging disabled: {err}");
    }

    println!("*****************************");
    println!("* Virtual Classroom Manager *");
    println!("*****************************");
    println!("core version {}", core_version());

    let mut manager = ClassroomManager::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&mut manager, stdin.lock(), BufWriter::new(stdout.lock()));

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end module=cli status=error error={err}");
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}

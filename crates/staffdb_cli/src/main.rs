//! `staffdb`: console menu over the staff database.
//!
//! # Responsibility
//! - Load `staffdb.toml`, start file logging and open the database.
//! - Run exactly one selected exercise, then release the connection.

mod error;
mod exercise;
mod report;
mod session;

use error::CliResult;
use log::{error, info, warn};
use rusqlite::Connection;
use session::Session;
use staffdb_core::db::open_db;
use staffdb_core::{init_logging, AppConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::load_or_default(&std::env::current_dir()?)?;
    init_logging(&config.logging.level, &config.logging.dir)?;
    let conn = open_db(&config.database.path)?;

    let outcome = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(&conn, &config.exercises, stdin.lock(), stdout.lock()).run()
    };
    close_connection(conn);

    let exercise = outcome?;
    info!(
        "event=app_exit module=cli status=ok exercise={}",
        exercise.number()
    );
    Ok(())
}

fn close_connection(conn: Connection) {
    match conn.close() {
        Ok(()) => info!("event=db_close module=cli status=ok"),
        // The handle is dropped either way; a failed close only leaks until exit.
        Err((_conn, err)) => warn!("event=db_close module=cli status=error error={err}"),
    }
}

//! CLI trace replayer.
//!
//! # Responsibility
//! - Verify `portfolio_core` linkage and print its version.
//! - Replay a scroll trace (`portfolio_cli [trace.json]`) or the built-in
//!   demo session, one state line per event.
//!
//! Set `PORTFOLIO_LOG_DIR` to an absolute directory to capture core logs.

mod trace;

use std::path::Path;
use std::process::ExitCode;
use trace::{replay, Trace};

const LOG_DIR_ENV: &str = "PORTFOLIO_LOG_DIR";

fn main() -> ExitCode {
    println!("portfolio_core version={}", portfolio_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = portfolio_core::init_logging(portfolio_core::default_log_level(), &log_dir)
        {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let trace = match std::env::args().nth(1) {
        Some(path) => match Trace::load(Path::new(&path)) {
            Ok(trace) => trace,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Trace::demo(),
    };

    match replay(&trace) {
        Ok(lines) => {
            log::info!(
                "event=trace_replay module=cli status=ok steps={}",
                lines.len()
            );
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=trace_replay module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

//! # Terreno CLI Application
//!
//! Terminal front end for the estimator: a question-and-answer session
//! over stdin/stdout, or a fixed demo that needs no input.
//!
//! ```text
//! calc_cli                      # asks for the mode
//! calc_cli --mode demo --json   # demo plus JSON breakdown
//! calc_cli --mode interactive
//! ```

mod config;
mod logger;
mod session;

use std::io::{self, ErrorKind};

use anyhow::Context;
use clap::Parser;

use crate::config::CliConfig;
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose);
    tracing::debug!(?config, "CLI config");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run(config.mode, config.json) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            tracing::info!("Input closed, ending session");
            println!();
            Ok(())
        }
        Err(e) => Err(e).context("Session failed"),
    }
}

// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strongbox - encrypt credentials and generate secrets from the shell.
//!
//! Results go to stdout; prompts, logs, and errors go to stderr.

mod cli;
mod commands;
mod prompt;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match strongbox_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            strongbox_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    match commands::run(&cli.command, &config) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::debug!(kind = err.kind(), "command failed");
            eprintln!("strongbox: {err}");
            std::process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `strongbox=<level>,warn`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("strongbox={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        let config = strongbox_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.kdf.iterations, 100_000);
    }
}

//! Valuetable CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use valuetable_runtime::{Cli, Mode, Repl, init_logging, render, render_error, run_batch};

/// Exit code when the dataset cannot be loaded.
const EXIT_LOAD_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    if let Err(e) = init_logging(config.log_filter.as_deref()) {
        eprintln!("{}", render_error(&e, config.output));
        return ExitCode::FAILURE;
    }

    let (engine, _report) = match config.load_engine() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", render_error(&e, config.output));
            return ExitCode::from(EXIT_LOAD_FAILURE);
        }
    };

    match cli.mode() {
        Mode::Once(line) => match engine.run(&line).and_then(|r| render(&r, config.output)) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", render_error(&e, config.output));
                ExitCode::FAILURE
            }
        },
        Mode::Batch => {
            let stdin = io::stdin().lock();
            match run_batch(&engine, config.output, stdin, io::stdout().lock(), io::stderr()) {
                Ok(summary) => {
                    info!(answered = summary.answered, failed = summary.failed, "batch finished");
                    if summary.failed == 0 {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::FAILURE
                    }
                }
                Err(e) => {
                    eprintln!("{}", render_error(&e, config.output));
                    ExitCode::FAILURE
                }
            }
        }
        Mode::Interactive => {
            let repl = Repl::new(engine).map(|repl| repl.with_format(config.output));
            let result = repl.and_then(|mut repl| {
                if !config.show_banner {
                    repl = repl.without_banner();
                }
                repl.run()
            });
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{}", render_error(&e, config.output));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

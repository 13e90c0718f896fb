#![allow(nonstandard_style)]

mod console;
mod error_handling;
mod evaluating;
mod keypad;
mod parsing;
mod rendering;
mod scanning;
mod session;

use console::*;
use evaluating::*;
use rendering::*;
use session::*;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// A keypad calculator that evaluates `+ - * /` strictly left to right.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Evaluate this expression once and exit
    #[arg(short, long)]
    expression: Option<String>,

    /// Draw operator keys with their ASCII labels instead of icons
    #[arg(long)]
    plain_keys: bool,

    /// Do not draw the keypad
    #[arg(long)]
    no_keypad: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// `RUST_LOG` wins over `-v` when it is set.
fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

fn init_logging(verbose: u8) {
    let filter = log_filter(verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The line printed for `--expression`, or `None` for an interactive session.
fn one_shot(args: &Args) -> Option<String> {
    let expression = args.expression.as_deref()?;
    let result = evaluate(expression);
    if result.is_error() {
        info!(expression, "expression did not evaluate");
    }
    Some(result.to_string())
}

fn render_options(args: &Args) -> RenderOptions {
    RenderOptions{keypad: !args.no_keypad, icons: !args.plain_keys}
}

fn run_session(options: &RenderOptions) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut state = SessionState::new();

    info!("session started");
    print!("{}{}\n> ", render(&state, options), HELP);
    stdout.flush().context("failed to flush stdout")?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match read_command(&line) {
            Command::quit => break,
            Command::events(events) => {
                state = state.handle_all(events);
                print!("{}", render(&state, options));
            },
            Command::unknown(text) => {
                warn!(line = %text, "unrecognized command");
                println!("{}", HELP);
            },
        }

        print!("> ");
        stdout.flush().context("failed to flush stdout")?;
    }

    println!();
    info!("session ended");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(line) = one_shot(&args) {
        println!("{}", line);
        return Ok(());
    }

    run_session(&render_options(&args))
}

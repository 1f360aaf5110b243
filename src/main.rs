use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scicalc::calculator::{CalcResult, calculate};
use scicalc::{Config, Key, Keypad};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scientific calculator with sin, cos (degrees) and sqrt.
#[derive(Parser)]
#[command(name = "scicalc", version, about)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/scicalc/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// Expression to evaluate
        expression: String,
    },
    /// Press keys in order, printing the display after each one
    Keys {
        /// Key labels, e.g. `sqrt 9 ) + 1 =`
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Eval { expression }) => run_eval(&expression, &config),
        Some(Commands::Keys { keys }) => run_keys(&keys, &config),
        None => run_session(&config),
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("scicalc={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn run_eval(expression: &str, config: &Config) -> Result<()> {
    let result = calculate(expression, &config.display);
    println!("{}", result.display());

    match result {
        CalcResult::Success { .. } => Ok(()),
        CalcResult::Error { error, .. } => {
            Err(error).with_context(|| format!("Failed to evaluate `{}`", expression))
        }
    }
}

fn run_keys(labels: &[String], config: &Config) -> Result<()> {
    let mut keypad = Keypad::new(config);

    for label in labels {
        let key: Key = label.parse()?;
        println!("{:>6}  {}", label, keypad.press(key));
    }

    Ok(())
}

/// Line-oriented session on stdin; see [`Keypad::enter_line`].
fn run_session(config: &Config) -> Result<()> {
    info!("Starting interactive session");

    let mut keypad = Keypad::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        writeln!(stdout, "{}", keypad.enter_line(&line))?;
        stdout.flush()?;
    }

    Ok(())
}

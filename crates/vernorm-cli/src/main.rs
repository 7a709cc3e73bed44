use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use vernorm_core::{classify_stability, normalize, Error, Result, Stability};

/// vernorm: canonical package version strings
///
/// Normalize version specifiers and classify their stability.
/// Reads one specifier per line from stdin when none are given.
#[derive(Parser)]
#[command(name = "vernorm", version, about, long_about = None)]
struct Cli {
    /// Suppress stdout
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Log which rule produced each result (stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of each specifier
    Normalize {
        /// Version specifiers (stdin if omitted)
        versions: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the stability label of each specifier
    Stability {
        /// Version specifiers (stdin if omitted)
        versions: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print canonical form and stability side by side
    Inspect {
        /// Version specifiers (stdin if omitted)
        versions: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Normalized,
    Stability,
    Both,
}

#[derive(Serialize)]
struct Report {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stability: Option<Stability>,
}

impl Report {
    fn build(input: String, field: Field) -> Self {
        let normalized = (field != Field::Stability).then(|| normalize(&input));
        let stability = (field != Field::Normalized).then(|| classify_stability(&input));
        Report {
            input,
            normalized,
            stability,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "vernorm_core=trace" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let (versions, json, field) = match &cli.command {
        Commands::Normalize { versions, json } => (versions, *json, Field::Normalized),
        Commands::Stability { versions, json } => (versions, *json, Field::Stability),
        Commands::Inspect { versions, json } => (versions, *json, Field::Both),
        Commands::Version => {
            if !cli.quiet {
                println!(
                    "vernorm {} (vernorm-core {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("CARGO_PKG_VERSION")
                );
            }
            return Ok(());
        }
    };

    let inputs = collect_inputs(versions)?;
    tracing::debug!(count = inputs.len(), "processing specifiers");

    let reports: Vec<Report> = inputs
        .into_iter()
        .map(|input| Report::build(input, field))
        .collect();

    if cli.quiet {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let text = serde_json::to_string_pretty(&reports)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        writeln!(out, "{}", text)?;
    } else {
        for report in &reports {
            write_human(&mut out, report)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn collect_inputs(versions: &[String]) -> Result<Vec<String>> {
    if !versions.is_empty() {
        return Ok(versions.to_vec());
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn write_human(out: &mut impl Write, report: &Report) -> io::Result<()> {
    match (&report.normalized, report.stability) {
        (Some(normalized), None) => writeln!(out, "{}", normalized),
        (None, Some(stability)) => writeln!(out, "{}", paint(stability)),
        (Some(normalized), Some(stability)) => writeln!(
            out,
            "{}  →  {}  [{}]",
            report.input,
            normalized.bold(),
            paint(stability)
        ),
        (None, None) => Ok(()),
    }
}

fn paint(stability: Stability) -> colored::ColoredString {
    let label = stability.as_str();
    match stability {
        Stability::Stable => label.green(),
        Stability::Rc => label.cyan(),
        Stability::Beta => label.yellow(),
        Stability::Alpha => label.magenta(),
        Stability::Dev => label.red(),
    }
}

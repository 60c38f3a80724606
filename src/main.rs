//! alphaprobe CLI - report alpha channel and transparency of an image.

use alphaprobe::prelude::*;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the report itself could not be written.
const EXIT_OUTPUT_FAILURE: u8 = 4;

#[derive(Parser)]
#[command(name = "alphaprobe")]
#[command(about = "Check an image for an alpha channel and transparent pixels")]
#[command(version)]
#[command(after_help = "Exit status:\n  0  inspected (with or without alpha)\n  1  file not found\n  2  invalid arguments\n  3  image could not be decoded\n  4  report could not be written")]
struct Cli {
    /// Image file to inspect
    path: PathBuf,

    /// Also resolve grayscale+alpha and palette images from their pixels
    #[arg(long)]
    thorough: bool,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = InspectOptions::new().with_thorough(cli.thorough);

    log::debug!("inspecting {} ({:?})", cli.path.display(), options);
    let outcome = inspect_path(&cli.path, &options);

    match emit(&outcome, cli.json) {
        Ok(()) => ExitCode::from(exit_code(&outcome)),
        Err(e) => {
            eprintln!("alphaprobe: {:#}", e);
            ExitCode::from(EXIT_OUTPUT_FAILURE)
        }
    }
}

fn emit(outcome: &Outcome, json: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    if json {
        let line = render_json(outcome).context("failed to serialize report")?;
        writeln!(stdout, "{}", line).context("failed to write report")?;
    } else {
        for line in render_lines(outcome) {
            writeln!(stdout, "{}", line).context("failed to write report")?;
        }
    }

    stdout.flush().context("failed to flush report")
}

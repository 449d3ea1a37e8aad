//! Balance report CLI
//!
//! Prints the cost/power/ratio tables for the Dodge, Snake and Memory
//! Match variant files plus a cross-game comparison.

use anyhow::Result;
use balance_core::GameFamily;
use balance_report::report::{self, FamilySummary};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "balance_report")]
#[command(about = "Print balance tables for minigame variant families", long_about = None)]
struct Cli {
    /// Directory holding the per-family variant JSON files
    #[arg(long, default_value = "assets/data/variants")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_preamble(&mut out)?;

    let mut summaries = Vec::new();
    for family in GameFamily::ALL {
        let path = cli.data_dir.join(family.data_file());
        let variants = balance_report::load_variants(&path, family)?;
        let outcomes = report::analyze_family(&mut out, family, &variants)?;
        summaries.push(FamilySummary::from_outcomes(family, &outcomes));
    }

    report::write_cross_game_summary(&mut out, &summaries)?;
    out.flush()?;

    Ok(())
}

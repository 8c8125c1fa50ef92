use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use movingload::{Scenario, DEFAULT_INFLUENCE_POINTS};

/// Influence-line envelopes for a simply supported beam under a moving load pair.
#[derive(Debug, Parser)]
#[command(name = "movingload", version, about)]
pub struct Cli {
    /// What to compute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sweep the load pair across the span and report the governing values.
    Analyze(AnalyzeArgs),
    /// Tabulate unit-load influence lines for reactions and mid-span effects.
    Influence(InfluenceArgs),
}

/// Inputs of `movingload analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Read the scenario from a JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["span", "leading", "trailing", "spacing"])]
    pub input: Option<PathBuf>,
    /// Beam span L.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub span: Option<f64>,
    /// Leading load W1.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub leading: Option<f64>,
    /// Trailing load W2.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub trailing: Option<f64>,
    /// Distance x between the loads.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub spacing: Option<f64>,
    /// Grid samples over the span; overrides the scenario file.
    #[arg(long)]
    pub resolution: Option<usize>,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    /// Assemble the scenario from the file or the individual flags.
    pub fn scenario(&self) -> Result<Scenario, Box<dyn Error>> {
        let mut scenario = match (&self.input, self.span, self.leading, self.trailing, self.spacing) {
            (Some(path), ..) => Scenario::from_path(path)?,
            (None, Some(span), Some(leading_load), Some(trailing_load), Some(spacing)) => Scenario {
                span,
                leading_load,
                trailing_load,
                spacing,
                resolution: None,
            },
            _ => {
                return Err(
                    "either --input or all of --span, --leading, --trailing and --spacing are required"
                        .into(),
                )
            }
        };
        if self.resolution.is_some() {
            scenario.resolution = self.resolution;
        }
        Ok(scenario)
    }
}

/// Inputs of `movingload influence`.
#[derive(Debug, Args)]
pub struct InfluenceArgs {
    /// Beam span L.
    #[arg(long, allow_negative_numbers = true)]
    pub span: f64,
    /// Number of unit-load positions.
    #[arg(long, default_value_t = DEFAULT_INFLUENCE_POINTS)]
    pub points: usize,
    /// Print the ordinates as JSON.
    #[arg(long)]
    pub json: bool,
}

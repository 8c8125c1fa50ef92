mod cli;
mod report;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Command, InfluenceArgs};
use log::debug;
use movingload::{EnvelopeEngine, InfluenceLines};
use report::{render_influence_table, render_summary};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Analyze(args) => analyze(&args),
        Command::Influence(args) => influence(&args),
    }
}

fn analyze(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let scenario = args.scenario()?;
    debug!("scenario: {scenario:?}");

    // Validation happens inside the engine before any sweeping starts.
    let engine = EnvelopeEngine::with_config(scenario.config());
    let result = engine.analyze(
        scenario.span,
        scenario.leading_load,
        scenario.trailing_load,
        scenario.spacing,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_summary(&scenario, &result));
    }
    Ok(())
}

fn influence(args: &InfluenceArgs) -> Result<(), Box<dyn Error>> {
    let lines = InfluenceLines::for_span(args.span, args.points)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        print!("{}", render_influence_table(&lines));
    }
    Ok(())
}

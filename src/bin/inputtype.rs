//! inputtype: CLI tool for classifying and validating analysis targets.

use clap::{Args, Parser, Subcommand};
use inputtype::{Detected, Engine, EngineConfig, Error, Kind, TldRegistry, Verdict};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inputtype")]
#[command(version = "0.1.0")]
#[command(about = "Classify targets as IP, network, domain, email or file and check admissibility", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Print one JSON object per input
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EngineArgs {
    /// JSON engine configuration
    #[arg(short, long, global = true, conflicts_with = "tlds")]
    config: Option<PathBuf>,

    /// Newline-delimited TLD list
    #[arg(short, long, global = true)]
    tlds: Option<PathBuf>,

    /// Directory file names are resolved in
    #[arg(short, long, global = true, default_value = "/tmp", conflicts_with = "config")]
    scratch_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the detected kind of each input
    Detect {
        /// Inputs to classify
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Detect each input, then check whether it is admissible
    Validate {
        /// Inputs to check
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    detected: Option<&'a Detected>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Detect { inputs } => detect_inputs(&cli.engine, inputs, cli.json),
        Commands::Validate { inputs } => validate_inputs(&cli.engine, inputs, cli.json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_engine(args: &EngineArgs) -> Result<Engine, Error> {
    if let Some(path) = &args.config {
        let config = EngineConfig::load(path)?;
        return Engine::from_config(&config);
    }

    match &args.tlds {
        Some(tlds) => {
            let config = EngineConfig::new(tlds).with_scratch_dir(&args.scratch_dir);
            Engine::from_config(&config)
        }
        // Detection never consults the registry.
        None => Ok(Engine::new(TldRegistry::default(), &args.scratch_dir)),
    }
}

/// Returns `Ok(false)` if any input could not be classified.
fn detect_inputs(args: &EngineArgs, inputs: &[String], json: bool) -> Result<bool, Error> {
    let engine = build_engine(args)?;
    let mut all_ok = true;

    for input in inputs {
        let detected = engine.detect(input);
        let report = match &detected {
            Ok(d) => Report {
                input: input.as_str(),
                kind: d.kind(),
                detected: Some(d),
                verdict: None,
                error: None,
            },
            Err(e) => {
                all_ok = false;
                Report {
                    input: input.as_str(),
                    kind: Kind::Unknown,
                    detected: None,
                    verdict: None,
                    error: Some(e.to_string()),
                }
            }
        };
        print_report(&report, json)?;
    }

    Ok(all_ok)
}

/// Returns `Ok(false)` if any input was unknown or rejected.
fn validate_inputs(args: &EngineArgs, inputs: &[String], json: bool) -> Result<bool, Error> {
    if args.config.is_none() && args.tlds.is_none() {
        return Err(Error::Config(
            "validation needs a TLD list: pass --tlds or --config".to_string(),
        ));
    }

    let engine = build_engine(args)?;
    let mut all_ok = true;

    for input in inputs {
        let detected = engine.detect(input);
        let report = match &detected {
            Ok(d) => {
                let verdict = engine.validate(d)?;
                all_ok &= verdict.is_accepted();
                Report {
                    input: input.as_str(),
                    kind: d.kind(),
                    detected: Some(d),
                    verdict: Some(verdict),
                    error: None,
                }
            }
            Err(e) => {
                all_ok = false;
                Report {
                    input: input.as_str(),
                    kind: Kind::Unknown,
                    detected: None,
                    verdict: None,
                    error: Some(e.to_string()),
                }
            }
        };
        print_report(&report, json)?;
    }

    Ok(all_ok)
}

fn print_report(report: &Report<'_>, json: bool) -> Result<(), Error> {
    if json {
        let line = serde_json::to_string(report)?;
        println!("{}", line);
        return Ok(());
    }

    let value = match report.detected {
        Some(Detected::Ip(ip)) => ip.to_string(),
        Some(Detected::IpNetwork(net)) => net.to_string(),
        Some(Detected::Domain(domain)) => domain.clone(),
        Some(Detected::Email(email)) => email.to_string(),
        Some(Detected::File(path)) => path.display().to_string(),
        None => report.error.clone().unwrap_or_default(),
    };

    match report.verdict {
        Some(verdict) => println!("{}\t{}\t{}\t{}", report.input, report.kind, value, verdict),
        None => println!("{}\t{}\t{}", report.input, report.kind, value),
    }
    Ok(())
}

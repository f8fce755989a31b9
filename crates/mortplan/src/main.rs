use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use mortplan::{config, init_logging, report::Report};
use mortplan_core::Mortgage;
use mortplan_core::analysis::{sweep_evaluate, trace_evaluate};

#[derive(Parser, Debug)]
#[command(name = "mortplan")]
#[command(about = "A mortgage cost and sensitivity calculator")]
struct Args {
    /// Path to the YAML config file
    #[arg(default_value = "mortgage.yaml")]
    config: PathBuf,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    tracing::info!("Loading config from {}", args.config.display());
    let file = config::load_config(&args.config)?;

    let mortgage = Mortgage::new(file.mortgage)?;
    let breakdown = mortgage.breakdown();

    let analysis = &file.analysis;
    let sweeps = if analysis.sweeps.is_empty() {
        Vec::new()
    } else {
        sweep_evaluate(&mortgage, &analysis.sweeps, &analysis.outputs)?
    };
    let trace = match &analysis.trace {
        Some(trace_config) => trace_evaluate(&mortgage, trace_config)?,
        None => Vec::new(),
    };
    tracing::info!(
        "Computed {} sweeps and {} trace results",
        sweeps.len(),
        trace.len()
    );

    let report = Report {
        breakdown,
        sweeps,
        trace,
    };
    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

//! Quality Indicator Circuit Demo
//!
//! Builds QICs for a set of sample workloads and reports how each input's
//! two-qubit interaction pattern was replayed.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qic_demos::workloads::Workload;
use qic_demos::{print_header, print_info, print_result, print_section, print_success};
use qic_synth::{QicBuilder, QicConfig, QicSummary};

#[derive(Parser, Debug)]
#[command(name = "demo-qic")]
#[command(about = "Build quality indicator circuits for sample workloads")]
struct Args {
    /// Workload to build QICs for (ghz, qft, brickwork, all)
    #[arg(short, long, default_value = "all")]
    workload: Workload,

    /// Number of qubits per input circuit
    #[arg(short = 'n', long, default_value = "5")]
    qubits: u32,

    /// Two-qubit gate used in the QIC (cx, ecr, cz)
    #[arg(short, long)]
    gate: Option<String>,

    /// Replay raw interaction counts instead of normalizing by the minimum
    #[arg(long)]
    no_reduce: bool,

    /// Insert barriers between repeated CX gates
    #[arg(long)]
    barriers: bool,

    /// YAML file with builder options; flags override its values
    #[arg(short, long, env = "QIC_CONFIG")]
    config: Option<String>,

    /// Print the summaries as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = resolve_config(args)?;
    info!(?config, "resolved builder configuration");

    let circuits = args
        .workload
        .circuits(args.qubits)
        .with_context(|| format!("Failed to build '{}' workload", args.workload))?;

    let builder = QicBuilder::new(config);
    let summaries = circuits
        .iter()
        .map(|circuit| {
            builder
                .analyze(circuit)
                .with_context(|| format!("Failed to build QIC for '{}'", circuit.name()))
        })
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let reports: Vec<&QicSummary> = summaries.iter().map(|(_, summary)| summary).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print_header("Quality Indicator Circuits");

    print_section("Configuration");
    print_result("Workload", args.workload);
    print_result("Qubits", args.qubits);
    print_result("Two-qubit gate", config.two_qubit_gate);
    print_result("Reduce by ratio", config.reduce_by_ratio);
    print_result("Barriers", config.barriers_enabled());
    if config.insert_barriers && !config.barriers_enabled() {
        print_info("Barriers are only inserted for cx; ignoring --barriers");
    }

    for (circuit, (qic, summary)) in circuits.iter().zip(&summaries) {
        print_section(&format!("Circuit '{}'", summary.name));
        print_result("Input depth", circuit.depth());
        print_result("Interacting pairs", summary.original.len());
        print_result("Original histogram", &summary.original);
        if let (Some(min), Some(max)) = (summary.original.min_count(), summary.original.max_count()) {
            print_result("Count range", format!("{min}..={max}"));
        }
        print_result("Replayed histogram", &summary.effective);
        print_result("QIC name", qic.name());
        print_result("QIC depth", qic.depth());
        print_result("QIC two-qubit gates", summary.two_qubit_gates);
        print_result("Measured", summary.measured);
    }

    println!();
    print_success(&format!("Built {} QICs", summaries.len()));
    Ok(())
}

/// Start from the YAML file (if any) and apply command-line overrides.
fn resolve_config(args: &Args) -> Result<QicConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(Path::new(path))?,
        None => QicConfig::default(),
    };

    if let Some(gate) = &args.gate {
        config = config.with_gate_name(gate)?;
    }
    if args.no_reduce {
        config = config.with_reduce_by_ratio(false);
    }
    if args.barriers {
        config = config.with_insert_barriers(true);
    }

    Ok(config)
}

fn load_config(path: &Path) -> Result<QicConfig> {
    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    serde_yaml_ng::from_str(&source)
        .with_context(|| format!("Invalid config: {}", path.display()))
}

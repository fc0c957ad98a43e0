//! qsym - State-vector circuit simulator
//! Command-line interface for building, drawing and sampling layered circuits

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::*;
use qsym_core::prelude::*;
use serde::Deserialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qsym")]
#[command(author, version)]
#[command(about = "qsym - state-vector simulator for small quantum circuits", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CircuitArgs {
    /// Number of qubits
    #[arg(short, long, value_name = "N")]
    qubits: usize,

    /// Gate placements in order, as GATE:LANE (e.g. X:0 H:1)
    #[arg(value_name = "OPS")]
    ops: Vec<GateOp>,

    /// Skip gates on out-of-range lanes instead of failing
    #[arg(long)]
    lenient: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a circuit, evolve |0…0⟩ and sample a histogram
    Run {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Number of measurement shots
        #[arg(short, long)]
        shots: Option<usize>,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Reject states whose probabilities do not sum to 1
        #[arg(long)]
        strict_normalization: bool,

        /// Print the final state vector
        #[arg(long)]
        state: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the circuit diagram
    Draw {
        #[command(flatten)]
        circuit: CircuitArgs,
    },

    /// List the gate library
    Gates,
}

/// One `GATE:LANE` placement
#[derive(Clone, Debug)]
struct GateOp {
    gate: Gate,
    lane: usize,
}

impl FromStr for GateOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (gate, lane) = s
            .split_once(':')
            .ok_or_else(|| format!("expected GATE:LANE, got '{s}'"))?;
        let gate = gate.parse::<Gate>().map_err(|e| e.to_string())?;
        let lane = lane
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid lane '{lane}' in '{s}'"))?;
        Ok(Self { gate, lane })
    }
}

/// Values read from `--config`; present keys override the environment
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    shots: Option<usize>,
    lane_mode: Option<LaneMode>,
    strict_normalization: Option<bool>,
    normalization_tolerance: Option<f64>,
    max_qubits: Option<usize>,
    seed: Option<u64>,
}

impl ConfigFile {
    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    fn apply(self, config: &mut SimulatorConfig) {
        if let Some(shots) = self.shots {
            config.shots = shots;
        }
        if let Some(mode) = self.lane_mode {
            config.lane_mode = mode;
        }
        if let Some(strict) = self.strict_normalization {
            config.strict_normalization = strict;
        }
        if let Some(tolerance) = self.normalization_tolerance {
            config.normalization_tolerance = tolerance;
        }
        if let Some(max) = self.max_qubits {
            config.max_qubits = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "qsym=debug,qsym_core=debug"
    } else {
        "qsym=info,qsym_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            circuit,
            shots,
            seed,
            strict_normalization,
            state,
            json,
        } => run_command(&circuit, shots, seed, strict_normalization, state, json),
        Commands::Draw { circuit } => draw_command(&circuit),
        Commands::Gates => {
            print_gates();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Circuit construction
// ============================================================================

/// Environment, then config file, then flags
fn load_config(args: &CircuitArgs) -> Result<SimulatorConfig> {
    let mut config = SimulatorConfig::from_env();
    if let Some(path) = &args.config {
        ConfigFile::from_file(path)?.apply(&mut config);
    }
    if args.lenient {
        config.lane_mode = LaneMode::Lenient;
    }
    Ok(config)
}

fn build_circuit(args: &CircuitArgs, config: &SimulatorConfig) -> Result<Circuit> {
    let mut circuit = Circuit::with_config(args.qubits, config)?;
    for op in &args.ops {
        let placement = circuit
            .apply(op.gate, op.lane)
            .with_context(|| format!("cannot place {}:{}", op.gate, op.lane))?;
        tracing::debug!(gate = %op.gate, lane = op.lane, ?placement, "placed");
    }
    tracing::info!(
        qubits = circuit.depth(),
        layers = circuit.layer_count(),
        "circuit built"
    );
    Ok(circuit)
}

// ============================================================================
// Commands
// ============================================================================

fn run_command(
    args: &CircuitArgs,
    shots: Option<usize>,
    seed: Option<u64>,
    strict_normalization: bool,
    show_state: bool,
    json: bool,
) -> Result<()> {
    let mut config = load_config(args)?;
    if let Some(shots) = shots {
        config.shots = shots;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if strict_normalization {
        config.strict_normalization = true;
    }
    if config.shots == 0 {
        bail!("shots must be positive");
    }

    let circuit = build_circuit(args, &config)?;
    let state = circuit.run()?;
    let mut engine = MeasurementEngine::new(config.clone());
    let histogram = engine.histogram_default(&state)?;
    let probabilities = engine.probabilities(&state)?;

    if json {
        let mut output = json!({
            "qubits": circuit.depth(),
            "layers": circuit.layer_count(),
            "diagram": circuit.to_string(),
            "histogram": histogram,
        });
        if show_state {
            output["state"] = json!(state);
            output["probabilities"] = json!(probabilities);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} qubit(s), {} layer(s)",
        "Circuit".green().bold(),
        circuit.depth(),
        circuit.layer_count()
    );
    print!("{circuit}");

    if show_state {
        println!("\n{}", "State vector:".bold());
        for ((label, p), a) in probabilities.iter().zip(state.as_slice()) {
            println!(
                "  |{}⟩  {:>+.4}{:>+.4}i  p={:.4}",
                label.cyan(),
                a.re,
                a.im,
                p
            );
        }
    }

    println!("\n{} ({} shots)", "Counts:".bold(), histogram.shots());
    for (label, count) in histogram.iter() {
        println!("  {} => {}", label.cyan(), count);
    }
    if histogram.discarded() > 0 {
        println!(
            "  {} {}",
            "no outcome:".yellow(),
            histogram.discarded()
        );
    }

    Ok(())
}

fn draw_command(args: &CircuitArgs) -> Result<()> {
    let config = load_config(args)?;
    let circuit = build_circuit(args, &config)?;
    print!("{circuit}");
    Ok(())
}

fn print_gates() {
    println!("{}", "Gate library".bold());
    for gate in Gate::ALL {
        let m = gate.matrix();
        println!(
            "  {}  {:<26} [[{}, {}], [{}, {}]]",
            gate.name().cyan().bold(),
            gate.description(),
            m.at(0, 0),
            m.at(0, 1),
            m.at(1, 0),
            m.at(1, 1)
        );
    }
}

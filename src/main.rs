//! pcb2gcode - CLI tool to plan PCB drilling jobs and write G-code.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pcb2gcode_rs::{
    generate_gcode, load_board, validate_config, validate_inventory, Inventory, MachiningPlan,
    Operations, Planner, PlannerConfig, Rack,
};

/// Plan the drilling of a PCB and write the G-code program.
#[derive(Parser, Debug)]
#[command(name = "pcb2gcode")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input board JSON file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output G-code file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Planner configuration JSON file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Machine plated holes
    #[arg(long)]
    pth: bool,

    /// Machine non-plated holes
    #[arg(long)]
    npth: bool,

    /// Number of slots of the tool changer (0 for manual tool changes)
    #[arg(long)]
    rack_size: Option<usize>,

    /// Rack slot that cannot hold a tool (repeatable)
    #[arg(long = "invalidate", value_name = "SLOT")]
    invalidated: Vec<usize>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output debug information as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Selected operations. No flag selects everything.
    fn operations(&self) -> Operations {
        let mut ops = Operations::NONE;
        if self.pth {
            ops = ops | Operations::PTH;
        }
        if self.npth {
            ops = ops | Operations::NPTH;
        }
        if ops.is_empty() {
            Operations::ALL
        } else {
            ops
        }
    }
}

#[derive(Serialize)]
struct DebugOutput<'a> {
    inventory: &'a Inventory,
    plan: &'a MachiningPlan,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = match &args.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    if let Some(size) = args.rack_size {
        config.rack.capacity = Some(size);
    }
    config.rack.invalidated.extend(&args.invalidated);

    info!("Processing: {}", args.input.display());

    let board = load_board(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let inventory = board.to_inventory();

    // Validate
    let mut validation = validate_config(&config);
    validation.merge(validate_inventory(&inventory));

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let rack = Rack::from_config(&config.rack).context("Invalid rack configuration")?;
    let plan = Planner::new(&config)
        .plan(&inventory, args.operations(), rack)
        .context("Failed to plan the board")?;

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&DebugOutput {
            inventory: &inventory,
            plan: &plan,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for change in &plan.changes {
        info!("{}", change);
    }

    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("board.json");
    let gcode = generate_gcode(&plan, &config, filename);

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("nc");
        path
    });

    std::fs::write(&output_path, &gcode)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}

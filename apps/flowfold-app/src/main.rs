//! Flowfold directed-manifold sampling CLI.
//!
//! Provides three modes of operation:
//! - `sample`: Draw point clouds from a configured shape and print summaries
//! - `shapes`: List the available shapes
//! - `info`: Print crate version information

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use flowfold_core::prelude::*;
use flowfold_manifolds::{SamplerConfig, ShapeKind};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Directed manifold point-cloud generator.
#[derive(Parser)]
#[command(name = "flowfold", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample point clouds and print one summary line per sample.
    Sample(SampleArgs),

    /// List available shapes and their default node counts.
    Shapes,

    /// Print crate information.
    Info,
}

#[derive(clap::Args)]
struct SampleArgs {
    /// TOML config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shape to sample (e.g. circle, swiss_roll).
    #[arg(long)]
    shape: Option<ShapeKind>,

    /// Root seed of the run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of samples to draw.
    #[arg(long, default_value_t = 1)]
    count: u64,

    /// Points per sample.
    #[arg(short = 'n', long)]
    num_nodes: Option<usize>,

    /// Standard deviation of point noise.
    #[arg(long, allow_negative_numbers = true)]
    sigma: Option<f64>,

    /// Tilt about the x axis, radians.
    #[arg(long, allow_negative_numbers = true)]
    xtilt: Option<f64>,

    /// Tilt about the y axis, radians.
    #[arg(long, allow_negative_numbers = true)]
    ytilt: Option<f64>,

    /// Extrusion height for cylinders and swiss rolls.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<f64>,

    /// Reverse the flow direction.
    #[arg(long)]
    inverse: bool,
}

impl SampleArgs {
    fn resolve(&self) -> Result<SamplerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SamplerConfig::from_file(path)?,
            None => SamplerConfig::default(),
        };
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(n) = self.num_nodes {
            config.num_nodes = Some(n);
        }
        if let Some(sigma) = self.sigma {
            config.sigma = sigma;
        }
        if let Some(x) = self.xtilt {
            config.xtilt = x;
        }
        if let Some(y) = self.ytilt {
            config.ytilt = y;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if self.inverse {
            config.inverse = true;
        }
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run_sample(args: &SampleArgs) -> Result<(), ConfigError> {
    let config = args.resolve()?;
    let seeds = SeedHierarchy::new(config.seed);
    info!(
        shape = %config.shape,
        seed = config.seed,
        count = args.count,
        num_nodes = config.num_nodes(),
        "sampling"
    );

    for index in 0..args.count {
        let mut rng = seeds.sample_rng(index);
        let sample = config.sample(&mut rng)?;
        println!("{} #{index}: {}", config.shape, sample.summary());
    }
    Ok(())
}

fn print_shapes() {
    for shape in ShapeKind::ALL {
        let kind = if shape.is_prism() { "extruded" } else { "flat" };
        println!("{shape:<20} {kind:<9} default num_nodes={}", shape.default_num_nodes());
    }
}

fn print_info() {
    println!("flowfold {}", env!("CARGO_PKG_VERSION"));
    println!("shapes: {}", ShapeKind::ALL.len());
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Sample(args)) => {
            if let Err(e) = run_sample(&args) {
                error!("flowfold: {e}");
                return ExitCode::FAILURE;
            }
        }
        Some(Commands::Shapes) => print_shapes(),
        Some(Commands::Info) | None => print_info(),
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "flowfold", "sample", "--shape", "swiss_roll", "-n", "32", "--xtilt", "-0.5",
            "--inverse",
        ]);
        let Some(Commands::Sample(args)) = cli.command else {
            panic!("expected sample command");
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.shape, ShapeKind::SwissRoll);
        assert_eq!(config.num_nodes(), 32);
        assert_eq!(config.xtilt, -0.5);
        assert!(config.inverse);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["flowfold", "sample", "--sigma", "-1"]);
        let Some(Commands::Sample(args)) = cli.command else {
            panic!("expected sample command");
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn unknown_shape_fails_to_parse() {
        assert!(Cli::try_parse_from(["flowfold", "sample", "--shape", "torus"]).is_err());
    }
}

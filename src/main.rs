//! drillpath - CLI tool to turn a drilling job into a CNC program.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use drillpath_core::pattern::renumber;
use drillpath_core::{
    generate_program, load_job, optimize_order, quick_validate, validate_job, Dialect, Job,
    ProgramError,
};

/// Output instruction set.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum DialectArg {
    /// ShopBot OpenSBP
    Opensbp,
    /// RS-274 G-code with named parameters
    Gcode,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Opensbp => Dialect::OpenSbp,
            DialectArg::Gcode => Dialect::Gcode,
        }
    }
}

/// Generate optimized CNC drilling programs from JSON job files.
#[derive(Parser, Debug)]
#[command(name = "drillpath")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file path (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output program file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output dialect (overrides the job settings)
    #[arg(short, long, value_enum)]
    dialect: Option<DialectArg>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Print the optimized drilling order as JSON
    #[arg(long)]
    order: bool,

    /// Output the resolved job as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
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

    if let Err(err) = run(args) {
        error!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

/// Process exit status: the library error code when one caused the failure.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ProgramError>())
        .map_or(1, ProgramError::code_value)
}

fn run(args: Args) -> Result<()> {
    info!("Processing: {}", args.input.display());

    // Load the job file
    let mut job = load_job(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    if let Some(dialect) = args.dialect {
        job.settings.dialect = dialect.into();
    }

    info!(
        "Loaded {} hole(s) from {} explicit position(s) and {} pattern(s)",
        job.hole_count(),
        job.holes.len(),
        job.patterns.len()
    );

    // Validate
    let validation = validate_job(&job);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        quick_validate(&job).context("Validation failed")?;
        anyhow::bail!("Validation failed");
    }

    // Debug output
    if args.debug {
        let resolved = Job {
            holes: job.resolve_holes(),
            patterns: Vec::new(),
            ..job.clone()
        };
        let json = serde_json::to_string_pretty(&resolved)?;
        println!("{}", json);
        return Ok(());
    }

    // Drilling order output
    if args.order {
        let mut ordered = optimize_order(&job.resolve_holes());
        renumber(&mut ordered);
        let json = serde_json::to_string_pretty(&ordered)?;
        println!("{}", json);
        return Ok(());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Generate output
    let holes = job.resolve_holes();
    let program = generate_program(&holes, &job.config, &job.settings)
        .with_context(|| format!("Failed to generate program for {}", args.input.display()))?;

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension(job.settings.dialect.extension());
        path
    });

    std::fs::write(&output_path, &program)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_from_library_error() {
        let err = anyhow::Error::new(ProgramError::NoHoles).context("Failed to generate program");
        assert_eq!(exit_code(&err), 100);

        let err = load_job(std::path::Path::new("/nonexistent/job.json"))
            .context("Failed to load")
            .unwrap_err();
        assert_eq!(exit_code(&err), -1);
    }

    #[test]
    fn test_exit_code_other_error() {
        assert_eq!(exit_code(&anyhow::anyhow!("Validation failed")), 1);
    }

    #[test]
    fn test_dialect_arg_conversion() {
        assert_eq!(Dialect::from(DialectArg::Opensbp), Dialect::OpenSbp);
        assert_eq!(Dialect::from(DialectArg::Gcode), Dialect::Gcode);
    }
}

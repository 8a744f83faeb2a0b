// ============================================================================
// Golden Vector Generator
// Writes the reference vector sets, or verifies a lane against them
// ============================================================================
//
// Usage:
//   cargo run --bin generate-vectors -- --out data --seed 0x5eed
//   cargo run --bin generate-vectors -- --verify --lane fixed-point

use clap::Parser;
use gaussian_invariant::harness::{DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_VECTOR_COUNT};
use gaussian_invariant::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "generate-vectors")]
#[command(about = "Golden vectors for the normal kernels and the trading curve")]
struct Args {
    /// Directory holding one subdirectory per operation
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out: PathBuf,

    /// Sampling seed, decimal or 0x-prefixed hex
    #[arg(long, default_value_t = DEFAULT_SEED, value_parser = parse_seed)]
    seed: u64,

    /// Rows per operation, boundary rows included
    #[arg(long, default_value_t = DEFAULT_VECTOR_COUNT)]
    count: usize,

    /// Only this operation (repeatable); all seven when absent
    #[arg(long, value_name = "OP")]
    only: Vec<Operation>,

    /// Lane checked by --verify (reference or fixed-point)
    #[arg(long, default_value_t = ModelKind::FixedPoint)]
    lane: ModelKind,

    /// Verify persisted vectors instead of writing them
    #[arg(long)]
    verify: bool,
}

impl Args {
    fn config(&self) -> HarnessConfig {
        let config = HarnessConfig::new(&self.out)
            .with_seed(self.seed)
            .with_vector_count(self.count);
        if self.only.is_empty() {
            config
        } else {
            config.with_operations(self.only.iter().copied())
        }
    }
}

fn parse_seed(text: &str) -> Result<u64, String> {
    let parsed = match text.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|err| format!("Invalid seed '{}': {}", text, err))
}

fn run(args: &Args) -> HarnessResult<bool> {
    let generator = VectorGeneratorBuilder::from_config(args.config())
        .with_lane(args.lane)
        .build(Arc::new(LoggingEventHandler))?;

    if !args.verify {
        let sets = generator.run()?;
        println!(
            "wrote {} vector sets to {}",
            sets.len(),
            generator.store().root().display()
        );
        return Ok(true);
    }

    let mut passed = true;
    for report in generator.verify_persisted()? {
        println!(
            "{:<10} {:<12} rows={:<4} checked={:<4} max_error={:.3e} mismatches={}",
            report.operation.name(),
            report.lane,
            report.rows,
            report.checked(),
            report.max_error,
            report.mismatches.len()
        );
        for mismatch in &report.mismatches {
            match &mismatch.failure {
                Some(failure) => println!("  [{}] failed: {}", mismatch.index, failure),
                None => println!(
                    "  [{}] expected {} got {:?} (allowed {:.3e})",
                    mismatch.index, mismatch.expected, mismatch.actual, mismatch.allowed
                ),
            }
        }
        passed &= report.passed();
    }
    Ok(passed)
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

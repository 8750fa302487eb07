//! Benchmark runner for the four multiplication strategies.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use matmul::harness::report::{self, TimingFormat};
use matmul::harness::{self, DEFAULT_REPETITIONS};
use matmul::{Matrix, ParallelConfig, Strategy};

#[derive(Parser, Debug)]
#[command(version, about = "Time naive, optimized, parallel and optimized-parallel matmul")]
struct Args {
    /// Dimension of the square matrices
    #[arg(default_value_t = 500)]
    size: usize,

    /// Time only one strategy (0 = naive, 1 = optimized, 2 = parallel, 3 = final)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    single: Option<u8>,

    /// Repetitions averaged in --single mode
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    reps: usize,

    /// Worker threads for the parallel strategies (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Report `delta + delta / 1e9` seconds, as older runs of this benchmark did
    #[arg(long)]
    legacy_timing: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.threads {
        Some(n) => ParallelConfig::with_threads(n)?,
        None => ParallelConfig::default(),
    };
    let format = if args.legacy_timing {
        TimingFormat::Legacy
    } else {
        TimingFormat::Raw
    };

    let n = args.size;
    log::info!(
        "multiplying {n}x{n} matrices, {} worker threads",
        config.num_threads()
    );
    let a = Matrix::sequential(n, n);
    let b = Matrix::sequential(n, n);
    let mut result = Matrix::zeros(n, n);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.single.and_then(Strategy::from_id) {
        Some(strategy) => {
            let mean = harness::run_single(strategy, args.reps, &a, &b, &mut result, &config)?;
            report::write_mean(&mut out, mean, format)?;
        }
        None => {
            for r in harness::run_all(&a, &b, &mut result, &config)? {
                report::write_run(&mut out, &r, format)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

//! complexcalc - 복소수/행렬 연산 데모
//! 각 연산을 한 번씩 실행하고 결과 문자열을 출력합니다.

use anyhow::{Context, Result};
use clap::Parser;
use complexcalc::{demo, Complex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "complexcalc")]
#[command(version)]
#[command(about = "Run every complex and matrix operation once and print the results", long_about = None)]
struct Cli {
    /// Left complex operand as `<real>,<imaginary>`
    #[arg(long, default_value = "4,3", allow_hyphen_values = true)]
    lhs: Complex,

    /// Right complex operand as `<real>,<imaginary>`
    #[arg(long, default_value = "-2,1", allow_hyphen_values = true)]
    rhs: Complex,

    /// Exponent used for the power operation
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    exponent: f64,

    /// Scalar used for the matrix scalar multiplication
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    scalar: f64,

    /// Log filter (e.g. `debug`); falls back to RUST_LOG, then `warn`
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;
    info!(lhs = %cli.lhs, rhs = %cli.rhs, exponent = cli.exponent, "complex demo");

    for (label, value) in demo::complex_operations(cli.lhs, cli.rhs, cli.exponent) {
        println!("{}: {}", label, value);
    }

    let (lhs, rhs) = demo::sample_matrices()?;
    info!(lhs = %lhs.shape(), rhs = %rhs.shape(), "matrix demo");

    for (label, result) in demo::matrix_operations(&lhs, &rhs, cli.scalar) {
        match result {
            Ok(matrix) => print!("{}:\n{}", label, matrix),
            Err(err) => println!("{}: error: {}", label, err),
        }
    }
    Ok(())
}

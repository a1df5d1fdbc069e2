use {
    crate::common::{debug_println, DEBUG},
    clap::Parser,
    std::{io::Write, sync::atomic::Ordering},
};

#[derive(Debug, Parser)]
#[command(about = "Report composite values on the main diagonal of an Ulam spiral")]
pub struct Cli {
    /// Number of spiral steps to walk
    count: usize,

    /// Value placed at the center of the spiral
    #[arg(short, long, default_value_t = spiral::DEFAULT_SEED)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    report(cli.count, cli.seed, std::io::stdout().lock())
}

fn report(count: usize, seed: u64, mut out: impl Write) -> anyhow::Result<()> {
    for point in spiral::Walk::new(seed).take(count) {
        debug_println!("{point:?}");
        if point.x == point.y && !primes::is_prime(point.value) {
            writeln!(out, "{point}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_prime_center_is_silent() {
        let mut out = Vec::new();
        report(1, spiral::DEFAULT_SEED, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_first_diagonal_composite() {
        let mut out = Vec::new();
        report(1641, spiral::DEFAULT_SEED, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "20 20 1681\n");
    }
}

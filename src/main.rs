//! Page replacement simulator CLI.
//!
//! Runs a reference stream through a fixed number of frames and prints the
//! frame table after every reference:
//! 1. **Single policy:** trace one policy (`--policy fifo|optimal`).
//! 2. **Compare:** run every policy on the same stream and summarize faults.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim::{
    simulate, Access, PageId, Policy, Result, SimConfig, SimulationReport,
    DEFAULT_FRAME_CAPACITY,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator (FIFO and Optimal)",
    long_about = "Feed a page reference stream through a fixed set of physical frames and print the frame table after each reference.\n\nExamples:\n  pagesim\n  pagesim --policy optimal\n  pagesim -f 3 -r 7,0,1,2,0,3,0,4 --compare"
)]
struct Cli {
    /// Replacement policy to trace.
    #[arg(short, long, value_enum, default_value_t = Policy::Fifo)]
    policy: Policy,

    /// Run every policy on the same stream and compare fault counts.
    #[arg(short, long, conflicts_with = "policy")]
    compare: bool,

    /// Number of physical frames.
    #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY)]
    frames: usize,

    /// Comma-separated page references (default: 1,2,3,4,5,1,2,1,3,4).
    #[arg(short, long, value_delimiter = ',', value_parser = parse_page)]
    refs: Vec<PageId>,

    /// Only print the summary, not each frame table.
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

fn parse_page(s: &str) -> std::result::Result<PageId, String> {
    s.parse::<PageId>().map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reports = match simulate_all(&cli) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    for report in &reports {
        if !cli.quiet {
            print_trace(report);
        }
        println!("[{}] {}", report.policy, report.stats);
    }

    if reports.len() > 1 {
        print_comparison(&reports);
    }
}

/// Config from the command line; the default stream fills in for `-r`.
fn build_config(cli: &Cli) -> SimConfig {
    let config = SimConfig::default()
        .with_frame_capacity(cli.frames)
        .with_policy(cli.policy);
    if cli.refs.is_empty() {
        config
    } else {
        config.with_reference_stream(cli.refs.clone())
    }
}

/// Run the selected policy, or every policy with `--compare`.
fn simulate_all(cli: &Cli) -> Result<Vec<SimulationReport>> {
    let config = build_config(cli);
    let policies: Vec<Policy> = if cli.compare {
        Policy::ALL.to_vec()
    } else {
        vec![cli.policy]
    };

    policies
        .into_iter()
        .map(|policy| simulate(&config.clone().with_policy(policy)))
        .collect()
}

/// Install the fmt subscriber; `warn` by default, `debug` with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_trace(report: &SimulationReport) {
    println!(
        "=== {} with {} frames ===",
        report.policy, report.frame_capacity
    );
    for record in &report.records {
        let marker = match record.outcome {
            outcome if outcome.is_hit() => "hit".to_string(),
            Access::Miss {
                evicted: Some(victim),
            } => format!("miss, evicted {}", victim),
            _ => "miss".to_string(),
        };
        println!("#{} page {} ({})", record.index, record.page, marker);
        println!("{}", record.snapshot);
    }
}

fn print_comparison(reports: &[SimulationReport]) {
    println!();
    println!(
        "{:<10} {:>8} {:>8} {:>10} {:>9}",
        "policy", "faults", "hits", "evictions", "hit rate"
    );
    for report in reports {
        println!(
            "{:<10} {:>8} {:>8} {:>10} {:>8.2}%",
            report.policy.to_string(),
            report.stats.misses,
            report.stats.hits,
            report.stats.evictions,
            report.stats.hit_rate() * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesim::{Error, DEFAULT_REFERENCE_STREAM};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pagesim").chain(args.iter().copied())).unwrap()
    }

    fn ids(pages: &[u32]) -> Vec<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    // ========================================================================
    // Argument parsing
    // ========================================================================

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.policy, Policy::Fifo);
        assert_eq!(cli.frames, DEFAULT_FRAME_CAPACITY);
        assert!(cli.refs.is_empty());
        assert!(!cli.compare);
    }

    #[test]
    fn test_refs_are_comma_separated() {
        let cli = parse(&["-r", "7,0,1"]);
        assert_eq!(cli.refs, ids(&[7, 0, 1]));
    }

    #[test]
    fn test_refs_accept_largest_page_id() {
        let cli = parse(&["--refs", "4294967295,1"]);
        assert_eq!(cli.refs, ids(&[u32::MAX, 1]));
    }

    #[test]
    fn test_bad_ref_rejected() {
        assert!(Cli::try_parse_from(["pagesim", "-r", "x"]).is_err());
        assert!(Cli::try_parse_from(["pagesim", "-r", "1,-2"]).is_err());
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(parse(&["--policy", "optimal"]).policy, Policy::Optimal);
        assert_eq!(parse(&["-p", "opr"]).policy, Policy::Optimal);
        assert!(Cli::try_parse_from(["pagesim", "--policy", "lru"]).is_err());
    }

    #[test]
    fn test_compare_conflicts_with_policy() {
        assert!(Cli::try_parse_from(["pagesim", "--compare", "--policy", "optimal"]).is_err());
        assert!(parse(&["--compare"]).compare);
    }

    // ========================================================================
    // Config building and runs
    // ========================================================================

    #[test]
    fn test_missing_refs_use_default_stream() {
        let config = build_config(&parse(&["-f", "3"]));
        assert_eq!(config.frame_capacity, 3);
        assert_eq!(config.reference_stream, ids(&DEFAULT_REFERENCE_STREAM));
    }

    #[test]
    fn test_refs_override_default_stream() {
        let config = build_config(&parse(&["-p", "optimal", "-r", "1,2"]));
        assert_eq!(config.policy, Policy::Optimal);
        assert_eq!(config.reference_stream, ids(&[1, 2]));
    }

    #[test]
    fn test_compare_runs_every_policy() {
        let reports = simulate_all(&parse(&["--compare"])).unwrap();
        let policies: Vec<Policy> = reports.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_zero_frames_is_an_error() {
        // main() turns this into exit code 1.
        assert!(matches!(
            simulate_all(&parse(&["-f", "0"])),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}

//! colstat CLI: command-line front end for the column-set profiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colstat_engine::ProfilerConfig;

use colstat_cli::csv_source;
use colstat_cli::error::{CliError, Result};

#[derive(Parser)]
#[command(name = "colstat")]
#[command(about = "Column-set statistical profiler: cardinality, keys, and functional dependencies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile a CSV file and report cardinality, keys, and functional dependencies
    Profile {
        /// Path to the CSV file (first row is the header)
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of column-set combinations evaluated per pass
        #[arg(long, default_value_t = colstat_engine::config::DEFAULT_COMBINATIONS_PER_PASS)]
        combinations_per_pass: usize,

        /// Surprise threshold above which a composite combination is reported
        #[arg(long, default_value_t = colstat_engine::config::DEFAULT_INTERESTING_SURPRISE_THRESHOLD)]
        surprise_threshold: f64,

        /// Distinct-tuple count past which a composite collector falls back to an approximate sketch
        #[arg(long, default_value_t = colstat_engine::config::DEFAULT_COMPOSITE_SKETCH_THRESHOLD)]
        composite_sketch_threshold: usize,

        /// Skip the surprise-threshold predicate entirely and expand every successor
        #[arg(long)]
        always_interested: bool,

        /// Emit the Profile as JSON instead of a human-readable summary
        #[arg(long)]
        json: bool,
    },

    /// Validate that a CSV file parses and report its inferred schema
    Validate {
        /// Path to the CSV file (first row is the header)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile {
            input,
            combinations_per_pass,
            surprise_threshold,
            composite_sketch_threshold,
            always_interested,
            json,
        } => run_profile(
            &input,
            combinations_per_pass,
            surprise_threshold,
            composite_sketch_threshold,
            always_interested,
            json,
        ),
        Commands::Validate { input } => run_validate(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_profile(
    input: &PathBuf,
    combinations_per_pass: usize,
    surprise_threshold: f64,
    composite_sketch_threshold: usize,
    always_interested: bool,
    json: bool,
) -> Result<()> {
    let source = csv_source::load(input)?;

    let mut builder = ProfilerConfig::builder()
        .combinations_per_pass(combinations_per_pass)
        .interesting_surprise_threshold(surprise_threshold)
        .composite_sketch_threshold(composite_sketch_threshold);
    if !always_interested {
        builder = builder.interest_predicate(colstat_engine::config::canonical_interest_predicate(
            surprise_threshold,
        ));
    }
    let config = builder.build().map_err(CliError::from)?;

    let profile = colstat_engine::profile(&source.rows, &source.columns, &config)
        .map_err(|e| CliError::from(e.with_context("running profiler")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_summary(&source.columns, &profile);
    }
    Ok(())
}

fn run_validate(input: &PathBuf) -> Result<()> {
    let source = csv_source::load(input)?;
    println!("✓ {} parses ({} columns)", input.display(), source.columns.len());
    for column in &source.columns {
        println!("  {}: {}", column.ordinal, column.name);
    }
    Ok(())
}

fn print_summary(columns: &[colstat_core::Column], profile: &colstat_engine::Profile) {
    let name_of = |ordinal: usize| -> &str {
        columns
            .iter()
            .find(|c| c.ordinal == ordinal)
            .map(|c| c.name.as_str())
            .unwrap_or("?")
    };

    println!("Column-Set Profile");
    println!("==================");
    println!();
    println!("Row count: {}", profile.row_count);
    println!();
    println!("Distributions:");
    for d in &profile.distributions {
        let names: Vec<&str> = d.columns.iter().map(|&o| name_of(o)).collect();
        print!(
            "  {{{}}}: cardinality={} expected={:.1}",
            names.join(", "),
            d.cardinality,
            d.expected_cardinality
        );
        if let Some(null_count) = d.null_count {
            print!(" nulls={null_count}");
        }
        if let Some(values) = &d.value_set {
            print!(" values={values:?}");
        }
        println!();
    }
    println!();
    println!("Unique keys:");
    for u in &profile.uniques {
        let names: Vec<&str> = u.columns.iter().map(|&o| name_of(o)).collect();
        println!("  {{{}}}", names.join(", "));
    }
    println!();
    println!("Functional dependencies:");
    for fd in &profile.functional_dependencies {
        let names: Vec<&str> = fd.determinant.iter().map(|&o| name_of(o)).collect();
        println!("  {{{}}} -> {}", names.join(", "), name_of(fd.dependent));
    }
}

//! Phone column CLI
//!
//! Command-line tool for adding a column of unique synthetic phone numbers
//! to CSV files.

use clap::{Args, Parser, Subcommand};
use phone_core::{
    augment_file, process_target, scan_csv_files, AugmentOptions, AugmentReport,
    DiscoveryOutcome,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phone-cli")]
#[command(about = "Add a unique phone column to CSV files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to look for CSV files in
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// File name to process when it is present in the directory
    #[arg(short, long, default_value = "teachers.csv")]
    target: String,

    #[command(flatten)]
    augment: AugmentArgs,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Clone)]
struct AugmentArgs {
    /// Name of the generated column
    #[arg(long, default_value = phone_core::augmenter::DEFAULT_COLUMN)]
    column: String,

    /// Suffix inserted before the output file's extension
    #[arg(long, default_value = phone_core::augmenter::DEFAULT_SUFFIX)]
    suffix: String,

    /// Seed for reproducible phone numbers
    #[arg(long)]
    seed: Option<u64>,
}

impl From<AugmentArgs> for AugmentOptions {
    fn from(args: AugmentArgs) -> Self {
        Self {
            column: args.column,
            suffix: args.suffix,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add the phone column to a single CSV file
    Augment {
        /// Path to CSV file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        augment: AugmentArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List CSV files in a directory
    Scan {
        /// Directory to scan
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> phone_core::Result<()> {
    match cli.command {
        Some(Commands::Augment {
            file,
            augment,
            json,
        }) => cmd_augment(&file, &augment.into(), json),
        Some(Commands::Scan { dir }) => cmd_scan(&dir),
        None => {
            cmd_discover(&cli.dir, &cli.target, &cli.augment.into());
            Ok(())
        }
    }
}

fn cmd_augment(file: &Path, options: &AugmentOptions, json: bool) -> phone_core::Result<()> {
    let report = augment_file(file, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn cmd_scan(dir: &Path) -> phone_core::Result<()> {
    let files = scan_csv_files(dir)?;

    if files.is_empty() {
        println!("No CSV files found in {}", dir.display());
        return Ok(());
    }

    print_candidates(&files);
    Ok(())
}

/// Default mode: every outcome, failures included, is reported as text.
fn cmd_discover(dir: &Path, target: &str, options: &AugmentOptions) {
    let outcome = match process_target(dir, target, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    match outcome {
        DiscoveryOutcome::NoCsvFiles => {
            println!("No CSV files found in {}", dir.display());
        }
        DiscoveryOutcome::TargetMissing { candidates } => {
            print_candidates(&candidates);
            let names: Vec<String> = candidates.iter().map(|p| file_name(p)).collect();
            println!("File {} not found. Available files: {:?}", target, names);
        }
        DiscoveryOutcome::Processed { candidates, report } => {
            print_candidates(&candidates);
            println!();
            println!("Processing {}...", target);
            print_report(&report);
            println!("Task completed successfully!");
        }
        DiscoveryOutcome::Failed {
            candidates,
            target: path,
            error,
        } => {
            print_candidates(&candidates);
            println!();
            println!("Processing {}...", target);
            if error.is_not_found() {
                println!("Error: File {} not found", path.display());
            } else {
                println!("Error processing file: {}", error);
            }
        }
    }
}

fn print_candidates(files: &[PathBuf]) {
    println!("Available CSV files:");
    for (i, path) in files.iter().enumerate() {
        println!("{}. {}", i + 1, file_name(path));
    }
}

fn print_report(report: &AugmentReport) {
    println!("Successfully read {}", report.input_path.display());
    println!(
        "Original shape: ({}, {})",
        report.original_shape.0, report.original_shape.1
    );
    println!("Columns: {:?}", report.original_columns);
    if report.replaced_existing {
        println!(
            "Column '{}' already existed and was replaced with new unique numbers",
            report.column
        );
    }
    println!(
        "Successfully added {} column with {} unique numbers",
        report.column, report.new_shape.0
    );
    println!("Saved to: {}", report.output_path.display());
    println!("New shape: ({}, {})", report.new_shape.0, report.new_shape.1);
    println!("Sample phone numbers: {:?}", report.sample);
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

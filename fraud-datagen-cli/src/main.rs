use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use fraud_datagen::config::{
    GenerationConfig, DEFAULT_FIRST_FILENAME, DEFAULT_OUTPUT_DIR, DEFAULT_SECOND_FILENAME,
    DEFAULT_SIZE,
};
use fraud_datagen::pipeline::run;

/// Generate interconnected datasets for fraud detection
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of records to generate
    #[clap(long, default_value_t = DEFAULT_SIZE)]
    pub(crate) size: usize,
    /// Output directory for datasets
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub(crate) output_dir: PathBuf,
    /// Filename for first dataset
    #[clap(long, default_value = DEFAULT_FIRST_FILENAME)]
    pub(crate) first_filename: String,
    /// Filename for second dataset
    #[clap(long, default_value = DEFAULT_SECOND_FILENAME)]
    pub(crate) second_filename: String,
    /// Seed for reproducible output; omitted means a fresh random run
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

impl From<Cli> for GenerationConfig {
    fn from(cli: Cli) -> Self {
        GenerationConfig {
            size: cli.size,
            output_dir: cli.output_dir,
            first_filename: cli.first_filename,
            second_filename: cli.second_filename,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = GenerationConfig::from(Cli::parse());
    let report = run(&config)?;
    println!(
        "Generated first dataset with {} records: {}",
        report.rows,
        report.first_path.display()
    );
    println!(
        "Generated second dataset with {} records: {}",
        report.rows,
        report.second_path.display()
    );
    println!("\n{}", report.stats);

    Ok(())
}

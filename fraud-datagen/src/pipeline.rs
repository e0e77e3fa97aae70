use std::path::PathBuf;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GenerationConfig;
use crate::error::DatagenError;
use crate::generator::{generate_derived, generate_primary};
use crate::record::{DerivedRecord, PrimaryRecord, NUM_AUX_FEATURES};
use crate::stats::LabelStats;
use crate::writer::write_dataset;

/// Outcome of a successful [run].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub first_path: PathBuf,
    pub second_path: PathBuf,
    pub rows: usize,
    pub stats: LabelStats,
}

/// Generates both datasets with an RNG built from `config.seed`.
///
/// A fixed seed reproduces both files exactly; without one the RNG is seeded
/// from OS entropy.
///
/// # Errors
/// Errors when the config is invalid or either file cannot be written.
pub fn run(config: &GenerationConfig) -> Result<RunReport, DatagenError> {
    let mut rng = match config.seed {
        Some(seed) => {
            debug!("Seeding RNG with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    run_with_rng(config, &mut rng)
}

/// Same as [run], drawing from `rng` instead; `config.seed` is not consulted.
///
/// The first file is written before the second dataset is derived; if the
/// second write fails the first file is left in place.
///
/// # Errors
/// Errors when the config is invalid or either file cannot be written.
pub fn run_with_rng<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<RunReport, DatagenError> {
    config.validate()?;
    debug!("Starting generation run: {config:?}");

    let primary: Vec<PrimaryRecord<NUM_AUX_FEATURES>> = generate_primary(config.size, rng);
    let first_path = config.first_path();
    let rows = write_dataset(
        &primary,
        &PrimaryRecord::<NUM_AUX_FEATURES>::headers(),
        &first_path,
    )?;

    let derived = generate_derived(&primary, rng);
    let second_path = config.second_path();
    write_dataset(&derived, &DerivedRecord::headers(), &second_path)?;

    Ok(RunReport {
        first_path,
        second_path,
        rows,
        stats: LabelStats::from_records(&derived),
    })
}

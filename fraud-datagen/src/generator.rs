use log::debug;
use rand::Rng;

use crate::identifier::IdAllocator;
use crate::record::{
    DerivedRecord, Label, PrimaryRecord, PRIMARY_FEATURE_MAX, SECONDARY_FEATURE_MAX,
};

/// Builds `count` primary records in generation order.
///
/// Identifiers come from an allocator local to this call, so every id in the
/// returned dataset is distinct and nothing is remembered between calls.
#[must_use]
pub fn generate_primary<const N: usize, R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Vec<PrimaryRecord<N>> {
    let mut allocator = IdAllocator::with_capacity(count);
    let records: Vec<PrimaryRecord<N>> = (0..count)
        .map(|_| {
            let dr = rng.gen_range(0.0..=PRIMARY_FEATURE_MAX);
            let id = allocator.allocate(rng);
            let aux = std::array::from_fn(|_| rng.gen_range(0.0..=PRIMARY_FEATURE_MAX));
            PrimaryRecord::new(dr, id, aux)
        })
        .collect();
    debug!(
        "Generated {} primary records with {} auxiliary features",
        records.len(),
        N
    );
    records
}

/// Builds one derived record per primary record, keeping row order and ids.
#[must_use]
pub fn generate_derived<const N: usize, R: Rng + ?Sized>(
    primary: &[PrimaryRecord<N>],
    rng: &mut R,
) -> Vec<DerivedRecord> {
    let records: Vec<DerivedRecord> = primary
        .iter()
        .map(|record| {
            let ar = rng.gen_range(0.0..=SECONDARY_FEATURE_MAX);
            DerivedRecord::new(ar, record.id, Label::from_features(record.dr, ar))
        })
        .collect();
    debug!("Generated {} derived records", records.len());
    records
}

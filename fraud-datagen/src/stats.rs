use std::fmt;

use crate::record::DerivedRecord;

/// Label counts over a derived dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStats {
    pub total: usize,
    pub fraudulent: usize,
}

impl LabelStats {
    #[must_use]
    pub fn from_records(records: &[DerivedRecord]) -> Self {
        LabelStats {
            total: records.len(),
            fraudulent: records.iter().filter(|r| r.fr.is_fraudulent()).count(),
        }
    }

    /// Saturates at 0 when `fraudulent > total`.
    #[must_use]
    pub fn legitimate(&self) -> usize {
        self.total.saturating_sub(self.fraudulent)
    }

    /// Percentage in `0.0..=100.0`; an empty dataset reports 0.
    #[must_use]
    pub fn fraudulent_pct(&self) -> f64 {
        percentage(self.fraudulent, self.total)
    }

    #[must_use]
    pub fn legitimate_pct(&self) -> f64 {
        percentage(self.legitimate(), self.total)
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for LabelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset statistics:")?;
        writeln!(f, "Total records: {}", self.total)?;
        writeln!(
            f,
            "Fraudulent records: {} ({:.2}%)",
            self.fraudulent,
            self.fraudulent_pct()
        )?;
        write!(
            f,
            "Non-fraudulent records: {} ({:.2}%)",
            self.legitimate(),
            self.legitimate_pct()
        )
    }
}

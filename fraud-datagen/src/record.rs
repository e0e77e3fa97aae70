use serde::{ser::SerializeTuple, Serialize, Serializer};

use crate::identifier::Identifier;

/// Number of noise features carried by each primary record.
pub const NUM_AUX_FEATURES: usize = 10;

/// Upper bound of the primary feature `dr` and of every auxiliary feature.
pub const PRIMARY_FEATURE_MAX: f64 = 100.0;

/// Upper bound of the secondary feature `ar`.
pub const SECONDARY_FEATURE_MAX: f64 = 10.0;

/// `sqrt(dr) + ar` at or above this value is labelled fraudulent.
pub const FRAUD_THRESHOLD: f64 = 12.0;

/// A row of the first dataset: `dr`, `id`, then `x0..x{N-1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryRecord<const N: usize = NUM_AUX_FEATURES> {
    pub dr: f64,
    pub id: Identifier,
    pub aux: [f64; N],
}

/// A row of the second dataset: `ar`, `id`, `fr`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRecord {
    pub ar: f64,
    pub id: Identifier,
    pub fr: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Legitimate = 0,
    Fraudulent = 1,
}

impl Label {
    /// `dr` must be non-negative; the generators only ever produce such values.
    #[must_use]
    pub fn from_features(dr: f64, ar: f64) -> Self {
        if dr.sqrt() + ar >= FRAUD_THRESHOLD {
            Label::Fraudulent
        } else {
            Label::Legitimate
        }
    }

    #[must_use]
    pub fn is_fraudulent(self) -> bool {
        self == Label::Fraudulent
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label as u8
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*self))
    }
}

impl<const N: usize> PrimaryRecord<N> {
    #[must_use]
    pub fn new(dr: f64, id: Identifier, aux: [f64; N]) -> Self {
        PrimaryRecord { dr, id, aux }
    }

    #[must_use]
    pub fn headers() -> Vec<String> {
        ["dr", "id"]
            .into_iter()
            .map(String::from)
            .chain((0..N).map(|i| format!("x{i}")))
            .collect()
    }
}

impl DerivedRecord {
    #[must_use]
    pub fn new(ar: f64, id: Identifier, fr: Label) -> Self {
        DerivedRecord { ar, id, fr }
    }

    #[must_use]
    pub fn headers() -> Vec<String> {
        ["ar", "id", "fr"].into_iter().map(String::from).collect()
    }
}

// Both records serialize as flat tuples so the csv writer emits one field per
// column, in header order.
impl<const N: usize> Serialize for PrimaryRecord<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_tuple(2 + N)?;
        state.serialize_element(&self.dr)?;
        state.serialize_element(&self.id)?;
        for x in &self.aux {
            state.serialize_element(x)?;
        }
        state.end()
    }
}

impl Serialize for DerivedRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_tuple(3)?;
        state.serialize_element(&self.ar)?;
        state.serialize_element(&self.id)?;
        state.serialize_element(&self.fr)?;
        state.end()
    }
}

use std::path::PathBuf;

use crate::error::DatagenError;

pub const DEFAULT_SIZE: usize = 1000;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_FIRST_FILENAME: &str = "dataset1.csv";
pub const DEFAULT_SECOND_FILENAME: &str = "dataset2.csv";

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of records in each dataset
    pub size: usize,
    pub output_dir: PathBuf,
    pub first_filename: String,
    pub second_filename: String,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            size: DEFAULT_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            first_filename: DEFAULT_FIRST_FILENAME.to_string(),
            second_filename: DEFAULT_SECOND_FILENAME.to_string(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub fn first_path(&self) -> PathBuf {
        self.output_dir.join(&self.first_filename)
    }

    #[must_use]
    pub fn second_path(&self) -> PathBuf {
        self.output_dir.join(&self.second_filename)
    }

    /// # Errors
    /// Errors when a filename is empty or both datasets resolve to the same file.
    pub fn validate(&self) -> Result<(), DatagenError> {
        if self.first_filename.is_empty() || self.second_filename.is_empty() {
            return Err(DatagenError::EmptyFilename);
        }
        let first = self.first_path();
        if first == self.second_path() {
            return Err(DatagenError::SameDestination(first));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.size, 1000);
        assert_eq!(config.first_path(), PathBuf::from("output/dataset1.csv"));
        assert_eq!(config.second_path(), PathBuf::from("output/dataset2.csv"));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_same_destination() {
        let config = GenerationConfig {
            second_filename: DEFAULT_FIRST_FILENAME.to_string(),
            ..GenerationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DatagenError::SameDestination(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_filename() {
        let config = GenerationConfig {
            first_filename: String::new(),
            ..GenerationConfig::default()
        };
        assert!(matches!(config.validate(), Err(DatagenError::EmptyFilename)));
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::store::{default_labels, LibraryMatrix, DEFAULT_SIZE};

/// How a matrix is constructed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    pub size: usize,

    /// Row labels. The built-in category list is used when absent.
    pub labels: Option<Vec<String>>,

    /// Seed for the generator. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            labels: None,
            seed: None,
        }
    }
}

impl MatrixConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn resolved_labels(&self) -> Vec<String> {
        self.labels
            .clone()
            .unwrap_or_else(|| default_labels(self.size))
    }

    /// Random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Construct the matrix, returning it together with the generator so the
    /// caller can keep drawing from the same stream.
    pub fn build(&self) -> Result<(LibraryMatrix, StdRng), MatrixError> {
        let mut rng = self.rng();
        let matrix = LibraryMatrix::new(self.size, self.resolved_labels(), &mut rng)?;
        Ok((matrix, rng))
    }
}

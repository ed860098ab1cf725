//! Random statement generation.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ontology::Ontology;
use crate::statement::{Polarity, Quantifier, Statement};

const QUANTIFIERS: [Quantifier; 3] = [Quantifier::All, Quantifier::No, Quantifier::Some];
const POLARITIES: [Polarity; 2] = [Polarity::Affirmative, Polarity::Negative];

/// Draws uniformly random statements over the ontology's vocabulary.
///
/// Owns its RNG so a seeded instance replays the same sequence, which the
/// tests and the `--seed` flag rely on.
pub struct StatementGenerator {
    ontology: Arc<Ontology>,
    rng: StdRng,
}

impl StatementGenerator {
    pub fn new(ontology: Arc<Ontology>) -> Self {
        Self {
            ontology,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(ontology: Arc<Ontology>, seed: u64) -> Self {
        Self {
            ontology,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one statement. The predicate is sampled from the vocabulary
    /// with the subject's slot removed, so the two terms are always
    /// distinct and no rejection loop is needed.
    pub fn generate(&mut self) -> Statement {
        let names = self.ontology.names();
        debug_assert!(names.len() >= 2, "ontology must hold at least two terms");

        let quantifier = QUANTIFIERS[self.rng.gen_range(0..QUANTIFIERS.len())];
        let polarity = POLARITIES[self.rng.gen_range(0..POLARITIES.len())];

        let subject_idx = self.rng.gen_range(0..names.len());
        let mut predicate_idx = self.rng.gen_range(0..names.len() - 1);
        if predicate_idx >= subject_idx {
            predicate_idx += 1;
        }

        Statement {
            quantifier,
            polarity,
            subject: names[subject_idx].clone(),
            predicate: names[predicate_idx].clone(),
        }
    }
}

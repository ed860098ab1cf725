//! Truth evaluation for generated statements.
//!
//! The rules approximate syllogistic readings through category and subtype
//! equality alone. They are the game's fixed rulebook, not an inference
//! engine; the scoring depends on these exact tables.

use crate::error::PositorError;
use crate::ontology::Ontology;
use crate::statement::{Polarity, Quantifier, Statement};

/// Decide the intended truth value of a statement.
///
/// Pure in its inputs: the same statement against the same ontology always
/// yields the same boolean.
pub fn evaluate(statement: &Statement, ontology: &Ontology) -> Result<bool, PositorError> {
    let subject = ontology.lookup(&statement.subject)?;
    let predicate = ontology.lookup(&statement.predicate)?;

    let same_category = subject.category == predicate.category;
    let same_subtype = subject.subtype == predicate.subtype;

    let value = match (statement.quantifier, statement.polarity) {
        // Subject is a subset of the predicate: same category and subtype
        (Quantifier::All, Polarity::Affirmative) => same_category && same_subtype,
        // Completely disjoint categories
        (Quantifier::All, Polarity::Negative) => !same_category,
        // "No X are Y" reads as "All X are not Y"
        (Quantifier::No, _) => !same_category,
        // Overlap: sharing a category is enough
        (Quantifier::Some, Polarity::Affirmative) => same_category,
        (Quantifier::Some, Polarity::Negative) => !same_category || !same_subtype,
    };

    Ok(value)
}

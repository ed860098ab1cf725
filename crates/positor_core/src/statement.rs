//! Quantified categorical statements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantifier governing the statement's logical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    All,
    No,
    Some,
}

impl Quantifier {
    pub fn word(&self) -> &'static str {
        match self {
            Quantifier::All => "All",
            Quantifier::No => "No",
            Quantifier::Some => "Some",
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// Whether the statement links or separates its terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Affirmative,
    Negative,
}

impl Polarity {
    /// The verb phrase rendered into the statement text
    pub fn verb(&self) -> &'static str {
        match self {
            Polarity::Affirmative => "are",
            Polarity::Negative => "are not",
        }
    }
}

/// One generated claim about two distinct terms. Immutable once drawn;
/// its intended truth value is computed separately and kept with the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub quantifier: Quantifier,
    pub polarity: Polarity,
    pub subject: String,
    pub predicate: String,
}

impl Statement {
    /// Display text, e.g. `"All dogs are not cats."`
    pub fn text(&self) -> String {
        format!(
            "{} {} {} {}.",
            self.quantifier.word(),
            self.subject,
            self.polarity.verb(),
            self.predicate
        )
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_text() {
        let statement = Statement {
            quantifier: Quantifier::All,
            polarity: Polarity::Affirmative,
            subject: "dogs".to_string(),
            predicate: "cats".to_string(),
        };
        assert_eq!(statement.text(), "All dogs are cats.");
    }

    #[test]
    fn test_negative_text() {
        let statement = Statement {
            quantifier: Quantifier::Some,
            polarity: Polarity::Negative,
            subject: "rivers".to_string(),
            predicate: "ideas".to_string(),
        };
        assert_eq!(statement.text(), "Some rivers are not ideas.");
    }

    #[test]
    fn test_quantifier_words() {
        assert_eq!(Quantifier::All.word(), "All");
        assert_eq!(Quantifier::No.word(), "No");
        assert_eq!(Quantifier::Some.word(), "Some");
    }
}

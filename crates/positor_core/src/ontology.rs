//! Term ontology: every noun the bot can talk about, with its category
//! and subtype.
//!
//! The table is loaded once and immutable afterwards. The generator draws
//! only from this table, so a lookup miss means the deployment is broken,
//! not that the player did something wrong.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PositorError;

/// Properties attached to a single term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermProperties {
    pub category: String,
    pub subtype: String,
}

/// Built-in vocabulary
const BUILTIN_TERMS: &[(&str, &str, &str)] = &[
    ("dogs", "animal", "mammal"),
    ("cats", "animal", "mammal"),
    ("birds", "animal", "avian"),
    ("trees", "plant", "tree"),
    ("rivers", "natural", "water"),
    ("mountains", "natural", "landform"),
    ("books", "manmade", "literature"),
    ("ideas", "abstract", "concept"),
];

/// On-disk shape of an ontology override file:
///
/// ```toml
/// [terms.dogs]
/// category = "animal"
/// subtype = "mammal"
/// ```
#[derive(Debug, Deserialize)]
struct OntologyFile {
    terms: HashMap<String, TermProperties>,
}

/// Immutable term table shared by the generator and the evaluator
#[derive(Debug, Clone)]
pub struct Ontology {
    terms: HashMap<String, TermProperties>,
    // Sorted so that seeded generators draw a reproducible sequence
    names: Vec<String>,
}

impl Ontology {
    /// The built-in eight-term vocabulary
    pub fn builtin() -> Self {
        let terms: HashMap<String, TermProperties> = BUILTIN_TERMS
            .iter()
            .map(|(name, category, subtype)| {
                (
                    name.to_string(),
                    TermProperties {
                        category: category.to_string(),
                        subtype: subtype.to_string(),
                    },
                )
            })
            .collect();
        let mut names: Vec<String> = terms.keys().cloned().collect();
        names.sort();
        Self { terms, names }
    }

    /// Build from an explicit table. The generator needs two distinct
    /// terms per statement, so smaller tables are rejected.
    pub fn from_terms(terms: HashMap<String, TermProperties>) -> Result<Self, PositorError> {
        if terms.len() < 2 {
            return Err(PositorError::Ontology(format!(
                "need at least 2 terms, got {}",
                terms.len()
            )));
        }
        let mut names: Vec<String> = terms.keys().cloned().collect();
        names.sort();
        Ok(Self { terms, names })
    }

    /// Parse an override table from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, PositorError> {
        let file: OntologyFile = toml::from_str(content)
            .map_err(|e| PositorError::Ontology(format!("invalid ontology table: {}", e)))?;
        Self::from_terms(file.terms)
    }

    /// Load an override table from a TOML file
    pub fn from_path(path: &Path) -> Result<Self, PositorError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Look up a term's properties. Missing terms signal a broken
    /// deployment (generator and table out of sync).
    pub fn lookup(&self, name: &str) -> Result<&TermProperties, PositorError> {
        self.terms.get(name).ok_or_else(|| PositorError::UnknownTerm {
            term: name.to_string(),
        })
    }

    /// Term names in sorted order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

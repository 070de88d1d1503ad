use std::collections::BTreeSet;

use super::model::{EncodedRow, EncodedTable, ProjectedTable};
use crate::error::{FixtureError, Result};

// ---------------------------------------------------------------------------
// LabelMapping – fixed label → code enumeration
// ---------------------------------------------------------------------------

/// A fixed set of `(label, code)` pairs. Labels and codes are both unique,
/// checked when the mapping is built, and the mapping never changes after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMapping {
    pairs: Vec<(String, u8)>,
}

impl LabelMapping {
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let pairs: Vec<(String, u8)> = pairs.into_iter().map(|(l, c)| (l.into(), c)).collect();
        if pairs.is_empty() {
            return Err(FixtureError::InvalidMapping("no labels".into()));
        }

        let mut labels = BTreeSet::new();
        let mut codes = BTreeSet::new();
        for (label, code) in &pairs {
            if !labels.insert(label.as_str()) {
                return Err(FixtureError::InvalidMapping(format!(
                    "label '{label}' appears more than once"
                )));
            }
            if !codes.insert(*code) {
                return Err(FixtureError::InvalidMapping(format!(
                    "code {code} is assigned to more than one label"
                )));
            }
        }
        Ok(LabelMapping { pairs })
    }

    /// Assign codes `0..n` to the sorted unique labels, the way a label
    /// encoder fitted on the same column would.
    pub fn fit<'a, I>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let unique: BTreeSet<&str> = labels.into_iter().collect();
        if unique.len() > usize::from(u8::MAX) + 1 {
            return Err(FixtureError::InvalidMapping(format!(
                "{} labels do not fit in a u8 code",
                unique.len()
            )));
        }
        Self::new(unique.into_iter().zip(0u8..=u8::MAX))
    }

    pub fn encode(&self, label: &str) -> Result<u8> {
        self.pairs
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, code)| *code)
            .ok_or_else(|| FixtureError::UnmappedLabel(label.to_string()))
    }

    /// Inverse lookup: the label carrying `code`.
    pub fn decode(&self, code: u8) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(label, _)| label.as_str())
    }

    /// Labels in mapping order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Replace every row's class label with its code. Fails on the first label
/// the mapping does not know.
pub fn encode_table(table: &ProjectedTable, mapping: &LabelMapping) -> Result<EncodedTable> {
    let rows = table
        .rows
        .iter()
        .map(|r| {
            Ok(EncodedRow {
                sepal_length: r.sepal_length,
                sepal_width: r.sepal_width,
                class: mapping.encode(&r.class)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(EncodedTable { rows })
}

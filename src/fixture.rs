use std::path::PathBuf;

use log::{debug, info, warn};

use crate::data::encode::{encode_table, LabelMapping};
use crate::data::filter::{class_counts, filter_classes};
use crate::data::loader::{self, Source, FIELD_COUNT};
use crate::data::writer::write_csv;
use crate::error::Result;

pub const SOURCE_URL: &str =
    "https://archive.ics.uci.edu/ml/machine-learning-databases/iris/iris.data";

pub const COLUMN_NAMES: [&str; FIELD_COUNT] = [
    "sepal-length",
    "sepal-width",
    "petal-length",
    "petal-width",
    "class",
];

/// The two classes kept, in output order. The first encodes to 0, the second to 1.
pub const CLASSES: [&str; 2] = ["Iris-setosa", "Iris-virginica"];

pub const OUTPUT_FILE: &str = "data_2_class_Iris-setosa_Iris-virginica.csv";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Everything the builder needs. `Default` is the fixed production setup;
/// other values only exist so tests can point at local files.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub source: Source,
    pub column_names: [&'static str; FIELD_COUNT],
    pub classes: [&'static str; 2],
    pub output_path: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            source: Source::Url(SOURCE_URL.to_string()),
            column_names: COLUMN_NAMES,
            classes: CLASSES,
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl FixtureConfig {
    /// Class `i` of `classes` gets code `i`.
    pub fn label_mapping(&self) -> Result<LabelMapping> {
        LabelMapping::new(self.classes.iter().copied().zip(0u8..))
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSummary {
    pub output_path: PathBuf,
    /// `(label, code, rows)` for each kept class, in output order.
    pub per_class: Vec<(String, u8, usize)>,
}

impl FixtureSummary {
    pub fn total_rows(&self) -> usize {
        self.per_class.iter().map(|(_, _, n)| n).sum()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Load, filter, project, recode and write the fixture.
pub fn build(config: &FixtureConfig) -> Result<FixtureSummary> {
    let mapping = config.label_mapping()?;

    let table = loader::load(&config.source, &config.column_names)?;
    debug!("Source class counts: {:?}", class_counts(&table));

    let filtered = filter_classes(&table, &config.classes);
    info!(
        "Kept {} of {} rows for classes {:?}",
        filtered.len(),
        table.len(),
        config.classes
    );

    let projected = filtered.project();

    if !projected.rows.is_empty() {
        let fitted = LabelMapping::fit(projected.rows.iter().map(|r| r.class.as_str()))?;
        if fitted != mapping {
            warn!("Fixed label mapping {mapping:?} differs from sorted-label order {fitted:?}");
        }
    }

    let encoded = encode_table(&projected, &mapping)?;
    write_csv(&encoded, &config.output_path)?;

    let counts = class_counts(&filtered);
    let per_class = mapping
        .labels()
        .map(|label| {
            let rows = counts
                .iter()
                .find(|(l, _)| l == label)
                .map_or(0, |(_, n)| *n);
            // labels() only yields mapped labels
            let code = mapping.encode(label)?;
            Ok((label.to_string(), code, rows))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FixtureSummary {
        output_path: config.output_path.clone(),
        per_class,
    })
}

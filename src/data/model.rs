use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// IrisRecord – one row of the source file
// ---------------------------------------------------------------------------

/// A single source row. The file carries no header, so field names come from
/// the column names handed to the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IrisRecord {
    #[serde(rename = "sepal-length")]
    pub sepal_length: f64,
    #[serde(rename = "sepal-width")]
    pub sepal_width: f64,
    #[serde(rename = "petal-length")]
    pub petal_length: f64,
    #[serde(rename = "petal-width")]
    pub petal_width: f64,
    pub class: String,
}

/// Rows after projection: petal measurements dropped, label still text.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub class: String,
}

/// Rows as written to the fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedRow {
    #[serde(rename = "sepal-length", serialize_with = "serialize_measurement")]
    pub sepal_length: f64,
    #[serde(rename = "sepal-width", serialize_with = "serialize_measurement")]
    pub sepal_width: f64,
    pub class: u8,
}

/// Integral values keep one decimal (`5.0`), everything else uses the
/// shortest round-trip form (`5.1`), so measurements come out as they went in.
fn serialize_measurement<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 {
        serializer.serialize_str(&format!("{value:.1}"))
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The parsed source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrisTable {
    pub rows: Vec<IrisRecord>,
}

impl IrisTable {
    pub fn new(rows: Vec<IrisRecord>) -> Self {
        IrisTable { rows }
    }

    /// Keep `sepal-length`, `sepal-width` and `class`.
    pub fn project(&self) -> ProjectedTable {
        let rows = self
            .rows
            .iter()
            .map(|r| ProjectedRow {
                sepal_length: r.sepal_length,
                sepal_width: r.sepal_width,
                class: r.class.clone(),
            })
            .collect();
        ProjectedTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedTable {
    pub rows: Vec<ProjectedRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedTable {
    pub rows: Vec<EncodedRow>,
}

impl EncodedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use super::model::IrisTable;

/// Keep rows whose class is one of `classes`.
///
/// Runs one pass per class, in the order given, and concatenates them, so the
/// result holds every class-A row (in source order) followed by every
/// class-B row. Rows of any other class are dropped.
pub fn filter_classes(table: &IrisTable, classes: &[&str]) -> IrisTable {
    let rows = classes
        .iter()
        .flat_map(|class| table.rows.iter().filter(move |r| r.class == *class))
        .cloned()
        .collect();
    IrisTable::new(rows)
}

/// Row count per class label, in first-seen order.
pub fn class_counts(table: &IrisTable) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in &table.rows {
        match counts.iter_mut().find(|(label, _)| *label == row.class) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.class.clone(), 1)),
        }
    }
    counts
}

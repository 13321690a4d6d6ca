use average::Mean;

/// Mean of the given values, 0.0 for an empty iterator.
pub fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let m: Mean = values.collect();
    if m.is_empty() {
        0.0
    } else {
        m.mean()
    }
}

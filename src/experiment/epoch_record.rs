//! Epoch Record - one row of per-epoch evaluation metrics

/// Epoch Record represents the metrics captured at one training checkpoint.
///
/// Values are positional: `values[i]` belongs to the `i`-th metric header
/// of the owning [`RunTable`](super::RunTable) (the header list without
/// the leading `epoch_name`).
#[derive(Debug, Clone, PartialEq)]
pub struct EpochRecord {
    epoch_name: String,
    values: Vec<f64>,
}

impl EpochRecord {
    /// Create a new epoch record.
    ///
    /// # Arguments
    ///
    /// * `epoch_name` - Row label, e.g. `epoch_3`
    /// * `values` - Metric values in header order
    #[must_use]
    pub fn new(epoch_name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            epoch_name: epoch_name.into(),
            values,
        }
    }

    /// Get the epoch label.
    #[must_use]
    pub fn epoch_name(&self) -> &str {
        &self.epoch_name
    }

    /// Get the epoch number parsed from the label, if it has one.
    #[must_use]
    pub fn epoch_number(&self) -> Option<u64> {
        parse_epoch_number(&self.epoch_name)
    }

    /// Get all metric values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the value at a metric index.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Extract the first run of ASCII digits from an epoch label.
///
/// `epoch_12` → 12, `ep7_best` → 7, `final` → `None`. Digit runs too
/// large for `u64` also yield `None`.
#[must_use]
pub fn parse_epoch_number(label: &str) -> Option<u64> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let digits = &label[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_record_new() {
        let record = EpochRecord::new("epoch_3", vec![0.5, 0.25]);
        assert_eq!(record.epoch_name(), "epoch_3");
        assert_eq!(record.epoch_number(), Some(3));
        assert_eq!(record.values().len(), 2);
        assert!((record.value(1).unwrap() - 0.25).abs() < f64::EPSILON);
        assert!(record.value(2).is_none());
    }

    #[test]
    fn test_parse_epoch_number() {
        assert_eq!(parse_epoch_number("epoch_12"), Some(12));
        assert_eq!(parse_epoch_number("ep7_best3"), Some(7));
        assert_eq!(parse_epoch_number("100"), Some(100));
        assert_eq!(parse_epoch_number("final"), None);
        assert_eq!(parse_epoch_number(""), None);
    }

    #[test]
    fn test_parse_epoch_number_overflow() {
        assert_eq!(parse_epoch_number("epoch_99999999999999999999999"), None);
    }
}

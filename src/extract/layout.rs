//! Output column layout

use super::ClassScores;

/// A score column family. Declaration order is the column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Recall (R)
    Recall,
    /// Precision (P)
    Precision,
    /// mAP at IoU 0.5
    Map50,
    /// mAP averaged over IoU 0.5..0.95
    Map50To95,
}

impl Metric {
    /// All metrics in column order.
    pub const ALL: [Self; 4] = [Self::Recall, Self::Precision, Self::Map50, Self::Map50To95];

    /// Header suffix used in column names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recall => "Recall",
            Self::Precision => "Precision",
            Self::Map50 => "mAP50",
            Self::Map50To95 => "mAP50-95",
        }
    }

    /// Pick this metric out of a class's scores.
    #[must_use]
    pub const fn select(self, scores: &ClassScores) -> f64 {
        match self {
            Self::Recall => scores.recall,
            Self::Precision => scores.precision,
            Self::Map50 => scores.map50,
            Self::Map50To95 => scores.map50_95,
        }
    }
}

/// Column layout: metric-major, class-minor.
///
/// With classes `[mei, shi]` the metric headers are
/// `mei_Recall, shi_Recall, mei_Precision, shi_Precision, mei_mAP50,
/// shi_mAP50, mei_mAP50-95, shi_mAP50-95`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    classes: Vec<String>,
}

impl ColumnLayout {
    /// Create a layout for the given class labels.
    #[must_use]
    pub fn new(classes: &[String]) -> Self {
        Self {
            classes: classes.to_vec(),
        }
    }

    /// Number of classes (lines per epoch).
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Metric headers, excluding `epoch_name`.
    #[must_use]
    pub fn metric_headers(&self) -> Vec<String> {
        Metric::ALL
            .iter()
            .flat_map(|metric| {
                self.classes
                    .iter()
                    .map(move |class| format!("{class}_{}", metric.label()))
            })
            .collect()
    }

    /// Flatten one epoch's per-class scores into row values.
    ///
    /// `scores[i]` must belong to the `i`-th class.
    #[must_use]
    pub fn row_values(&self, scores: &[ClassScores]) -> Vec<f64> {
        debug_assert_eq!(scores.len(), self.classes.len());
        Metric::ALL
            .iter()
            .flat_map(|metric| scores.iter().map(move |s| metric.select(s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_default_headers() {
        let layout = ColumnLayout::new(&classes(&["mei", "shi"]));
        assert_eq!(
            layout.metric_headers(),
            vec![
                "mei_Recall",
                "shi_Recall",
                "mei_Precision",
                "shi_Precision",
                "mei_mAP50",
                "shi_mAP50",
                "mei_mAP50-95",
                "shi_mAP50-95",
            ]
        );
    }

    #[test]
    fn test_row_values_follow_headers() {
        let layout = ColumnLayout::new(&classes(&["mei", "shi"]));
        let mei = ClassScores {
            precision: 0.1,
            recall: 0.2,
            map50: 0.3,
            map50_95: 0.4,
        };
        let shi = ClassScores {
            precision: 0.5,
            recall: 0.6,
            map50: 0.7,
            map50_95: 0.8,
        };
        assert_eq!(
            layout.row_values(&[mei, shi]),
            vec![0.2, 0.6, 0.1, 0.5, 0.3, 0.7, 0.4, 0.8]
        );
    }

    #[test]
    fn test_single_class_layout() {
        let layout = ColumnLayout::new(&classes(&["car"]));
        assert_eq!(layout.class_count(), 1);
        assert_eq!(layout.metric_headers().len(), 4);
    }
}

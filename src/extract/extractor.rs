//! Turning a run's log lines into epoch rows

use tracing::{debug, warn};

use super::{ClassLinePattern, ColumnLayout};
use crate::experiment::{EpochRecord, RunTable};
use crate::{Error, Result};

/// Groups log lines per epoch and matches each against its class.
///
/// Lines are read in consecutive groups of `class_count` lines. Group `k`
/// becomes `epoch_{k+1}` if every line matches its class pattern. A group
/// that fails to match is logged and dropped without renumbering later
/// epochs. A trailing partial group is logged and dropped.
#[derive(Debug, Clone)]
pub struct LogExtractor {
    layout: ColumnLayout,
    patterns: Vec<ClassLinePattern>,
}

impl LogExtractor {
    /// Build an extractor for the given class labels.
    ///
    /// # Errors
    ///
    /// Returns error if `classes` is empty or a class pattern cannot be
    /// compiled.
    pub fn new(classes: &[String]) -> Result<Self> {
        if classes.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one class label is required".into(),
            ));
        }
        let patterns = classes
            .iter()
            .map(|c| ClassLinePattern::new(c.as_str()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            layout: ColumnLayout::new(classes),
            patterns,
        })
    }

    /// Column layout used for the produced tables.
    #[must_use]
    pub const fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Extract all matching epochs of one run.
    ///
    /// # Errors
    ///
    /// Returns error only if a produced row does not fit the layout, which
    /// indicates a bug rather than bad input.
    pub fn extract<S: AsRef<str>>(&self, run_name: &str, lines: &[S]) -> Result<RunTable> {
        let mut table = RunTable::new(run_name, self.layout.metric_headers());
        let group_size = self.patterns.len();

        let chunks = lines.chunks_exact(group_size);
        let remainder = chunks.remainder();

        for (index, group) in chunks.enumerate() {
            let scores: Option<Vec<_>> = self
                .patterns
                .iter()
                .zip(group)
                .map(|(pattern, line)| pattern.parse(line.as_ref()))
                .collect();

            match scores {
                Some(scores) => {
                    let epoch_name = format!("epoch_{}", index + 1);
                    debug!(run = run_name, %epoch_name, "Matched epoch");
                    table.push(EpochRecord::new(epoch_name, self.layout.row_values(&scores)))?;
                }
                None => {
                    let lines: Vec<&str> = group.iter().map(AsRef::as_ref).collect();
                    warn!(run = run_name, ?lines, "No matching pattern found");
                }
            }
        }

        if !remainder.is_empty() {
            let lines: Vec<&str> = remainder.iter().map(AsRef::as_ref).collect();
            warn!(
                run = run_name,
                ?lines,
                expected = group_size,
                "Ignoring incomplete trailing group of log lines"
            );
        }

        Ok(table)
    }
}

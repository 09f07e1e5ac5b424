//! Per-class validation log lines
//!
//! A class line looks like
//!
//! ```text
//! mei        120        348      0.912      0.874      0.903      0.611
//! <class> <images> <instances>    <P>        <R>      <mAP50>  <mAP50-95>
//! ```
//!
//! and may be embedded in a longer line (the match is a search).

use regex::Regex;

use crate::{Error, Result};

/// The four scores reported for one class at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    /// Precision (P)
    pub precision: f64,
    /// Recall (R)
    pub recall: f64,
    /// mAP at IoU 0.5
    pub map50: f64,
    /// mAP averaged over IoU 0.5..0.95
    pub map50_95: f64,
}

/// Compiled matcher for one class label.
#[derive(Debug, Clone)]
pub struct ClassLinePattern {
    class: String,
    regex: Regex,
}

impl ClassLinePattern {
    /// Compile the pattern for `class`. The label is matched literally.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting regex fails to compile.
    pub fn new(class: impl Into<String>) -> Result<Self> {
        let class = class.into();
        let pattern = format!(
            r"{}\s+\d+\s+\d+\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)",
            regex::escape(&class)
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| Error::Other(format!("Invalid pattern for class '{class}': {e}")))?;
        Ok(Self { class, regex })
    }

    /// Class label this pattern matches.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Search `line` for this class's scores.
    ///
    /// Returns `None` when the line does not match, or when a captured
    /// token is not a valid float (e.g. `1.2.3`).
    #[must_use]
    pub fn parse(&self, line: &str) -> Option<ClassScores> {
        let caps = self.regex.captures(line)?;
        let field = |i: usize| caps.get(i)?.as_str().parse::<f64>().ok();
        Some(ClassScores {
            precision: field(1)?,
            recall: field(2)?,
            map50: field(3)?,
            map50_95: field(4)?,
        })
    }
}

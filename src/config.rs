//! Run configuration for the two tools
//!
//! Both configs are built through builders whose defaults match the
//! command line defaults. `build()` is the single validation point.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Allowed values for the resolution factor.
pub const RESOLUTION_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Chart canvas size in inches (width, height).
pub const FIGURE_SIZE_INCHES: (u32, u32) = (10, 6);

/// Configuration for [`plot_training_curves`](crate::plot::plot_training_curves)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    data_dir: PathBuf,
    column: String,
    save_path: PathBuf,
    resolution: u32,
}

impl PlotConfig {
    /// Create a builder; `column` is the only required field.
    #[must_use]
    pub fn builder(column: impl Into<String>) -> PlotConfigBuilder {
        PlotConfigBuilder::new(column)
    }

    /// Folder scanned for `.xlsx` files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Metric header plotted on the Y axis.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Base output path before the column prefix is applied.
    #[must_use]
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Resolution factor (1..=10).
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Dots per inch: 100 per resolution step.
    #[must_use]
    pub const fn dpi(&self) -> u32 {
        self.resolution * 100
    }

    /// Canvas size in pixels.
    #[must_use]
    pub const fn pixel_size(&self) -> (u32, u32) {
        (
            FIGURE_SIZE_INCHES.0 * self.dpi(),
            FIGURE_SIZE_INCHES.1 * self.dpi(),
        )
    }
}

/// Builder for `PlotConfig`.
#[derive(Debug)]
pub struct PlotConfigBuilder {
    data_dir: PathBuf,
    column: String,
    save_path: PathBuf,
    resolution: u32,
}

impl PlotConfigBuilder {
    /// Create a builder with default paths and resolution 5.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            data_dir: PathBuf::from("excel"),
            column: column.into(),
            save_path: PathBuf::from("IMG/curves.png"),
            resolution: 5,
        }
    }

    /// Set the folder holding the workbooks.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the base output path.
    #[must_use]
    pub fn save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the resolution factor.
    #[must_use]
    pub const fn resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Build the `PlotConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty column name, an empty
    /// save path, or a resolution outside 1..=10.
    pub fn build(self) -> Result<PlotConfig> {
        if self.column.trim().is_empty() {
            return Err(Error::InvalidConfig("column name must not be empty".into()));
        }
        if self.save_path.file_name().is_none() {
            return Err(Error::InvalidConfig(format!(
                "save path '{}' has no file name",
                self.save_path.display()
            )));
        }
        if !RESOLUTION_RANGE.contains(&self.resolution) {
            return Err(Error::InvalidConfig(format!(
                "resolution must be between {} and {}, got {}",
                RESOLUTION_RANGE.start(),
                RESOLUTION_RANGE.end(),
                self.resolution
            )));
        }
        Ok(PlotConfig {
            data_dir: self.data_dir,
            column: self.column,
            save_path: self.save_path,
            resolution: self.resolution,
        })
    }
}

/// Configuration for [`extract_tree`](crate::extract::extract_tree)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    folder: PathBuf,
    yaml_name: String,
    save_folder: PathBuf,
    overwrite: bool,
    classes: Vec<String>,
}

impl ExtractConfig {
    /// Create a builder with default settings.
    #[must_use]
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::default()
    }

    /// Parent folder whose subfolders are runs.
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Log file name looked up in each run subfolder.
    #[must_use]
    pub fn yaml_name(&self) -> &str {
        &self.yaml_name
    }

    /// Output folder for workbooks.
    #[must_use]
    pub fn save_folder(&self) -> &Path {
        &self.save_folder
    }

    /// Whether existing workbooks are replaced.
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Class labels, in log line order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Builder for `ExtractConfig`.
#[derive(Debug)]
pub struct ExtractConfigBuilder {
    folder: PathBuf,
    yaml_name: String,
    save_folder: PathBuf,
    overwrite: bool,
    classes: Vec<String>,
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("T_MIX_"),
            yaml_name: "val_get_inf.yaml".to_string(),
            save_folder: PathBuf::from("excel"),
            overwrite: false,
            classes: vec!["mei".to_string(), "shi".to_string()],
        }
    }
}

impl ExtractConfigBuilder {
    /// Set the parent folder.
    #[must_use]
    pub fn folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the log file name.
    #[must_use]
    pub fn yaml_name(mut self, name: impl Into<String>) -> Self {
        self.yaml_name = name.into();
        self
    }

    /// Set the output folder.
    #[must_use]
    pub fn save_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.save_folder = folder.into();
        self
    }

    /// Replace existing workbooks instead of picking a suffixed name.
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the class labels.
    #[must_use]
    pub fn classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Build the `ExtractConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty log file name, an
    /// empty class list, a blank or whitespace-bearing class label, or a
    /// duplicated class label.
    pub fn build(self) -> Result<ExtractConfig> {
        if self.yaml_name.trim().is_empty() {
            return Err(Error::InvalidConfig("yaml file name must not be empty".into()));
        }
        if self.classes.is_empty() {
            return Err(Error::InvalidConfig("at least one class label is required".into()));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(Error::InvalidConfig(format!(
                    "class label '{class}' must be a single non-empty word"
                )));
            }
            if self.classes[..i].contains(class) {
                return Err(Error::InvalidConfig(format!(
                    "class label '{class}' is listed twice"
                )));
            }
        }
        Ok(ExtractConfig {
            folder: self.folder,
            yaml_name: self.yaml_name,
            save_folder: self.save_folder,
            overwrite: self.overwrite,
            classes: self.classes,
        })
    }
}

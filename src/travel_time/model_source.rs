//! Location of the tables of one named Earth model.
//!
//! A travel-time model named `iasp91` is stored as two files living side by side:
//! `iasp91.hed` (header/metadata) and `iasp91.tbl` (tables). [`ModelSource`] carries the
//! model name and the directory holding those files, and checks that both are present
//! before a backend is asked to open them.
//!
//! ```rust
//! use ttim::travel_time::model_source::ModelSource;
//!
//! let source = ModelSource::try_from("tables/iasp91").unwrap();
//! assert_eq!(source.name(), "iasp91");
//! assert_eq!(source.header_path().as_str(), "tables/iasp91.hed");
//! assert_eq!(source.table_path().as_str(), "tables/iasp91.tbl");
//! ```
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::constants::{DEFAULT_MODEL, HEADER_EXTENSION, TABLE_EXTENSION};
use crate::ttim_errors::TtimError;

/// Name and directory of a travel-time model table set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    name: String,
    table_dir: Utf8PathBuf,
}

impl Default for ModelSource {
    fn default() -> Self {
        ModelSource {
            name: DEFAULT_MODEL.to_string(),
            table_dir: Utf8PathBuf::from("."),
        }
    }
}

impl ModelSource {
    /// Build a source from a bare model name and the directory holding its tables.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: bare model name (e.g. `"iasp91"`), without extension or directory.
    /// * `table_dir`: directory containing `<name>.hed` and `<name>.tbl`.
    ///
    /// Return
    /// ----------
    /// * A [`ModelSource`], or [`TtimError::InvalidModelName`] if the name is empty,
    ///   contains a path separator or NUL byte.
    pub fn new(name: &str, table_dir: impl Into<Utf8PathBuf>) -> Result<Self, TtimError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.contains(&['/', '\\', '\0'][..]) {
            return Err(TtimError::InvalidModelName(name.to_string()));
        }

        Ok(ModelSource {
            name: trimmed.to_string(),
            table_dir: table_dir.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_dir(&self) -> &Utf8Path {
        &self.table_dir
    }

    /// Path prefix handed to the table reader, which appends the extensions itself.
    pub fn prefix(&self) -> Utf8PathBuf {
        self.table_dir.join(&self.name)
    }

    pub fn header_path(&self) -> Utf8PathBuf {
        self.file_path(HEADER_EXTENSION)
    }

    pub fn table_path(&self) -> Utf8PathBuf {
        self.file_path(TABLE_EXTENSION)
    }

    fn file_path(&self, extension: &str) -> Utf8PathBuf {
        self.table_dir.join(format!("{}.{extension}", self.name))
    }

    /// Check that both table files exist.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` when `<name>.hed` and `<name>.tbl` are regular files,
    ///   otherwise [`TtimError::TableFileNotFound`] naming the first missing file.
    pub fn check_files(&self) -> Result<(), TtimError> {
        for path in [self.header_path(), self.table_path()] {
            if !path.is_file() {
                return Err(TtimError::TableFileNotFound(path.to_string()));
            }
        }
        Ok(())
    }
}

impl TryFrom<&str> for ModelSource {
    type Error = TtimError;

    /// Parse `"iasp91"` (current directory) or `"some/dir/iasp91"`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let path = Utf8Path::new(value.trim());
        let Some(name) = path.file_name() else {
            return Err(TtimError::InvalidModelName(value.to_string()));
        };

        match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => ModelSource::new(name, dir),
            _ => ModelSource::new(name, "."),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{HEADER_EXTENSION} and {}.{TABLE_EXTENSION}", self.name, self.name)
    }
}

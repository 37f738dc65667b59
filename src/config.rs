//! Loading block props from JSON and YAML documents.
//!
//! A props document is a map using the same camelCase names as the
//! component API:
//!
//! ```yaml
//! as: section
//! padding: large
//! backgroundColor: "#fff"
//! display: flex
//! justifyContent: center
//! data-section: hero
//! children:
//!   - Welcome
//!   - padding: small
//!     children: [nested]
//! ```

use std::fs;
use std::path::Path;

use crate::error::PropsError;
use crate::style::BlockProps;

/// Document formats accepted for props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropsFormat {
    Json,
    Yaml,
}

impl PropsFormat {
    /// Infers the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(PropsFormat::Json),
            "yaml" | "yml" => Some(PropsFormat::Yaml),
            _ => None,
        }
    }
}

impl BlockProps {
    pub fn from_json_str(source: &str) -> Result<Self, PropsError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, PropsError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses props in the given format.
    pub fn from_str_with_format(source: &str, format: PropsFormat) -> Result<Self, PropsError> {
        match format {
            PropsFormat::Json => Self::from_json_str(source),
            PropsFormat::Yaml => Self::from_yaml_str(source),
        }
    }

    /// Reads props from a file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::UnknownFormat`] for unrecognized extensions, and
    /// I/O or parse errors otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PropsError> {
        let path = path.as_ref();
        let format =
            PropsFormat::from_path(path).ok_or_else(|| PropsError::UnknownFormat(path.into()))?;
        let source = fs::read_to_string(path).map_err(|source| PropsError::Io {
            path: path.into(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading block props");
        Self::from_str_with_format(&source, format)
    }
}

//! Error types.

use std::path::PathBuf;

/// Error returned when an element cannot be rendered to HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The element tag is not a usable HTML tag name
    #[error("invalid tag name '{0}'")]
    InvalidTag(String),
    /// A forwarded attribute name is not a usable HTML attribute name
    #[error("invalid attribute name '{name}' on <{tag}>")]
    InvalidAttribute { tag: String, name: String },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Error returned when a props document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON props: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML props: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file extension does not name a supported format
    #[error("cannot infer props format from '{}' (expected .json, .yaml or .yml)", .0.display())]
    UnknownFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_attribute_display() {
        let err = RenderError::InvalidAttribute {
            tag: "div".to_string(),
            name: "on click".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("on click"));
        assert!(msg.contains("<div>"));
    }

    #[test]
    fn test_unknown_format_display() {
        let err = PropsError::UnknownFormat(PathBuf::from("block.toml"));
        assert!(err.to_string().contains("block.toml"));
    }
}

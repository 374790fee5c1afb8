//! Encodings for typed resources

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Errors produced while encoding or decoding a resource.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Serialization format used to turn resources into bytes and back.
///
/// JSON is the default. The text formats are self-describing, so any format
/// can read back exactly what it wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Detect a format from a file extension:
    /// - `json` -> JSON
    /// - `toml` -> TOML
    /// - `yaml`, `yml` -> YAML
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Human-readable name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let bytes = match self {
            Self::Json => serde_json::to_vec_pretty(value)?,
            Self::Toml => toml::to_string_pretty(value)?.into_bytes(),
            Self::Yaml => serde_yaml::to_string(value)?.into_bytes(),
        };
        Ok(bytes)
    }

    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let value = match self {
            Self::Json => serde_json::from_slice(bytes)?,
            Self::Toml => toml::from_str(std::str::from_utf8(bytes)?)?,
            Self::Yaml => serde_yaml::from_slice(bytes)?,
        };
        Ok(value)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

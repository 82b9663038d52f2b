//! The configuration record handed to the project generator.
//!
//! A [`GeneratorConfig`] describes one Terraform provider binding package: the
//! provider being bound plus the version ranges the generated package targets.
//! It is built once, handed to the generator by value and never changed.
//!
//! The record serializes with the option names the generator understands, and
//! with nothing else:
//!
//! ```
//! use provider_project_core::config::{GeneratorConfig, VersionRanges};
//!
//! let config = GeneratorConfig::new(
//!     "aws",
//!     VersionRanges {
//!         generator_library: "^0.12.0".into(),
//!         framework: "^10.0.0".into(),
//!         binding_runtime: "^1.53.0".into(),
//!         minimum_platform_runtime: "14.17.0".into(),
//!     },
//! );
//!
//! let json = serde_json::to_value(&config).unwrap();
//! assert_eq!(json["terraformProvider"], "aws");
//! assert_eq!(json["minNodeVersion"], "14.17.0");
//! ```

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Version ranges the generated package is pinned against.
///
/// Values are passed through as written; they are not parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRanges {
    /// Range for the generator engine itself
    pub generator_library: String,
    /// Range for the orchestration framework the package targets
    pub framework: String,
    /// Range for the cross-language interface runtime used by the bindings
    pub binding_runtime: String,
    /// Lowest supported host runtime version
    pub minimum_platform_runtime: String,
}

/// Configuration record for one provider binding package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(rename = "terraformProvider")]
    provider_name: String,

    #[serde(rename = "cdktfVersion")]
    generator_library_version: String,

    #[serde(rename = "constructsVersion")]
    framework_version: String,

    #[serde(rename = "jsiiVersion")]
    binding_runtime_version: String,

    #[serde(rename = "minNodeVersion")]
    minimum_platform_runtime_version: String,
}

impl GeneratorConfig {
    /// Assemble a record from a provider name and its version ranges.
    pub fn new(provider_name: impl Into<String>, versions: VersionRanges) -> Self {
        let VersionRanges {
            generator_library,
            framework,
            binding_runtime,
            minimum_platform_runtime,
        } = versions;

        Self {
            provider_name: provider_name.into(),
            generator_library_version: generator_library,
            framework_version: framework,
            binding_runtime_version: binding_runtime,
            minimum_platform_runtime_version: minimum_platform_runtime,
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn generator_library_version(&self) -> &str {
        &self.generator_library_version
    }

    pub fn framework_version(&self) -> &str {
        &self.framework_version
    }

    pub fn binding_runtime_version(&self) -> &str {
        &self.binding_runtime_version
    }

    pub fn minimum_platform_runtime_version(&self) -> &str {
        &self.minimum_platform_runtime_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn aws_config() -> GeneratorConfig {
        GeneratorConfig::new(
            "aws",
            VersionRanges {
                generator_library: "^0.12.0".into(),
                framework: "^10.0.0".into(),
                binding_runtime: "^1.53.0".into(),
                minimum_platform_runtime: "14.17.0".into(),
            },
        )
    }

    #[test]
    fn test_fields_are_kept_verbatim() {
        let config = aws_config();
        assert_eq!(config.provider_name(), "aws");
        assert_eq!(config.generator_library_version(), "^0.12.0");
        assert_eq!(config.framework_version(), "^10.0.0");
        assert_eq!(config.binding_runtime_version(), "^1.53.0");
        assert_eq!(config.minimum_platform_runtime_version(), "14.17.0");
    }

    #[test]
    fn test_serializes_exactly_five_generator_options() {
        let value = serde_json::to_value(aws_config()).unwrap();
        assert_eq!(
            value,
            json!({
                "terraformProvider": "aws",
                "cdktfVersion": "^0.12.0",
                "constructsVersion": "^10.0.0",
                "jsiiVersion": "^1.53.0",
                "minNodeVersion": "14.17.0",
            })
        );
    }

    #[test]
    fn test_empty_provider_is_not_rejected() {
        let config = GeneratorConfig::new(
            "",
            VersionRanges {
                generator_library: String::new(),
                framework: String::new(),
                binding_runtime: String::new(),
                minimum_platform_runtime: String::new(),
            },
        );
        assert_eq!(config.provider_name(), "");
    }

    #[test]
    fn test_rejects_unknown_options() {
        let raw = r#"{
            "terraformProvider": "aws",
            "cdktfVersion": "^0.12.0",
            "constructsVersion": "^10.0.0",
            "jsiiVersion": "^1.53.0",
            "minNodeVersion": "14.17.0",
            "extra": true
        }"#;
        assert!(serde_json::from_str::<GeneratorConfig>(raw).is_err());
    }
}

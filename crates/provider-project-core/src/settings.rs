//! Settings loading for provider project synthesis.
//!
//! Settings decide which provider is bound and which version ranges it is
//! pinned against, and how the generator is started. They come from a
//! settings file (YAML or TOML), overlaid by command-line and environment
//! values, with built-in defaults for every version range.
//!
//! # Examples
//!
//! ```no_run
//! use provider_project_core::settings::Settings;
//!
//! # #[tokio::main]
//! # async fn main() -> provider_project_core::Result<()> {
//! let file = Settings::from_file("provider-project.yaml").await?;
//! let settings = file.overlay(Settings {
//!     provider: Some("aws".into()),
//!     ..Default::default()
//! });
//! let (provider, versions) = settings.resolve()?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::{
    command::{default_args, CommandGeneratorFactory, DEFAULT_MODULE, DEFAULT_PROGRAM},
    config::VersionRanges,
    error::{Error, Result},
};

// External imports (alphabetized)
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Default range for the generator engine
pub const DEFAULT_CDKTF_VERSION: &str = "^0.12.0";
/// Default range for the orchestration framework
pub const DEFAULT_CONSTRUCTS_VERSION: &str = "^10.0.0";
/// Default range for the binding runtime
pub const DEFAULT_JSII_VERSION: &str = "^1.53.0";
/// Default minimum host runtime version
pub const DEFAULT_MIN_NODE_VERSION: &str = "14.17.0";

/// File names probed by [`Settings::discover`], in order
pub const SETTINGS_FILE_NAMES: &[&str] = &[
    "provider-project.yaml",
    "provider-project.yml",
    "provider-project.toml",
];

/// Partially specified synthesis settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Terraform provider to bind
    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub cdktf_version: Option<String>,

    #[serde(default)]
    pub constructs_version: Option<String>,

    #[serde(default)]
    pub jsii_version: Option<String>,

    #[serde(default)]
    pub min_node_version: Option<String>,

    /// How the generator is started
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// Settings for the generator process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub program: Option<String>,

    #[serde(default)]
    pub args: Option<Vec<String>>,

    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub project_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a file. `.toml` files are read as TOML, anything
    /// else as YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let settings = if is_toml {
            toml::from_str(&content)?
        } else if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Load the first settings file found in `dir`, or defaults when there is
    /// none.
    pub async fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        for name in SETTINGS_FILE_NAMES {
            let candidate = dir.as_ref().join(name);
            if fs::try_exists(&candidate).await? {
                return Self::from_file(&candidate).await;
            }
        }
        Ok(Self::default())
    }

    /// Layer `other` on top of `self`; values set in `other` win.
    pub fn overlay(self, other: Settings) -> Settings {
        Settings {
            provider: other.provider.or(self.provider),
            cdktf_version: other.cdktf_version.or(self.cdktf_version),
            constructs_version: other.constructs_version.or(self.constructs_version),
            jsii_version: other.jsii_version.or(self.jsii_version),
            min_node_version: other.min_node_version.or(self.min_node_version),
            generator: GeneratorSettings {
                program: other.generator.program.or(self.generator.program),
                args: other.generator.args.or(self.generator.args),
                module: other.generator.module.or(self.generator.module),
                project_dir: other.generator.project_dir.or(self.generator.project_dir),
            },
        }
    }

    /// Provider name and version ranges, with defaults filled in.
    ///
    /// Only a missing provider name is an error; an empty one is returned as
    /// is.
    pub fn resolve(&self) -> Result<(String, VersionRanges)> {
        let provider = self.provider.clone().ok_or_else(|| {
            Error::config("no provider name set (use --provider or CDKTF_PROVIDER)")
        })?;

        let versions = VersionRanges {
            generator_library: or_default(&self.cdktf_version, DEFAULT_CDKTF_VERSION),
            framework: or_default(&self.constructs_version, DEFAULT_CONSTRUCTS_VERSION),
            binding_runtime: or_default(&self.jsii_version, DEFAULT_JSII_VERSION),
            minimum_platform_runtime: or_default(&self.min_node_version, DEFAULT_MIN_NODE_VERSION),
        };

        Ok((provider, versions))
    }

    /// Generator adapter described by these settings
    pub fn command_factory(&self) -> CommandGeneratorFactory {
        let generator = &self.generator;
        CommandGeneratorFactory {
            program: or_default(&generator.program, DEFAULT_PROGRAM),
            args: generator.args.clone().unwrap_or_else(default_args),
            module: or_default(&generator.module, DEFAULT_MODULE),
            project_dir: generator.project_dir.clone(),
        }
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

//! Generator adapter that runs the project generator as a child process.
//!
//! Construction renders a small launcher script from the configuration record.
//! Synthesis starts the generator runtime (`node` by default), writes the
//! launcher to its stdin and waits for it to exit. The child's stdout and
//! stderr are inherited so its own diagnostics reach the user untouched.

// Internal imports (std, crate)
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    generator::{GeneratorFactory, ProjectGenerator},
};

// External imports (alphabetized)
use log::{debug, info};
use tera::{Context, Tera};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Program started when none is configured
pub const DEFAULT_PROGRAM: &str = "node";

/// Module that exports the project class
pub const DEFAULT_MODULE: &str = "@cdktf/provider-project";

const LAUNCHER_TEMPLATE: &str = r#"const { CdktfProviderProject } = require({{ module | json_encode }});
const project = new CdktfProviderProject({{ options | json_encode(pretty=true) }});

project.synth();
"#;

/// Builds [`CommandGenerator`]s for a fixed program invocation.
#[derive(Debug, Clone)]
pub struct CommandGeneratorFactory {
    /// Program to start
    pub program: String,
    /// Arguments passed to the program; the launcher arrives on stdin
    pub args: Vec<String>,
    /// Module the launcher loads the project class from
    pub module: String,
    /// Working directory for the generator (current directory when unset)
    pub project_dir: Option<PathBuf>,
}

impl Default for CommandGeneratorFactory {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: default_args(),
            module: DEFAULT_MODULE.to_string(),
            project_dir: None,
        }
    }
}

/// Arguments that make `node` read its script from stdin
pub(crate) fn default_args() -> Vec<String> {
    vec!["-".to_string()]
}

impl CommandGeneratorFactory {
    fn render_launcher(&self, config: &GeneratorConfig) -> Result<String> {
        let mut context = Context::new();
        context.insert("module", &self.module);
        context.insert("options", config);
        Ok(Tera::one_off(LAUNCHER_TEMPLATE, &context, false)?)
    }
}

impl GeneratorFactory for CommandGeneratorFactory {
    type Error = Error;
    type Generator = CommandGenerator;

    fn construct(&self, config: GeneratorConfig) -> Result<CommandGenerator> {
        if self.program.trim().is_empty() {
            return Err(Error::config("generator program must not be empty"));
        }

        let script = self.render_launcher(&config)?;
        debug!("Rendered launcher script:\n{}", script);

        Ok(CommandGenerator {
            program: self.program.clone(),
            args: self.args.clone(),
            project_dir: self.project_dir.clone(),
            script,
            config,
        })
    }
}

/// A generator bound to one configuration record.
#[derive(Debug)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
    project_dir: Option<PathBuf>,
    script: String,
    config: GeneratorConfig,
}

impl CommandGenerator {
    /// The launcher script fed to the program
    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl ProjectGenerator for CommandGenerator {
    type Error = Error;

    async fn synth(self) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.project_dir {
            command.current_dir(dir);
        }

        info!(
            "Synthesizing provider project for '{}' with `{}`",
            self.config.provider_name(),
            self.program
        );
        let mut child = command.spawn().map_err(|source| Error::Launch {
            program: self.program.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(self.script.as_bytes()).await {
                Ok(()) => {}
                // The exit status below decides whether this matters.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("Generator closed stdin before reading the launcher");
                }
                Err(e) => return Err(e.into()),
            }
            // Closing stdin signals the end of the script.
            drop(stdin);
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Synthesis {
                program: self.program,
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VersionRanges;

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
    fn test_launcher_embeds_module_and_options() -> Result<()> {
        let generator = CommandGeneratorFactory::default().construct(aws_config())?;
        assert_eq!(generator.config().provider_name(), "aws");
        let script = generator.script();

        assert!(script.starts_with(
            "const { CdktfProviderProject } = require(\"@cdktf/provider-project\");"
        ));
        assert!(script.contains("\"terraformProvider\": \"aws\""));
        assert!(script.contains("\"cdktfVersion\": \"^0.12.0\""));
        assert!(script.contains("\"constructsVersion\": \"^10.0.0\""));
        assert!(script.contains("\"jsiiVersion\": \"^1.53.0\""));
        assert!(script.contains("\"minNodeVersion\": \"14.17.0\""));
        assert!(script.trim_end().ends_with("project.synth();"));
        Ok(())
    }

    #[test]
    fn test_launcher_escapes_quotes_in_values() -> Result<()> {
        let config = GeneratorConfig::new(
            "evil\"name",
            VersionRanges {
                generator_library: "^0.12.0".into(),
                framework: "^10.0.0".into(),
                binding_runtime: "^1.53.0".into(),
                minimum_platform_runtime: "14.17.0".into(),
            },
        );
        let generator = CommandGeneratorFactory::default().construct(config)?;
        assert!(generator.script().contains(r#""terraformProvider": "evil\"name""#));
        Ok(())
    }

    #[test]
    fn test_empty_program_fails_construction() {
        let factory = CommandGeneratorFactory {
            program: "  ".into(),
            ..Default::default()
        };
        let err = factory.construct(aws_config()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_program_is_a_launch_error() {
        let factory = CommandGeneratorFactory {
            program: "provider-project-no-such-program".into(),
            ..Default::default()
        };
        let err = factory.construct(aws_config()).unwrap().synth().await.unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_program_receives_launcher_on_stdin() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let factory = CommandGeneratorFactory {
            program: "sh".into(),
            args: vec!["-c".into(), "cat > .projenrc.js".into()],
            project_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let generator = factory.construct(aws_config())?;
        let expected = generator.script().to_string();
        generator.synth().await?;

        let written = std::fs::read_to_string(dir.path().join(".projenrc.js"))?;
        assert_eq!(written, expected);
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_a_synthesis_error() -> Result<()> {
        let factory = CommandGeneratorFactory {
            program: "sh".into(),
            args: vec!["-c".into(), "exit 7".into()],
            ..Default::default()
        };

        let err = factory.construct(aws_config())?.synth().await.unwrap_err();

        assert!(matches!(&err, Error::Synthesis { program, .. } if program == "sh"));
        assert_eq!(err.exit_code(), Some(7));
        Ok(())
    }
}

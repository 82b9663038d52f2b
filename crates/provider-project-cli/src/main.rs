//! provider-project CLI entrypoint
//! Resolves settings and hands the assembled record to the project generator.

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use provider_project_core::{
    settings::GeneratorSettings, Error as CoreError, GeneratorConfig, Settings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "provider-project")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Terraform provider to generate bindings for (e.g., aws, google)
    #[arg(long, env = "CDKTF_PROVIDER")]
    provider: Option<String>,

    /// Settings file (YAML or TOML). Defaults to provider-project.{yaml,yml,toml}
    /// in the current directory, when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Version range for the cdktf generator engine
    #[arg(long)]
    cdktf_version: Option<String>,

    /// Version range for the constructs framework
    #[arg(long)]
    constructs_version: Option<String>,

    /// Version range for the jsii runtime
    #[arg(long)]
    jsii_version: Option<String>,

    /// Minimum Node.js version of the generated package
    #[arg(long)]
    min_node_version: Option<String>,

    /// Program that runs the generator (default: node)
    #[arg(long)]
    program: Option<String>,

    /// Argument for the generator program; repeat for several (default: -)
    #[arg(long = "generator-arg", allow_hyphen_values = true)]
    generator_args: Vec<String>,

    /// Module exporting the project class (default: @cdktf/provider-project)
    #[arg(long)]
    module: Option<String>,

    /// Directory the generator runs in (default: current directory)
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Print the assembled generator config as JSON instead of running
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Values given on the command line or through the environment
    fn settings(&self) -> Settings {
        Settings {
            provider: self.provider.clone(),
            cdktf_version: self.cdktf_version.clone(),
            constructs_version: self.constructs_version.clone(),
            jsii_version: self.jsii_version.clone(),
            min_node_version: self.min_node_version.clone(),
            generator: GeneratorSettings {
                program: self.program.clone(),
                args: (!self.generator_args.is_empty()).then(|| self.generator_args.clone()),
                module: self.module.clone(),
                project_dir: self.project_dir.clone(),
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code_for(&err)
        }
    }
}

async fn execute(cli: &Cli) -> anyhow::Result<()> {
    // Load file settings, then layer flags and environment on top
    let file_settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .await
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Settings::discover(&cwd)
                .await
                .context("Failed to load settings file")?
        }
    };
    let settings = file_settings.overlay(cli.settings());

    let (provider, versions) = settings.resolve()?;

    if cli.dry_run {
        let config = GeneratorConfig::new(provider, versions);
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let factory = settings.command_factory();
    info!(
        "Synthesizing '{}' project with {} {}",
        provider,
        factory.program,
        factory.args.join(" ")
    );

    // Generator failures go back to the caller as they are
    provider_project_core::run(&factory, provider, versions).await?;

    println!("✅ Provider project synthesized");
    Ok(())
}

/// Mirror the generator's own exit code when it has one
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<CoreError>()
        .and_then(CoreError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}

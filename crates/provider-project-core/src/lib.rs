//! Provider Project Core Library
//!
//! This library assembles the configuration record for a Terraform provider
//! binding package and hands it to an external project generator, which does
//! the actual scaffolding.

pub mod command;
pub mod config;
pub mod error;
pub mod generator;
pub mod invoke;
pub mod settings;

pub use crate::{
    command::{CommandGenerator, CommandGeneratorFactory},
    config::{GeneratorConfig, VersionRanges},
    error::{Error, Result},
    generator::{GeneratorFactory, ProjectGenerator},
    invoke::run,
    settings::Settings,
};

//! Assemble the configuration record and trigger synthesis.

use log::debug;

use crate::{
    config::{GeneratorConfig, VersionRanges},
    generator::{GeneratorFactory, ProjectGenerator},
};

/// Main entry point: construct one generator and run its synthesis.
///
/// The inputs are not validated here. Whatever the factory or the generator
/// returns as an error is handed back unchanged, and synthesis is never
/// attempted when construction fails.
pub async fn run<F>(
    factory: &F,
    provider_name: impl Into<String>,
    versions: VersionRanges,
) -> Result<(), F::Error>
where
    F: GeneratorFactory,
{
    // 1. Assemble the record
    let config = GeneratorConfig::new(provider_name, versions);
    debug!("Assembled generator config: {:?}", config);

    // 2. Construct the generator
    let generator = factory.construct(config)?;

    // 3. Delegate to the generator's synthesis
    debug!("Starting synthesis");
    generator.synth().await
}

//! Contract between the invoker and an external project generator.
//!
//! Generation happens in two steps: a [`GeneratorFactory`] constructs a
//! generator from a [`GeneratorConfig`], and the resulting
//! [`ProjectGenerator`] performs synthesis exactly once. Both steps report
//! failure through the factory's own error type.

use std::future::Future;

use crate::config::GeneratorConfig;

/// Constructor side of an external generator.
pub trait GeneratorFactory {
    /// Error raised by construction or synthesis
    type Error;

    /// The generator instance produced for a configuration record
    type Generator: ProjectGenerator<Error = Self::Error>;

    /// Build a generator that owns `config`.
    fn construct(&self, config: GeneratorConfig) -> Result<Self::Generator, Self::Error>;
}

/// A constructed generator, ready to emit the project.
pub trait ProjectGenerator {
    type Error;

    /// Emit all generated files. Consumes the generator.
    fn synth(self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

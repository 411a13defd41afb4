//! Test configuration: schema, loading, validation, CLI types, templates

pub mod cli;
pub mod load;
pub mod schema;
pub mod templates;
pub mod validate;

pub use cli::{parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, RegistryArgs, ValidateArgs};
pub use load::{load_config, load_config_with, parse_config};
pub use schema::{
    DatasetSpec, DistParams, IoBackend, MetricSpec, NetworkSpec, PathSpec, TestSpec,
    ValidationSpec,
};
pub use templates::{generate_spec, generate_yaml, Benchmark};
pub use validate::{validate_config, ValidationError};

//! CLI argument definitions

mod core;

pub use core::{
    parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, RegistryArgs, ValidateArgs,
};

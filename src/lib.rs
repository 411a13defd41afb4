//! stereosr: configuration and test-harness surface for stereo image
//! super-resolution.
//!
//! The crate owns the YAML test configuration used to evaluate a
//! pre-trained stereo super-resolution transformer on the standard
//! benchmarks (KITTI2012, KITTI2015, Middlebury, Flickr1024):
//!
//! - [`config::schema`] — the serde data model for the document;
//! - [`config`] — loading, validation, and template generation;
//! - [`registry`] — resolution of the named model / architecture /
//!   dataset / metric implementations the document references;
//! - [`losses`] — the restoration loss library (L1, MSE, Charbonnier,
//!   weighted TV) shared with the training side;
//! - [`cli`] — the `stereosr` command-line surface.
//!
//! # Example
//!
//! ```no_run
//! use stereosr::config::load_config;
//!
//! let spec = load_config("configs/test_stereosr_hat_x4.yml")?;
//! println!("{} datasets", spec.datasets.len());
//! # Ok::<(), stereosr::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod losses;
pub mod registry;

pub use error::{Error, Result};

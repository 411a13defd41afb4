//! Named-implementation registries
//!
//! Every `type` field in the test configuration is a string that must
//! resolve to a registered implementation in the external toolbox. This
//! module models that contract: a [`Registry`] maps names to entries,
//! and [`Registries::builtin`] carries the implementations the shipped
//! configurations reference.

use std::collections::BTreeMap;

/// Registry lookup and registration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unregistered {kind} type: '{name}' (registered: {known})")]
    Unregistered {
        kind: &'static str,
        name: String,
        known: String,
    },

    #[error("Duplicate {kind} registration: '{name}'")]
    Duplicate { kind: &'static str, name: String },
}

/// Human-readable summary attached to a registered implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub summary: &'static str,
}

/// Name-keyed registry with deterministic iteration order
#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: &'static str,
    entries: BTreeMap<String, T>,
}

impl<T> Registry<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// What this registry resolves ("model", "architecture", ...)
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Register an entry under a unique name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        entry: T,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate {
                kind: self.kind,
                name,
            });
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Resolve a name, failing with the list of registered names
    pub fn get(&self, name: &str) -> Result<&T, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::Unregistered {
                kind: self.kind,
                name: name.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// (name, entry) pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four registries a test configuration resolves against
#[derive(Debug, Clone)]
pub struct Registries {
    pub models: Registry<Descriptor>,
    pub archs: Registry<Descriptor>,
    pub datasets: Registry<Descriptor>,
    pub metrics: Registry<Descriptor>,
}

impl Registries {
    /// Empty registries, for callers that register their own entries
    pub fn empty() -> Self {
        Self {
            models: Registry::new("model"),
            archs: Registry::new("architecture"),
            datasets: Registry::new("dataset"),
            metrics: Registry::new("metric"),
        }
    }

    /// Registries pre-populated with the built-in implementations
    pub fn builtin() -> Self {
        let mut r = Self::empty();

        // Built-in names never collide, so registration cannot fail.
        let _ = r.models.register(
            "StereoSRModel",
            Descriptor {
                summary: "stereo pair inference and per-dataset metric reporting",
            },
        );

        let _ = r.archs.register(
            "ASteISRHAT",
            Descriptor {
                summary: "hybrid attention transformer adapted to stereo pairs",
            },
        );

        let _ = r.datasets.register(
            "TestPairedStereoImageDataset",
            Descriptor {
                summary: "full-image paired stereo test set read from gt/lq roots",
            },
        );
        let _ = r.datasets.register(
            "PairedStereoImageDataset",
            Descriptor {
                summary: "patch-cropped paired stereo training set",
            },
        );

        let _ = r.metrics.register(
            "calculate_psnr",
            Descriptor {
                summary: "peak signal-to-noise ratio over the concatenated pair",
            },
        );
        let _ = r.metrics.register(
            "calculate_psnr_left",
            Descriptor {
                summary: "PSNR over the left view only",
            },
        );
        let _ = r.metrics.register(
            "calculate_skimage_ssim",
            Descriptor {
                summary: "structural similarity over the concatenated pair",
            },
        );
        let _ = r.metrics.register(
            "calculate_skimage_ssim_left",
            Descriptor {
                summary: "SSIM over the left view only",
            },
        );

        r
    }
}

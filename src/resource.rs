//! Ship resource: generates a name once and keeps it as opaque state.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SEPARATOR;
use crate::error::Error;
use crate::names::{NameGenerator, RandomSource};

/// Desired configuration of a ship resource.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShipPlan {
    #[serde(default)]
    pub keepers: BTreeMap<String, String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for ShipPlan {
    fn default() -> Self {
        Self {
            keepers: BTreeMap::new(),
            prefix: None,
            separator: default_separator(),
        }
    }
}

/// Stored result of creating a ship resource. `id` is the generated name.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShipState {
    pub id: String,
    #[serde(default)]
    pub keepers: BTreeMap<String, String>,
    #[serde(default)]
    pub prefix: Option<String>,
    pub separator: String,
}

impl ShipState {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(Error::from)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

pub struct ShipResource<'a> {
    generator: &'a NameGenerator,
}

impl<'a> ShipResource<'a> {
    pub fn new(generator: &'a NameGenerator) -> Self {
        Self { generator }
    }

    pub fn create<S: RandomSource>(&self, plan: ShipPlan, source: S) -> Result<ShipState, Error> {
        // An empty prefix is recorded as absent.
        let prefix = plan.prefix.filter(|p| !p.is_empty());
        let id = self
            .generator
            .generate_with_prefix(source, prefix.as_deref(), &plan.separator)?;

        log::info!("Created ship resource {}", id);

        Ok(ShipState {
            id,
            keepers: plan.keepers,
            prefix,
            separator: plan.separator,
        })
    }

    pub fn read(&self, state: ShipState) -> ShipState {
        state
    }

    /// Copies the plan onto the state. The name itself never changes here.
    pub fn update(&self, state: ShipState, plan: ShipPlan) -> ShipState {
        ShipState {
            id: state.id,
            keepers: plan.keepers,
            prefix: plan.prefix.filter(|p| !p.is_empty()),
            separator: plan.separator,
        }
    }
}

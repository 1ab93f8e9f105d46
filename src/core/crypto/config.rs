/*!
Configuration for the public key layer.

This module provides the settings shared by the key backends and the
Diffie-Hellman adapters: the size of the fingerprint cache and the group
mapping of the trusted key manager.
*/

use std::collections::BTreeMap;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::crypto::fingerprint::DEFAULT_CAPACITY;
use crate::core::crypto::types::DhGroup;
use crate::core::error::{Error, Result};

/// Settings of the trusted key manager Diffie-Hellman backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct TkmConfig {
    /// Key manager DH algorithm identifier per IKE group
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub groups: BTreeMap<DhGroup, u64>,
}

impl TkmConfig {
    /// Create an empty configuration (no group supported)
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an IKE group to a key manager DH identifier
    pub fn with_group(mut self, group: DhGroup, dh_id: u64) -> Self {
        self.groups.insert(group, dh_id);
        self
    }

    /// Key manager identifier of a group, if the group is supported
    pub fn dh_id(&self, group: DhGroup) -> Option<u64> {
        self.groups.get(&group).copied()
    }

    /// Groups the key manager is configured for
    pub fn supported_groups(&self) -> impl Iterator<Item = DhGroup> + '_ {
        self.groups.keys().copied()
    }
}

/// Configuration of a crypto context
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct CryptoConfig {
    /// Maximum number of cached fingerprints, at least twice the peak
    /// number of live keys for every fingerprint to stay cached
    pub fingerprint_cache_capacity: usize,
    /// Trusted key manager settings
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub tkm: TkmConfig,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            fingerprint_cache_capacity: DEFAULT_CAPACITY,
            tkm: TkmConfig::default(),
        }
    }
}

impl CryptoConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fingerprint cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.fingerprint_cache_capacity = capacity;
        self
    }

    /// Set the trusted key manager settings
    pub fn with_tkm(mut self, tkm: TkmConfig) -> Self {
        self.tkm = tkm;
        self
    }

    /// Configuration for a gateway terminating many tunnels
    pub fn gateway() -> Self {
        Self::default().with_cache_capacity(16 * DEFAULT_CAPACITY)
    }

    /// Configuration for a resource-constrained endpoint
    pub fn lightweight() -> Self {
        Self::default().with_cache_capacity(64)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.fingerprint_cache_capacity == 0 {
            return Err(Error::Config("fingerprint cache capacity must be non-zero".into()));
        }
        // The key manager identifies algorithms by non-zero ids.
        if let Some((group, _)) = self.tkm.groups.iter().find(|(_, id)| **id == 0) {
            return Err(Error::Config(format!("invalid key manager id 0 for group {}", group)));
        }
        Ok(())
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("JSON deserialization error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::Internal(format!("JSON serialization error: {}", e)))
    }
}

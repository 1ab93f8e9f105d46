/*!
Builder loading ECDSA public keys.
*/

use std::mem;

use tracing::debug;

use crate::core::crypto::context::CryptoContext;
use crate::core::crypto::key::SharedPublicKey;
use crate::core::crypto::traits::builder::Builder;
use crate::core::crypto::types::{BuilderPart, KeyType};

use super::public_key::EcPublicKey;

/// Builder trait object producing public keys
pub type PublicKeyBuilder = Box<dyn Builder<Output = SharedPublicKey>>;

/// Construction state
#[derive(Debug)]
enum BuilderState {
    /// No key loaded yet
    Empty,
    /// A key was loaded from the first part
    Built(EcPublicKey),
    /// Construction failed, nothing will be produced
    Cancelled,
}

/// Loads an `EcPublicKey` from a single `BlobAsn1Der` part
#[derive(Debug)]
pub struct EcPublicKeyBuilder {
    context: CryptoContext,
    state: BuilderState,
}

impl EcPublicKeyBuilder {
    /// Create a builder whose keys use `context`
    pub fn new(context: &CryptoContext) -> Self {
        Self {
            context: context.clone(),
            state: BuilderState::Empty,
        }
    }

    /// Whether the builder has been cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, BuilderState::Cancelled)
    }

    /// Whether a key has been loaded
    pub fn is_built(&self) -> bool {
        matches!(self.state, BuilderState::Built(_))
    }
}

impl Builder for EcPublicKeyBuilder {
    type Output = SharedPublicKey;

    fn add(&mut self, part: BuilderPart) {
        self.state = match (mem::replace(&mut self.state, BuilderState::Cancelled), part) {
            (BuilderState::Empty, BuilderPart::BlobAsn1Der(blob)) => {
                match EcPublicKey::load(&blob, &self.context) {
                    Ok(key) => BuilderState::Built(key),
                    Err(err) => {
                        debug!("loading EC public key failed: {}", err);
                        BuilderState::Cancelled
                    }
                }
            }
            (BuilderState::Empty, part) => {
                debug!("EC public key builder does not support part {:?}", part);
                BuilderState::Cancelled
            }
            (BuilderState::Built(key), part) => {
                debug!("EC public key already built, got additional part {:?}", part);
                drop(key);
                BuilderState::Cancelled
            }
            (BuilderState::Cancelled, _) => BuilderState::Cancelled,
        };
    }

    fn build(self: Box<Self>) -> Option<SharedPublicKey> {
        match self.state {
            BuilderState::Built(key) => Some(SharedPublicKey::new(key)),
            BuilderState::Empty | BuilderState::Cancelled => None,
        }
    }
}

/// Create a builder for `key_type`, `None` unless the type is ECDSA
pub fn ec_public_key_builder(key_type: KeyType, context: &CryptoContext) -> Option<PublicKeyBuilder> {
    if key_type != KeyType::Ecdsa {
        return None;
    }
    Some(Box::new(EcPublicKeyBuilder::new(context)))
}

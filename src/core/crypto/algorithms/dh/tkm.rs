/*!
Diffie-Hellman through a trusted key manager.

The exchange runs inside an external key manager; this adapter only holds
the key manager context id and forwards calls. Every call may block on
the key manager.
*/

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::crypto::config::TkmConfig;
use crate::core::crypto::traits::diffie_hellman::DiffieHellman;
use crate::core::crypto::types::DhGroup;
use crate::core::error::DhError;

/// Client interface of the trusted key manager
pub trait KeyManager: Send + Sync {
    /// Reserve a DH context id, `None` if all contexts are in use
    fn acquire_dh_context(&self) -> Option<u64>;

    /// Return a context id
    fn release_dh_context(&self, context_id: u64);

    /// Create a DH context for algorithm `dh_id`, returning our public value
    fn dh_create(&self, context_id: u64, dh_id: u64) -> Result<Vec<u8>, DhError>;

    /// Pass the peer's public value and derive the secret inside the key manager
    fn dh_generate_key(&self, context_id: u64, other_public_value: &[u8]) -> Result<(), DhError>;

    /// Export the shared secret, if the key manager allows it
    fn dh_shared_secret(&self, context_id: u64) -> Result<Vec<u8>, DhError>;

    /// Reset a context
    fn dh_reset(&self, context_id: u64) -> Result<(), DhError>;
}

/// DH exchange delegated to a `KeyManager`
pub struct TkmDiffieHellman {
    group: DhGroup,
    context_id: u64,
    public_value: Vec<u8>,
    peer_value_set: bool,
    key_manager: Arc<dyn KeyManager>,
}

impl TkmDiffieHellman {
    /// Start an exchange in the key manager.
    ///
    /// Fails with `UnsupportedGroup` if the group has no key manager id in
    /// `config`. Context exhaustion and a refused `dh_create` surface as
    /// `DhError::KeyManager`.
    pub fn try_create(
        group: DhGroup,
        config: &TkmConfig,
        key_manager: Arc<dyn KeyManager>,
    ) -> Result<Self, DhError> {
        let Some(dh_id) = config.dh_id(group) else {
            let err = DhError::UnsupportedGroup(group);
            debug!("key manager: {}", err);
            return Err(err);
        };
        let Some(context_id) = key_manager.acquire_dh_context() else {
            warn!("no free key manager DH context for group {}", group);
            return Err(DhError::key_manager("acquire_dh_context", "no free context"));
        };
        match key_manager.dh_create(context_id, dh_id) {
            Ok(public_value) => Ok(Self {
                group,
                context_id,
                public_value,
                peer_value_set: false,
                key_manager,
            }),
            Err(err) => {
                warn!("unable to create key manager DH context {}: {}", context_id, err);
                key_manager.release_dh_context(context_id);
                Err(err)
            }
        }
    }

    /// Start an exchange in the key manager, `None` on any failure
    pub fn create(
        group: DhGroup,
        config: &TkmConfig,
        key_manager: Arc<dyn KeyManager>,
    ) -> Option<Self> {
        Self::try_create(group, config, key_manager).ok()
    }

    /// Key manager context of this exchange
    pub fn context_id(&self) -> u64 {
        self.context_id
    }
}

impl DiffieHellman for TkmDiffieHellman {
    fn group(&self) -> DhGroup {
        self.group
    }

    fn set_other_public_value(&mut self, value: &[u8]) -> Result<(), DhError> {
        self.key_manager
            .dh_generate_key(self.context_id, value)
            .inspect_err(|err| warn!("key manager DH context {}: {}", self.context_id, err))?;
        self.peer_value_set = true;
        Ok(())
    }

    fn my_public_value(&self) -> Result<Vec<u8>, DhError> {
        Ok(self.public_value.clone())
    }

    fn shared_secret(&self) -> Result<Vec<u8>, DhError> {
        if !self.peer_value_set {
            return Err(DhError::PeerValueMissing);
        }
        self.key_manager.dh_shared_secret(self.context_id)
    }
}

impl Drop for TkmDiffieHellman {
    fn drop(&mut self) {
        if let Err(err) = self.key_manager.dh_reset(self.context_id) {
            warn!("failed to reset key manager DH context {}: {}", self.context_id, err);
        }
        self.key_manager.release_dh_context(self.context_id);
    }
}

impl fmt::Debug for TkmDiffieHellman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TkmDiffieHellman")
            .field("group", &self.group)
            .field("context_id", &self.context_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeKeyManager {
        free: Mutex<Vec<u64>>,
        in_use: Mutex<HashSet<u64>>,
        reset: Mutex<Vec<u64>>,
        fail_create: bool,
    }

    impl FakeKeyManager {
        fn with_contexts(ids: &[u64]) -> Self {
            Self {
                free: Mutex::new(ids.to_vec()),
                ..Default::default()
            }
        }
    }

    impl KeyManager for FakeKeyManager {
        fn acquire_dh_context(&self) -> Option<u64> {
            let id = self.free.lock().unwrap().pop()?;
            self.in_use.lock().unwrap().insert(id);
            Some(id)
        }

        fn release_dh_context(&self, context_id: u64) {
            if self.in_use.lock().unwrap().remove(&context_id) {
                self.free.lock().unwrap().push(context_id);
            }
        }

        fn dh_create(&self, context_id: u64, dh_id: u64) -> Result<Vec<u8>, DhError> {
            if self.fail_create {
                return Err(DhError::key_manager("dh_create", "refused"));
            }
            Ok(vec![context_id as u8, dh_id as u8])
        }

        fn dh_generate_key(&self, _context_id: u64, other: &[u8]) -> Result<(), DhError> {
            if other.is_empty() {
                return Err(DhError::InvalidPublicValue);
            }
            Ok(())
        }

        fn dh_shared_secret(&self, _context_id: u64) -> Result<Vec<u8>, DhError> {
            Err(DhError::SecretUnavailable)
        }

        fn dh_reset(&self, context_id: u64) -> Result<(), DhError> {
            self.reset.lock().unwrap().push(context_id);
            Ok(())
        }
    }

    fn config() -> TkmConfig {
        TkmConfig::new().with_group(DhGroup::Modp3072, 1)
    }

    #[test]
    fn test_create_and_drop() {
        let km = Arc::new(FakeKeyManager::with_contexts(&[5]));
        let dh = TkmDiffieHellman::create(DhGroup::Modp3072, &config(), km.clone()).unwrap();
        assert_eq!(dh.context_id(), 5);
        assert_eq!(dh.group(), DhGroup::Modp3072);
        assert_eq!(dh.my_public_value().unwrap(), vec![5, 1]);
        assert!(km.free.lock().unwrap().is_empty());

        drop(dh);
        assert_eq!(*km.reset.lock().unwrap(), vec![5]);
        assert_eq!(*km.free.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_unsupported_group() {
        let km = Arc::new(FakeKeyManager::with_contexts(&[1]));
        let err = TkmDiffieHellman::try_create(DhGroup::Ecp256, &config(), km.clone()).err();
        assert_eq!(err, Some(DhError::UnsupportedGroup(DhGroup::Ecp256)));
        assert!(TkmDiffieHellman::create(DhGroup::Ecp256, &config(), km.clone()).is_none());
        assert_eq!(*km.free.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_no_free_context() {
        let km = Arc::new(FakeKeyManager::with_contexts(&[]));
        match TkmDiffieHellman::try_create(DhGroup::Modp3072, &config(), km.clone()) {
            Err(DhError::KeyManager { request, .. }) => assert_eq!(request, "acquire_dh_context"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(TkmDiffieHellman::create(DhGroup::Modp3072, &config(), km).is_none());
    }

    #[test]
    fn test_failed_create_releases_context() {
        let km = Arc::new(FakeKeyManager {
            free: Mutex::new(vec![9]),
            fail_create: true,
            ..Default::default()
        });
        let err = TkmDiffieHellman::try_create(DhGroup::Modp3072, &config(), km.clone()).err();
        assert_eq!(err, Some(DhError::key_manager("dh_create", "refused")));
        assert_eq!(*km.free.lock().unwrap(), vec![9]);
        assert!(km.reset.lock().unwrap().is_empty());
    }

    #[test]
    fn test_exchange_delegates() {
        let km = Arc::new(FakeKeyManager::with_contexts(&[2]));
        let mut dh = TkmDiffieHellman::create(DhGroup::Modp3072, &config(), km).unwrap();
        assert_eq!(dh.shared_secret(), Err(DhError::PeerValueMissing));
        assert_eq!(dh.set_other_public_value(&[]), Err(DhError::InvalidPublicValue));
        dh.set_other_public_value(&[1, 2, 3]).unwrap();
        assert_eq!(dh.shared_secret(), Err(DhError::SecretUnavailable));
    }
}

use ike_pubkey::{
    create_diffie_hellman, register_diffie_hellman, CryptoRegistry, DhError, DhGroup,
    DiffieHellman, EcpDiffieHellman, KeyManager, TkmConfig, TkmDiffieHellman,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ----- Software ECP groups -----

#[test]
fn test_ecp_agreement() {
    for group in [DhGroup::Ecp256, DhGroup::Ecp384] {
        let mut initiator = create_diffie_hellman(group).unwrap();
        let mut responder = create_diffie_hellman(group).unwrap();

        let ke_i = initiator.my_public_value().unwrap();
        let ke_r = responder.my_public_value().unwrap();
        assert_ne!(ke_i, ke_r);

        responder.set_other_public_value(&ke_i).unwrap();
        initiator.set_other_public_value(&ke_r).unwrap();
        assert_eq!(initiator.shared_secret().unwrap(), responder.shared_secret().unwrap());
    }
}

#[test]
fn test_ecp_public_value_has_no_point_prefix() {
    let dh = EcpDiffieHellman::create(DhGroup::Ecp256).unwrap();
    let value = dh.my_public_value().unwrap();
    assert_eq!(value.len(), 64);

    // The value must be accepted by a peer only as x || y
    let mut prefixed = vec![0x04];
    prefixed.extend_from_slice(&value);
    let mut peer = EcpDiffieHellman::create(DhGroup::Ecp256).unwrap();
    assert_eq!(peer.set_other_public_value(&prefixed), Err(DhError::InvalidPublicValue));
    peer.set_other_public_value(&value).unwrap();
}

#[test]
fn test_mismatched_group_value_rejected() {
    let p384 = EcpDiffieHellman::create(DhGroup::Ecp384).unwrap();
    let mut p256 = EcpDiffieHellman::create(DhGroup::Ecp256).unwrap();
    let value = p384.my_public_value().unwrap();
    assert_eq!(p256.set_other_public_value(&value), Err(DhError::InvalidPublicValue));
}

#[test]
fn test_unsupported_groups() {
    for group in [DhGroup::Modp1024, DhGroup::Modp2048, DhGroup::Modp4096, DhGroup::Ecp521] {
        assert!(create_diffie_hellman(group).is_none(), "{}", group);
        assert_eq!(EcpDiffieHellman::try_create(group).err(), Some(DhError::UnsupportedGroup(group)));
    }
}

// ----- Trusted key manager -----

/// Key manager performing a toy exchange, tracking context usage
struct MockKeyManager {
    next_context: Mutex<u64>,
    contexts: Mutex<HashMap<u64, Option<Vec<u8>>>>,
    released: Mutex<Vec<u64>>,
    reset: Mutex<Vec<u64>>,
    max_contexts: usize,
}

impl MockKeyManager {
    fn new(max_contexts: usize) -> Self {
        Self {
            next_context: Mutex::new(1),
            contexts: Mutex::new(HashMap::new()),
            released: Mutex::new(Vec::new()),
            reset: Mutex::new(Vec::new()),
            max_contexts,
        }
    }

    fn active(&self) -> usize {
        self.contexts.lock().unwrap().len()
    }
}

impl KeyManager for MockKeyManager {
    fn acquire_dh_context(&self) -> Option<u64> {
        let mut contexts = self.contexts.lock().unwrap();
        if contexts.len() >= self.max_contexts {
            return None;
        }
        let mut next = self.next_context.lock().unwrap();
        let id = *next;
        *next += 1;
        contexts.insert(id, None);
        Some(id)
    }

    fn release_dh_context(&self, context_id: u64) {
        self.contexts.lock().unwrap().remove(&context_id);
        self.released.lock().unwrap().push(context_id);
    }

    fn dh_create(&self, context_id: u64, dh_id: u64) -> Result<Vec<u8>, DhError> {
        if dh_id == 0xdead {
            return Err(DhError::key_manager("dh_create", "unknown algorithm"));
        }
        Ok(vec![context_id as u8; 8])
    }

    fn dh_generate_key(&self, context_id: u64, other: &[u8]) -> Result<(), DhError> {
        let mut contexts = self.contexts.lock().unwrap();
        let slot = contexts
            .get_mut(&context_id)
            .ok_or_else(|| DhError::key_manager("dh_generate_key", "no such context"))?;
        let own = context_id as u8;
        *slot = Some(other.iter().map(|b| b ^ own).collect());
        Ok(())
    }

    fn dh_shared_secret(&self, context_id: u64) -> Result<Vec<u8>, DhError> {
        self.contexts
            .lock()
            .unwrap()
            .get(&context_id)
            .cloned()
            .flatten()
            .ok_or(DhError::SecretUnavailable)
    }

    fn dh_reset(&self, context_id: u64) -> Result<(), DhError> {
        self.reset.lock().unwrap().push(context_id);
        Ok(())
    }
}

fn tkm_config() -> TkmConfig {
    TkmConfig::new()
        .with_group(DhGroup::Modp2048, 1)
        .with_group(DhGroup::Modp3072, 2)
        .with_group(DhGroup::Modp4096, 0xdead)
}

#[test]
fn test_tkm_exchange() {
    let km = Arc::new(MockKeyManager::new(4));
    let mut dh = TkmDiffieHellman::create(DhGroup::Modp2048, &tkm_config(), km.clone()).unwrap();
    let context_id = dh.context_id();

    assert_eq!(dh.group(), DhGroup::Modp2048);
    assert_eq!(dh.my_public_value().unwrap(), vec![context_id as u8; 8]);
    assert_eq!(dh.shared_secret(), Err(DhError::PeerValueMissing));

    dh.set_other_public_value(&[0xf0; 4]).unwrap();
    assert_eq!(dh.shared_secret().unwrap(), vec![0xf0 ^ context_id as u8; 4]);
    assert_eq!(km.active(), 1);

    drop(dh);
    assert_eq!(km.active(), 0);
    assert_eq!(*km.reset.lock().unwrap(), vec![context_id]);
    assert_eq!(*km.released.lock().unwrap(), vec![context_id]);
}

#[test]
fn test_tkm_unconfigured_group() {
    let km = Arc::new(MockKeyManager::new(4));
    assert!(TkmDiffieHellman::create(DhGroup::Ecp256, &tkm_config(), km.clone()).is_none());
    assert!(TkmDiffieHellman::create(DhGroup::Modp1024, &TkmConfig::new(), km.clone()).is_none());
    assert_eq!(
        TkmDiffieHellman::try_create(DhGroup::Modp1024, &TkmConfig::new(), km.clone()).err(),
        Some(DhError::UnsupportedGroup(DhGroup::Modp1024))
    );
    assert_eq!(km.active(), 0);
    assert!(km.released.lock().unwrap().is_empty());
}

#[test]
fn test_tkm_create_failure_releases_context() {
    let km = Arc::new(MockKeyManager::new(4));
    assert!(TkmDiffieHellman::create(DhGroup::Modp4096, &tkm_config(), km.clone()).is_none());
    assert_eq!(km.active(), 0);
    assert_eq!(km.released.lock().unwrap().len(), 1);
    assert!(km.reset.lock().unwrap().is_empty());
}

#[test]
fn test_tkm_context_exhaustion() {
    let km = Arc::new(MockKeyManager::new(2));
    let config = tkm_config();
    let first = TkmDiffieHellman::create(DhGroup::Modp2048, &config, km.clone()).unwrap();
    let second = TkmDiffieHellman::create(DhGroup::Modp3072, &config, km.clone()).unwrap();
    assert_ne!(first.context_id(), second.context_id());
    assert!(TkmDiffieHellman::create(DhGroup::Modp2048, &config, km.clone()).is_none());

    drop(first);
    assert!(TkmDiffieHellman::create(DhGroup::Modp2048, &config, km.clone()).is_some());
}

#[test]
fn test_tkm_through_registry() {
    let km = Arc::new(MockKeyManager::new(8));
    let config = tkm_config();

    let mut registry = CryptoRegistry::with_defaults();
    let backend = Arc::clone(&km);
    registry.register_diffie_hellman(
        "tkm",
        Arc::new(move |group| {
            TkmDiffieHellman::create(group, &config, backend.clone())
                .map(|dh| Box::new(dh) as Box<dyn DiffieHellman>)
        }),
    );

    // Software backend registered first keeps ECP groups
    let ecp = registry.create_diffie_hellman(DhGroup::Ecp256).unwrap();
    assert_eq!(ecp.my_public_value().unwrap().len(), 64);
    assert_eq!(km.active(), 0);

    let modp = registry.create_diffie_hellman(DhGroup::Modp3072).unwrap();
    assert_eq!(modp.group(), DhGroup::Modp3072);
    assert_eq!(km.active(), 1);
    drop(modp);
    assert_eq!(km.active(), 0);

    assert!(registry.create_diffie_hellman(DhGroup::Modp1536).is_none());
}

#[test]
fn test_global_registration() {
    let km = Arc::new(MockKeyManager::new(8));
    let config = TkmConfig::new().with_group(DhGroup::Modp1536, 7);
    let backend = Arc::clone(&km);
    register_diffie_hellman(
        "tkm-global",
        Arc::new(move |group| {
            TkmDiffieHellman::create(group, &config, backend.clone())
                .map(|dh| Box::new(dh) as Box<dyn DiffieHellman>)
        }),
    );

    let dh = create_diffie_hellman(DhGroup::Modp1536).unwrap();
    assert_eq!(dh.group(), DhGroup::Modp1536);
    assert_eq!(km.active(), 1);
}

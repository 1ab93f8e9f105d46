/*!
Diffie-Hellman implementations.

`EcpDiffieHellman` runs the exchange in software, `TkmDiffieHellman`
delegates it to an external key manager.
*/

mod ecp;
mod tkm;

pub use ecp::EcpDiffieHellman;
pub use tkm::{KeyManager, TkmDiffieHellman};

use crate::core::crypto::traits::diffie_hellman::DiffieHellman;
use crate::core::crypto::types::DhGroup;

/// Groups the software implementation can create
pub const SOFTWARE_GROUPS: &[DhGroup] = &[DhGroup::Ecp256, DhGroup::Ecp384];

/// Create a software DH exchange for `group`
pub fn create_diffie_hellman(group: DhGroup) -> Option<Box<dyn DiffieHellman>> {
    EcpDiffieHellman::create(group).map(|dh| Box::new(dh) as Box<dyn DiffieHellman>)
}

/*!
Traits for Diffie-Hellman key exchange.
*/

use crate::core::error::DhError;
use crate::core::crypto::types::DhGroup;

/// Trait for a Diffie-Hellman exchange in a fixed group
pub trait DiffieHellman: Send {
    /// Get the group of this exchange
    fn group(&self) -> DhGroup;

    /// Set the public value received from the peer
    fn set_other_public_value(&mut self, value: &[u8]) -> Result<(), DhError>;

    /// Get our own public value to send to the peer
    fn my_public_value(&self) -> Result<Vec<u8>, DhError>;

    /// Get the shared secret, available once the peer value is set
    fn shared_secret(&self) -> Result<Vec<u8>, DhError>;
}

/*!
Registry for key builders and Diffie-Hellman backends.

This module provides a central registry so callers can create keys and
exchanges without naming a backend.
*/

pub mod manager;

// Re-export registry manager functions
pub use manager::{
    create_diffie_hellman,
    create_public_key,
    create_public_key_with,
    get_registry,
    list_diffie_hellman,
    list_key_builders,
    register_diffie_hellman,
    register_key_builder,
    BuilderConstructor,
    CryptoRegistry,
    DhConstructor,
};

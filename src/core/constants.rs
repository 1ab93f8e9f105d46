/*!
Constants for the public key layer.
*/

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size constants
pub mod sizes {
    /// NIST P-256 constants
    pub mod p256 {
        /// Field element size in bytes
        pub const FIELD_BYTES: usize = 32;

        /// Concatenated `r || s` signature size in bytes
        pub const SIGNATURE_BYTES: usize = 2 * FIELD_BYTES;

        /// ECP public value (`x || y`) size in bytes
        pub const PUBLIC_VALUE_BYTES: usize = 2 * FIELD_BYTES;
    }

    /// NIST P-384 constants
    pub mod p384 {
        /// Field element size in bytes
        pub const FIELD_BYTES: usize = 48;

        /// Concatenated `r || s` signature size in bytes
        pub const SIGNATURE_BYTES: usize = 2 * FIELD_BYTES;

        /// ECP public value (`x || y`) size in bytes
        pub const PUBLIC_VALUE_BYTES: usize = 2 * FIELD_BYTES;
    }

    /// SHA-1 fingerprint size in bytes
    pub const FINGERPRINT_BYTES: usize = 20;
}

/*!
Builder inputs and key identities.
*/

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// One unit of input to a key builder
#[derive(Clone, PartialEq, Eq)]
pub enum BuilderPart {
    /// ASN.1 DER encoded blob (SubjectPublicKeyInfo for public keys)
    BlobAsn1Der(Vec<u8>),
    /// PEM armored blob
    BlobPem(String),
    /// Raw SEC1 encoded EC point
    EcPoint(Vec<u8>),
}

impl BuilderPart {
    /// Get the name of the part tag as a string
    pub fn name(&self) -> &'static str {
        match self {
            BuilderPart::BlobAsn1Der(_) => "BLOB_ASN1_DER",
            BuilderPart::BlobPem(_) => "BLOB_PEM",
            BuilderPart::EcPoint(_) => "EC_POINT",
        }
    }
}

// Blob contents are left out of debug output.
impl fmt::Debug for BuilderPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = match self {
            BuilderPart::BlobAsn1Der(blob) | BuilderPart::EcPoint(blob) => blob.len(),
            BuilderPart::BlobPem(pem) => pem.len(),
        };
        write!(f, "{}({} bytes)", self.name(), len)
    }
}

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Identity of a live key object, used to key the fingerprint cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyIdentity(u64);

impl KeyIdentity {
    /// Allocate a fresh identity
    pub fn next() -> Self {
        KeyIdentity(NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw identity value
    pub const fn from_raw(raw: u64) -> Self {
        KeyIdentity(raw)
    }

    /// The raw identity value
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

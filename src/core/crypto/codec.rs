/*!
Encoding helpers shared by the EC backends.

Signatures arrive either as a DER `ECDSA-Sig-Value` or as the fixed-width
concatenation `r || s`; IKE ECP public values are `x || y` without the
SEC1 point prefix.
*/

/// SEC1 tag of an uncompressed point
pub const SEC1_UNCOMPRESSED: u8 = 0x04;

/// Skip any leading zero bytes
pub fn strip_leading_zeros(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|&b| b != 0x00).unwrap_or(data.len());
    &data[start..]
}

/// Split a concatenated `r || s` signature into two integers, each
/// left-padded to `field_len` bytes.
///
/// The buffer is split in half; odd or empty buffers and halves wider than
/// `field_len` are rejected.
pub fn split_concatenated(signature: &[u8], field_len: usize) -> Option<(Vec<u8>, Vec<u8>)> {
    if signature.is_empty() || signature.len() % 2 != 0 {
        return None;
    }
    let (r, s) = signature.split_at(signature.len() / 2);
    Some((left_pad(r, field_len)?, left_pad(s, field_len)?))
}

/// Concatenate two integers into a fixed-width `r || s` buffer
pub fn concatenate(r: &[u8], s: &[u8], field_len: usize) -> Option<Vec<u8>> {
    let mut out = left_pad(strip_leading_zeros(r), field_len)?;
    out.extend_from_slice(&left_pad(strip_leading_zeros(s), field_len)?);
    Some(out)
}

/// Left-pad a big-endian integer to `len` bytes
pub fn left_pad(value: &[u8], len: usize) -> Option<Vec<u8>> {
    if value.len() > len {
        return None;
    }
    let mut out = vec![0u8; len - value.len()];
    out.extend_from_slice(value);
    Some(out)
}

/// Convert an IKE ECP public value (`x || y`) into a SEC1 uncompressed point
pub fn ecp_public_value_to_sec1(value: &[u8]) -> Vec<u8> {
    let mut point = Vec::with_capacity(value.len() + 1);
    point.push(SEC1_UNCOMPRESSED);
    point.extend_from_slice(value);
    point
}

/// Convert a SEC1 uncompressed point into an IKE ECP public value
pub fn sec1_to_ecp_public_value(point: &[u8]) -> Option<Vec<u8>> {
    match point.split_first() {
        Some((&SEC1_UNCOMPRESSED, coordinates)) if !coordinates.is_empty() => {
            Some(coordinates.to_vec())
        }
        _ => None,
    }
}

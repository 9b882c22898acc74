//! Deterministic GUID generation for solution entries
//!
//! Solution files cross-reference entries by GUID. Every GUID written by this
//! crate is derived from a string (normally a path relative to the scanned
//! root), so an unchanged tree always produces the same document.

use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Compute the GUID for an arbitrary string
///
/// GUID = first 16 bytes of SHA-1(utf8(input)), laid out with the mixed-endian
/// field order of the Windows GUID byte constructor, braced and uppercase.
pub fn identifier(input: &str) -> String {
    let digest = Sha1::digest(input.as_bytes());

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);

    let guid = Uuid::from_bytes_le(bytes);
    let mut buffer = Uuid::encode_buffer();
    guid.braced().encode_upper(&mut buffer).to_string()
}

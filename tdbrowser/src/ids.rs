//! Station id codec
//!
//! The downstream menu protocol addresses stations by a compact id
//! instead of the provider UUID: the 16 raw UUID bytes, URL-safe
//! base64 encoded, behind a short prefix. Encoding and decoding are
//! exact inverses. Pure string/byte manipulation, no I/O.

use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use uuid::Uuid;

/// Separator between the prefix and the encoded UUID
pub const ID_SEPARATOR: char = '-';

/// Encode a provider UUID into a prefixed station id
///
/// # Example
///
/// ```
/// use tdbrowser::ids::encode_station_id;
/// use uuid::Uuid;
///
/// let uuid = Uuid::parse_str("9617a958-0601-11e8-ae97-52543be04c81").unwrap();
/// let id = encode_station_id(&uuid, "RB");
/// assert!(id.starts_with("RB-"));
/// ```
pub fn encode_station_id(uuid: &Uuid, prefix: &str) -> String {
    format!(
        "{}{}{}",
        prefix,
        ID_SEPARATOR,
        URL_SAFE.encode(uuid.as_bytes())
    )
}

/// Decode a prefixed station id back into the provider UUID
///
/// The prefix itself is not interpreted; everything after the first
/// separator must be the URL-safe base64 encoding of exactly 16 bytes.
pub fn decode_station_id(id: &str) -> Result<Uuid> {
    let (_, encoded) = id
        .split_once(ID_SEPARATOR)
        .ok_or_else(|| Error::InvalidStationId(id.to_string()))?;

    let bytes = URL_SAFE
        .decode(encoded)
        .map_err(|_| Error::InvalidStationId(id.to_string()))?;

    let bytes: [u8; 16] = bytes
        .try_into()
        .map_err(|_| Error::InvalidStationId(id.to_string()))?;

    Ok(Uuid::from_bytes(bytes))
}

//! Record encoding for [`ValueSet`]s
//!
//! Two layouts are supported:
//!
//! ```text
//! LengthPrefixed (default):
//! +---------+-------------+------------------+-----------+-----
//! | ver: u8 | count: u32  | len: u32 | bytes | len: u32  | ...
//! +---------+-------------+------------------+-----------+-----
//!   all integers little-endian, members UTF-8
//!
//! Delimited (legacy):
//!   members joined with ','
//! ```
//!
//! The delimited layout cannot represent a member containing `,`; encoding
//! such a member is refused instead of silently splitting it on read.

use crate::error::{Error, Result};
use crate::value_set::ValueSet;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read};

/// Separator of the delimited layout
pub const DELIMITER: char = ',';

/// Format version byte of the length-prefixed layout
pub const LENGTH_PREFIXED_VERSION: u8 = 1;

/// How a [`ValueSet`] is laid out in a store record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCodec {
    /// Versioned, length-prefixed member list
    #[default]
    LengthPrefixed,
    /// Comma-joined members, compatible with records written by older
    /// deployments
    Delimited,
}

impl ValueCodec {
    /// Encode a set into record bytes
    pub fn encode(&self, values: &ValueSet) -> Result<Vec<u8>> {
        match self {
            ValueCodec::LengthPrefixed => encode_length_prefixed(values),
            ValueCodec::Delimited => encode_delimited(values),
        }
    }

    /// Decode record bytes. `key` is only used for error context.
    pub fn decode(&self, key: &str, bytes: &[u8]) -> Result<ValueSet> {
        match self {
            ValueCodec::LengthPrefixed => decode_length_prefixed(bytes)
                .map_err(|message| Error::Codec {
                    key: key.to_string(),
                    message,
                }),
            ValueCodec::Delimited => decode_delimited(bytes).map_err(|message| Error::Codec {
                key: key.to_string(),
                message,
            }),
        }
    }

    /// Check a member before it is queued for writing
    pub fn validate(&self, value: &str) -> Result<()> {
        match self {
            ValueCodec::LengthPrefixed => {
                if value.len() > u32::MAX as usize {
                    return Err(Error::InvalidValue {
                        value: value.chars().take(32).collect(),
                        reason: "member longer than u32::MAX bytes".to_string(),
                    });
                }
                Ok(())
            }
            ValueCodec::Delimited => {
                if value.contains(DELIMITER) {
                    return Err(Error::InvalidValue {
                        value: value.to_string(),
                        reason: format!("contains delimiter '{}'", DELIMITER),
                    });
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for ValueCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueCodec::LengthPrefixed => f.write_str("length_prefixed"),
            ValueCodec::Delimited => f.write_str("delimited"),
        }
    }
}

fn encode_length_prefixed(values: &ValueSet) -> Result<Vec<u8>> {
    let payload: usize = values.iter().map(|v| 4 + v.len()).sum();
    let mut buf = Vec::with_capacity(1 + 4 + payload);

    let count = u32::try_from(values.len()).map_err(|_| Error::InvalidValue {
        value: String::new(),
        reason: format!("{} members exceed u32::MAX", values.len()),
    })?;

    // Writes into a Vec cannot fail
    buf.write_u8(LENGTH_PREFIXED_VERSION)?;
    buf.write_u32::<LittleEndian>(count)?;
    for value in values.iter() {
        ValueCodec::LengthPrefixed.validate(value)?;
        buf.write_u32::<LittleEndian>(value.len() as u32)?;
        buf.extend_from_slice(value.as_bytes());
    }
    Ok(buf)
}

fn decode_length_prefixed(bytes: &[u8]) -> std::result::Result<ValueSet, String> {
    let mut cursor = Cursor::new(bytes);

    let version = cursor
        .read_u8()
        .map_err(|_| "empty record".to_string())?;
    if version != LENGTH_PREFIXED_VERSION {
        return Err(format!("unknown format version {}", version));
    }

    let count = cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| "truncated member count".to_string())?;

    // Bound the allocation by what the record can actually hold
    let remaining = bytes.len().saturating_sub(cursor.position() as usize);
    let mut values = Vec::with_capacity((count as usize).min(remaining / 4));

    for i in 0..count {
        let len = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| format!("truncated length of member {}", i))?;
        let available = bytes.len() - cursor.position() as usize;
        if len as usize > available {
            return Err(format!(
                "truncated member {}: expected {} bytes, {} left",
                i, len, available
            ));
        }
        let mut raw = vec![0u8; len as usize];
        cursor
            .read_exact(&mut raw)
            .map_err(|_| format!("truncated member {}: expected {} bytes", i, len))?;
        let value =
            String::from_utf8(raw).map_err(|e| format!("member {} is not UTF-8: {}", i, e))?;
        values.push(value);
    }

    if (cursor.position() as usize) != bytes.len() {
        return Err(format!(
            "{} trailing bytes after {} members",
            bytes.len() - cursor.position() as usize,
            count
        ));
    }

    Ok(ValueSet::from_stored(values))
}

fn encode_delimited(values: &ValueSet) -> Result<Vec<u8>> {
    for value in values.iter() {
        ValueCodec::Delimited.validate(value)?;
    }
    let joined = values.as_slice().join(",");
    Ok(joined.into_bytes())
}

fn decode_delimited(bytes: &[u8]) -> std::result::Result<ValueSet, String> {
    let s = std::str::from_utf8(bytes).map_err(|e| format!("record is not UTF-8: {}", e))?;
    Ok(ValueSet::from_stored(
        s.split(DELIMITER).map(str::to_string).collect(),
    ))
}

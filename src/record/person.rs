//! Person record

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;

use crate::error::Result;

use super::{FieldValue, NAME_LEN, PERSON_LAYOUT};

/// One person record: a numeric id and two fixed-capacity names
///
/// Names are stored exactly as they will appear on disk. Inputs longer than
/// `NAME_LEN` bytes are truncated; shorter inputs are zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: u32,
    first_name: [u8; NAME_LEN],
    last_name: [u8; NAME_LEN],
}

impl Person {
    pub fn new(id: u32, first_name: impl AsRef<[u8]>, last_name: impl AsRef<[u8]>) -> Self {
        Self {
            id,
            first_name: fixed_name(first_name.as_ref()),
            last_name: fixed_name(last_name.as_ref()),
        }
    }

    /// The three records written when no other list is configured
    pub fn defaults() -> [Person; 3] {
        [
            Person::new(1, "rohan", "sharma"),
            Person::new(2, "mahendra", "dhoni"),
            Person::new(3, "Sonny", "Tzu"),
        ]
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first_name(&self) -> &[u8; NAME_LEN] {
        &self.first_name
    }

    pub fn last_name(&self) -> &[u8; NAME_LEN] {
        &self.last_name
    }

    /// First name up to the first zero byte
    pub fn first_name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(until_nul(&self.first_name))
    }

    /// Last name up to the first zero byte
    pub fn last_name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(until_nul(&self.last_name))
    }

    /// Encode to the on-disk image (`RECORD_SIZE` bytes, id big-endian)
    pub fn encode(&self) -> Result<Bytes> {
        PERSON_LAYOUT.pack(&[
            FieldValue::U32(self.id),
            FieldValue::Bytes(&self.first_name),
            FieldValue::Bytes(&self.last_name),
        ])
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {}",
            self.id,
            self.first_name_lossy(),
            self.last_name_lossy()
        )
    }
}

fn fixed_name(src: &[u8]) -> [u8; NAME_LEN] {
    let mut buf = [0u8; NAME_LEN];
    let len = src.len().min(NAME_LEN);
    buf[..len].copy_from_slice(&src[..len]);
    buf
}

fn until_nul(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

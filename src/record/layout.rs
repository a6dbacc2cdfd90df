//! Record Layout
//!
//! An ordered list of fixed-width field descriptors and the packer that
//! turns field values into the exact on-disk byte image.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{RecordError, Result};

/// How a field's value is turned into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    /// 32-bit unsigned integer in network (big-endian) byte order
    U32BigEndian,

    /// Raw bytes, truncated to the field width and zero-padded
    FixedBytes,
}

/// Descriptor for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub encoding: FieldEncoding,
}

impl FieldSpec {
    pub const fn new(name: &'static str, width: usize, encoding: FieldEncoding) -> Self {
        Self { name, width, encoding }
    }
}

/// A value to be packed into one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    U32(u32),
    Bytes(&'a [u8]),
}

impl FieldValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::U32(_) => "u32",
            FieldValue::Bytes(_) => "bytes",
        }
    }
}

/// Fixed record layout: fields are laid out back to back in declaration order
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    fields: &'static [FieldSpec],
}

impl RecordLayout {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Total encoded size in bytes (sum of field widths, no padding)
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width;
            i += 1;
        }
        total
    }

    /// Field descriptors in on-disk order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Byte offset of the named field, if it exists
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.width;
        }
        None
    }

    /// Pack one value per field into a buffer of exactly `size()` bytes
    ///
    /// Values must be given in field order and match each field's encoding.
    pub fn pack(&self, values: &[FieldValue<'_>]) -> Result<Bytes> {
        if values.len() != self.fields.len() {
            return Err(RecordError::Layout(format!(
                "expected {} field values, got {}",
                self.fields.len(),
                values.len()
            )));
        }

        let mut buf = BytesMut::with_capacity(self.size());

        for (field, value) in self.fields.iter().zip(values) {
            match (field.encoding, value) {
                (FieldEncoding::U32BigEndian, FieldValue::U32(v)) => {
                    if field.width != 4 {
                        return Err(RecordError::Layout(format!(
                            "field `{}`: u32 needs width 4, declared {}",
                            field.name, field.width
                        )));
                    }
                    buf.put_u32(*v);
                }
                (FieldEncoding::FixedBytes, FieldValue::Bytes(src)) => {
                    let len = src.len().min(field.width);
                    buf.put_slice(&src[..len]);
                    buf.put_bytes(0, field.width - len);
                }
                (encoding, value) => {
                    return Err(RecordError::Layout(format!(
                        "field `{}`: {:?} cannot hold a {} value",
                        field.name,
                        encoding,
                        value.kind()
                    )));
                }
            }
        }

        debug_assert_eq!(buf.len(), self.size());
        Ok(buf.freeze())
    }
}

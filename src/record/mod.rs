//! Record Module
//!
//! Fixed-layout records and the descriptor that packs them.
//!
//! ## Responsibilities
//! - Describe the on-disk layout field by field (name, width, encoding)
//! - Pack field values at their declared offsets, never via in-memory layout
//! - Hold fixed-capacity name buffers with truncation and zero padding
//!
//! ## Record Format
//! ```text
//! ┌──────────────┬──────────────────────┬──────────────────────┐
//! │ id (4)       │ first_name (20)      │ last_name (20)       │
//! │ u32 BE       │ bytes, zero-padded   │ bytes, zero-padded   │
//! └──────────────┴──────────────────────┴──────────────────────┘
//!  0              4                      24                     44
//! ```
//!
//! Records are written back to back with a stride of 44 bytes and no padding.
//! A name that fills all 20 bytes carries no terminator.

mod layout;
mod person;

pub use layout::{FieldEncoding, FieldSpec, FieldValue, RecordLayout};
pub use person::Person;

// =============================================================================
// Person Layout
// =============================================================================

/// Capacity of each name field in bytes
pub const NAME_LEN: usize = 20;

/// Width of the id field in bytes
pub const ID_LEN: usize = 4;

const PERSON_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("id", ID_LEN, FieldEncoding::U32BigEndian),
    FieldSpec::new("first_name", NAME_LEN, FieldEncoding::FixedBytes),
    FieldSpec::new("last_name", NAME_LEN, FieldEncoding::FixedBytes),
];

/// Layout of a person record: id @0, first_name @4, last_name @24
pub const PERSON_LAYOUT: RecordLayout = RecordLayout::new(&PERSON_FIELDS);

/// Encoded size of one person record (the record stride)
pub const RECORD_SIZE: usize = PERSON_LAYOUT.size();

const _: () = assert!(RECORD_SIZE == ID_LEN + 2 * NAME_LEN);

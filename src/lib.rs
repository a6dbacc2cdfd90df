//! # recfile
//!
//! Writes fixed-size binary records to a file:
//! - Explicit field-by-field layout, no struct padding on disk
//! - 32-bit id in network (big-endian) byte order
//! - Fixed 20-byte name fields, truncated or zero-padded
//! - Short-write detection and checked close
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────┐    encode    ┌──────────────┐    write     ┌──────────────┐
//! │    Person    │ ───────────▶ │ RecordLayout │ ───────────▶ │ RecordWriter │
//! │ (id, names)  │              │  (44 bytes)  │              │   (file)     │
//! └──────────────┘              └──────────────┘              └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod writer;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordError, Result};
pub use config::{Config, SyncMode};
pub use record::{Person, PERSON_LAYOUT, RECORD_SIZE};
pub use writer::{write_file, RecordWriter, WriteSummary};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recfile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

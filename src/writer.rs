//! Record Writer
//!
//! Opens the output file and appends encoded records in order.
//!
//! ## Responsibilities
//! - Open (create or truncate) the output file
//! - Write each record's fixed-size image, detecting short writes
//! - Flush, optionally fsync, and release the handle exactly once

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{Config, SyncMode};
use crate::error::{RecordError, Result};
use crate::record::Person;

// =============================================================================
// Sinks
// =============================================================================

/// Destination for encoded records
///
/// Any `Write` can be a sink; `sync` only does work for real files.
pub trait RecordSink: Write {
    /// Make already flushed bytes durable
    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl RecordSink for BufWriter<File> {
    fn sync(&mut self) -> io::Result<()> {
        self.get_ref().sync_all()
    }
}

impl RecordSink for Vec<u8> {}

// =============================================================================
// Writer
// =============================================================================

/// Summary returned by a completed write pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub records_written: u64,
    pub bytes_written: u64,
}

/// Writes fixed-size records to a sink in call order
///
/// The sink is owned by the writer. Dropping the writer releases it even if
/// a write failed part way; `finish()` is the checked close.
pub struct RecordWriter<W: RecordSink = BufWriter<File>> {
    inner: W,
    sync_mode: SyncMode,
    records_written: u64,
    bytes_written: u64,
}

impl RecordWriter<BufWriter<File>> {
    /// Open `path` for writing, creating it or truncating existing content
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| RecordError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "opened output file");
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: RecordSink> RecordWriter<W> {
    /// Wrap an existing sink
    pub fn from_writer(inner: W) -> Self {
        Self {
            inner,
            sync_mode: SyncMode::None,
            records_written: 0,
            bytes_written: 0,
        }
    }

    /// Set the durability strategy applied by `finish()`
    pub fn with_sync_mode(mut self, mode: SyncMode) -> Self {
        self.sync_mode = mode;
        self
    }

    /// Append one record's image
    ///
    /// Fails with `ShortWrite` if the sink stops accepting bytes before the
    /// whole record is written. A buffered sink (the default for `open`)
    /// accepts the record into memory, so a full disk surfaces later as an
    /// `Io` error from `finish()`.
    pub fn write_record(&mut self, record: &Person) -> Result<()> {
        let image = record.encode()?;

        let mut written = 0;
        while written < image.len() {
            match self.inner.write(&image[written..]) {
                Ok(0) => {
                    warn!(
                        record = %record,
                        expected = image.len(),
                        written,
                        "sink accepted no more bytes"
                    );
                    return Err(RecordError::ShortWrite {
                        expected: image.len(),
                        written,
                    });
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        self.records_written += 1;
        self.bytes_written += written as u64;
        debug!(record = %record, offset = self.bytes_written - written as u64, "wrote record");
        Ok(())
    }

    /// Append records in slice order
    pub fn write_all_records(&mut self, records: &[Person]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Bytes handed to the sink so far. With a buffered sink these are not
    /// on disk until `finish()` succeeds.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush, sync if configured, and close the sink
    pub fn finish(mut self) -> Result<WriteSummary> {
        self.inner.flush()?;
        if self.sync_mode == SyncMode::OnFinish {
            self.inner.sync()?;
        }

        let summary = WriteSummary {
            records_written: self.records_written,
            bytes_written: self.bytes_written,
        };
        info!(
            records = summary.records_written,
            bytes = summary.bytes_written,
            "finished writing records"
        );
        Ok(summary)
    }

    /// Consume the writer and return the sink without flushing
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Run a full write pass: open the configured path, write every record, close
pub fn write_file(config: &Config) -> Result<WriteSummary> {
    let mut writer = RecordWriter::open(&config.output_path)?.with_sync_mode(config.sync_mode);
    writer.write_all_records(&config.records)?;
    writer.finish()
}

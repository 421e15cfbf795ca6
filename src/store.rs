//! Folder-scoped sector store — the I/O layer over the record codec.
//!
//! # Resource discipline
//! Every mutating operation is read-transform-write on the whole file: open,
//! materialize the record in memory, apply the pure mutation from
//! [`crate::record`], then write the entire buffer back and force it to
//! storage (`flush` + `sync_all`) before the handle is released.  No partial
//! or streamed writes, no lock files; callers drive one operation at a time.
//!
//! The store never creates a record from nothing — a mutating operation on a
//! sector whose file is absent fails with [`StoreError::MissingFile`] before
//! any write is attempted.  Persistence is a plain full-file overwrite (no
//! temp-file-and-rename), matching the transience behavior the surrounding
//! tooling expects.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::{self, WaterFields};
use crate::sector::SectorIndex;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The sector's backing file does not exist; nothing was written.
    #[error("Sector file not found: {0}")]
    MissingFile(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Handle on a folder of `sd<index>.csdat` record files.
pub struct SectorStore {
    root: PathBuf,
}

impl SectorStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_owned() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a sector's record file.
    pub fn record_path(&self, sector: SectorIndex) -> PathBuf {
        self.root.join(sector.file_name())
    }

    pub fn exists(&self, sector: SectorIndex) -> bool {
        self.record_path(sector).is_file()
    }

    // ── Reading ──────────────────────────────────────────────────────────────

    /// Water presence for one sector.  Total: a missing or unreadable file
    /// reads as "no water".
    pub fn probe(&self, sector: SectorIndex) -> bool {
        let path = self.record_path(sector);
        if !path.is_file() {
            return false;
        }
        match std::fs::read(&path) {
            Ok(data) => record::probe_water(&data),
            Err(_) => false,
        }
    }

    /// Probe all 256 sectors in index order (grid coloring).
    pub fn probe_all(&self) -> Vec<bool> {
        SectorIndex::all().map(|s| self.probe(s)).collect()
    }

    /// Decode a sector's water fields.
    pub fn load(&self, sector: SectorIndex) -> Result<WaterFields, StoreError> {
        let data = self.read_record(sector)?;
        Ok(record::load_fields(&data))
    }

    // ── Mutations ────────────────────────────────────────────────────────────

    /// Stamp the water-block template into the sector's record and persist.
    /// Returns the template's default field values.
    pub fn add_water_block(&self, sector: SectorIndex) -> Result<WaterFields, StoreError> {
        let mut data = self.read_record(sector)?;
        record::init_water_block(&mut data, sector.index());
        self.write_record(sector, &data)?;
        Ok(record::load_fields(&data))
    }

    /// Encode `height` and `material` into the sector's record and persist.
    /// No range validation on `height`; the caller clamps.
    pub fn save(&self, sector: SectorIndex, height: f32, material: &str) -> Result<(), StoreError> {
        let mut data = self.read_record(sector)?;
        record::write_fields(&mut data, height, material);
        self.write_record(sector, &data)
    }

    /// Clear the sector's water block and persist.  Returns the (now default)
    /// field values.
    pub fn reset(&self, sector: SectorIndex) -> Result<WaterFields, StoreError> {
        let mut data = self.read_record(sector)?;
        record::reset_water_block(&mut data);
        self.write_record(sector, &data)?;
        Ok(record::load_fields(&data))
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn read_record(&self, sector: SectorIndex) -> Result<Vec<u8>, StoreError> {
        let path = self.record_path(sector);
        if !path.is_file() {
            return Err(StoreError::MissingFile(sector.file_name()));
        }
        Ok(std::fs::read(&path)?)
    }

    fn write_record(&self, sector: SectorIndex, data: &[u8]) -> Result<(), StoreError> {
        let mut file = File::create(self.record_path(sector))?;
        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
        Ok(())
    }
}

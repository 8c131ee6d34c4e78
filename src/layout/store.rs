use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::layout::model::{self, CanonicalLayout, LayoutOffsets};

const CANONICAL_FILE: &str = "layout_canonical.json";
const OFFSETS_FILE: &str = "layout_offsets.json";

/// JSON-file persistence for the two layout layers. Reads never fail: absent
/// or malformed data migrates to defaults. Writes return a Result the caller
/// is expected to drop; layout persistence is best-effort by contract.
pub struct LayoutStore {
    base_dir: PathBuf,
}

impl LayoutStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("charsheet");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn read_value(&self, name: &str) -> Option<serde_json::Value> {
        let path = self.file_path(name);
        let content = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_json<T: serde::Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn load_offsets(&self) -> LayoutOffsets {
        match self.read_value(OFFSETS_FILE) {
            Some(value) => model::migrate_offsets(&value),
            None => LayoutOffsets::default(),
        }
    }

    pub fn save_offsets(&self, offsets: &LayoutOffsets) -> Result<()> {
        self.write_json(OFFSETS_FILE, offsets)
    }

    pub fn load_canonical(&self) -> CanonicalLayout {
        self.read_value(CANONICAL_FILE)
            .as_ref()
            .and_then(model::migrate_canonical)
            .unwrap_or_default()
    }

    pub fn save_canonical(&self, layout: &CanonicalLayout) -> Result<()> {
        self.write_json(CANONICAL_FILE, layout)
    }

    /// Remove the canonical record so future loads fall back to the
    /// hardcoded default. Absence of the file is not an error.
    pub fn clear_canonical(&self) {
        let _ = fs::remove_file(self.file_path(CANONICAL_FILE));
    }
}

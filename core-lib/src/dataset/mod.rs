//! Raw opcode dataset, as published in the `sm83-opcodes.json` format.
//!
//! The top level object holds one table per opcode page. Only the
//! `cbprefixed` page is read; any other key is ignored. Entries keep the order
//! they have in the source file.

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::GenError;

/// Name of the table this crate generates.
pub const CB_PREFIXED: &str = "cbprefixed";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawOperand {
    pub name: String,
    pub immediate: bool,
    #[serde(default)]
    pub bytes: Option<u8>,
    #[serde(default)]
    pub increment: Option<bool>,
    #[serde(default)]
    pub decrement: Option<bool>,
}

/// Flag symbols exactly as written in the dataset (`"-"`, `"0"`, `"1"`, or a letter).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawFlags {
    #[serde(rename = "Z")]
    pub z: String,
    #[serde(rename = "N")]
    pub n: String,
    #[serde(rename = "H")]
    pub h: String,
    #[serde(rename = "C")]
    pub c: String,
}

impl RawFlags {
    pub fn symbols(&self) -> [&str; 4] {
        [
            self.z.as_str(),
            self.n.as_str(),
            self.h.as_str(),
            self.c.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    pub mnemonic: String,
    pub bytes: u8,
    pub cycles: Vec<u8>,
    pub operands: Vec<RawOperand>,
    pub immediate: bool,
    pub flags: RawFlags,
}

#[derive(Deserialize)]
struct RawTables {
    cbprefixed: Option<IndexMap<String, serde_json::Value>>,
}

/// The CB-prefixed opcode table, keyed by opcode string (`"0x00"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset {
    pub cbprefixed: IndexMap<String, RawEntry>,
}

impl RawDataset {
    /// Parses a dataset from JSON text.
    ///
    /// Entries are decoded one by one so a missing or mistyped field is
    /// reported against the opcode it belongs to.
    #[instrument(skip(json), fields(len = json.len()), level = "debug")]
    pub fn from_json(json: &str) -> Result<Self, GenError> {
        let tables: RawTables =
            serde_json::from_str(json).map_err(|e| GenError::malformed("dataset", e))?;
        let table = tables.cbprefixed.ok_or_else(|| {
            GenError::malformed("dataset", format!("missing `{CB_PREFIXED}` table"))
        })?;

        let mut cbprefixed = IndexMap::with_capacity(table.len());
        for (code, value) in table {
            let entry = RawEntry::deserialize(value)
                .map_err(|e| GenError::malformed(format!("{CB_PREFIXED}.{code}"), e))?;
            cbprefixed.insert(code, entry);
        }
        debug!(entries = cbprefixed.len(), "Loaded opcode dataset");
        Ok(Self { cbprefixed })
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, GenError> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|e| GenError::malformed("dataset", e))?;
        Self::from_json(&json)
    }

    pub fn from_path(path: &Path) -> Result<Self, GenError> {
        let json = std::fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.cbprefixed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cbprefixed.is_empty()
    }
}

#[cfg(test)]
mod tests;

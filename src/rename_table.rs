use rustc_hash::FxHashMap;

use std::io::Read;
use std::path::Path;

use crate::errors::*;

/// Mapping from old contig names to new ones, loaded from a two-column TSV without a header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameTable {
    names: FxHashMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row. If the old name is already present, the earlier row wins.
    pub fn insert(&mut self, old: impl Into<String>, new: impl Into<String>) {
        self.names.entry(old.into()).or_insert_with(|| new.into());
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.names.get(old).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn from_tsv_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();

        if !file.exists() {
            return Err(Error::InputNotFound {
                file: file.display().to_string(),
            });
        }

        let reader = std::fs::File::open(file).map_err(|e| Error::file_io(file, e))?;
        Self::from_tsv_reader(reader, &file.display().to_string())
    }

    /// Parse rows from any reader. `origin` names the source in error messages.
    pub fn from_tsv_reader<R: Read>(reader: R, origin: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut table = Self::new();

        for record in reader.records() {
            let record = record.map_err(|e| Error::ParseTable {
                file: origin.to_owned(),
                line: e.position().map(|p| p.line() as usize).unwrap_or(0),
                source: Box::new(e),
            })?;

            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

            if record.len() != 2 {
                return Err(Error::ParseTable {
                    file: origin.to_owned(),
                    line,
                    source: format!("expected 2 tab-separated columns, found {}", record.len()).into(),
                });
            }

            table.insert(&record[0], &record[1]);
        }

        log::debug!("Loaded {} renames from \"{}\"", table.len(), origin);
        Ok(table)
    }
}

impl<O: Into<String>, N: Into<String>> FromIterator<(O, N)> for RenameTable {
    fn from_iter<I: IntoIterator<Item = (O, N)>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|(o, n)| table.insert(o, n));
        table
    }
}

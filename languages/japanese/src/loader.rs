use yomi_core::error::{RecordError, Result};

use crate::record::RawWordRecord;

/// Decodes word records from the flat-file database format
pub struct WordRecordLoader;

impl WordRecordLoader {
    /// Parse a single JSON record
    pub fn parse_record(json: &str) -> Result<RawWordRecord> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse newline-delimited records, one per line; blank lines are skipped
    pub fn parse_lines(text: &str) -> Result<Vec<RawWordRecord>> {
        let mut records = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let record = serde_json::from_str(line).map_err(|source| {
                tracing::warn!("Malformed word record on line {}: {}", idx + 1, source);
                RecordError::Line {
                    line: idx + 1,
                    source,
                }
            })?;
            records.push(record);
        }

        tracing::info!("Loaded {} word records", records.len());
        Ok(records)
    }

    /// Parse a JSON array of records
    pub fn parse_array(json: &str) -> Result<Vec<RawWordRecord>> {
        let records: Vec<RawWordRecord> = serde_json::from_str(json)?;
        tracing::info!("Loaded {} word records", records.len());
        Ok(records)
    }

    /// Accept either format, picking by the first non-blank character
    ///
    /// Fails with [`RecordError::Empty`] when no record was found.
    pub fn parse(text: &str) -> Result<Vec<RawWordRecord>> {
        let records = if text.trim_start().starts_with('[') {
            Self::parse_array(text)?
        } else {
            Self::parse_lines(text)?
        };

        if records.is_empty() {
            return Err(RecordError::Empty);
        }

        Ok(records)
    }
}

//! Line-delimited JSON reading and writing.
//!
//! A line that fails to parse is a fatal error: the validator only ever
//! sees already-parsed records, so a broken line means the input file
//! itself is bad and the run aborts.

use crate::errors::{FineTuneError, FineTuneResult};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads one JSON record per line. Blank lines are skipped.
pub fn read_records(path: &Path) -> FineTuneResult<Vec<Value>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: Value = serde_json::from_str(trimmed).map_err(|e| {
            FineTuneError::Deserialization(format!(
                "{}:{}: invalid JSON: {}",
                path.display(),
                line_number + 1,
                e
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Writes one compact JSON record per line.
pub fn write_records(path: &Path, records: &[Value]) -> FineTuneResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

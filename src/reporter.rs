use crate::error::{Result, ScanError};
use crate::types::EntryRecord;
use log::debug;
use std::fs;
use std::path::Path;

pub const HEADERS: [&str; 5] = ["File Name", "Full Path", "File Type", "Size", "Date Created"];

/// Tab-separated table: header row, then one row per record.
/// Rows are joined with `\n` and there is no trailing newline.
#[must_use]
pub fn render_table(records: &[EntryRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join("\t"));

    for record in records {
        lines.push(
            [
                record.name.as_str(),
                record.path.as_str(),
                record.kind.as_str(),
                record.size.as_str(),
                record.created.as_str(),
            ]
            .join("\t"),
        );
    }

    lines.join("\n")
}

/// Prints the table, or writes it to `output_file` (overwriting) and
/// confirms the destination on stdout.
pub fn output_results(records: &[EntryRecord], output_file: Option<&Path>) -> Result<()> {
    let table = render_table(records);

    match output_file {
        Some(path) => {
            fs::write(path, &table).map_err(|source| ScanError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("Wrote {} bytes to {}", table.len(), path.display());
            println!("Results written to: {}", path.display());
        }
        None => println!("{table}"),
    }

    Ok(())
}

//! Export of subnet networks as clipboard text or a one-column CSV.
//!
//! Only the `network` field of each record is exported.

use crate::error::Result;
use crate::models::SubnetRecord;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column header of the CSV export ("network").
pub const CSV_HEADER: &str = "网段";

/// File name used by [`export_csv_file`] ("subnet split results.csv").
pub const CSV_FILE_NAME: &str = "子网划分结果.csv";

/// One network per line, each followed by `\n`.
pub fn clipboard_text(subnets: &[SubnetRecord]) -> String {
    subnets
        .iter()
        .map(|s| format!("{}\n", s.network))
        .collect()
}

/// Write the header and one row per subnet to any writer.
pub fn write_csv<W: Write>(writer: W, subnets: &[SubnetRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record([CSV_HEADER])?;
    for s in subnets {
        wtr.write_record([s.network.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn csv_string(subnets: &[SubnetRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, subnets)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `子网划分结果.csv` into `dir`, returning the file path.
pub fn export_csv_file(dir: &Path, subnets: &[SubnetRecord]) -> Result<PathBuf> {
    let path = dir.join(CSV_FILE_NAME);
    let file = std::fs::File::create(&path)?;
    write_csv(std::io::BufWriter::new(file), subnets)?;
    log::info!("Exported {} subnets to {}", subnets.len(), path.display());
    Ok(path)
}

pub mod csv;
pub mod fasta;
pub mod output;

use anyhow::Result;
use tracing::{debug, info};

use crate::features::SequenceRecord;
use crate::util::vocab::Vocabulary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Csv,
    Fasta,
}

impl InputFormat {
    /// `.fa` / `.fasta` / `.faa` / `.fas`（不区分大小写）视为 FASTA，其余按 CSV。
    pub fn from_path(path: &str) -> Self {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("fa" | "fasta" | "faa" | "fas") => InputFormat::Fasta,
            _ => InputFormat::Csv,
        }
    }
}

/// 载入记录。不做去重或校验；含词表外字符的记录只在 debug 级别统计一次。
pub fn load_records(path: &str, format: Option<InputFormat>) -> Result<Vec<SequenceRecord>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let records = match format {
        InputFormat::Csv => self::csv::read_records_from_path(path)?,
        InputFormat::Fasta => self::fasta::read_records_from_path(path)?,
    };
    info!(path, ?format, records = records.len(), "loaded sequence records");

    let vocab = Vocabulary::standard();
    let with_unknown = records
        .iter()
        .filter(|r| r.sequence.chars().any(|c| !vocab.contains(c)))
        .count();
    if with_unknown > 0 {
        debug!(with_unknown, "records contain characters outside the residue vocabulary");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path("a/b.fasta"), InputFormat::Fasta);
        assert_eq!(InputFormat::from_path("b.FA"), InputFormat::Fasta);
        assert_eq!(InputFormat::from_path("b.faa"), InputFormat::Fasta);
        assert_eq!(InputFormat::from_path("uniprot_sequences.csv"), InputFormat::Csv);
        assert_eq!(InputFormat::from_path("noext"), InputFormat::Csv);
    }
}

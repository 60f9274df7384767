use anyhow::{anyhow, Result};
use std::io::Write;

use crate::features::FeatureSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Bincode,
}

impl OutputFormat {
    pub fn from_path(path: &str) -> Self {
        match std::path::Path::new(path).extension().and_then(std::ffi::OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") => OutputFormat::Bincode,
            _ => OutputFormat::Json,
        }
    }
}

pub fn save_feature_set(set: &FeatureSet, path: &str, format: Option<OutputFormat>) -> Result<()> {
    let res = match format.unwrap_or_else(|| OutputFormat::from_path(path)) {
        OutputFormat::Json => set.save_json(path),
        OutputFormat::Bincode => set.save_to_file(path),
    };
    res.map_err(|e| anyhow!("cannot write features to '{}': {}", path, e))
}

fn format_composition(v: &[f64]) -> String {
    let cells: Vec<String> = v.iter().map(|x| format!("{:.3}", x)).collect();
    format!("[{}]", cells.join(" "))
}

/// 打印前 `head` 条记录的概要：id、序列长度、one-hot 形状、组成向量。
pub fn write_preview<W: Write>(out: &mut W, set: &FeatureSet, head: usize) -> Result<()> {
    writeln!(out, "records: {}", set.len())?;
    writeln!(out, "target_length: {}", set.target_length)?;
    let symbols: String = set.vocabulary.symbols.iter().collect();
    writeln!(out, "vocabulary: {}", symbols)?;
    writeln!(out, "id\tlength\tone_hot\tletter_composition")?;
    for a in set.records.iter().take(head) {
        let (rows, cols) = a.one_hot.shape();
        writeln!(
            out,
            "{}\t{}\t{}x{}\t{}",
            a.record.id,
            a.record.sequence.chars().count(),
            rows,
            cols,
            format_composition(&a.letter_composition),
        )?;
    }
    if set.len() > head {
        writeln!(out, "... {} more", set.len() - head)?;
    }
    Ok(())
}

use anyhow::{anyhow, Context, Result};
use std::io::Read;

use crate::features::SequenceRecord;

/// 读取两列表格：首行为表头并被跳过，前两列按位置解释为 `id` 与 `sequence`，
/// 与表头内容无关。多余的列忽略；字段原样保留，不裁剪空白、不改大小写。
pub fn read_records<R: Read>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::None)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.with_context(|| format!("malformed CSV row {}", i + 1))?;
        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        let id = row.get(0).ok_or_else(|| anyhow!("line {}: missing id column", line))?;
        let seq = row
            .get(1)
            .ok_or_else(|| anyhow!("line {}: expected at least 2 columns (id, sequence), found {}", line, row.len()))?;
        out.push(SequenceRecord::new(id, seq));
    }
    Ok(out)
}

pub fn read_records_from_path(path: &str) -> Result<Vec<SequenceRecord>> {
    let fh = std::fs::File::open(path).map_err(|e| anyhow!("cannot open CSV file '{}': {}", path, e))?;
    read_records(std::io::BufReader::new(fh)).with_context(|| format!("while reading '{}'", path))
}

use anyhow::{anyhow, Result};
use std::io::BufRead;

use crate::features::SequenceRecord;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: String,
}

impl From<FastaRecord> for SequenceRecord {
    fn from(r: FastaRecord) -> Self {
        SequenceRecord { id: r.id, sequence: r.seq }
    }
}

/// 蛋白 FASTA 读取器。序列行去掉换行与行内空白后拼接，大小写保持原样
/// （小写残基交给特征层按“不在词表内”处理）。
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    break self.buf[1..].trim().to_string();
                }
                if !self.buf.trim().is_empty() {
                    return Err(anyhow!("sequence data before first FASTA header: '{}'", self.buf.trim_end()));
                }
            }
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut seq = String::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                self.peek_header = Some(self.buf[1..].trim().to_string());
                break;
            }
            seq.extend(self.buf.chars().filter(|c| !c.is_whitespace()));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }

    pub fn read_all(mut self) -> Result<Vec<SequenceRecord>> {
        let mut out = Vec::new();
        while let Some(rec) = self.next_record()? {
            out.push(rec.into());
        }
        Ok(out)
    }
}

pub fn read_records_from_path(path: &str) -> Result<Vec<SequenceRecord>> {
    let fh = std::fs::File::open(path).map_err(|e| anyhow!("cannot open FASTA file '{}': {}", path, e))?;
    FastaReader::new(std::io::BufReader::new(fh)).read_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_protein_fasta() {
        let data = b">sp|P69905|HBA_HUMAN Hemoglobin alpha\nMVLSPADKTN\nVKAAWGKVGA\n>p2\nACDE\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "sp|P69905|HBA_HUMAN");
        assert_eq!(r1.desc.as_deref(), Some("Hemoglobin alpha"));
        assert_eq!(r1.seq, "MVLSPADKTNVKAAWGKVGA");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "p2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, "ACDE");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn case_kept_and_whitespace_dropped() {
        let data = b"\n>x desc\r\nAC g t\r\n kl\r\n";
        let recs = FastaReader::new(Cursor::new(&data[..])).read_all().unwrap();
        assert_eq!(recs, vec![SequenceRecord::new("x", "ACgtkl")]);
    }

    #[test]
    fn header_without_sequence_is_empty() {
        let data = b">a\n>b\nMK\n";
        let recs = FastaReader::new(Cursor::new(&data[..])).read_all().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].sequence, "");
        assert_eq!(recs[1].sequence, "MK");
    }

    #[test]
    fn data_before_header_is_rejected() {
        let data = b"MKV\n>a\nAC\n";
        assert!(FastaReader::new(Cursor::new(&data[..])).read_all().is_err());
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AnnotatedRecord;
use crate::util::vocab::{Vocabulary, VocabularyInfo};

/// 运行元信息：输入文件、命令行参数、生成时间（RFC 3339）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMeta {
    pub input_file: Option<String>,
    pub build_args: Option<String>,
    pub timestamp: Option<String>,
}

impl RunMeta {
    pub fn capture(input_file: &str) -> Self {
        Self {
            input_file: Some(input_file.to_string()),
            build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// 一个批次的全部特征：整批共享的目标长度、词表，以及逐条标注后的记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub meta: RunMeta,
    pub vocabulary: VocabularyInfo,
    pub target_length: usize,
    pub records: Vec<AnnotatedRecord>,
}

impl FeatureSet {
    pub fn new(meta: RunMeta, vocab: &Vocabulary, target_length: usize, records: Vec<AnnotatedRecord>) -> Self {
        Self { meta, vocabulary: VocabularyInfo::from(vocab), target_length, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let f = std::fs::File::create(path)?;
        let mut w = std::io::BufWriter::new(f);
        bincode::serialize_into(&mut w, self)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let set: Self = bincode::deserialize_from(std::io::BufReader::new(f))?;
        Ok(set)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let f = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(f), self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let set: Self = serde_json::from_reader(std::io::BufReader::new(f))?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{featurize_batch, FeatureOpt, SequenceRecord};

    fn small_set() -> FeatureSet {
        let recs = vec![SequenceRecord::new("p1", "ACK"), SequenceRecord::new("p2", "W")];
        featurize_batch(&recs, &FeatureOpt::default(), RunMeta::capture("mem")).unwrap()
    }

    #[test]
    fn bincode_file_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.bin");
        let path = path.to_str().unwrap();
        let set = small_set();
        set.save_to_file(path).unwrap();
        assert_eq!(FeatureSet::load_from_file(path).unwrap(), set);
    }

    #[test]
    fn json_file_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.json");
        let path = path.to_str().unwrap();
        let set = small_set();
        set.save_json(path).unwrap();
        let back = FeatureSet::load_json(path).unwrap();
        assert_eq!(back.target_length, 3);
        assert_eq!(back.records[1].one_hot, set.records[1].one_hot);
        assert_eq!(back.meta.input_file.as_deref(), Some("mem"));
    }

    #[test]
    fn capture_sets_timestamp() {
        let meta = RunMeta::capture("in.csv");
        let ts = meta.timestamp.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}

pub mod composition;
pub mod length;
pub mod onehot;
pub mod set;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EmptyBatchError, FeatureError};
use crate::util::vocab::{build_vocabulary, Vocabulary};

pub use composition::letter_composition;
pub use length::max_length;
pub use onehot::{one_hot_encode, OneHot, PaddedSequence};
pub use set::{FeatureSet, RunMeta};

/// 输入记录：标识符不做校验，序列字符集不受限制。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self { id: id.into(), sequence: sequence.into() }
    }
}

/// 原始记录保持不变，计算出的特征作为新字段附加。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    pub record: SequenceRecord,
    pub one_hot: OneHot,
    pub letter_composition: Vec<f64>,
}

#[derive(Clone, Copy, Debug)]
pub struct FeatureOpt {
    /// <= 1 时顺序执行
    pub threads: usize,
}

impl Default for FeatureOpt {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

/// 单条记录的特征提取。纯函数，可并行调用。
pub fn annotate(record: &SequenceRecord, target_length: usize, vocab: &Vocabulary) -> AnnotatedRecord {
    AnnotatedRecord {
        record: record.clone(),
        one_hot: one_hot_encode(&record.sequence, target_length, vocab),
        letter_composition: letter_composition(&record.sequence, vocab),
    }
}

fn target_length(records: &[SequenceRecord]) -> Result<usize, EmptyBatchError> {
    let seqs: Vec<&str> = records.iter().map(|r| r.sequence.as_str()).collect();
    max_length(&seqs)
}

/// 整批处理：词表构建一次，目标长度在整批上只算一次，
/// 每条记录用同一个词表和目标长度编码。空批次在任何记录被处理前失败。
pub fn process_sequences(records: &[SequenceRecord]) -> Result<Vec<AnnotatedRecord>, EmptyBatchError> {
    let vocab = build_vocabulary();
    let target = target_length(records)?;
    debug!(records = records.len(), target_length = target, "encoding batch");
    Ok(records.iter().map(|r| annotate(r, target, &vocab)).collect())
}

/// 同 [`process_sequences`]，`opt.threads > 1` 时在独立的 rayon 线程池上按记录并行。
/// 输出顺序与输入一致。
pub fn process_sequences_with_opt(
    records: &[SequenceRecord],
    opt: &FeatureOpt,
) -> Result<Vec<AnnotatedRecord>, FeatureError> {
    if opt.threads <= 1 {
        return Ok(process_sequences(records)?);
    }

    let vocab = build_vocabulary();
    let target = target_length(records)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build()
        .map_err(|e| FeatureError::ThreadPool(e.to_string()))?;

    debug!(records = records.len(), target_length = target, threads = opt.threads, "encoding batch in parallel");
    let out: Vec<AnnotatedRecord> = pool.install(|| records.par_iter().map(|r| annotate(r, target, &vocab)).collect());
    Ok(out)
}

/// 处理整批并打包成可持久化的 [`FeatureSet`]。
pub fn featurize_batch(records: &[SequenceRecord], opt: &FeatureOpt, meta: RunMeta) -> Result<FeatureSet, FeatureError> {
    let vocab = build_vocabulary();
    let annotated = process_sequences_with_opt(records, opt)?;
    // 非空批次至少有一条记录，目标长度即 one-hot 行数
    let target = annotated.first().map(|a| a.one_hot.rows).unwrap_or(0);
    info!(records = annotated.len(), target_length = target, "batch featurized");
    Ok(FeatureSet::new(meta, &vocab, target, annotated))
}

use thiserror::Error;

/// 对空批次求最大长度（以及整批处理）时返回。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty batch: at least one sequence record is required to compute the padding length")]
pub struct EmptyBatchError;

/// 批处理层面的错误。核心特征函数本身不会失败。
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error(transparent)]
    EmptyBatch(#[from] EmptyBatchError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

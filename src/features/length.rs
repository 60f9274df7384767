use crate::error::EmptyBatchError;

/// 序列长度按 Unicode 标量值计数，与按位置编码的方式保持一致。
#[inline]
pub fn seq_len(sequence: &str) -> usize {
    sequence.chars().count()
}

/// 批次内最长序列的长度，作为整批共享的填充目标。
/// 空字符串计为 0；空批次没有定义最大值，返回 [`EmptyBatchError`]。
pub fn max_length<S: AsRef<str>>(sequences: &[S]) -> Result<usize, EmptyBatchError> {
    sequences
        .iter()
        .map(|s| seq_len(s.as_ref()))
        .max()
        .ok_or(EmptyBatchError)
}

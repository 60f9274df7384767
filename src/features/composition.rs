use crate::util::vocab::Vocabulary;

/// 保留位数：结果四舍五入到 3 位小数。
pub const COMPOSITION_DECIMALS: i32 = 3;

/// 按 10^decimals 缩放后做“银行家舍入”（.5 取偶），再缩放回去。
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// 氨基酸组成向量：每个词表符号在原始（未填充）序列中所占比例。
///
/// 不在词表中的字符计入序列长度但不落入任何桶，因此总和可能小于 1。
/// 空序列直接返回全 0 向量。
pub fn letter_composition(sequence: &str, vocab: &Vocabulary) -> Vec<f64> {
    let mut counts = vec![0u32; vocab.len()];
    let mut total = 0usize;
    for ch in sequence.chars() {
        total += 1;
        if let Some(idx) = vocab.index_of(ch) {
            counts[idx] += 1;
        }
    }
    if total == 0 {
        return vec![0.0; vocab.len()];
    }
    let n = total as f64;
    counts
        .into_iter()
        .map(|c| round_to(f64::from(c) / n, COMPOSITION_DECIMALS))
        .collect()
}

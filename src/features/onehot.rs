use serde::{Deserialize, Serialize};

use crate::util::vocab::Vocabulary;

/// 右侧填充到固定长度的序列，构建一次后只读。
///
/// 原序列长于目标长度时只保留前 `target_length` 个字符，其余静默丢弃。
/// 由 `max_length` 在同一批次上得出的目标长度不会触发截断。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedSequence {
    chars: Vec<char>,
}

impl PaddedSequence {
    pub fn new(sequence: &str, target_length: usize, pad: char) -> Self {
        let chars: Vec<char> = sequence
            .chars()
            .chain(std::iter::repeat(pad))
            .take(target_length)
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl std::fmt::Display for PaddedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// L 行 × |V| 列的 0/1 矩阵（行优先展平）。
/// 每行至多一个 1；字符不在词表中时该行全 0。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHot {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<u8>,
}

impl OneHot {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0u8; rows * cols] }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// 该行被置 1 的列；全 0 行返回 None。
    pub fn hot_index(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|&v| v == 1)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}

/// 将序列填充（或截断）到 `target_length` 后做 one-hot 编码。
/// 对任意输入字符串都不会失败；`target_length == 0` 得到空矩阵。
pub fn one_hot_encode(sequence: &str, target_length: usize, vocab: &Vocabulary) -> OneHot {
    let padded = PaddedSequence::new(sequence, target_length, vocab.pad_symbol());
    encode_padded(&padded, vocab)
}

pub fn encode_padded(padded: &PaddedSequence, vocab: &Vocabulary) -> OneHot {
    let mut m = OneHot::zeros(padded.len(), vocab.len());
    for (i, &ch) in padded.as_chars().iter().enumerate() {
        if let Some(idx) = vocab.index_of(ch) {
            m.data[i * m.cols + idx] = 1;
        }
    }
    m
}

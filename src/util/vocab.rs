use serde::{Deserialize, Serialize};

/// 20 种标准氨基酸 + 填充符 X，顺序固定（X 在最后，索引 20）。
pub const AMINO_ACIDS: [char; 21] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y', 'X',
];

/// 填充符，同时也是词表中的真实成员。
pub const PAD: char = 'X';
pub const PAD_INDEX: usize = 20;
pub const VOCAB_SIZE: usize = AMINO_ACIDS.len();

const NONE: u8 = u8::MAX;

const fn build_lut() -> [u8; 128] {
    let mut lut = [NONE; 128];
    let mut i = 0;
    while i < AMINO_ACIDS.len() {
        lut[AMINO_ACIDS[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// 固定的残基词表：符号 -> 连续的零起始索引。
///
/// 构建后不可变，所有特征提取调用以只读方式共享同一个值。
/// 查找区分大小写，小写字母与非 ASCII 字符均不在词表内。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    lut: [u8; 128],
}

impl Vocabulary {
    pub const fn standard() -> Self {
        Self { lut: build_lut() }
    }

    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        let code = c as u32;
        if code >= 128 {
            return None;
        }
        match self.lut[code as usize] {
            NONE => None,
            idx => Some(idx as usize),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        AMINO_ACIDS.get(index).copied()
    }

    pub fn symbols(&self) -> &'static [char] {
        &AMINO_ACIDS
    }

    #[inline]
    pub fn len(&self) -> usize {
        VOCAB_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn pad_symbol(&self) -> char {
        PAD
    }

    pub fn pad_index(&self) -> usize {
        PAD_INDEX
    }

    /// (symbol, index) 对，按索引顺序。
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        AMINO_ACIDS.iter().copied().zip(0..)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// 序列化时只保留符号表本身，便于下游按索引还原列含义。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyInfo {
    pub symbols: Vec<char>,
    pub pad_symbol: char,
}

impl From<&Vocabulary> for VocabularyInfo {
    fn from(v: &Vocabulary) -> Self {
        Self { symbols: v.symbols().to_vec(), pad_symbol: v.pad_symbol() }
    }
}

pub fn build_vocabulary() -> Vocabulary {
    Vocabulary::standard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_fixed_order() {
        let v = build_vocabulary();
        assert_eq!(v.len(), 21);
        for (i, &c) in AMINO_ACIDS.iter().enumerate() {
            assert_eq!(v.index_of(c), Some(i));
            assert_eq!(v.symbol(i), Some(c));
        }
        assert_eq!(v.index_of('A'), Some(0));
        assert_eq!(v.index_of('K'), Some(8));
        assert_eq!(v.index_of('Y'), Some(19));
        assert_eq!(v.index_of('X'), Some(PAD_INDEX));
    }

    #[test]
    fn unknown_symbols_have_no_index() {
        let v = build_vocabulary();
        for c in ['B', 'Z', 'J', 'O', 'U', 'a', 'x', ' ', '-', '*', '\n', 'é', '\u{0}'] {
            assert_eq!(v.index_of(c), None, "{:?}", c);
        }
        assert_eq!(v.symbol(21), None);
    }

    #[test]
    fn iter_yields_contiguous_indices() {
        let v = Vocabulary::standard();
        let idx: Vec<usize> = v.iter().map(|(_, i)| i).collect();
        assert_eq!(idx, (0..21).collect::<Vec<_>>());
        assert_eq!(v.iter().last(), Some(('X', 20)));
    }

    #[test]
    fn info_keeps_order() {
        let info = VocabularyInfo::from(&build_vocabulary());
        assert_eq!(info.symbols.len(), VOCAB_SIZE);
        assert_eq!(info.symbols[PAD_INDEX], 'X');
        assert_eq!(info.pad_symbol, 'X');
    }
}

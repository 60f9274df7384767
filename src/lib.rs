//! # protfeat
//!
//! 蛋白序列特征提取：把 (id, 序列) 记录转换成定宽的数值特征。
//!
//! 本 crate 提供：
//!
//! - **词表**：20 种标准氨基酸 + 填充符 `X`，顺序与索引固定
//! - **长度归一**：整批共享的填充目标长度（批内最长序列）
//! - **one-hot 编码**：右侧以 `X` 填充的 L × 21 矩阵
//! - **组成向量**：每种残基在原始序列中的比例，保留 3 位小数
//!
//! ## 快速示例
//!
//! ```rust
//! use protfeat::features::{self, SequenceRecord};
//! use protfeat::util::vocab;
//!
//! let v = vocab::build_vocabulary();
//! let m = features::one_hot_encode("ACK", 5, &v);
//! assert_eq!(m.shape(), (5, 21));
//! assert_eq!(m.hot_index(3), Some(vocab::PAD_INDEX));
//!
//! let comp = features::letter_composition("AAACDE", &v);
//! assert_eq!(comp[0], 0.5);
//!
//! let records = vec![SequenceRecord::new("1", "ACDEFG"), SequenceRecord::new("2", "TVWY")];
//! let annotated = features::process_sequences(&records).unwrap();
//! assert_eq!(annotated[1].one_hot.shape(), (6, 21));
//! ```
//!
//! ## 模块说明
//!
//! - [`util`] — 残基词表
//! - [`features`] — 长度归一、one-hot、组成向量与整批处理
//! - [`io`] — CSV / FASTA 读取，JSON / bincode 输出与预览
//! - [`error`] — 核心错误类型

pub mod error;
pub mod features;
pub mod io;
pub mod util;

pub use error::{EmptyBatchError, FeatureError};

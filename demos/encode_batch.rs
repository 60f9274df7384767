//! 演示如何在 library 模式下使用 protfeat 提取特征。
//!
//! 运行方式：
//! ```bash
//! cargo run --example encode_batch
//! ```

use protfeat::features::{self, SequenceRecord};
use protfeat::util::vocab;

fn main() -> anyhow::Result<()> {
    // 1. 词表
    let v = vocab::build_vocabulary();
    let symbols: String = v.symbols().iter().collect();
    println!("词表: {} ({} 个符号，填充符 {} 索引 {})", symbols, v.len(), v.pad_symbol(), v.pad_index());

    // 2. 一批记录
    let records = vec![
        SequenceRecord::new("1", "ACDEFG"),
        SequenceRecord::new("2", "MNPQRS"),
        SequenceRecord::new("3", "TVWY"),
    ];
    let seqs: Vec<&str> = records.iter().map(|r| r.sequence.as_str()).collect();
    println!("目标长度: {}", features::max_length(&seqs)?);

    // 3. 整批编码
    let annotated = features::process_sequences(&records)?;
    for a in &annotated {
        let hot: Vec<String> = (0..a.one_hot.rows)
            .map(|i| match a.one_hot.hot_index(i).and_then(|j| v.symbol(j)) {
                Some(c) => c.to_string(),
                None => "-".to_string(),
            })
            .collect();
        println!("{}\t{}\tone-hot 行 -> {}", a.record.id, a.record.sequence, hot.join(""));
        println!("\t组成: {:?}", &a.letter_composition[..5]);
    }
    Ok(())
}

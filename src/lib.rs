//! vocab-clean - 词库清洗库
//!
//! 从词库 JSON 文档的 val 字段（释义）中剔除中文，只保留英文内容。
//!
//! ## 处理流程
//! 1. 加载文档（条目 id -> 词条）
//! 2. 逐条清洗 val（sanitizer），过短时回退为词头（entry）
//! 3. 有修改时原子写回（document）

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod sanitizer;

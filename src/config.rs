//! 清洗配置
//!
//! 待处理文档列表可由 JSON 配置文件指定（`{"documents": [...]}`），
//! 默认沿用词库应用的固定路径，保证无参数运行时与旧脚本行为一致。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 默认词库目录
const DEFAULT_VOCAB_DIR: &str = "src/assets/Vocab";

/// 默认词库文件
const DEFAULT_VOCAB_FILES: &[&str] = &[
    "GREWords.json",
    "TOEFLWords.json",
    "CET4Words.json",
    "CET6Words.json",
];

/// 清洗配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// 待处理的文档路径列表
    #[serde(default = "default_documents")]
    pub documents: Vec<PathBuf>,
}

fn default_documents() -> Vec<PathBuf> {
    DEFAULT_VOCAB_FILES
        .iter()
        .map(|name| Path::new(DEFAULT_VOCAB_DIR).join(name))
        .collect()
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            documents: default_documents(),
        }
    }
}

impl CleanConfig {
    /// 从 JSON 配置文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_documents() {
        let config = CleanConfig::default();
        assert_eq!(config.documents.len(), 4);
        assert!(config.documents[0].ends_with("GREWords.json"));
        assert!(config
            .documents
            .iter()
            .all(|p| p.starts_with("src/assets/Vocab")));
    }

    #[test]
    fn test_load_config_file() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("clean.json");
        std::fs::write(&path, r#"{"documents": ["data/words.json"]}"#).expect("write config");

        let config = CleanConfig::load(&path).expect("load config");
        assert_eq!(config.documents, vec![PathBuf::from("data/words.json")]);
    }

    #[test]
    fn test_load_config_missing_documents_falls_back_to_default() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("clean.json");
        std::fs::write(&path, "{}").expect("write config");

        let config = CleanConfig::load(&path).expect("load config");
        assert_eq!(config.documents.len(), 4);
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        let temp = tempfile::tempdir().expect("create temp dir");
        assert!(CleanConfig::load(&temp.path().join("absent.json")).is_err());
    }
}

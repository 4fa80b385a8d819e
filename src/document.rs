//! 词库文档读写
//!
//! 文档为一个 JSON 对象：条目 id -> 词条。先解析为 `serde_json::Value`
//! 再逐条转换，结构异常的条目跳过而不中断整个文档。
//! 写回只在有条目被修改时发生，采用临时文件 + 备份 + 原子替换，
//! 任何一步失败都不会破坏原文件。

use std::path::Path;

use serde_json::Value;

use crate::entry::{self, VocabEntry};
use crate::error::CleanError;

/// 词库文档（条目顺序与文件中一致）
pub struct VocabDocument {
    data: serde_json::Map<String, Value>,
}

impl VocabDocument {
    /// 从 JSON 文件加载词库文档
    pub fn load(path: &Path) -> Result<Self, CleanError> {
        if !path.exists() {
            return Err(CleanError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CleanError::MalformedInput {
            path: path.to_path_buf(),
            cause: anyhow::Error::new(e).context("读取文档失败"),
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| CleanError::MalformedInput {
                path: path.to_path_buf(),
                cause: anyhow::Error::new(e).context("解析 JSON 失败"),
            })?;

        let Value::Object(data) = value else {
            return Err(CleanError::MalformedInput {
                path: path.to_path_buf(),
                cause: anyhow::anyhow!("文档顶层不是 JSON 对象"),
            });
        };

        Ok(Self { data })
    }

    /// 条目总数
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 按 id 取原始条目值（测试与调试用）
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.data.get(id)
    }

    /// 清洗所有条目的 val 字段，返回被修改的条目数
    ///
    /// 未修改的条目保持原始 Value 不动，不做重新序列化
    pub fn clean_all(&mut self) -> usize {
        let mut modified = 0usize;

        for (id, raw) in self.data.iter_mut() {
            let mut vocab_entry: VocabEntry = match serde_json::from_value(raw.clone()) {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("条目 {} 结构异常，跳过: {}", id, err);
                    continue;
                }
            };

            if entry::clean(&mut vocab_entry) {
                match serde_json::to_value(&vocab_entry) {
                    Ok(v) => {
                        *raw = v;
                        modified += 1;
                    }
                    Err(err) => {
                        tracing::warn!("条目 {} 序列化失败，保留原值: {}", id, err);
                    }
                }
            }
        }

        modified
    }

    /// 写回词库文档
    ///
    /// 紧凑 JSON，非 ASCII 字符原样输出（不做 \u 转义）。
    /// 原子写入：先写临时文件，再备份旧文件并替换，替换失败时恢复备份。
    pub fn save(&self, path: &Path) -> Result<(), CleanError> {
        let content = serde_json::to_string(&self.data).map_err(|e| CleanError::WriteFailure {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        // 文档路径可以是任意文件名，后缀追加在完整文件名之后，
        // 避免 with_extension 替换掉原有扩展名导致不同文档共用临时文件
        let temp_path = sibling_path(path, ".tmp");
        let backup_path = sibling_path(path, ".bak");

        std::fs::write(&temp_path, &content).map_err(|e| CleanError::WriteFailure {
            path: path.to_path_buf(),
            source: e,
        })?;

        replace_atomic(&temp_path, path, &backup_path).map_err(|e| CleanError::WriteFailure {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// 在同目录下生成带后缀的兄弟路径（`vocab.json` -> `vocab.json.tmp`）
fn sibling_path(path: &Path, suffix: &str) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// 原子替换目标文件
///
/// 1. 如果目标文件存在，先备份到 .bak
/// 2. 重命名临时文件到目标文件
/// 3. 删除备份文件
/// 任一步骤崩溃时原文件或 .bak 至少有一份完好；
/// 替换失败时恢复备份并清理临时文件
fn replace_atomic(temp_path: &Path, path: &Path, backup_path: &Path) -> std::io::Result<()> {
    if path.exists() {
        if backup_path.exists() {
            let _ = std::fs::remove_file(backup_path);
        }
        if let Err(e) = std::fs::rename(path, backup_path) {
            let _ = std::fs::remove_file(temp_path);
            return Err(e);
        }
    }

    match std::fs::rename(temp_path, path) {
        Ok(_) => {
            let _ = std::fs::remove_file(backup_path);
            Ok(())
        }
        Err(e) => {
            let _ = std::fs::remove_file(temp_path);
            // 尝试恢复备份
            if backup_path.exists() {
                if let Err(restore_err) = std::fs::rename(backup_path, path) {
                    tracing::error!("恢复备份失败: {}", restore_err);
                } else {
                    tracing::info!("已从备份恢复文档");
                }
            }
            Err(e)
        }
    }
}

/// 处理单个词库文档
///
/// 加载、清洗全部条目，有修改时写回（dry_run 下只统计不写回）。
/// 返回被修改的条目数。
pub fn process(path: &Path, dry_run: bool) -> Result<usize, CleanError> {
    let mut doc = VocabDocument::load(path)?;
    let modified = doc.clean_all();

    if modified == 0 {
        tracing::info!("无需修改: {}", path.display());
    } else if dry_run {
        tracing::info!(
            "dry-run: {} 中 {} 个条目将被修改（共 {} 条）",
            path.display(),
            modified,
            doc.len()
        );
    } else {
        doc.save(path)?;
        tracing::info!("已更新 {}（修改 {} 条）", path.display(), modified);
    }

    Ok(modified)
}

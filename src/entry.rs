//! 词条处理
//!
//! 对单个词条的 val 字段应用清洗，清洗结果过短时回退为词头本身。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sanitizer;

/// 回退阈值：清洗后不足 2 个字符视为释义已无信息量
const MIN_CLEANED_CHARS: usize = 2;

/// 词库条目
///
/// key 为词头（恒定，本工具不修改），val 为释义（可能混有中文）。
/// 其余字段通过 flatten 原样保留、原样写回。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// 清洗单个词条的 val 字段
///
/// 返回 true 当且仅当 val 实际发生了变化（字符串精确比较）。
/// 没有 val 字段的条目原样跳过。
pub fn clean(entry: &mut VocabEntry) -> bool {
    let Some(original) = entry.val.as_ref() else {
        return false;
    };

    let cleaned = sanitizer::sanitize(original);

    // 清洗后为空或过短：回退为词头本身作为占位释义
    let final_val = if cleaned.chars().count() < MIN_CLEANED_CHARS {
        entry.key.clone()
    } else {
        cleaned
    };

    if &final_val != original {
        entry.val = Some(final_val);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(key: &str, val: &str) -> VocabEntry {
        VocabEntry {
            key: key.to_string(),
            val: Some(val.to_string()),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_fallback_when_cleaned_empty() {
        let mut e = entry("ephemeral", "短");
        assert!(clean(&mut e));
        assert_eq!(e.val.as_deref(), Some("ephemeral"));
    }

    #[test]
    fn test_fallback_when_cleaned_too_short() {
        // 清洗后只剩单个字符，同样回退
        let mut e = entry("apple", "a 苹果");
        assert!(clean(&mut e));
        assert_eq!(e.val.as_deref(), Some("apple"));
    }

    #[test]
    fn test_mixed_text_cleaned() {
        let mut e = entry("flow", "a steady flow 流动");
        assert!(clean(&mut e));
        assert_eq!(e.val.as_deref(), Some("a steady flow"));
    }

    #[test]
    fn test_already_clean_not_modified() {
        // 两字符释义恰好达到阈值，保持不变且不报告修改
        let mut e = entry("x", "ok");
        assert!(!clean(&mut e));
        assert_eq!(e.val.as_deref(), Some("ok"));
    }

    #[test]
    fn test_entry_without_val_untouched() {
        let mut e = VocabEntry {
            key: "bare".to_string(),
            val: None,
            extra: serde_json::Map::new(),
        };
        assert!(!clean(&mut e));
        assert!(e.val.is_none());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let raw = json!({
            "key": "word",
            "val": "含义 meaning here",
            "freq": 3,
            "tags": ["cet4"]
        });
        let mut e: VocabEntry = serde_json::from_value(raw).expect("parse entry");
        assert!(clean(&mut e));
        assert_eq!(e.val.as_deref(), Some("meaning here"));

        let back = serde_json::to_value(&e).expect("serialize entry");
        assert_eq!(back["freq"], 3);
        assert_eq!(back["tags"][0], "cet4");
        assert_eq!(back["key"], "word");
    }
}

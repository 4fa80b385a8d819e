//! 文本清洗器
//!
//! 从词库释义中剔除中文内容，只保留英文部分。
//!
//! ## 处理流程（顺序敏感，与既有数据保持兼容）
//! 1. 删除 CJK/全角区段字符（直接删除，接缝处不补空格）
//! 2. 空白折叠（连续空白 -> 单个空格）
//! 3. 删除中文标点（；、，。）
//! 4. 去除首尾的空格/逗号/分号/句点

/// 首尾修剪字符集（空格 + ASCII 逗号/分号/句点）
const TRIM_SET: &[char] = &[' ', ',', ';', '.'];

/// 中文标点
///
/// 注意：、(U+3001) 和 。(U+3002) 不在全角区段 U+FF00..U+FFEF 内，
/// 这一步对它们是必需的，不能并入区段删除
const CHINESE_PUNCTUATION: &[char] = &['；', '、', '，', '。'];

/// 判断字符是否落在需要剔除的区段
fn is_stripped(ch: char) -> bool {
    let code = ch as u32;
    // CJK Unified Ideographs
    (0x4E00..=0x9FFF).contains(&code)
        // CJK Unified Ideographs Extension A
        || (0x3400..=0x4DBF).contains(&code)
        // Halfwidth and Fullwidth Forms（含全角字母和全角标点）
        || (0xFF00..=0xFFEF).contains(&code)
}

/// 清洗文本：剔除中文后返回剩余的英文释义
///
/// 纯函数，任意输入都不会失败，结果可能为空串
pub fn sanitize(text: &str) -> String {
    // 1. 删除 CJK/全角字符
    let stripped: String = text.chars().filter(|ch| !is_stripped(*ch)).collect();

    // 2. 空白折叠
    let mut collapsed = String::with_capacity(stripped.len());
    let mut prev_whitespace = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            if !prev_whitespace {
                collapsed.push(' ');
                prev_whitespace = true;
            }
        } else {
            collapsed.push(ch);
            prev_whitespace = false;
        }
    }

    // 3. 删除中文标点
    let cleaned: String = collapsed
        .chars()
        .filter(|ch| !CHINESE_PUNCTUATION.contains(ch))
        .collect();

    // 4. 去除首尾的空格和残留标点
    let cleaned = cleaned.trim_matches(|ch| TRIM_SET.contains(&ch));

    cleaned.trim().to_string()
}

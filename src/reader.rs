//! 文本获取协作方
//!
//! 负责把磁盘上的纯文本文件解码为一致编码的字符串，
//! 自动检测编码（UTF-8、GBK 等）。核心切分逻辑只消费
//! 解码后的字符串，不关心文本来自哪里。

use encoding_rs::{Encoding, GBK, UTF_8};
use std::fs;
use std::path::Path;

use crate::error::SplitError;

/// 读取并解码文本文件
///
/// 仅接受 .txt/.md 文件；PDF 等格式的文本提取由外部工具负责，
/// 转换为 txt 后再处理。读取失败或格式不支持时返回明确错误
///
/// # 参数
/// - `path`: 输入文件路径
///
/// # 返回
/// 解码后的完整文本内容
pub fn read_text(path: &Path) -> Result<String, SplitError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or(SplitError::MissingExtension)?
        .to_lowercase();

    if ext != "txt" && ext != "md" {
        return Err(SplitError::UnsupportedFormat(ext));
    }

    let bytes = fs::read(path)?;
    let encoding = detect_encoding(&bytes);
    let (content, _encoding_used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        tracing::warn!(
            path = %path.display(),
            encoding = encoding.name(),
            "文件解码时出现错误，可能存在乱码"
        );
    }

    Ok(content.into_owned())
}

/// 检测字节序列的字符编码
///
/// 依次尝试：BOM 标记、UTF-8 解码、GBK 启发式判断，均不命中时
/// 默认按 UTF-8 处理
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    // 1. 检查 BOM (Byte Order Mark)
    if let Some((encoding, _bom_length)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    // 2. 尝试 UTF-8 解码
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    // 3. 检测是否为 GBK
    if looks_like_gbk(bytes) {
        return GBK;
    }

    // 4. 默认使用 UTF-8
    UTF_8
}

/// 检测字节序列是否像 GBK 编码
///
/// GBK 编码特征：
/// - 第一字节范围：0x81-0xFE
/// - 第二字节范围：0x40-0xFE
fn looks_like_gbk(bytes: &[u8]) -> bool {
    let mut gbk_pairs = 0;
    let mut total_pairs = 0;

    let mut i = 0;
    while i < bytes.len().saturating_sub(1) {
        let b1 = bytes[i];
        let b2 = bytes[i + 1];

        // 跳过 ASCII 字符
        if b1 < 0x80 {
            i += 1;
            continue;
        }

        total_pairs += 1;

        if (0x81..=0xFE).contains(&b1) && (0x40..=0xFE).contains(&b2) {
            gbk_pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    // 超过 50% 的非 ASCII 字节对符合 GBK 规则时认为是 GBK
    total_pairs > 0 && (gbk_pairs as f32 / total_pairs as f32) > 0.5
}

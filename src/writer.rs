//! 分段写出协作方
//!
//! 将切分得到的分段序列写为独立的 Markdown 文件。
//! 除 CLI 外唯一带副作用的模块。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SplitError;
use crate::segmenter::{section_filename, Section};

/// 将分段序列写为 Markdown 文件
///
/// 每个分段写为一个独立文件，内容为 `# 标题` 加正文，
/// 文件名由书名、章节编号和安全化标题拼接而成
///
/// # 参数
/// - `out_dir`: 输出目录，不存在时自动创建
/// - `book_name`: 书名，作为文件名前缀
/// - `sections`: 分段列表
///
/// # 返回
/// 按分段顺序排列的已写出文件路径
pub fn write_sections(
    out_dir: &Path,
    book_name: &str,
    sections: &[Section],
) -> Result<Vec<PathBuf>, SplitError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(sections.len());
    for section in sections {
        let filename = section_filename(book_name, section);
        let path = out_dir.join(&filename);
        let content = format!("# {}\n\n{}\n", section.title, section.body.trim());
        fs::write(&path, content)?;
        tracing::debug!(file = %path.display(), "已写出分段文件");
        written.push(path);
    }

    Ok(written)
}

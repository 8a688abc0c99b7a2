//! 通用图书章节分割库
//!
//! 输入一整本书的纯文本，自动识别章节/前言/附录类标题，
//! 按标题切分为有序的分段序列，并可将每个分段写为独立的
//! Markdown 文件。核心切分逻辑（标题识别 + 分段构建）是
//! 纯转换：单线程、单趟扫描、无 IO、对任意输入都不会失败。
//! 文本获取（编码检测）和文件写出作为协作方模块放在核心之外。

// 模块声明
pub mod error;
pub mod numeral;
pub mod reader;
pub mod segmenter;
pub mod writer;

pub use error::SplitError;
pub use numeral::chinese_numeral_to_int;
pub use segmenter::{
    section_filename, slugify_filename, split_into_sections, HeadingDetector, HeadingOccurrence,
    Section, SectionKind,
};

/// 对一段完整文本执行章节切分
///
/// `split_into_sections` 的库级入口别名。每次调用相互独立，
/// 没有跨调用的共享状态，多本书可以并行处理
pub fn split_text(content: &str) -> Vec<Section> {
    split_into_sections(content)
}

use serde::{Deserialize, Serialize};

// 子模块声明
pub mod heading_detector;
pub mod section_builder;

pub use heading_detector::HeadingDetector;
pub use section_builder::{section_filename, slugify_filename, split_into_sections};

/// 分段类型
///
/// 标识一个分段是正文章节、前言类内容还是附录类内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// 章节（第X章/节/回/讲/部）
    Chapter,
    /// 前言类（译序、前言、引言、序言、自序、序）
    Preface,
    /// 附录类（后记、编后记、附录）
    Appendix,
}

/// 标题出现位置
///
/// 表示在源文本中识别到的一处标题行，包含字节偏移、分段类型和原始标题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingOccurrence {
    /// 标题行在源文本中的起始字节偏移
    pub offset: usize,
    /// 分段类型
    pub kind: SectionKind,
    /// 原始标题文本（章节类为"编号单位 标题尾部"拼接）
    pub raw_title: String,
}

/// 分段数据
///
/// 表示切分后的一个分段，包含类型、标题、章节编号（可解析时）和正文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 分段类型
    pub kind: SectionKind,
    /// 分段标题
    pub title: String,
    /// 章节编号（仅章节类且编号可解析时存在）
    pub numeric_label: Option<u32>,
    /// 分段正文（不含标题行本身）
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_kind_serde_tags() {
        assert_eq!(
            serde_json::to_string(&SectionKind::Chapter).unwrap(),
            "\"chapter\""
        );
        assert_eq!(
            serde_json::to_string(&SectionKind::Preface).unwrap(),
            "\"preface\""
        );
        assert_eq!(
            serde_json::to_string(&SectionKind::Appendix).unwrap(),
            "\"appendix\""
        );
    }

    #[test]
    fn test_section_kind_precedence_order() {
        // 同一偏移冲突时的裁决顺序：章节 > 前言 > 附录
        assert!(SectionKind::Chapter < SectionKind::Preface);
        assert!(SectionKind::Preface < SectionKind::Appendix);
    }

    #[test]
    fn test_section_creation() {
        let section = Section {
            kind: SectionKind::Chapter,
            title: "第一章 开始".to_string(),
            numeric_label: Some(1),
            body: "正文内容".to_string(),
        };

        assert_eq!(section.kind, SectionKind::Chapter);
        assert_eq!(section.title, "第一章 开始");
        assert_eq!(section.numeric_label, Some(1));
        assert_eq!(section.body, "正文内容");
    }

    #[test]
    fn test_section_json_round_trip() {
        let section = Section {
            kind: SectionKind::Preface,
            title: "前言".to_string(),
            numeric_label: None,
            body: "".to_string(),
        };

        let json = serde_json::to_string(&section).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
    }
}

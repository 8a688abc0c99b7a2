use regex::Regex;

use super::{HeadingOccurrence, SectionKind};

/// 标题检测器
///
/// 在整篇文本上独立应用三类标题模式（章节/前言/附录），
/// 合并命中结果并按偏移排序，产出标题出现位置列表
pub struct HeadingDetector {
    /// 章节标题模式：第X章/节/回/讲/部
    chapter_re: Regex,
    /// 前言类标题模式：整行仅为 译序/前言/引言/序言/自序/序
    preface_re: Regex,
    /// 附录类标题模式：后记/编后记，或以 附录/附:/附： 开头
    appendix_re: Regex,
}

impl HeadingDetector {
    /// 创建新的标题检测器实例
    ///
    /// 编译所有标题匹配模式。行首空白使用 [^\S\r\n]
    /// （不含换行的空白），保证匹配不会越过行边界、
    /// 偏移始终落在标题行自身的行首
    pub fn new() -> Self {
        let chapter_re = Regex::new(
            r"(?m)^[^\S\r\n]*(第([零〇一二两三四五六七八九十百千\d]+)([章节回讲部]))[^\S\r\n]*[：:．. ]?[^\S\r\n]*(.*)$",
        )
        .unwrap();
        let preface_re =
            Regex::new(r"(?m)^[^\S\r\n]*(译序|前言|引言|序言|自序|序)[^\S\r\n]*\r?$").unwrap();
        let appendix_re =
            Regex::new(r"(?m)^[^\S\r\n]*(后记|编后记|附(?:录|：|:).*?)[^\S\r\n]*\r?$").unwrap();

        Self {
            chapter_re,
            preface_re,
            appendix_re,
        }
    }

    /// 识别文本中的所有标题出现位置
    ///
    /// 三类模式分别扫描全文，命中合并后按偏移升序排列。
    /// 同一偏移同时命中多类模式时只保留一个，
    /// 优先级为章节 > 前言 > 附录。识别过程不会失败：
    /// 没有任何标题时返回空列表
    ///
    /// # 参数
    /// - `text`: 完整源文本
    ///
    /// # 返回
    /// 按偏移升序、偏移互不重复的标题出现位置列表
    pub fn find_headings(&self, text: &str) -> Vec<HeadingOccurrence> {
        let mut headings = Vec::new();

        for caps in self.chapter_re.captures_iter(text) {
            let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let full = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let tail = caps.get(4).map(|m| m.as_str().trim()).unwrap_or("");
            let raw_title = if tail.is_empty() {
                full.to_string()
            } else {
                format!("{} {}", full, tail)
            };
            headings.push(HeadingOccurrence {
                offset,
                kind: SectionKind::Chapter,
                raw_title,
            });
        }

        for caps in self.preface_re.captures_iter(text) {
            let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            headings.push(HeadingOccurrence {
                offset,
                kind: SectionKind::Preface,
                raw_title: title.to_string(),
            });
        }

        for caps in self.appendix_re.captures_iter(text) {
            let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            headings.push(HeadingOccurrence {
                offset,
                kind: SectionKind::Appendix,
                raw_title: title.to_string(),
            });
        }

        // 按（偏移，优先级）排序后去除同偏移的重复命中
        headings.sort_by(|a, b| (a.offset, a.kind).cmp(&(b.offset, b.kind)));
        headings.dedup_by_key(|h| h.offset);
        headings
    }
}

impl Default for HeadingDetector {
    fn default() -> Self {
        Self::new()
    }
}

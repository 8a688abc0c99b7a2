use regex::Regex;
use std::sync::OnceLock;

use super::{HeadingDetector, Section, SectionKind};
use crate::numeral::chinese_numeral_to_int;

/// 未识别到任何标题时整本书的兜底标题
const FALLBACK_TITLE: &str = "全文";

/// 首个标题之前的无标题内容使用的标题
const FRONT_MATTER_TITLE: &str = "前言_及其他";

/// 安全文件名的最大字符数
const MAX_FILENAME_CHARS: usize = 120;

/// 根据标题切分文本为分段序列
///
/// 纯转换，无副作用，对任意输入（含空串）都返回有效结果：
/// 1. 未识别到标题时，整篇文本作为一个章节类分段返回
/// 2. 相邻两个标题之间的文本构成一个分段，分段首行（标题行本身）
///    被去除，其余各行去掉行尾空白后重新拼接为正文
/// 3. 章节类分段在编号可解析时带上整数编号；编号单调性属于输入
///    质量问题，这里不做校验或纠正
/// 4. 首个标题之前若有非空内容，作为前言类分段插入到最前面
///
/// # 参数
/// - `content`: 完整源文本
///
/// # 返回
/// 按源文本顺序排列的分段列表，至少包含一个分段
pub fn split_into_sections(content: &str) -> Vec<Section> {
    let detector = HeadingDetector::new();
    let headings = detector.find_headings(content);

    if headings.is_empty() {
        // 找不到标题，整体作为一个分段
        return vec![Section {
            kind: SectionKind::Chapter,
            title: FALLBACK_TITLE.to_string(),
            numeric_label: None,
            body: content.to_string(),
        }];
    }

    let mut sections = Vec::with_capacity(headings.len() + 1);

    for (idx, heading) in headings.iter().enumerate() {
        // 末尾哨兵：最后一个分段延伸到文本结尾
        let end = headings
            .get(idx + 1)
            .map(|next| next.offset)
            .unwrap_or(content.len());
        let span = &content[heading.offset..end];

        // 去掉首行标题，其余各行去除行尾空白
        let mut lines = span.lines();
        lines.next();
        let body = lines
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n");

        let numeric_label = match heading.kind {
            SectionKind::Chapter => parse_chapter_title(&heading.raw_title)
                .and_then(|(numeral, _, _)| chinese_numeral_to_int(numeral)),
            _ => None,
        };

        sections.push(Section {
            kind: heading.kind,
            title: heading.raw_title.clone(),
            numeric_label,
            body,
        });
    }

    // 正文前可能存在无标题内容，作为前言插入
    let pre_body = content[..headings[0].offset].trim();
    if !pre_body.is_empty() {
        sections.insert(
            0,
            Section {
                kind: SectionKind::Preface,
                title: FRONT_MATTER_TITLE.to_string(),
                numeric_label: None,
                body: pre_body.to_string(),
            },
        );
    }

    sections
}

/// 章节标题拆解模式，只编译一次
fn chapter_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^第([零〇一二两三四五六七八九十百千\d]+)([章节回讲部])\s*(.*)$").unwrap()
    })
}

/// 从章节标题中拆出（编号串，单位字符，尾部标题）
///
/// 标题不符合章节文法时返回 None
fn parse_chapter_title(title: &str) -> Option<(&str, &str, &str)> {
    let caps = chapter_title_re().captures(title)?;
    let numeral = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();
    let tail = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
    Some((numeral, unit, tail))
}

/// 将标题转为安全文件名
///
/// 空白串折叠为单个空格并去除首尾空白，文件名非法字符替换为下划线，
/// 超长时按字符截断。截断可能恰好落在空格上，截断后再去一次尾部
/// 空白，保证该函数确定性且幂等
pub fn slugify_filename(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed
        .chars()
        .map(|ch| match ch {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .take(MAX_FILENAME_CHARS)
        .collect();
    truncated.trim_end().to_string()
}

/// 生成分段的输出文件名
///
/// 文件名策略：书名_编号_章节标题。章节类且编号可解析时使用
/// "第N章"（或原单位字符）形式的规范编号；编号不可解析的章节
/// 和前言/附录类直接使用原始标题
///
/// # 参数
/// - `book_name`: 书名，作为文件名前缀
/// - `section`: 分段数据
///
/// # 返回
/// 形如 `书名_第3章_标题.md` 的安全文件名
pub fn section_filename(book_name: &str, section: &Section) -> String {
    let base = match section.kind {
        SectionKind::Chapter => match parse_chapter_title(&section.title) {
            Some((numeral, unit, tail)) => match chinese_numeral_to_int(numeral) {
                Some(number) => {
                    let suffix = if tail.is_empty() { "未命名" } else { tail };
                    format!("{}_第{}{}_{}", book_name, number, unit, suffix)
                }
                None => format!("{}_{}", book_name, section.title),
            },
            None => format!("{}_{}", book_name, section.title),
        },
        SectionKind::Preface | SectionKind::Appendix => {
            format!("{}_{}", book_name, section.title)
        }
    };

    format!("{}.md", slugify_filename(&base))
}

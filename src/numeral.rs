//! 中文数字解析
//!
//! 将章节编号中的中文数字（如"十"、"二十三"、"一百零二"）转换为整数。
//! 映射表为进程级静态数据，解析过程不可变、无副作用。

/// 中文数字字符到数值的映射
///
/// 包含数字字符（零〇一二两三四五六七八九）和位值字符（十百千）。
/// "两"作为"二"的口语变体同样映射为 2。
const CHINESE_NUM_MAP: &[(char, u32)] = &[
    ('零', 0),
    ('〇', 0),
    ('一', 1),
    ('二', 2),
    ('两', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
    ('百', 100),
    ('千', 1000),
];

/// 查找单个字符对应的数值
fn lookup(ch: char) -> Option<u32> {
    CHINESE_NUM_MAP
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, v)| *v)
}

/// 将中文数字或阿拉伯数字字符串解析为整数
///
/// 解析规则：
/// - 纯阿拉伯数字直接解析
/// - 中文数字按位值累加：遇到位值字符（十/百/千）时，将当前待定的
///   个位数（缺省为 1，因此"十"单独出现解析为 10）乘以位值并累加；
///   遇到数字字符时记为待定个位数；扫描结束后剩余的待定个位数并入总和
/// - 超出该文法的输入（未知字符、溢出）返回 None，不会 panic
///
/// # 参数
/// - `text`: 数字字符串，如 "十"、"二十三"、"一百零二"、"3"
///
/// # 返回
/// 解析成功返回整数，无法解析返回 None
pub fn chinese_numeral_to_int(text: &str) -> Option<u32> {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }

    let mut total: u32 = 0;
    let mut unit: Option<u32> = None;

    for ch in text.chars() {
        match ch {
            '十' | '百' | '千' => {
                let factor = lookup(ch)?;
                // "十"、"二十" 这类位值前无个位数时按 1 处理
                let pending = unit.unwrap_or(1);
                total = total.checked_add(pending.checked_mul(factor)?)?;
                unit = None;
            }
            _ => {
                unit = Some(lookup(ch)?);
            }
        }
    }

    if let Some(u) = unit {
        total = total.checked_add(u)?;
    }

    // 全零或空输入视为无效编号
    if total == 0 {
        return None;
    }

    Some(total)
}

use thiserror::Error;

/// 章节分割工具的错误类型
///
/// 核心切分逻辑本身没有失败路径，错误只来自文本读取和文件写出：
/// 输入不可读必须作为明确错误上报给调用方，不允许悄悄退化为空文本
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("不支持的文件格式: {0}，仅支持 .txt/.md")]
    UnsupportedFormat(String),
    #[error("无法识别文件扩展名")]
    MissingExtension,
    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

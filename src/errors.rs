use std::fmt;

use crate::resolver::SUPPORTED_SHAPES;

#[derive(Debug, Clone)]
pub enum ConflinkError {
    PageIdNotFound(String),
    MalformedUrl(String),
    IdentifierOutOfRange(String),
    InvalidToken(String),
}

impl ConflinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ConflinkError::PageIdNotFound(_) => "E001",
            ConflinkError::MalformedUrl(_) => "E002",
            ConflinkError::IdentifierOutOfRange(_) => "E003",
            ConflinkError::InvalidToken(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ConflinkError::PageIdNotFound(_) => "Page ID Not Found",
            ConflinkError::MalformedUrl(_) => "Malformed URL",
            ConflinkError::IdentifierOutOfRange(_) => "Identifier Out Of Range",
            ConflinkError::InvalidToken(_) => "Invalid Token",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ConflinkError::PageIdNotFound(msg) => msg,
            ConflinkError::MalformedUrl(msg) => msg,
            ConflinkError::IdentifierOutOfRange(msg) => msg,
            ConflinkError::InvalidToken(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ConflinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ConflinkError {}

// 便捷的构造函数
impl ConflinkError {
    /// Diagnostic carries the offending URL plus every shape the resolver
    /// knows, so callers can echo actionable feedback to the user.
    pub fn page_id_not_found<T: Into<String>>(url: T) -> Self {
        ConflinkError::PageIdNotFound(format!(
            "no pageId found in Confluence URL: {}. Supported formats: {}",
            url.into(),
            SUPPORTED_SHAPES.join(", ")
        ))
    }

    pub fn malformed_url<T: Into<String>>(msg: T) -> Self {
        ConflinkError::MalformedUrl(msg.into())
    }

    pub fn identifier_out_of_range<T: Into<String>>(msg: T) -> Self {
        ConflinkError::IdentifierOutOfRange(msg.into())
    }

    pub fn invalid_token<T: Into<String>>(msg: T) -> Self {
        ConflinkError::InvalidToken(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<url::ParseError> for ConflinkError {
    fn from(err: url::ParseError) -> Self {
        ConflinkError::MalformedUrl(err.to_string())
    }
}

impl From<base64::DecodeError> for ConflinkError {
    fn from(err: base64::DecodeError) -> Self {
        ConflinkError::InvalidToken(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConflinkError>;

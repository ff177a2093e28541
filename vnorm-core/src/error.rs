use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormError {
    // 分类错误
    #[error("No tagging covers input line: {0:?}")]
    Tagging(String),

    // 言语化错误
    #[error("Malformed tagged input: {0}")]
    MalformedTaggedInput(String),

    #[error("Missing required field '{field}' in {category} token")]
    MissingField { category: String, field: String },

    #[error("Unknown field '{field}' in {category} token")]
    UnknownField { category: String, field: String },

    // 语法构建错误
    #[error("Resource load failed: {path} - {reason}")]
    ResourceLoad { path: String, reason: String },

    #[error("Invalid weight for category '{category}': {weight}")]
    InvalidWeight { category: String, weight: f64 },

    // 缓存错误
    #[error("Grammar cache error: {0}")]
    Cache(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NormResult<T> = Result<T, NormError>;

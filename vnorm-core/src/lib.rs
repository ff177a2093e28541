//! V-Norm Core Engine
//!
//! 德语文本正则化核心引擎：按类别组合的 WFST 分类语法 +
//! 严格的中间表示解析 + 按类别的言语化渲染。

#![warn(rust_2018_idioms)]

pub mod fst;
pub mod grammar;
pub mod token;
pub mod verbalizers;
pub mod engine;
pub mod cache;
pub mod config;
pub mod error;

// Re-export key types
pub use cache::{FsGrammarCache, GrammarCache, MemoryGrammarCache};
pub use config::{InputCase, NormalizerConfig, WeightTable};
pub use engine::Normalizer;
pub use error::{NormError, NormResult};
pub use token::{parse_tagged_line, serialize_line, SemioticToken, TaggedLine};

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): 按 VNORM_LOG 环境变量过滤
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("VNORM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 静默运行，如需日志请用 --features debug-logs 编译
    }
}

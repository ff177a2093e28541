//! FST 模块 - 加权有限状态转换器代数
//!
//! 语法管道的底层协作者：提供构造（acceptor / cross / class）、
//! 组合（concat / union / closure / weighted）、应用（shortest-path /
//! n-best）、上下文重写（cdrewrite）以及归档序列化（Far）。
//!
//! 上层语法只通过这里导出的命名操作构建，不触碰内部表示。

pub mod transducer;
pub mod apply;
pub mod rewrite;
pub mod archive;

pub use transducer::{CharClass, Transducer};
pub use apply::Candidate;
pub use rewrite::RewriteRule;
pub use archive::Far;

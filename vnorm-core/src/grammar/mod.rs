//! Grammar 模块 - 分类语法
//!
//! 每个符号学类别一个识别器（tagger），由 classify 以加权并组合成
//! 整行分类语法。共享的字符类 / 包装工具在 common，词表资源在
//! resources。

pub mod common;
pub mod resources;
pub mod taggers;

pub use resources::Resources;
pub use taggers::classify::build_classifier;

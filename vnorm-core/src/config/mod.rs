//! 配置模块
//!
//! 统一的正则化配置，从 ~/.config/vnorm/config.toml 加载。
//! 类别权重是显式配置表，不在语法代码里硬编码。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{NormError, NormResult};

/// 输入大小写模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCase {
    /// 输入已全部小写
    LowerCased,
    /// 保留原始大小写
    Cased,
}

impl InputCase {
    /// 缓存键片段
    pub fn key(&self) -> &'static str {
        match self {
            InputCase::LowerCased => "lower_cased",
            InputCase::Cased => "cased",
        }
    }
}

/// 类别权重表 - 越小优先级越高
///
/// 数值类别必须压过 word 兜底；并列权重的消歧由
/// 最短路径的字典序规则决定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub cardinal: f64,
    pub ordinal: f64,
    pub decimal: f64,
    pub fraction: f64,
    pub date: f64,
    pub time: f64,
    pub electronic: f64,
    pub whitelist: f64,
    pub punctuation: f64,
    pub word: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            cardinal: 1.0,
            ordinal: 1.1,
            decimal: 1.1,
            fraction: 1.1,
            date: 1.1,
            time: 1.1,
            electronic: 1.1,
            whitelist: 1.01,
            punctuation: 1.1,
            word: 100.0,
        }
    }
}

impl WeightTable {
    /// 以固定顺序列出 (类别, 权重)
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("cardinal", self.cardinal),
            ("ordinal", self.ordinal),
            ("decimal", self.decimal),
            ("fraction", self.fraction),
            ("date", self.date),
            ("time", self.time),
            ("electronic", self.electronic),
            ("whitelist", self.whitelist),
            ("punctuation", self.punctuation),
            ("word", self.word),
        ]
    }

    /// 权重必须非负
    pub fn validate(&self) -> NormResult<()> {
        for (category, weight) in self.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(NormError::InvalidWeight {
                    category: category.to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }
}

/// 正则化引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// 语言标签（缓存键的一部分）
    pub language: String,
    /// 输入大小写模式
    pub input_case: InputCase,
    /// 确定性模式：单一输出；关闭后可取 n-best 变体
    pub deterministic: bool,
    /// 类别权重表
    pub weights: WeightTable,
    /// 语法缓存目录；None 关闭缓存
    pub cache_dir: Option<PathBuf>,
    /// 强制重建并覆盖缓存
    pub overwrite_cache: bool,
    /// 外部白名单文件；None 使用内置表
    pub whitelist_path: Option<PathBuf>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            input_case: InputCase::LowerCased,
            deterministic: true,
            weights: WeightTable::default(),
            cache_dir: None,
            overwrite_cache: false,
            whitelist_path: None,
        }
    }
}

impl NormalizerConfig {
    /// 归档键：`{language}_tn_{case_mode}`
    pub fn cache_key(&self) -> String {
        format!("{}_tn_{}", self.language, self.input_case.key())
    }

    /// 加载配置文件；不存在时返回默认配置
    pub fn load() -> NormResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("config file not found, using defaults: {:?}", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NormError::ConfigParse {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("loaded config: {:?}", config_path);
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> NormResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| NormError::ConfigParse {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(&config_path, content)?;

        tracing::info!("saved config: {:?}", config_path);
        Ok(())
    }

    fn config_path() -> NormResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| NormError::ConfigParse {
            path: "<config dir>".to_string(),
            reason: "cannot determine platform config directory".to_string(),
        })?;

        Ok(config_dir.join("vnorm").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_prioritize_numeric_over_word() {
        let w = WeightTable::default();
        assert!(w.cardinal < w.word);
        assert!(w.fraction < w.word);
        assert!(w.whitelist < w.word);
    }

    #[test]
    fn test_weight_validation() {
        let mut w = WeightTable::default();
        assert!(w.validate().is_ok());

        w.fraction = -1.0;
        let err = w.validate().unwrap_err();
        assert!(matches!(err, NormError::InvalidWeight { .. }));
    }

    #[test]
    fn test_cache_key() {
        let config = NormalizerConfig::default();
        assert_eq!(config.cache_key(), "de_tn_lower_cased");

        let cased = NormalizerConfig {
            input_case: InputCase::Cased,
            ..NormalizerConfig::default()
        };
        assert_eq!(cased.cache_key(), "de_tn_cased");
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = NormalizerConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let restored: NormalizerConfig = toml::from_str(&text).unwrap();
        assert_eq!(restored.weights, config.weights);
        assert_eq!(restored.input_case, config.input_case);
        assert_eq!(restored.language, config.language);
    }
}

//! Far - 命名语法归档
//!
//! 把编译好的转换器按语法名存档，供缓存层整体序列化。
//! 序列化采用 JSON（serde），往返是逐位精确的。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::transducer::Transducer;
use crate::error::{NormError, NormResult};

/// 语法归档：语法名 → 编译好的转换器
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Far {
    grammars: BTreeMap<String, Transducer>,
}

impl Far {
    pub fn new() -> Self {
        Self::default()
    }

    /// 存入一个语法
    pub fn insert(&mut self, name: &str, fst: Transducer) {
        self.grammars.insert(name.to_string(), fst);
    }

    /// 按名取出
    pub fn get(&self, name: &str) -> Option<&Transducer> {
        self.grammars.get(name)
    }

    /// 归档中的语法名（字典序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.grammars.keys().map(|s| s.as_str())
    }

    /// 序列化为 JSON 文本
    pub fn to_json(&self) -> NormResult<String> {
        serde_json::to_string(self).map_err(|e| NormError::Cache(format!("serialize: {}", e)))
    }

    /// 从 JSON 文本恢复
    pub fn from_json(s: &str) -> NormResult<Self> {
        serde_json::from_str(s).map_err(|e| NormError::Cache(format!("deserialize: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_roundtrip() {
        let mut far = Far::new();
        far.insert("tokenize_and_classify", Transducer::cross("drei", "3").weighted(1.5));

        let json = far.to_json().unwrap();
        let restored = Far::from_json(&json).unwrap();

        let fst = restored.get("tokenize_and_classify").unwrap();
        let best = fst.apply_best("drei").unwrap();
        assert_eq!(best.output, "3");
        assert!((best.weight - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_far_roundtrip_is_bit_exact() {
        let mut far = Far::new();
        far.insert("a", Transducer::accept("x").weighted(0.1));
        far.insert("b", Transducer::accept("y"));

        let json = far.to_json().unwrap();
        let json_again = Far::from_json(&json).unwrap().to_json().unwrap();
        assert_eq!(json, json_again);
    }

    #[test]
    fn test_far_get_missing() {
        let far = Far::new();
        assert!(far.get("fehlt").is_none());
    }

    #[test]
    fn test_far_from_invalid_json() {
        assert!(Far::from_json("kein json").is_err());
    }
}

//! Whitelist tagger - 白名单替换
//!
//! 表驱动：书面缩写直接改写为展开形式，序列化与 word 一致
//! （`name` 字段，无类别包装）。大小写模式下额外接受
//! 首字母大写的键。
//!
//! `dr.` → `name: "doktor"`

use crate::fst::Transducer;
use crate::grammar::common::field;
use crate::grammar::resources::Resources;

/// 首字母大写变体
fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn fst(resources: &Resources, cased: bool) -> Transducer {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in &resources.whitelist {
        pairs.push((key.clone(), value.clone()));
        if cased {
            let cap = capitalized(key);
            if cap != *key {
                pairs.push((cap, value.clone()));
            }
        }
    }

    field("name", Transducer::string_map(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar(cased: bool) -> Transducer {
        fst(&Resources::load(None).unwrap(), cased)
    }

    #[test]
    fn test_whitelist_rewrites() {
        assert_eq!(
            grammar(false).apply_best("dr.").unwrap().output,
            "name: \"doktor\""
        );
        assert_eq!(
            grammar(false).apply_best("z.b.").unwrap().output,
            "name: \"zum beispiel\""
        );
    }

    #[test]
    fn test_cased_mode_accepts_capitalized_key() {
        assert!(grammar(false).apply_best("Dr.").is_none());
        assert_eq!(
            grammar(true).apply_best("Dr.").unwrap().output,
            "name: \"doktor\""
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(grammar(false).apply_best("xyz.").is_none());
    }
}

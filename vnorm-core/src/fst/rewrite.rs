//! 上下文重写 - cdrewrite
//!
//! 把模式转换器在输入串上做最左最长替换，其余部分原样通过
//! （全函数：任何输入都有输出）。右上下文目前支持"任意"与
//! "串尾"两种——后者用于把句末的口语化 "punkt" 还原为句号。

use super::transducer::Transducer;

/// 重写规则（模式 + 右上下文约束）
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Transducer,
    eos_only: bool,
}

/// 构建重写规则：任意上下文
pub fn cdrewrite(pattern: Transducer) -> RewriteRule {
    RewriteRule {
        pattern,
        eos_only: false,
    }
}

impl RewriteRule {
    /// 约束为仅在串尾（end-of-string）应用
    pub fn eos(mut self) -> Self {
        self.eos_only = true;
        self
    }

    /// 应用规则：最左最长匹配，匹配间不重叠，未匹配部分原样保留
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, replacement)) = self.best_match_at(&chars[i..]) {
                if !self.eos_only || i + len == chars.len() {
                    out.push_str(&replacement);
                    i += len;
                    continue;
                }
            }
            out.push(chars[i]);
            i += 1;
        }

        out
    }

    /// 位置处的最长匹配；同长取 (权重, 输出字典序) 最小
    fn best_match_at(&self, rest: &[char]) -> Option<(usize, String)> {
        let matches = self.pattern.prefix_matches(rest);
        let best = matches
            .into_iter()
            .filter(|m| m.len > 0)
            .max_by(|a, b| {
                a.len
                    .cmp(&b.len)
                    .then_with(|| b.weight.total_cmp(&a.weight))
                    .then_with(|| b.output.cmp(&a.output))
            })?;
        Some((best.len, best.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_anywhere() {
        let rule = cdrewrite(Transducer::cross("uhr", "Uhr"));
        assert_eq!(rule.apply("14:30 uhr heute"), "14:30 Uhr heute");
    }

    #[test]
    fn test_rewrite_is_total() {
        let rule = cdrewrite(Transducer::cross("x", "y"));
        assert_eq!(rule.apply("ohne treffer"), "ohne treffer");
    }

    #[test]
    fn test_rewrite_eos_context() {
        let rule = cdrewrite(Transducer::cross(" punkt", ".")).eos();
        assert_eq!(rule.apply("hotmail punkt com punkt"), "hotmail punkt com.");
        // 串中间的 punkt 不受影响
        assert_eq!(rule.apply("der punkt ist klar"), "der punkt ist klar");
    }

    #[test]
    fn test_rewrite_leftmost_longest() {
        let rule = cdrewrite(
            Transducer::cross("ab", "1").union(Transducer::cross("abc", "2")),
        );
        // 最长匹配优先
        assert_eq!(rule.apply("abcd"), "2d");
    }

    #[test]
    fn test_rewrite_idempotent_after_application() {
        let rule = cdrewrite(Transducer::cross(" punkt", ".")).eos();
        let once = rule.apply("web punkt de punkt");
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_rewrite_union_of_patterns() {
        let spacing = cdrewrite(
            Transducer::cross(" .", ".").union(Transducer::cross(" ,", ",")),
        );
        assert_eq!(spacing.apply("wort . weiter , ende"), "wort. weiter, ende");
    }
}

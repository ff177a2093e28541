//! Electronic verbalizer - 电子地址的口语化
//!
//! `electronic { username: "abc" domain: "hotmail.com" }`
//!     → `a b c at hotmail punkt com`
//!
//! 用户名逐字符拼读（数字与符号查读法表）；域名标签先查
//! 服务器/域名词表（整词读出），查不到再拼读；内部句点读作
//! "punkt"；被 tagger 吸收的句末句点通过串尾重写还原为 `.`。
//! 非确定性模式额外给出整个域名逐字符拼读的变体。

use std::collections::BTreeMap;

use crate::error::{NormError, NormResult};
use crate::fst::rewrite::{cdrewrite, RewriteRule};
use crate::fst::Transducer;
use crate::grammar::resources::Resources;
use crate::token::SemioticToken;

const ALLOWED: [&str; 3] = ["protocol", "username", "domain"];

#[derive(Debug, Clone)]
pub struct ElectronicVerbalizer {
    digit_names: BTreeMap<char, String>,
    symbol_names: BTreeMap<char, String>,
    server_names: Vec<String>,
    domain_words: Vec<String>,
    final_period: RewriteRule,
}

impl ElectronicVerbalizer {
    pub fn new(resources: &Resources) -> Self {
        Self {
            digit_names: resources.digit_names.clone(),
            symbol_names: resources.symbol_names.clone(),
            server_names: resources.server_names.clone(),
            domain_words: resources.domain_words.clone(),
            // 串尾的 " punkt" 还原为字面句号
            final_period: cdrewrite(Transducer::cross(" punkt", ".")).eos(),
        }
    }

    /// 渲染；首个元素是主候选，非确定性模式可有多个
    pub fn render(&self, token: &SemioticToken, deterministic: bool) -> NormResult<Vec<String>> {
        for (name, _) in &token.fields {
            if !ALLOWED.contains(&name.as_str()) {
                return Err(NormError::UnknownField {
                    category: token.category.clone(),
                    field: name.clone(),
                });
            }
        }
        let domain = token.require("domain")?;

        let mut variants = vec![self.assemble(token, domain, false)];
        if !deterministic {
            let spelled = self.assemble(token, domain, true);
            if !variants.contains(&spelled) {
                variants.push(spelled);
            }
        }
        Ok(variants)
    }

    fn assemble(&self, token: &SemioticToken, domain: &str, spell_all: bool) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(protocol) = token.get("protocol") {
            parts.push(self.spell(protocol));
        }
        if let Some(username) = token.get("username") {
            parts.push(self.spell(username));
            parts.push("at".to_string());
        }
        parts.push(self.domain_spoken(domain, spell_all));

        self.final_period.apply(&parts.join(" "))
    }

    /// 逐字符拼读：数字与符号查表，字母小写读出
    fn spell(&self, s: &str) -> String {
        let mut units: Vec<String> = Vec::new();
        for c in s.chars() {
            if let Some(name) = self.digit_names.get(&c) {
                units.push(name.clone());
            } else if let Some(name) = self.symbol_names.get(&c) {
                units.push(name.clone());
            } else {
                units.push(c.to_lowercase().collect());
            }
        }
        units.join(" ")
    }

    /// 域名读法：标签查词表，句点读 "punkt"
    fn domain_spoken(&self, domain: &str, spell_all: bool) -> String {
        let (body, absorbed_period) = match domain.strip_suffix('.') {
            Some(body) => (body, true),
            None => (domain, false),
        };

        let mut spoken: Vec<String> = Vec::new();
        for label in body.split('.') {
            let lowered = label.to_lowercase();
            let known = self.server_names.contains(&lowered)
                || self.domain_words.contains(&lowered);
            if known && !spell_all {
                spoken.push(lowered);
            } else {
                spoken.push(self.spell(label));
            }
        }

        let mut out = spoken.join(" punkt ");
        if absorbed_period {
            out.push_str(" punkt");
        }
        out
    }
}

//! Verbalizers - 言语化
//!
//! 把解析好的符号学 token 渲染为最终表层文本：每个类别一个
//! 渲染器，token 渲染结果以单空格连接，最后跑跨 token 的
//! 后处理重写（把句读贴回前一个 token）。
//!
//! 渲染是严格的左逆：必需字段缺失拒收（MissingField），
//! 未知字段拒收（UnknownField），从不默认、从不丢弃。

pub mod fraction;
pub mod numbers;
pub mod datetime;
pub mod electronic;

use crate::error::{NormError, NormResult};
use crate::fst::rewrite::{cdrewrite, RewriteRule};
use crate::fst::Transducer;
use crate::grammar::resources::Resources;
use crate::token::{SemioticToken, TaggedLine, WORD_CATEGORY};

/// 非确定性模式下整行变体数量上限
const VARIANT_CAP: usize = 8;

/// 言语化组合器
#[derive(Debug, Clone)]
pub struct Verbalizer {
    electronic: electronic::ElectronicVerbalizer,
    spacing: RewriteRule,
    deterministic: bool,
}

impl Verbalizer {
    pub fn new(resources: &Resources, deterministic: bool) -> Self {
        // 句末类句读前的空格删除（跨 token 边界修正）
        let spacing = cdrewrite(Transducer::string_map([
            (" .", "."),
            (" ,", ","),
            (" !", "!"),
            (" ?", "?"),
            (" ;", ";"),
            (" :", ":"),
            (" )", ")"),
            (" ]", "]"),
            (" }", "}"),
        ]));

        Self {
            electronic: electronic::ElectronicVerbalizer::new(resources),
            spacing,
            deterministic,
        }
    }

    /// 渲染单个 token；首个元素是主候选
    pub fn render_token(&self, token: &SemioticToken) -> NormResult<Vec<String>> {
        match token.category.as_str() {
            "cardinal" => Ok(vec![numbers::cardinal(token)?]),
            "ordinal" => Ok(vec![numbers::ordinal(token)?]),
            "decimal" => Ok(vec![numbers::decimal(token)?]),
            "fraction" => Ok(vec![fraction::render(token)?]),
            "date" => Ok(vec![datetime::date(token)?]),
            "time" => Ok(vec![datetime::time(token)?]),
            "electronic" => self.electronic.render(token, self.deterministic),
            WORD_CATEGORY => Ok(vec![word(token)?]),
            other => Err(NormError::MalformedTaggedInput(format!(
                "unknown category: {}",
                other
            ))),
        }
    }

    /// 渲染整行（主候选）
    pub fn render_line(&self, line: &TaggedLine) -> NormResult<String> {
        let mut parts = Vec::with_capacity(line.len());
        for token in line {
            let mut variants = self.render_token(token)?;
            parts.push(variants.swap_remove(0));
        }
        Ok(self.postprocess(&parts.join(" ")))
    }

    /// 渲染整行的全部变体（非确定性模式；确定性模式只有主候选）
    pub fn render_line_variants(&self, line: &TaggedLine) -> NormResult<Vec<String>> {
        let mut variants: Vec<Vec<String>> = vec![Vec::new()];
        for token in line {
            let renderings = self.render_token(token)?;
            let mut next = Vec::new();
            for prefix in &variants {
                for r in &renderings {
                    if next.len() >= VARIANT_CAP {
                        break;
                    }
                    let mut v = prefix.clone();
                    v.push(r.clone());
                    next.push(v);
                }
            }
            variants = next;
        }

        let mut out: Vec<String> = Vec::new();
        for v in variants {
            let rendered = self.postprocess(&v.join(" "));
            if !out.contains(&rendered) {
                out.push(rendered);
            }
        }
        Ok(out)
    }

    /// 跨 token 后处理；对已是最终形态的文本是恒等变换
    pub fn postprocess(&self, text: &str) -> String {
        self.spacing.apply(text)
    }
}

/// word / 句读 / 白名单：`name` 字段原样输出
fn word(token: &SemioticToken) -> NormResult<String> {
    for (name, _) in &token.fields {
        if name != "name" {
            return Err(NormError::UnknownField {
                category: token.category.clone(),
                field: name.clone(),
            });
        }
    }
    Ok(token.require("name")?.to_string())
}

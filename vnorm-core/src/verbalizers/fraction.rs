//! Fraction verbalizer
//!
//! `fraction { numerator: "3" denominator: "4" }` → `3/4`
//! `fraction { integer_part: "1" numerator: "3" denominator: "4" }` → `1 3/4`
//! `fraction { denominator: "√3" numerator: "1" }` → `1/√3`
//!
//! 字段顺序不敏感（两种观测到的顺序都接受），渲染始终是
//! 分子 `/` 分母。

use crate::error::{NormError, NormResult};
use crate::token::SemioticToken;

const ALLOWED: [&str; 4] = ["integer_part", "negative", "numerator", "denominator"];

pub fn render(token: &SemioticToken) -> NormResult<String> {
    for (name, _) in &token.fields {
        if !ALLOWED.contains(&name.as_str()) {
            return Err(NormError::UnknownField {
                category: token.category.clone(),
                field: name.clone(),
            });
        }
    }

    let numerator = token.require("numerator")?;
    let denominator = token.require("denominator")?;

    let mut out = String::new();
    if let Some(integer) = token.get("integer_part") {
        out.push_str(integer);
        out.push(' ');
    }
    if let Some(negative) = token.get("negative") {
        out.push_str(negative);
    }
    out.push_str(numerator);
    out.push('/');
    out.push_str(denominator);

    Ok(out)
}

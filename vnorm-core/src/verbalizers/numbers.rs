//! 数值类 verbalizer - cardinal / ordinal / decimal

use crate::error::{NormError, NormResult};
use crate::token::SemioticToken;

fn check_fields(token: &SemioticToken, allowed: &[&str]) -> NormResult<()> {
    for (name, _) in &token.fields {
        if !allowed.contains(&name.as_str()) {
            return Err(NormError::UnknownField {
                category: token.category.clone(),
                field: name.clone(),
            });
        }
    }
    Ok(())
}

/// `cardinal { negative: "-" integer: "23" }` → `-23`
pub fn cardinal(token: &SemioticToken) -> NormResult<String> {
    check_fields(token, &["negative", "integer"])?;
    let integer = token.require("integer")?;
    let negative = token.get("negative").unwrap_or("");
    Ok(format!("{}{}", negative, integer))
}

/// `ordinal { integer: "2" }` → `2.`
pub fn ordinal(token: &SemioticToken) -> NormResult<String> {
    check_fields(token, &["integer"])?;
    Ok(format!("{}.", token.require("integer")?))
}

/// `decimal { integer_part: "3" fractional_part: "14" }` → `3,14`
pub fn decimal(token: &SemioticToken) -> NormResult<String> {
    check_fields(token, &["negative", "integer_part", "fractional_part"])?;
    let integer = token.require("integer_part")?;
    let fractional = token.require("fractional_part")?;
    let negative = token.get("negative").unwrap_or("");
    Ok(format!("{}{},{}", negative, integer, fractional))
}

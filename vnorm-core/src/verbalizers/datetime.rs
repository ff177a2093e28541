//! 日期 / 时刻 verbalizer

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

/// `date { day: "1" month: "4" year: "2026" }` → `1.4.2026`
pub fn date(token: &SemioticToken) -> NormResult<String> {
    check_fields(token, &["day", "month", "year"])?;
    Ok(format!(
        "{}.{}.{}",
        token.require("day")?,
        token.require("month")?,
        token.require("year")?
    ))
}

/// `time { hours: "14" minutes: "30" }` → `14:30`
pub fn time(token: &SemioticToken) -> NormResult<String> {
    check_fields(token, &["hours", "minutes"])?;
    Ok(format!(
        "{}:{}",
        token.require("hours")?,
        token.require("minutes")?
    ))
}

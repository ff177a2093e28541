//! Date tagger - 日期
//!
//! `01.04.2026` → `date { day: "01" month: "04" year: "2026" }`
//! `1. april 2026` → `date { day: "1" month: "4" year: "2026" }`
//!
//! 月份名表来自词表资源（月份名 → 月份数字）。

use crate::fst::{CharClass, Transducer};
use crate::grammar::common::{category, digit, field, field_sep};
use crate::grammar::resources::Resources;

/// 日：1-31 的书面形式（允许前导零）
fn day() -> Transducer {
    Transducer::class(CharClass::of("012"))
        .concat(digit())
        .union(digit())
        .union(Transducer::accept("3").concat(Transducer::class(CharClass::of("01"))))
}

/// 月：1-12 的书面形式（允许前导零）
fn month_number() -> Transducer {
    Transducer::class(CharClass::of("0"))
        .concat(digit())
        .union(digit())
        .union(Transducer::accept("1").concat(Transducer::class(CharClass::of("012"))))
}

/// 年：四位数字
fn year() -> Transducer {
    digit().repeat(4, Some(4))
}

pub fn fst(resources: &Resources) -> Transducer {
    // 数字形式 dd.mm.yyyy
    let numeric = field("day", day())
        .concat(Transducer::delete("."))
        .concat(field_sep())
        .concat(field("month", month_number()))
        .concat(Transducer::delete("."))
        .concat(field_sep())
        .concat(field("year", year()));

    // 月份名形式 "1. april 2026"
    let month_name = Transducer::string_map(
        resources
            .months
            .iter()
            .map(|(name, num)| (name.as_str(), num.as_str())),
    );
    let named = field("day", day())
        .concat(Transducer::delete(". "))
        .concat(field_sep())
        .concat(field("month", month_name))
        .concat(Transducer::delete(" "))
        .concat(field_sep())
        .concat(field("year", year()));

    category("date", numeric.union(named))
}

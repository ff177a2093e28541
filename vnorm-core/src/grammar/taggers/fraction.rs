//! Fraction tagger - 分数
//!
//! `3/4` → `fraction { numerator: "3" denominator: "4" }`
//! `1 3/4` → `fraction { integer_part: "1" numerator: "3" denominator: "4" }`
//! `-3/4` → `fraction { negative: "-" numerator: "3" denominator: "4" }`
//! `1/√3` → `fraction { numerator: "1" denominator: "√3" }`
//!
//! 分子/分母不限于纯数字：根式等符号串按不透明引用值对待。

use crate::fst::{CharClass, Transducer};
use crate::grammar::common::{category, delete_space, digit, field, field_sep};

/// 分量：可带符号前缀（√ π）与小数逗号，但必须含至少一个数字，
/// 逗号后必须紧跟数字（避免吞掉句读）
fn component() -> Transducer {
    let sym = Transducer::class(CharClass::of("√π"));
    let sym_digit = Transducer::class(CharClass::of("√π").with_range('0', '9'));

    let core = sym
        .star()
        .concat(digit())
        .concat(sym_digit.clone().star());
    let comma_tail = Transducer::accept(",")
        .concat(digit())
        .concat(sym_digit.star());

    core.concat(comma_tail.opt())
}

pub fn fst() -> Transducer {
    let integer_part = field("integer_part", digit().plus())
        .concat(Transducer::delete(" "))
        .concat(field_sep());
    let negative = field("negative", Transducer::accept("-")).concat(field_sep());
    let numerator = field("numerator", component());
    let denominator = field("denominator", component());

    let slash = delete_space()
        .concat(Transducer::delete("/"))
        .concat(delete_space());

    let body = integer_part
        .opt()
        .concat(negative.opt())
        .concat(numerator)
        .concat(slash)
        .concat(field_sep())
        .concat(denominator);

    category("fraction", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fraction() {
        assert_eq!(
            fst().apply_best("3/4").unwrap().output,
            "fraction { numerator: \"3\" denominator: \"4\" }"
        );
    }

    #[test]
    fn test_mixed_fraction() {
        assert_eq!(
            fst().apply_best("1 3/4").unwrap().output,
            "fraction { integer_part: \"1\" numerator: \"3\" denominator: \"4\" }"
        );
    }

    #[test]
    fn test_negative_fraction() {
        assert_eq!(
            fst().apply_best("-3/4").unwrap().output,
            "fraction { negative: \"-\" numerator: \"3\" denominator: \"4\" }"
        );
    }

    #[test]
    fn test_symbolic_denominator() {
        assert_eq!(
            fst().apply_best("1/√3").unwrap().output,
            "fraction { numerator: \"1\" denominator: \"√3\" }"
        );
        assert_eq!(
            fst().apply_best("3/2√6").unwrap().output,
            "fraction { numerator: \"3\" denominator: \"2√6\" }"
        );
    }

    #[test]
    fn test_decimal_denominator() {
        assert_eq!(
            fst().apply_best("50/1,65").unwrap().output,
            "fraction { numerator: \"50\" denominator: \"1,65\" }"
        );
    }

    #[test]
    fn test_spaces_around_slash() {
        assert_eq!(
            fst().apply_best("3 / 4").unwrap().output,
            "fraction { numerator: \"3\" denominator: \"4\" }"
        );
    }

    #[test]
    fn test_fails_closed() {
        // 缺分母
        assert!(fst().apply_best("3/").is_none());
        // 纯符号分量（无数字）
        assert!(fst().apply_best("√/4").is_none());
        // 逗号后没有数字
        assert!(fst().apply_best("3,/4").is_none());
        assert!(fst().apply_best("3/4,").is_none());
    }
}

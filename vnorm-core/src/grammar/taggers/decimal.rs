//! Decimal tagger - 小数（德语书面形式：逗号分隔）
//!
//! `3,14` → `decimal { integer_part: "3" fractional_part: "14" }`

use crate::fst::Transducer;
use crate::grammar::common::{category, digit, field, field_sep};

pub fn fst() -> Transducer {
    let negative = field("negative", Transducer::accept("-")).concat(field_sep());
    let integer_part = field("integer_part", digit().plus());
    let fractional_part = field("fractional_part", digit().plus());

    let body = negative
        .opt()
        .concat(integer_part)
        .concat(Transducer::delete(","))
        .concat(field_sep())
        .concat(fractional_part);

    category("decimal", body)
}

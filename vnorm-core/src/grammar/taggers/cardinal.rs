//! Cardinal tagger - 基数
//!
//! `23` → `cardinal { integer: "23" }`
//! `-23` → `cardinal { negative: "-" integer: "23" }`

use crate::fst::Transducer;
use crate::grammar::common::{category, digit, field, field_sep};

pub fn fst() -> Transducer {
    let negative = field("negative", Transducer::accept("-")).concat(field_sep());
    let integer = field("integer", digit().plus());

    category("cardinal", negative.opt().concat(integer))
}

//! Ordinal tagger - 序数（德语书面形式：数字后跟句点）
//!
//! `2.` → `ordinal { integer: "2" }`

use crate::fst::Transducer;
use crate::grammar::common::{category, digit, field};

pub fn fst() -> Transducer {
    let integer = field("integer", digit().plus());

    category("ordinal", integer.concat(Transducer::delete(".")))
}

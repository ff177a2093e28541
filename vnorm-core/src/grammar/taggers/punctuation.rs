//! Punctuation tagger - 句读
//!
//! 单个句读字符；双引号转义后进入值。
//!
//! `.` → `name: "."`

use crate::fst::{CharClass, Transducer};
use crate::grammar::common::field;

pub fn fst() -> Transducer {
    // 不含双引号的句读字符原样捕获，双引号走转义分支
    let unquoted = CharClass::of(".,!?;:'()[]{}«»„“”-");
    let value = Transducer::class(unquoted).union(Transducer::cross("\"", "\\\""));

    field("name", value)
}

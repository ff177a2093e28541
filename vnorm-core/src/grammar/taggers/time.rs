//! Time tagger - 时刻
//!
//! `14:30` → `time { hours: "14" minutes: "30" }`
//! `14:30 uhr` 同上（"uhr" 后缀被吸收）

use crate::fst::{CharClass, Transducer};
use crate::grammar::common::{category, digit, field, field_sep};

/// 时：0-23
fn hours() -> Transducer {
    Transducer::class(CharClass::of("01"))
        .concat(digit())
        .union(digit())
        .union(Transducer::accept("2").concat(Transducer::class(CharClass::of("0123"))))
}

/// 分：00-59
fn minutes() -> Transducer {
    Transducer::class(CharClass::of("012345")).concat(digit())
}

pub fn fst(cased: bool) -> Transducer {
    let mut uhr = Transducer::delete(" uhr");
    if cased {
        uhr = uhr.union(Transducer::delete(" Uhr"));
    }

    let body = field("hours", hours())
        .concat(Transducer::delete(":"))
        .concat(field_sep())
        .concat(field("minutes", minutes()))
        .concat(uhr.opt());

    category("time", body)
}

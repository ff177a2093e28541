//! Word tagger - 兜底词类别
//!
//! 任何不含空白的字符串，权重最高（优先级最低）。
//! 值中的 `"` 与 `\` 按序列化约定转义。
//!
//! `wort` → `name: "wort"`

use crate::fst::Transducer;
use crate::grammar::common::{escaped_char, field};

pub fn fst() -> Transducer {
    field("name", escaped_char(" \t").plus())
}

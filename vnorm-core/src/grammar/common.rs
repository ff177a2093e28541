//! 语法公共件 - 字符类、转义与 token 包装
//!
//! 所有 tagger 共用的构件：只有"转换器进、转换器出"的
//! 普通函数，没有虚分派。

use crate::fst::{CharClass, Transducer};

/// 阿拉伯数字字符类
pub fn digit_class() -> CharClass {
    CharClass::empty().with_range('0', '9')
}

/// 单个数字的恒等接受器
pub fn digit() -> Transducer {
    Transducer::class(digit_class())
}

/// 小写字母（含德语变音与 ß）
pub fn lower_class() -> CharClass {
    CharClass::empty().with_range('a', 'z').with_chars("äöüß")
}

/// 大写字母（含德语变音）
pub fn upper_class() -> CharClass {
    CharClass::empty().with_range('A', 'Z').with_chars("ÄÖÜ")
}

/// 字母类；`cased` 为真时包含大写
pub fn letter_class(cased: bool) -> CharClass {
    if cased {
        CharClass::empty()
            .with_range('a', 'z')
            .with_range('A', 'Z')
            .with_chars("äöüßÄÖÜ")
    } else {
        lower_class()
    }
}

/// 空白字符类（token 分隔）
pub fn space_class() -> CharClass {
    CharClass::of(" \t")
}

/// 句读字符类
pub fn punct_class() -> CharClass {
    CharClass::of(".,!?;:'\"()[]{}«»„“”-")
}

/// 删除零个或多个空白
pub fn delete_space() -> Transducer {
    Transducer::class_delete(space_class()).star()
}

/// 把一个或多个空白压成序列化形式中的单个空格
pub fn delete_extra_space() -> Transducer {
    Transducer::class_delete(space_class())
        .plus()
        .concat(Transducer::insert(" "))
}

pub fn insert_space() -> Transducer {
    Transducer::insert(" ")
}

/// 捕获单个原文字符并做序列化转义：`"` → `\"`、`\` → `\\`
///
/// `excluded` 中的字符不被接受（例如 token 内不允许空格）。
pub fn escaped_char(excluded: &str) -> Transducer {
    let forbidden = CharClass::of("\"\\").with_chars(excluded).negate();
    Transducer::class(forbidden)
        .union(Transducer::cross("\"", "\\\""))
        .union(Transducer::cross("\\", "\\\\"))
}

/// 发射一个字段：`name: "<body>"`
///
/// body 是捕获值的转换器；字段名与引号由语法插入。
pub fn field(name: &str, body: Transducer) -> Transducer {
    Transducer::insert(&format!("{}: \"", name))
        .concat(body)
        .concat(Transducer::insert("\""))
}

/// 字段间的序列化空格
pub fn field_sep() -> Transducer {
    Transducer::insert(" ")
}

/// 类别包装：`<category> { <body> }`
pub fn category(name: &str, body: Transducer) -> Transducer {
    Transducer::insert(&format!("{} {{ ", name))
        .concat(body)
        .concat(Transducer::insert(" }"))
}

/// token 定界包装：`tokens { <body> }`
pub fn wrap_tokens(body: Transducer) -> Transducer {
    Transducer::insert("tokens { ")
        .concat(body)
        .concat(Transducer::insert(" }"))
}

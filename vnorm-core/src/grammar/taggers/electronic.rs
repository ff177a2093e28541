//! Electronic tagger - 电子地址
//!
//! `abc@hotmail.com` → `electronic { username: "abc" domain: "hotmail.com" }`
//! `https://web.de` → `electronic { protocol: "https" domain: "web.de" }`
//! `web.de` → `electronic { domain: "web.de" }`
//!
//! 紧跟域名的句末句点被吸收进 domain 值，由 electronic
//! verbalizer 的串尾重写还原为字面句号。

use crate::fst::Transducer;
use crate::grammar::common::{category, field, field_sep, letter_class};

/// 用户名字符：字母、数字与常见地址符号
fn username(cased: bool) -> Transducer {
    let cc = letter_class(cased)
        .with_range('0', '9')
        .with_chars("._-+");
    Transducer::class(cc).plus()
}

/// 域名：`label ('.' label)* '.' tld`，可吸收一个结尾句点
fn domain(cased: bool) -> Transducer {
    let label_char = letter_class(cased).with_range('0', '9').with_chars("-");
    let label = Transducer::class(label_char).plus();
    let tld = Transducer::class(letter_class(cased)).repeat(2, None);

    label
        .concat(Transducer::accept("."))
        .plus()
        .concat(tld)
        .concat(Transducer::accept(".").opt())
}

/// 协议名（`://` 被删除，不进入字段值）
fn protocol() -> Transducer {
    let name = Transducer::accept("http")
        .union(Transducer::accept("https"))
        .union(Transducer::accept("ftp"));
    name.concat(Transducer::delete("://"))
}

pub fn fst(cased: bool) -> Transducer {
    let email = field("username", username(cased))
        .concat(Transducer::delete("@"))
        .concat(field_sep())
        .concat(field("domain", domain(cased)));

    let url = field("protocol", protocol())
        .concat(field_sep())
        .concat(field("domain", domain(cased)));

    let bare = field("domain", domain(cased));

    category("electronic", email.union(url).union(bare))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(
            fst(false).apply_best("abc@hotmail.com").unwrap().output,
            "electronic { username: \"abc\" domain: \"hotmail.com\" }"
        );
    }

    #[test]
    fn test_url_with_protocol() {
        assert_eq!(
            fst(false).apply_best("https://web.de").unwrap().output,
            "electronic { protocol: \"https\" domain: \"web.de\" }"
        );
    }

    #[test]
    fn test_bare_domain() {
        assert_eq!(
            fst(false).apply_best("web.de").unwrap().output,
            "electronic { domain: \"web.de\" }"
        );
    }

    #[test]
    fn test_absorbs_sentence_final_period() {
        assert_eq!(
            fst(false).apply_best("abc@hotmail.com.").unwrap().output,
            "electronic { username: \"abc\" domain: \"hotmail.com.\" }"
        );
    }

    #[test]
    fn test_username_with_digits_and_symbols() {
        assert_eq!(
            fst(false).apply_best("max.m-1@gmx.net").unwrap().output,
            "electronic { username: \"max.m-1\" domain: \"gmx.net\" }"
        );
    }

    #[test]
    fn test_fails_closed() {
        // 无点号的裸词不是域名
        assert!(fst(false).apply_best("hotmail").is_none());
        // 数字顶级域被拒绝
        assert!(fst(false).apply_best("01.04.2026").is_none());
        // 缺用户名
        assert!(fst(false).apply_best("@web.de").is_none());
        // 小写模式拒绝大写
        assert!(fst(false).apply_best("Abc@web.de").is_none());
    }

    #[test]
    fn test_cased_mode_accepts_uppercase() {
        assert_eq!(
            fst(true).apply_best("Abc@Web.de").unwrap().output,
            "electronic { username: \"Abc\" domain: \"Web.de\" }"
        );
    }
}

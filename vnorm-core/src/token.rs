//! Token 中间表示
//!
//! 分类结果的序列化格式（逐位精确，管道组合依赖它）：
//!
//! ```text
//! tokens { <category> { field: "value" … } } tokens { name: "wort" }
//! ```
//!
//! token 间单个空格；字段顺序由各类别语法固定。word / 句读 /
//! 白名单 token 直接以裸 `name` 字段出现，无类别包装。
//! 解析是严格的：字段名、引号、空格必须精确匹配，多余内容拒收。

use crate::error::{NormError, NormResult};

/// 裸字段 token（word / 句读 / 白名单）的类别名
pub const WORD_CATEGORY: &str = "word";

/// 符号学 token：类别 + 有序字段表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemioticToken {
    pub category: String,
    pub fields: Vec<(String, String)>,
}

impl SemioticToken {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            fields: Vec::new(),
        }
    }

    /// 追加字段（保持插入顺序）
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    /// 按名取字段值
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// 必需字段；缺失即 MissingField
    pub fn require(&self, name: &str) -> NormResult<&str> {
        self.get(name).ok_or_else(|| NormError::MissingField {
            category: self.category.clone(),
            field: name.to_string(),
        })
    }

    /// 序列化单个 token（含 `tokens { … }` 定界）
    pub fn serialize(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|(n, v)| format!("{}: \"{}\"", n, escape(v)))
            .collect::<Vec<_>>()
            .join(" ");

        if self.category == WORD_CATEGORY {
            format!("tokens {{ {} }}", fields)
        } else {
            format!("tokens {{ {} {{ {} }} }}", self.category, fields)
        }
    }
}

/// 一行的 token 序列
pub type TaggedLine = Vec<SemioticToken>;

/// 序列化整行（token 间单空格）
pub fn serialize_line(line: &TaggedLine) -> String {
    line.iter()
        .map(SemioticToken::serialize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 解析序列化的 tagged line；空串得到空序列
pub fn parse_tagged_line(input: &str) -> NormResult<TaggedLine> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    Parser::new(input).parse_line()
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    raw: String,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            raw: input.to_string(),
        }
    }

    fn parse_line(mut self) -> NormResult<TaggedLine> {
        let mut tokens = vec![self.parse_token()?];
        while self.pos < self.chars.len() {
            self.expect(" ")?;
            tokens.push(self.parse_token()?);
        }
        Ok(tokens)
    }

    fn parse_token(&mut self) -> NormResult<SemioticToken> {
        self.expect("tokens { ")?;

        let ident = self.parse_ident()?;
        let token = if self.lookahead(" { ") {
            // 类别包装：<category> { fields }
            self.expect(" { ")?;
            let fields = self.parse_fields()?;
            self.expect(" }")?;
            SemioticToken {
                category: ident,
                fields,
            }
        } else {
            // 裸字段形式（word / 句读 / 白名单）
            let first = self.parse_field_value(ident)?;
            let mut fields = vec![first];
            while self.more_fields() {
                self.expect(" ")?;
                let name = self.parse_ident()?;
                fields.push(self.parse_field_value(name)?);
            }
            SemioticToken {
                category: WORD_CATEGORY.to_string(),
                fields,
            }
        };

        self.expect(" }")?;
        Ok(token)
    }

    fn parse_fields(&mut self) -> NormResult<Vec<(String, String)>> {
        let name = self.parse_ident()?;
        let mut fields = vec![self.parse_field_value(name)?];
        while self.more_fields() {
            self.expect(" ")?;
            let name = self.parse_ident()?;
            fields.push(self.parse_field_value(name)?);
        }
        Ok(fields)
    }

    /// 已读到字段名，解析 `: "value"` 部分并反转义
    fn parse_field_value(&mut self, name: String) -> NormResult<(String, String)> {
        self.expect(": \"")?;
        let mut value = String::new();
        loop {
            match self.next() {
                Some('\\') => match self.next() {
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    other => {
                        return Err(self.malformed(format!(
                            "invalid escape sequence in field '{}': {:?}",
                            name, other
                        )))
                    }
                },
                Some('"') => break,
                Some(c) => value.push(c),
                None => {
                    return Err(self.malformed(format!("unterminated value for field '{}'", name)))
                }
            }
        }
        Ok((name, value))
    }

    /// 小写标识符（字段名 / 类别名）
    fn parse_ident(&mut self) -> NormResult<String> {
        let start = self.pos;
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if c.is_ascii_lowercase() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(self.malformed("expected identifier".to_string()));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    /// 下一个片段是否还是字段（而非闭括号）
    fn more_fields(&mut self) -> bool {
        self.chars.get(self.pos) == Some(&' ')
            && self
                .chars
                .get(self.pos + 1)
                .map(|c| c.is_ascii_lowercase() || *c == '_')
                .unwrap_or(false)
    }

    fn lookahead(&self, s: &str) -> bool {
        let needle: Vec<char> = s.chars().collect();
        self.chars[self.pos..]
            .iter()
            .take(needle.len())
            .eq(needle.iter())
            && self.chars.len() - self.pos >= needle.len()
    }

    fn expect(&mut self, s: &str) -> NormResult<()> {
        if self.lookahead(s) {
            self.pos += s.chars().count();
            Ok(())
        } else {
            Err(self.malformed(format!("expected {:?} at position {}", s, self.pos)))
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn malformed(&self, reason: String) -> NormError {
        NormError::MalformedTaggedInput(format!("{} in {:?}", reason, self.raw))
    }
}

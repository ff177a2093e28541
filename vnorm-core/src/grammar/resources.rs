//! 词表资源 - 行式 TSV 表
//!
//! 语法构建期一次性加载：数字读法、电子地址符号、常见服务器/域名、
//! 月份名、白名单。格式严格（两列、`#` 注释、空行跳过），
//! 任何畸形行都是构建期致命错误，绝不推迟到首次使用。

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{NormError, NormResult};

const DIGIT_TSV: &str = include_str!("../../data/numbers/digit.tsv");
const ZERO_TSV: &str = include_str!("../../data/numbers/zero.tsv");
const SYMBOLS_TSV: &str = include_str!("../../data/electronic/symbols.tsv");
const SERVER_TSV: &str = include_str!("../../data/electronic/server_name.tsv");
const DOMAIN_TSV: &str = include_str!("../../data/electronic/domain.tsv");
const MONTHS_TSV: &str = include_str!("../../data/dates/months.tsv");
const WHITELIST_TSV: &str = include_str!("../../data/whitelist/whitelist.tsv");

/// 加载好的全部词表
#[derive(Debug, Clone)]
pub struct Resources {
    /// 数字 → 读法（0-9，含零表）
    pub digit_names: BTreeMap<char, String>,
    /// 电子地址符号 → 读法
    pub symbol_names: BTreeMap<char, String>,
    /// 整词读出的服务器名
    pub server_names: Vec<String>,
    /// 整词读出的域名词
    pub domain_words: Vec<String>,
    /// 月份名 → 月份数字（tagger 方向）
    pub months: Vec<(String, String)>,
    /// 白名单：书面缩写 → 展开（保持文件顺序）
    pub whitelist: Vec<(String, String)>,
}

impl Resources {
    /// 加载内置德语词表；`whitelist_path` 给出时替换内置白名单
    pub fn load(whitelist_path: Option<&Path>) -> NormResult<Self> {
        let mut digit_names = BTreeMap::new();
        for (k, v) in parse_tsv(DIGIT_TSV, "data/numbers/digit.tsv")? {
            digit_names.insert(single_char(&k, "data/numbers/digit.tsv")?, v);
        }
        for (k, v) in parse_tsv(ZERO_TSV, "data/numbers/zero.tsv")? {
            digit_names.insert(single_char(&k, "data/numbers/zero.tsv")?, v);
        }

        let mut symbol_names = BTreeMap::new();
        for (k, v) in parse_tsv(SYMBOLS_TSV, "data/electronic/symbols.tsv")? {
            symbol_names.insert(single_char(&k, "data/electronic/symbols.tsv")?, v);
        }

        let server_names = parse_tsv(SERVER_TSV, "data/electronic/server_name.tsv")?
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        let domain_words = parse_tsv(DOMAIN_TSV, "data/electronic/domain.tsv")?
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        let months = parse_tsv(MONTHS_TSV, "data/dates/months.tsv")?;

        let whitelist = match whitelist_path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| NormError::ResourceLoad {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                parse_tsv(&content, &path.display().to_string())?
            }
            None => parse_tsv(WHITELIST_TSV, "data/whitelist/whitelist.tsv")?,
        };

        Ok(Self {
            digit_names,
            symbol_names,
            server_names,
            domain_words,
            months,
            whitelist,
        })
    }
}

/// 解析两列 TSV：`key<TAB>value`，`#` 开头为注释
fn parse_tsv(content: &str, path: &str) -> NormResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cols = line.split('\t');
        let key = cols.next().unwrap_or_default();
        let value = cols.next();
        let extra = cols.next();

        match (value, extra) {
            (Some(value), None) if !key.is_empty() && !value.is_empty() => {
                pairs.push((key.to_string(), value.to_string()));
            }
            _ => {
                return Err(NormError::ResourceLoad {
                    path: path.to_string(),
                    reason: format!("malformed line {}: {:?}", line_num + 1, line),
                });
            }
        }
    }

    if pairs.is_empty() {
        return Err(NormError::ResourceLoad {
            path: path.to_string(),
            reason: "empty table".to_string(),
        });
    }

    Ok(pairs)
}

fn single_char(s: &str, path: &str) -> NormResult<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(NormError::ResourceLoad {
            path: path.to_string(),
            reason: format!("expected single-character key, got {:?}", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_tables_load() {
        let res = Resources::load(None).unwrap();
        assert_eq!(res.digit_names[&'0'], "null");
        assert_eq!(res.digit_names[&'1'], "eins");
        assert_eq!(res.symbol_names[&'.'], "punkt");
        assert!(res.server_names.iter().any(|s| s == "hotmail"));
        assert!(res.domain_words.iter().any(|s| s == "com"));
        assert!(res.months.iter().any(|(k, v)| k == "april" && v == "4"));
        assert!(res.whitelist.iter().any(|(k, v)| k == "dr." && v == "doktor"));
    }

    #[test]
    fn test_parse_tsv_rejects_malformed_line() {
        let err = parse_tsv("gut\tja\nnur-eine-spalte\n", "probe").unwrap_err();
        match err {
            NormError::ResourceLoad { reason, .. } => assert!(reason.contains("line 2")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_tsv_rejects_empty_table() {
        assert!(parse_tsv("# nur kommentare\n\n", "probe").is_err());
    }

    #[test]
    fn test_parse_tsv_skips_comments_and_blanks() {
        let pairs = parse_tsv("# kopf\na\t1\n\nb\t2\n", "probe").unwrap();
        assert_eq!(pairs, vec![("a".into(), "1".into()), ("b".into(), "2".into())]);
    }

    #[test]
    fn test_external_whitelist_replaces_builtin() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "abk.\tabkürzung").unwrap();
        let res = Resources::load(Some(f.path())).unwrap();
        assert_eq!(res.whitelist, vec![("abk.".to_string(), "abkürzung".to_string())]);
    }

    #[test]
    fn test_missing_external_whitelist_is_fatal() {
        let err = Resources::load(Some(Path::new("/nicht/da.tsv"))).unwrap_err();
        assert!(matches!(err, NormError::ResourceLoad { .. }));
    }
}

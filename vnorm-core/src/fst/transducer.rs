//! Transducer - 加权有限状态转换器
//!
//! Thompson 构造风格的 NFA 表示：每条弧带一个输入标签（字符 / 字符类 /
//! 空转移）、一个输出动作（复制输入 / 插入文本 / 无输出）和一个非负权重。
//!
//! 约定：
//! - 单一起始状态 + 单一接受状态
//! - 闭包（star / plus）的主体必须消耗输入，否则语义退化为有界枚举
//! - 权重只附加在弧上，通过 `weighted` 显式加权

use serde::{Deserialize, Serialize};

pub(crate) type StateId = usize;

/// 字符类 - 一组字符的集合（可取反）
///
/// 取反的空集合即"任意字符"，用于表达 NOT_QUOTE 一类的开放字母表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharClass {
    chars: Vec<char>,
    ranges: Vec<(char, char)>,
    negated: bool,
}

impl CharClass {
    /// 空集合（不匹配任何字符）
    pub fn empty() -> Self {
        Self {
            chars: Vec::new(),
            ranges: Vec::new(),
            negated: false,
        }
    }

    /// 由字符列表构建
    pub fn of(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
            ranges: Vec::new(),
            negated: false,
        }
    }

    /// 追加字符
    pub fn with_chars(mut self, chars: &str) -> Self {
        self.chars.extend(chars.chars());
        self
    }

    /// 追加闭区间
    pub fn with_range(mut self, lo: char, hi: char) -> Self {
        self.ranges.push((lo, hi));
        self
    }

    /// 取反（匹配所有不在集合中的字符）
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// 字符是否属于该类
    pub fn contains(&self, c: char) -> bool {
        let hit = self.chars.contains(&c)
            || self.ranges.iter().any(|&(lo, hi)| c >= lo && c <= hi);
        self.negated != hit
    }
}

/// 弧的输入标签
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum Label {
    /// 空转移（不消耗输入）
    Eps,
    /// 单个字符
    Char(char),
    /// 字符类
    Class(CharClass),
}

/// 弧的输出动作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum Emit {
    /// 不输出
    Nothing,
    /// 复制被消耗的输入字符（恒等）
    Input,
    /// 输出固定文本
    Text(String),
}

/// 转换器的弧
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Arc {
    pub label: Label,
    pub emit: Emit,
    pub weight: f64,
    pub target: StateId,
}

impl Arc {
    pub fn eps(target: StateId) -> Self {
        Self {
            label: Label::Eps,
            emit: Emit::Nothing,
            weight: 0.0,
            target,
        }
    }

    fn shifted(&self, offset: usize) -> Self {
        let mut a = self.clone();
        a.target += offset;
        a
    }
}

/// 加权有限状态转换器（不透明句柄）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transducer {
    pub(crate) arcs: Vec<Vec<Arc>>,
    pub(crate) start: StateId,
    pub(crate) accept: StateId,
}

impl Transducer {
    /// 只接受空串、无输出的转换器
    pub fn epsilon() -> Self {
        Self {
            arcs: vec![Vec::new()],
            start: 0,
            accept: 0,
        }
    }

    /// 不接受任何输入的转换器（空语言）
    pub fn fail() -> Self {
        Self {
            arcs: vec![Vec::new(), Vec::new()],
            start: 0,
            accept: 1,
        }
    }

    /// 恒等接受器：逐字符接受 `s` 并原样输出
    pub fn accept(s: &str) -> Self {
        let mut t = Self::epsilon();
        for c in s.chars() {
            let next = t.add_state();
            t.arcs[t.accept].push(Arc {
                label: Label::Char(c),
                emit: Emit::Input,
                weight: 0.0,
                target: next,
            });
            t.accept = next;
        }
        t
    }

    /// 叉积替换：读入 `from`，输出 `to`
    ///
    /// `from` 为空即纯插入，`to` 为空即纯删除。
    pub fn cross(from: &str, to: &str) -> Self {
        let mut t = Self::epsilon();
        for c in from.chars() {
            let next = t.add_state();
            t.arcs[t.accept].push(Arc {
                label: Label::Char(c),
                emit: Emit::Nothing,
                weight: 0.0,
                target: next,
            });
            t.accept = next;
        }
        if !to.is_empty() {
            let next = t.add_state();
            t.arcs[t.accept].push(Arc {
                label: Label::Eps,
                emit: Emit::Text(to.to_string()),
                weight: 0.0,
                target: next,
            });
            t.accept = next;
        }
        t
    }

    /// 纯插入：不消耗输入，输出 `s`
    pub fn insert(s: &str) -> Self {
        Self::cross("", s)
    }

    /// 纯删除：消耗 `s`，无输出
    pub fn delete(s: &str) -> Self {
        Self::cross(s, "")
    }

    /// 字符类恒等接受器（单字符）
    pub fn class(cc: CharClass) -> Self {
        let mut t = Self::epsilon();
        let next = t.add_state();
        t.arcs[t.accept].push(Arc {
            label: Label::Class(cc),
            emit: Emit::Input,
            weight: 0.0,
            target: next,
        });
        t.accept = next;
        t
    }

    /// 字符类删除器（消耗一个类内字符，无输出）
    pub fn class_delete(cc: CharClass) -> Self {
        let mut t = Self::epsilon();
        let next = t.add_state();
        t.arcs[t.accept].push(Arc {
            label: Label::Class(cc),
            emit: Emit::Nothing,
            weight: 0.0,
            target: next,
        });
        t.accept = next;
        t
    }

    /// 字符串映射表：`(from, to)` 对的无权并
    pub fn string_map<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut alternatives: Vec<Transducer> = Vec::new();
        for (from, to) in pairs {
            alternatives.push(Self::cross(from.as_ref(), to.as_ref()));
        }
        Self::union_all(alternatives)
    }

    /// 串接：self 之后紧跟 other
    pub fn concat(mut self, other: Self) -> Self {
        let offset = self.import(&other);
        let old_accept = self.accept;
        self.arcs[old_accept].push(Arc::eps(offset + other.start));
        self.accept = offset + other.accept;
        self
    }

    /// 并：self 或 other
    pub fn union(self, other: Self) -> Self {
        let mut t = Self::fail();
        let off_a = t.import(&self);
        let off_b = t.import(&other);
        t.arcs[0].push(Arc::eps(off_a + self.start));
        t.arcs[0].push(Arc::eps(off_b + other.start));
        t.arcs[off_a + self.accept].push(Arc::eps(1));
        t.arcs[off_b + other.accept].push(Arc::eps(1));
        t
    }

    /// 多路并；空列表得到空语言
    pub fn union_all<I: IntoIterator<Item = Self>>(alternatives: I) -> Self {
        let mut iter = alternatives.into_iter();
        match iter.next() {
            None => Self::fail(),
            Some(first) => iter.fold(first, |acc, t| acc.union(t)),
        }
    }

    /// 加权：进入该转换器的路径附加代价 `w`
    pub fn weighted(self, w: f64) -> Self {
        let mut t = self;
        let new_start = t.add_state();
        t.arcs[new_start].push(Arc {
            label: Label::Eps,
            emit: Emit::Nothing,
            weight: w,
            target: t.start,
        });
        t.start = new_start;
        t
    }

    /// Kleene 星：零次或多次
    pub fn star(self) -> Self {
        let mut t = Self::fail();
        let off = t.import(&self);
        t.arcs[0].push(Arc::eps(off + self.start));
        t.arcs[0].push(Arc::eps(1));
        t.arcs[off + self.accept].push(Arc::eps(off + self.start));
        t.arcs[off + self.accept].push(Arc::eps(1));
        t
    }

    /// 一次或多次
    pub fn plus(self) -> Self {
        let mut t = Self::fail();
        let off = t.import(&self);
        t.arcs[0].push(Arc::eps(off + self.start));
        t.arcs[off + self.accept].push(Arc::eps(off + self.start));
        t.arcs[off + self.accept].push(Arc::eps(1));
        t
    }

    /// 零次或一次
    pub fn opt(self) -> Self {
        let mut t = Self::fail();
        let off = t.import(&self);
        t.arcs[0].push(Arc::eps(off + self.start));
        t.arcs[0].push(Arc::eps(1));
        t.arcs[off + self.accept].push(Arc::eps(1));
        t
    }

    /// 重复区间：至少 `min` 次，至多 `max` 次（None 表示无上界）
    pub fn repeat(self, min: usize, max: Option<usize>) -> Self {
        let mut t = Self::epsilon();
        for _ in 0..min {
            t = t.concat(self.clone());
        }
        match max {
            None => t.concat(self.star()),
            Some(max) => {
                for _ in min..max {
                    t = t.concat(self.clone().opt());
                }
                t
            }
        }
    }

    /// 优化：删除从起点不可达或到达不了接受态的状态
    pub fn optimize(self) -> Self {
        let n = self.arcs.len();

        // 前向可达
        let mut forward = vec![false; n];
        let mut stack = vec![self.start];
        forward[self.start] = true;
        while let Some(s) = stack.pop() {
            for arc in &self.arcs[s] {
                if !forward[arc.target] {
                    forward[arc.target] = true;
                    stack.push(arc.target);
                }
            }
        }

        // 反向可达（能走到接受态）
        let mut reverse: Vec<Vec<StateId>> = vec![Vec::new(); n];
        for (s, arcs) in self.arcs.iter().enumerate() {
            for arc in arcs {
                reverse[arc.target].push(s);
            }
        }
        let mut backward = vec![false; n];
        let mut stack = vec![self.accept];
        backward[self.accept] = true;
        while let Some(s) = stack.pop() {
            for &p in &reverse[s] {
                if !backward[p] {
                    backward[p] = true;
                    stack.push(p);
                }
            }
        }

        if !forward[self.accept] || !backward[self.start] {
            return Self::fail();
        }

        // 重新编号存活状态
        let mut remap = vec![usize::MAX; n];
        let mut arcs: Vec<Vec<Arc>> = Vec::new();
        for s in 0..n {
            if forward[s] && backward[s] {
                remap[s] = arcs.len();
                arcs.push(Vec::new());
            }
        }
        for s in 0..n {
            if remap[s] == usize::MAX {
                continue;
            }
            for arc in &self.arcs[s] {
                if remap[arc.target] != usize::MAX {
                    let mut a = arc.clone();
                    a.target = remap[arc.target];
                    arcs[remap[s]].push(a);
                }
            }
        }

        Self {
            arcs,
            start: remap[self.start],
            accept: remap[self.accept],
        }
    }

    /// 状态数（诊断用）
    pub fn num_states(&self) -> usize {
        self.arcs.len()
    }

    fn add_state(&mut self) -> StateId {
        self.arcs.push(Vec::new());
        self.arcs.len() - 1
    }

    /// 把 other 的状态并入 self，返回编号偏移
    fn import(&mut self, other: &Transducer) -> usize {
        let offset = self.arcs.len();
        for state_arcs in &other.arcs {
            self.arcs
                .push(state_arcs.iter().map(|a| a.shifted(offset)).collect());
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(t: &Transducer, input: &str) -> Option<String> {
        t.apply_best(input).map(|c| c.output)
    }

    #[test]
    fn test_char_class_contains() {
        let digits = CharClass::empty().with_range('0', '9');
        assert!(digits.contains('0'));
        assert!(digits.contains('9'));
        assert!(!digits.contains('a'));

        let not_quote = CharClass::of("\"").negate();
        assert!(not_quote.contains('a'));
        assert!(not_quote.contains(' '));
        assert!(!not_quote.contains('"'));
    }

    #[test]
    fn test_accept_identity() {
        let t = Transducer::accept("abc");
        assert_eq!(best(&t, "abc"), Some("abc".to_string()));
        assert_eq!(best(&t, "abd"), None);
        assert_eq!(best(&t, "ab"), None);
    }

    #[test]
    fn test_epsilon_accepts_empty() {
        let t = Transducer::epsilon();
        assert_eq!(best(&t, ""), Some(String::new()));
        assert_eq!(best(&t, "x"), None);
    }

    #[test]
    fn test_fail_rejects_everything() {
        let t = Transducer::fail();
        assert_eq!(best(&t, ""), None);
        assert_eq!(best(&t, "x"), None);
    }

    #[test]
    fn test_cross() {
        let t = Transducer::cross("zwei", "2");
        assert_eq!(best(&t, "zwei"), Some("2".to_string()));
        assert_eq!(best(&t, "drei"), None);
    }

    #[test]
    fn test_insert_and_delete() {
        let t = Transducer::insert("x");
        assert_eq!(best(&t, ""), Some("x".to_string()));

        let t = Transducer::delete(" ");
        assert_eq!(best(&t, " "), Some(String::new()));
    }

    #[test]
    fn test_concat() {
        let t = Transducer::accept("a").concat(Transducer::cross("b", "B"));
        assert_eq!(best(&t, "ab"), Some("aB".to_string()));
        assert_eq!(best(&t, "a"), None);
    }

    #[test]
    fn test_union_prefers_lower_weight() {
        let t = Transducer::cross("x", "teuer")
            .weighted(2.0)
            .union(Transducer::cross("x", "billig").weighted(1.0));
        assert_eq!(best(&t, "x"), Some("billig".to_string()));
    }

    #[test]
    fn test_union_tie_break_is_lexicographic() {
        let t = Transducer::cross("x", "bb")
            .weighted(1.0)
            .union(Transducer::cross("x", "aa").weighted(1.0));
        // 权重相同时取输出字典序最小
        assert_eq!(best(&t, "x"), Some("aa".to_string()));
    }

    #[test]
    fn test_star() {
        let t = Transducer::accept("ab").star();
        assert_eq!(best(&t, ""), Some(String::new()));
        assert_eq!(best(&t, "abab"), Some("abab".to_string()));
        assert_eq!(best(&t, "aba"), None);
    }

    #[test]
    fn test_plus() {
        let t = Transducer::accept("a").plus();
        assert_eq!(best(&t, ""), None);
        assert_eq!(best(&t, "aaa"), Some("aaa".to_string()));
    }

    #[test]
    fn test_opt() {
        let t = Transducer::delete("-").opt().concat(Transducer::accept("3"));
        assert_eq!(best(&t, "3"), Some("3".to_string()));
        assert_eq!(best(&t, "-3"), Some("3".to_string()));
    }

    #[test]
    fn test_repeat_range() {
        let digit = Transducer::class(CharClass::empty().with_range('0', '9'));
        let t = digit.repeat(1, Some(2));
        assert_eq!(best(&t, "7"), Some("7".to_string()));
        assert_eq!(best(&t, "42"), Some("42".to_string()));
        assert_eq!(best(&t, "123"), None);
    }

    #[test]
    fn test_string_map() {
        let t = Transducer::string_map([("januar", "1"), ("februar", "2")]);
        assert_eq!(best(&t, "januar"), Some("1".to_string()));
        assert_eq!(best(&t, "februar"), Some("2".to_string()));
        assert_eq!(best(&t, "märz"), None);
    }

    #[test]
    fn test_class_acceptor() {
        let t = Transducer::class(CharClass::of("abc")).plus();
        assert_eq!(best(&t, "cab"), Some("cab".to_string()));
        assert_eq!(best(&t, "cad"), None);
    }

    #[test]
    fn test_optimize_preserves_language() {
        let t = Transducer::accept("ab")
            .union(Transducer::fail())
            .concat(Transducer::cross("c", "C"));
        let before = best(&t, "abc");
        let optimized = t.optimize();
        assert_eq!(best(&optimized, "abc"), before);
        assert!(optimized.num_states() > 0);
    }

    #[test]
    fn test_optimize_empty_language() {
        let t = Transducer::fail().concat(Transducer::accept("a"));
        let optimized = t.optimize();
        assert_eq!(best(&optimized, "a"), None);
    }
}

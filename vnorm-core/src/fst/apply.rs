//! 转换器应用 - 最短路径 / n-best 提取
//!
//! 在 (状态, 输入位置) 节点上做 Dijkstra 搜索。堆按
//! (总权重, 输出字典序) 排序，因此并列权重的消歧规则是
//! "输出字典序最小者优先"——确定性由构造保证，而非枚举顺序。
//!
//! n-best 模式允许每个节点至多被弹出 k 的常数倍次，以枚举
//! 不同输出的次优路径；1-best 情形与标准 Dijkstra 等价。

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::transducer::{Emit, Label, StateId, Transducer};

/// 一条接受路径的输出与总权重
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub output: String,
    pub weight: f64,
}

/// 前缀匹配结果（重写器使用）：消耗的字符数、输出、权重
#[derive(Debug, Clone)]
pub(crate) struct PrefixMatch {
    pub len: usize,
    pub output: String,
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct Entry {
    weight: f64,
    output: String,
    state: StateId,
    pos: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.output.cmp(&other.output))
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

/// 每个 n-best 名额允许的节点重访次数
const VISITS_PER_RESULT: usize = 4;

/// 前缀匹配的结果上限
const PREFIX_MATCH_CAP: usize = 64;

impl Transducer {
    /// 应用到整行输入，返回至多 `nbest` 个不同输出
    ///
    /// 结果按 (权重, 输出字典序) 升序排列；无接受路径时为空。
    pub fn apply(&self, input: &str, nbest: usize) -> Vec<Candidate> {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let nbest = nbest.max(1);
        let visit_cap = nbest * VISITS_PER_RESULT;

        let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::new();
        let mut visits: HashMap<(StateId, usize), usize> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut results: Vec<Candidate> = Vec::new();

        heap.push(Reverse(Entry {
            weight: 0.0,
            output: String::new(),
            state: self.start,
            pos: 0,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            let count = visits.entry((entry.state, entry.pos)).or_insert(0);
            if *count >= visit_cap {
                continue;
            }
            *count += 1;

            if entry.state == self.accept && entry.pos == len {
                if seen.insert(entry.output.clone()) {
                    results.push(Candidate {
                        output: entry.output.clone(),
                        weight: entry.weight,
                    });
                    if results.len() >= nbest {
                        break;
                    }
                }
            }

            self.expand(&entry, &chars, &mut heap);
        }

        results
    }

    /// 最短路径（1-best）
    pub fn apply_best(&self, input: &str) -> Option<Candidate> {
        self.apply(input, 1).into_iter().next()
    }

    /// 从输入开头做前缀匹配：接受态在任意位置到达均记为一次匹配
    pub(crate) fn prefix_matches(&self, chars: &[char]) -> Vec<PrefixMatch> {
        let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::new();
        let mut visits: HashMap<(StateId, usize), usize> = HashMap::new();
        let mut results: Vec<PrefixMatch> = Vec::new();

        heap.push(Reverse(Entry {
            weight: 0.0,
            output: String::new(),
            state: self.start,
            pos: 0,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            let count = visits.entry((entry.state, entry.pos)).or_insert(0);
            if *count >= VISITS_PER_RESULT {
                continue;
            }
            *count += 1;

            if entry.state == self.accept {
                results.push(PrefixMatch {
                    len: entry.pos,
                    output: entry.output.clone(),
                    weight: entry.weight,
                });
                if results.len() >= PREFIX_MATCH_CAP {
                    break;
                }
            }

            self.expand(&entry, chars, &mut heap);
        }

        results
    }

    fn expand(&self, entry: &Entry, chars: &[char], heap: &mut BinaryHeap<Reverse<Entry>>) {
        for arc in &self.arcs[entry.state] {
            let (consumed, next_pos) = match &arc.label {
                Label::Eps => (None, entry.pos),
                Label::Char(c) => {
                    if entry.pos < chars.len() && chars[entry.pos] == *c {
                        (Some(*c), entry.pos + 1)
                    } else {
                        continue;
                    }
                }
                Label::Class(cc) => {
                    if entry.pos < chars.len() && cc.contains(chars[entry.pos]) {
                        (Some(chars[entry.pos]), entry.pos + 1)
                    } else {
                        continue;
                    }
                }
            };

            let mut output = entry.output.clone();
            match &arc.emit {
                Emit::Nothing => {}
                Emit::Input => {
                    if let Some(c) = consumed {
                        output.push(c);
                    }
                }
                Emit::Text(s) => output.push_str(s),
            }

            heap.push(Reverse(Entry {
                weight: entry.weight + arc.weight,
                output,
                state: arc.target,
                pos: next_pos,
            }));
        }
    }
}

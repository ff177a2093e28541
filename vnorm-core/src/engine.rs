//! Normalizer - 正则化主管道
//!
//! 分类（WFST 最短路径消歧）→ 解析中间表示 → 言语化 → 后处理。
//! 引擎构建后不可变，可跨线程只读共享；逐行处理相互独立，
//! 单行失败不影响共享语法状态。

use crate::cache::{FsGrammarCache, GrammarCache};
use crate::config::NormalizerConfig;
use crate::error::{NormError, NormResult};
use crate::fst::{Far, Transducer};
use crate::grammar::resources::Resources;
use crate::grammar::taggers::classify::build_classifier;
use crate::token::parse_tagged_line;
use crate::verbalizers::Verbalizer;

/// 归档里分类语法的名字
const CLASSIFY_GRAMMAR: &str = "tokenize_and_classify";

/// 文本正则化引擎
#[derive(Debug)]
pub struct Normalizer {
    classify: Transducer,
    verbalizer: Verbalizer,
    deterministic: bool,
}

impl Normalizer {
    /// 按配置构建；配置了 cache_dir 时走文件系统缓存
    pub fn new(config: &NormalizerConfig) -> NormResult<Self> {
        match &config.cache_dir {
            Some(dir) => Self::with_cache(config, &FsGrammarCache::new(dir)),
            None => {
                let resources = Resources::load(config.whitelist_path.as_deref())?;
                let classify =
                    build_classifier(&config.weights, config.input_case, &resources)?;
                Ok(Self::assemble(config, classify, &resources))
            }
        }
    }

    /// 按配置构建，语法归档走注入的缓存能力
    pub fn with_cache(config: &NormalizerConfig, cache: &dyn GrammarCache) -> NormResult<Self> {
        let resources = Resources::load(config.whitelist_path.as_deref())?;
        let key = config.cache_key();

        if !config.overwrite_cache {
            if let Some(far) = cache.get(&key)? {
                if let Some(classify) = far.get(CLASSIFY_GRAMMAR) {
                    tracing::info!("classifier grammar restored from cache: {}", key);
                    return Ok(Self::assemble(config, classify.clone(), &resources));
                }
                tracing::warn!("cache entry {} lacks {}, rebuilding", key, CLASSIFY_GRAMMAR);
            }
        }

        let classify = build_classifier(&config.weights, config.input_case, &resources)?;

        let mut far = Far::new();
        far.insert(CLASSIFY_GRAMMAR, classify.clone());
        cache.put(&key, &far)?;
        tracing::info!("classifier grammar saved to cache: {}", key);

        Ok(Self::assemble(config, classify, &resources))
    }

    fn assemble(config: &NormalizerConfig, classify: Transducer, resources: &Resources) -> Self {
        Self {
            classify,
            verbalizer: Verbalizer::new(resources, config.deterministic),
            deterministic: config.deterministic,
        }
    }

    /// 分类一行，返回序列化的 tagged line
    ///
    /// 空白行得到空串；无覆盖解析是整行硬失败。
    pub fn tag(&self, line: &str) -> NormResult<String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(String::new());
        }

        self.classify
            .apply_best(line)
            .map(|c| c.output)
            .ok_or_else(|| NormError::Tagging(line.to_string()))
    }

    /// n-best 分类（非确定性模式）；确定性模式只给最优解析
    pub fn tag_nbest(&self, line: &str, n: usize) -> NormResult<Vec<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(vec![String::new()]);
        }

        let n = if self.deterministic { 1 } else { n.max(1) };
        let candidates = self.classify.apply(line, n);
        if candidates.is_empty() {
            return Err(NormError::Tagging(line.to_string()));
        }
        Ok(candidates.into_iter().map(|c| c.output).collect())
    }

    /// 言语化一个序列化的 tagged line
    pub fn verbalize(&self, tagged: &str) -> NormResult<String> {
        let line = parse_tagged_line(tagged)?;
        self.verbalizer.render_line(&line)
    }

    /// 整行正则化：分类 + 言语化
    pub fn normalize(&self, line: &str) -> NormResult<String> {
        let tagged = self.tag(line)?;
        if tagged.is_empty() {
            return Ok(String::new());
        }
        self.verbalize(&tagged)
    }

    /// 非确定性模式下的 n-best 表层实现；确定性模式退化为单元素
    pub fn normalize_nbest(&self, line: &str, n: usize) -> NormResult<Vec<String>> {
        if self.deterministic {
            return Ok(vec![self.normalize(line)?]);
        }

        let mut results: Vec<String> = Vec::new();
        for tagged in self.tag_nbest(line, n)? {
            if tagged.is_empty() {
                results.push(String::new());
                continue;
            }
            let parsed = parse_tagged_line(&tagged)?;
            for variant in self.verbalizer.render_line_variants(&parsed)? {
                if !results.contains(&variant) {
                    results.push(variant);
                }
                if results.len() >= n.max(1) {
                    return Ok(results);
                }
            }
        }
        Ok(results)
    }
}

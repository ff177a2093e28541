//! Grammar cache - 语法归档缓存
//!
//! 显式注入的 get/put 能力：文件系统实现用于生产（原子发布：
//! 临时文件写完再改名，绝不出现半成品归档），内存实现用于测试
//! 断言命中/未命中行为。缓存未命中不是错误，只是重建的信号。

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{NormError, NormResult};
use crate::fst::Far;

/// 语法缓存能力
pub trait GrammarCache: Send + Sync {
    /// 按键取归档；不存在返回 None
    fn get(&self, key: &str) -> NormResult<Option<Far>>;

    /// 按键存归档
    fn put(&self, key: &str, far: &Far) -> NormResult<()>;
}

/// 文件系统缓存：每个键一个 `<key>.far` 文件
#[derive(Debug, Clone)]
pub struct FsGrammarCache {
    dir: PathBuf,
}

impl FsGrammarCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.far", key))
    }
}

impl GrammarCache for FsGrammarCache {
    fn get(&self, key: &str) -> NormResult<Option<Far>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        match Far::from_json(&content) {
            Ok(far) => Ok(Some(far)),
            Err(e) => {
                // 损坏的归档按未命中处理，触发重建覆盖
                tracing::warn!("discarding corrupt grammar archive {:?}: {}", path, e);
                Ok(None)
            }
        }
    }

    fn put(&self, key: &str, far: &Far) -> NormResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let json = far.to_json()?;
        let tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        std::fs::write(tmp.path(), json.as_bytes())?;
        tmp.persist(self.path(key))
            .map_err(|e| NormError::Cache(format!("publish archive: {}", e)))?;

        tracing::info!("grammar archive saved: {:?}", self.path(key));
        Ok(())
    }
}

/// 内存缓存（测试用）：记录 get/put/命中次数
#[derive(Debug, Default)]
pub struct MemoryGrammarCache {
    entries: Mutex<HashMap<String, String>>,
    gets: AtomicUsize,
    hits: AtomicUsize,
    puts: AtomicUsize,
}

impl MemoryGrammarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

impl GrammarCache for MemoryGrammarCache {
    fn get(&self, key: &str) -> NormResult<Option<Far>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        let entries = self
            .entries
            .lock()
            .map_err(|_| NormError::Cache("poisoned cache lock".to_string()))?;
        match entries.get(key) {
            Some(json) => {
                self.hits.fetch_add(1, Ordering::SeqCst);
                Ok(Some(Far::from_json(json)?))
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, far: &Far) -> NormResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        let json = far.to_json()?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| NormError::Cache("poisoned cache lock".to_string()))?;
        entries.insert(key.to_string(), json);
        Ok(())
    }
}

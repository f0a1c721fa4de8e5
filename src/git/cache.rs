use std::collections::HashMap;
use std::sync::Mutex;

use futures_util::future::{BoxFuture, FutureExt, Shared};

use crate::git::models::{GitStatus, GitTag, PagedResult};

/// 缓存中存放的值：一个可被多个调用方共同等待的进行中结果
pub type PendingResult<T> = Shared<BoxFuture<'static, T>>;

/// 按仓库路径缓存进行中/已完成结果的 promise 表。
///
/// 关键不变量：从发现 miss 到写入 pending future 发生在同一次锁持有内，
/// 且在任何挂起点之前，因此并发调用方一定共享同一次底层执行，
/// 不会对同一个 key 重复发起 git 进程。
pub struct RepoCache<T: Clone> {
    entries: Mutex<HashMap<String, PendingResult<T>>>,
}

impl<T: Clone> RepoCache<T> {
    pub fn new() -> Self {
        RepoCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// 查找已有的进行中结果
    pub fn get(&self, key: &str) -> Option<PendingResult<T>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// 命中则返回已有条目；miss 则用 `make` 构造加载 future，
    /// `store` 为 true 时同步写入缓存后返回。
    ///
    /// 调用方拿到返回值后再 await，锁内不会发生挂起。
    pub fn get_or_insert_with<F>(&self, key: &str, store: bool, make: F) -> PendingResult<T>
    where
        F: FnOnce() -> BoxFuture<'static, T>,
    {
        let mut entries = self.entries.lock().unwrap();
        if let Some(pending) = entries.get(key) {
            tracing::debug!(key = %key, "cache hit");
            return pending.clone();
        }
        let pending = make().shared();
        if store {
            entries.insert(key.to_string(), pending.clone());
        }
        pending
    }

    /// 移除指定 key 的条目，加载失败时由加载方显式调用
    pub fn remove(&self, key: &str) -> bool {
        self.entries.lock().unwrap().remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl<T: Clone> Default for RepoCache<T> {
    fn default() -> Self {
        RepoCache::new()
    }
}

/// 每类实体一个独立的 RepoCache，由 owning service 构造并传入各 provider，
/// 生命周期随 owning service 结束，不使用全局状态。
pub struct GitCache {
    pub tags: RepoCache<PagedResult<GitTag>>,
    pub statuses: RepoCache<GitStatus>,
}

impl GitCache {
    pub fn new() -> Self {
        GitCache {
            tags: RepoCache::new(),
            statuses: RepoCache::new(),
        }
    }
}

impl Default for GitCache {
    fn default() -> Self {
        GitCache::new()
    }
}

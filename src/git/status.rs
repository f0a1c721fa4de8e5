use std::sync::Arc;

use futures_util::FutureExt;

use crate::git::cache::GitCache;
use crate::git::executor::GitExecutor;
use crate::git::models::{GitStatus, GitStatusFile};
use crate::git::parsers::status_parser::{parse_status_records, status_args};

/// 工作区状态的 provider，缓存结构与 TagsProvider 相同：
/// 按仓库路径缓存进行中的加载 future，失败驱逐并返回空状态。
pub struct StatusProvider {
    executor: Arc<dyn GitExecutor>,
    cache: Arc<GitCache>,
}

impl StatusProvider {
    pub fn new(executor: Arc<dyn GitExecutor>, cache: Arc<GitCache>) -> Self {
        StatusProvider { executor, cache }
    }

    /// 读取整个工作区的状态。空仓库路径立即返回空状态。
    pub async fn get_status(&self, repo_path: &str) -> GitStatus {
        if repo_path.is_empty() {
            return GitStatus::empty(repo_path);
        }

        let pending = self.cache.statuses.get_or_insert_with(repo_path, true, || {
            let executor = Arc::clone(&self.executor);
            let cache = Arc::clone(&self.cache);
            let repo_path = repo_path.to_string();
            async move { Self::load_status(executor, cache, repo_path).await }.boxed()
        });
        pending.await
    }

    async fn load_status(
        executor: Arc<dyn GitExecutor>,
        cache: Arc<GitCache>,
        repo_path: String,
    ) -> GitStatus {
        let mut args: Vec<String> = vec!["status".to_string()];
        args.extend(status_args(true));
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        match executor.execute(&repo_path, &arg_refs).await {
            Ok(raw) => {
                let files: Vec<GitStatusFile> = parse_status_records(&raw)
                    .map(|record| GitStatusFile::from_record(&repo_path, record))
                    .collect();
                tracing::debug!(repo = %repo_path, count = files.len(), "loaded status");
                GitStatus::new(&repo_path, files)
            }
            Err(err) => {
                tracing::warn!(repo = %repo_path, error = %err, "status query failed");
                cache.statuses.remove(&repo_path);
                GitStatus::empty(&repo_path)
            }
        }
    }

    /// 查询单个文件的状态。pathspec 限定，不走缓存。
    pub async fn get_status_for_file(
        &self,
        repo_path: &str,
        path: &str,
    ) -> Option<GitStatusFile> {
        if repo_path.is_empty() {
            return None;
        }
        let mut args: Vec<String> = vec!["status".to_string()];
        args.extend(status_args(true));
        args.push("--".to_string());
        args.push(path.to_string());
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        match self.executor.execute(repo_path, &arg_refs).await {
            Ok(raw) => parse_status_records(&raw)
                .next()
                .map(|record| GitStatusFile::from_record(repo_path, record)),
            Err(err) => {
                tracing::warn!(repo = %repo_path, path = %path, error = %err, "file status query failed");
                None
            }
        }
    }

    /// 驱逐该仓库的状态缓存
    pub fn invalidate(&self, repo_path: &str) {
        self.cache.statuses.remove(repo_path);
    }
}

use std::sync::Arc;

use futures_util::FutureExt;

use crate::git::cache::GitCache;
use crate::git::error::{ExecError, TagAction, TagError};
use crate::git::executor::GitExecutor;
use crate::git::models::{GitTag, PagedResult, PagingOptions};
use crate::git::parsers::ref_parser::{parse_tag_records, tag_format_args};
use crate::git::sorting::{self, TagSort};

/// tag 过滤谓词
pub type TagFilter = Box<dyn Fn(&GitTag) -> bool + Send + Sync>;

/// `get_tags` 的查询选项。filter 和 sort 作用在缓存结果的副本上。
#[derive(Default)]
pub struct TagListOptions {
    pub filter: Option<TagFilter>,
    pub paging: Option<PagingOptions>,
    pub sort: Option<TagSort>,
}

/// `get_tags_with_commit` 的查询语义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagQueryMode {
    /// 包含该提交的 tags
    Contains,
    /// 恰好指向该提交的 tags
    PointsAt,
}

/// tag 查询与变更的 provider。
///
/// 读路径走缓存：miss 时在缓存里同步登记进行中的加载 future，
/// 并发调用方共享同一次 git 执行；失败时驱逐缓存并返回空结果。
/// 变更路径（create/delete）直接执行，不触碰缓存。
pub struct TagsProvider {
    executor: Arc<dyn GitExecutor>,
    cache: Arc<GitCache>,
}

impl TagsProvider {
    pub fn new(executor: Arc<dyn GitExecutor>, cache: Arc<GitCache>) -> Self {
        TagsProvider { executor, cache }
    }

    /// 列出仓库的全部 tags，结果按 options 过滤/排序。
    /// 空仓库路径立即返回空结果，不触发执行器也不写缓存。
    /// 读路径失败不抛错，表现为空列表。
    pub async fn get_tags(&self, repo_path: &str, options: TagListOptions) -> PagedResult<GitTag> {
        if repo_path.is_empty() {
            return PagedResult::empty();
        }

        // 带显式游标的请求不把结果存为该 key 的完整结果
        let store = options
            .paging
            .as_ref()
            .and_then(|p| p.cursor.as_ref())
            .is_none();

        let pending = self.cache.tags.get_or_insert_with(repo_path, store, || {
            let executor = Arc::clone(&self.executor);
            let cache = Arc::clone(&self.cache);
            let repo_path = repo_path.to_string();
            async move { Self::load_tags(executor, cache, repo_path).await }.boxed()
        });
        let base = pending.await;

        // 在副本上过滤/排序，缓存的基础结果保持不变
        let mut values = base.values;
        if let Some(filter) = &options.filter {
            values.retain(|tag| filter(tag));
        }
        if let Some(sort) = options.sort {
            sorting::sort_tags(&mut values, sort);
        }

        PagedResult::from_values(values)
    }

    async fn load_tags(
        executor: Arc<dyn GitExecutor>,
        cache: Arc<GitCache>,
        repo_path: String,
    ) -> PagedResult<GitTag> {
        let mut args: Vec<String> = vec!["for-each-ref".to_string()];
        args.extend(tag_format_args());
        args.push("refs/tags/".to_string());
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        match executor.execute(&repo_path, &arg_refs).await {
            Ok(raw) => {
                let tags: Vec<GitTag> = parse_tag_records(&raw)
                    .map(|record| GitTag::from_record(&repo_path, record))
                    .collect();
                tracing::debug!(repo = %repo_path, count = tags.len(), "loaded tags");
                PagedResult::from_values(tags)
            }
            Err(err) => {
                // 失败不缓存：驱逐条目，读路径一律以空结果收场
                tracing::warn!(repo = %repo_path, error = %err, "tag listing failed");
                cache.tags.remove(&repo_path);
                PagedResult::empty()
            }
        }
    }

    /// 按名称精确查找单个 tag
    pub async fn get_tag(&self, repo_path: &str, name: &str) -> Option<GitTag> {
        let wanted = name.to_string();
        let result = self
            .get_tags(
                repo_path,
                TagListOptions {
                    filter: Some(Box::new(move |tag| tag.name == wanted)),
                    ..Default::default()
                },
            )
            .await;
        result.values.into_iter().next()
    }

    /// 查询包含/指向指定提交的 tag 名称列表。不缓存，失败返回空列表。
    pub async fn get_tags_with_commit(
        &self,
        repo_path: &str,
        sha: &str,
        mode: TagQueryMode,
    ) -> Vec<String> {
        if repo_path.is_empty() {
            return Vec::new();
        }
        let flag = match mode {
            TagQueryMode::Contains => "--contains",
            TagQueryMode::PointsAt => "--points-at",
        };
        match self.executor.execute(repo_path, &["tag", flag, sha]).await {
            Ok(raw) => raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(err) => {
                tracing::warn!(repo = %repo_path, error = %err, "tag query failed");
                Vec::new()
            }
        }
    }

    /// 创建 tag；给 message 时创建附注 tag。失败时错误携带 tag 名称与操作类型。
    pub async fn create_tag(
        &self,
        repo_path: &str,
        name: &str,
        target: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), TagError> {
        let mut args: Vec<&str> = vec!["tag"];
        match message {
            Some(msg) => args.extend(["-a", name, "-m", msg]),
            None => args.push(name),
        }
        if let Some(target) = target {
            args.push(target);
        }
        self.run_mutation(repo_path, &args, name, TagAction::Create)
            .await
    }

    /// 删除本地 tag
    pub async fn delete_tag(&self, repo_path: &str, name: &str) -> Result<(), TagError> {
        self.run_mutation(repo_path, &["tag", "-d", name], name, TagAction::Delete)
            .await
    }

    async fn run_mutation(
        &self,
        repo_path: &str,
        args: &[&str],
        name: &str,
        action: TagAction,
    ) -> Result<(), TagError> {
        self.executor
            .execute(repo_path, args)
            .await
            .map(|_| ())
            .map_err(|source: ExecError| TagError::new(name, action, source))
    }

    /// 驱逐该仓库的 tag 缓存，下一次读取重新拉取
    pub fn invalidate(&self, repo_path: &str) {
        self.cache.tags.remove(repo_path);
    }
}

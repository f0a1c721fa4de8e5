use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// 执行外部 git 进程失败的错误
#[derive(Debug, Error)]
pub enum ExecError {
    /// 进程无法启动（git 不存在、权限不足等）
    #[error("failed to spawn git process: {0}")]
    Spawn(#[from] std::io::Error),

    /// 进程以非零状态退出
    #[error("git exited with status {exit_code:?}: {stderr}")]
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },
}

/// tag 变更操作类型，用于错误上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    Create,
    Delete,
}

impl fmt::Display for TagAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagAction::Create => write!(f, "create"),
            TagAction::Delete => write!(f, "delete"),
        }
    }
}

static ALREADY_EXISTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)already exists").unwrap());

static NOT_FOUND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)not found|no such").unwrap());

static INVALID_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)is not a valid tag name").unwrap());

static PERMISSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)permission denied|insufficient permission").unwrap());

/// 从 git stderr 归类出的失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagErrorReason {
    AlreadyExists,
    NotFound,
    InvalidName,
    PermissionDenied,
    Other,
}

impl TagErrorReason {
    /// 根据执行错误的 stderr 内容归类失败原因
    pub fn classify(source: &ExecError) -> Self {
        let stderr = match source {
            ExecError::Failed { stderr, .. } => stderr,
            ExecError::Spawn(_) => return TagErrorReason::Other,
        };
        if ALREADY_EXISTS_RE.is_match(stderr) {
            TagErrorReason::AlreadyExists
        } else if INVALID_NAME_RE.is_match(stderr) {
            TagErrorReason::InvalidName
        } else if NOT_FOUND_RE.is_match(stderr) {
            TagErrorReason::NotFound
        } else if PERMISSION_RE.is_match(stderr) {
            TagErrorReason::PermissionDenied
        } else {
            TagErrorReason::Other
        }
    }
}

impl fmt::Display for TagErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TagErrorReason::AlreadyExists => "tag already exists",
            TagErrorReason::NotFound => "tag not found",
            TagErrorReason::InvalidName => "invalid tag name",
            TagErrorReason::PermissionDenied => "permission denied",
            TagErrorReason::Other => "git command failed",
        };
        write!(f, "{}", text)
    }
}

/// tag 创建/删除失败，携带 tag 名称与操作类型，供上层直接渲染提示
#[derive(Debug, Error)]
#[error("failed to {action} tag '{tag}': {reason}")]
pub struct TagError {
    pub tag: String,
    pub action: TagAction,
    pub reason: TagErrorReason,
    #[source]
    pub source: ExecError,
}

impl TagError {
    pub fn new(tag: &str, action: TagAction, source: ExecError) -> Self {
        let reason = TagErrorReason::classify(&source);
        TagError {
            tag: tag.to_string(),
            action,
            reason,
            source,
        }
    }
}

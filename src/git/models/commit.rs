use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::git::models::file_change::GitFileChange;
use crate::git::models::revision;
use crate::git::models::user::GitUser;

/// 伪提交的固定提交信息
pub const UNCOMMITTED_MESSAGE: &str = "Uncommitted changes";

/// 伪提交上合成的本地用户展示名
pub const YOU: &str = "You";

/// 提交上的一条身份记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitCommitIdentity {
    pub name: String,
    pub email: Option<String>,
    pub date: DateTime<Utc>,
}

/// 一条历史条目。伪提交用保留修订标识代替 hash，
/// 下游消费方与真实提交同等对待。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitCommit {
    pub repo_path: String,
    pub sha: String,
    pub author: GitCommitIdentity,
    pub committer: GitCommitIdentity,
    pub message: String,
    pub parents: Vec<String>,
    pub files: Vec<GitFileChange>,
}

impl GitCommit {
    /// 合成一条代表工作区或暂存区状态的伪提交
    pub fn pseudo(
        repo_path: &str,
        sha: &str,
        user: Option<&GitUser>,
        date: DateTime<Utc>,
        parents: Vec<String>,
        files: Vec<GitFileChange>,
    ) -> Self {
        let identity = GitCommitIdentity {
            name: YOU.to_string(),
            email: user.and_then(|u| u.email.clone()),
            date,
        };
        GitCommit {
            repo_path: repo_path.to_string(),
            sha: sha.to_string(),
            author: identity.clone(),
            committer: identity,
            message: UNCOMMITTED_MESSAGE.to_string(),
            parents,
            files,
        }
    }

    pub fn is_uncommitted(&self) -> bool {
        revision::is_uncommitted(&self.sha)
    }

    pub fn is_uncommitted_staged(&self) -> bool {
        revision::is_uncommitted_staged(&self.sha)
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.committer.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::models::revision::{HEAD, UNCOMMITTED};

    #[test]
    fn test_pseudo_commit_identity() {
        let user = GitUser::new(Some("dev".to_string()), Some("dev@example.com".to_string()));
        let commit = GitCommit::pseudo(
            "/repo",
            UNCOMMITTED,
            Some(&user),
            Utc::now(),
            vec![HEAD.to_string()],
            Vec::new(),
        );
        // 展示名固定为 You，邮箱取传入用户的
        assert_eq!(commit.author.name, YOU);
        assert_eq!(commit.author.email.as_deref(), Some("dev@example.com"));
        assert_eq!(commit.message, UNCOMMITTED_MESSAGE);
        assert!(commit.is_uncommitted());
        assert!(!commit.is_uncommitted_staged());
    }

    #[test]
    fn test_pseudo_commit_without_user() {
        let commit = GitCommit::pseudo(
            "/repo",
            UNCOMMITTED,
            None,
            Utc::now(),
            vec![HEAD.to_string()],
            Vec::new(),
        );
        assert_eq!(commit.author.name, YOU);
        assert!(commit.author.email.is_none());
    }
}

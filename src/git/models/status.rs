use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::git::models::commit::GitCommit;
use crate::git::models::file_change::GitFileChange;
use crate::git::models::revision::{HEAD, UNCOMMITTED, UNCOMMITTED_STAGED};
use crate::git::models::status_file::GitStatusFile;
use crate::git::models::user::GitUser;

/// 一次 status 查询的聚合结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitStatus {
    pub repo_path: String,
    pub files: Vec<GitStatusFile>,
}

impl GitStatus {
    pub fn new(repo_path: &str, files: Vec<GitStatusFile>) -> Self {
        GitStatus {
            repo_path: repo_path.to_string(),
            files,
        }
    }

    pub fn empty(repo_path: &str) -> Self {
        GitStatus::new(repo_path, Vec::new())
    }

    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file(&self, path: &str) -> Option<&GitStatusFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn staged_count(&self) -> usize {
        self.files.iter().filter(|f| f.staged()).count()
    }

    pub fn wip_count(&self) -> usize {
        self.files.iter().filter(|f| f.wip()).count()
    }

    pub fn conflicted_count(&self) -> usize {
        self.files.iter().filter(|f| f.conflicted()).count()
    }

    /// 把整个工作区状态合成为至多两条伪提交：
    /// 未暂存（含冲突）变更归入 uncommitted，暂存变更归入 uncommitted-staged。
    /// 两条都存在时 uncommitted 的父指向 uncommitted-staged，
    /// 且时间戳严格更新，排序上未暂存条目始终在前。
    pub fn pseudo_commits(&self, user: Option<&GitUser>) -> Vec<GitCommit> {
        let mut wip_changes: Vec<GitFileChange> = Vec::new();
        let mut staged_changes: Vec<GitFileChange> = Vec::new();
        for file in &self.files {
            for change in file.pseudo_file_changes() {
                if change.staged {
                    staged_changes.push(change);
                } else {
                    wip_changes.push(change);
                }
            }
        }

        let now = Utc::now();
        let has_staged = !staged_changes.is_empty();
        let mut commits = Vec::new();

        if !wip_changes.is_empty() {
            let parent = if has_staged { UNCOMMITTED_STAGED } else { HEAD };
            commits.push(GitCommit::pseudo(
                &self.repo_path,
                UNCOMMITTED,
                user,
                now,
                vec![parent.to_string()],
                wip_changes,
            ));
        }

        if has_staged {
            let date = if commits.is_empty() {
                now
            } else {
                now - Duration::milliseconds(1)
            };
            commits.push(GitCommit::pseudo(
                &self.repo_path,
                UNCOMMITTED_STAGED,
                user,
                date,
                vec![HEAD.to_string()],
                staged_changes,
            ));
        }

        commits
    }
}

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::git::models::commit::GitCommit;
use crate::git::models::file_change::GitFileChange;
use crate::git::models::revision::{HEAD, UNCOMMITTED, UNCOMMITTED_STAGED};
use crate::git::models::user::GitUser;
use crate::git::parsers::status_parser::StatusRecord;

/// 暂存区（index）侧的变更分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitFileIndexStatus {
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
}

/// 工作区侧的变更分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitFileWorkingTreeStatus {
    Added,
    Deleted,
    Modified,
    Untracked,
    Ignored,
}

/// 冲突分类，与上面两轴互斥，存在时完全覆盖它们
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitFileConflictStatus {
    AddedByBoth,
    AddedByUs,
    AddedByThem,
    DeletedByBoth,
    DeletedByUs,
    DeletedByThem,
    ModifiedByBoth,
}

/// 文件的有效状态：冲突 > 暂存区 > 工作区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitFileStatus {
    Conflict(GitFileConflictStatus),
    Index(GitFileIndexStatus),
    WorkingTree(GitFileWorkingTreeStatus),
}

impl GitFileStatus {
    pub fn symbol(&self) -> char {
        match self {
            GitFileStatus::Conflict(_) => 'U',
            GitFileStatus::Index(index) => match index {
                GitFileIndexStatus::Added => 'A',
                GitFileIndexStatus::Deleted => 'D',
                GitFileIndexStatus::Modified => 'M',
                GitFileIndexStatus::Renamed => 'R',
                GitFileIndexStatus::Copied => 'C',
            },
            GitFileStatus::WorkingTree(wt) => match wt {
                GitFileWorkingTreeStatus::Added => 'A',
                GitFileWorkingTreeStatus::Deleted => 'D',
                GitFileWorkingTreeStatus::Modified => 'M',
                GitFileWorkingTreeStatus::Untracked => '?',
                GitFileWorkingTreeStatus::Ignored => '!',
            },
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            GitFileStatus::Conflict(conflict) => match conflict {
                GitFileConflictStatus::AddedByBoth => "added by both",
                GitFileConflictStatus::AddedByUs => "added by us",
                GitFileConflictStatus::AddedByThem => "added by them",
                GitFileConflictStatus::DeletedByBoth => "deleted by both",
                GitFileConflictStatus::DeletedByUs => "deleted by us",
                GitFileConflictStatus::DeletedByThem => "deleted by them",
                GitFileConflictStatus::ModifiedByBoth => "modified by both",
            },
            GitFileStatus::Index(index) => match index {
                GitFileIndexStatus::Added => "added",
                GitFileIndexStatus::Deleted => "deleted",
                GitFileIndexStatus::Modified => "modified",
                GitFileIndexStatus::Renamed => "renamed",
                GitFileIndexStatus::Copied => "copied",
            },
            GitFileStatus::WorkingTree(wt) => match wt {
                GitFileWorkingTreeStatus::Added => "added",
                GitFileWorkingTreeStatus::Deleted => "deleted",
                GitFileWorkingTreeStatus::Modified => "modified",
                GitFileWorkingTreeStatus::Untracked => "untracked",
                GitFileWorkingTreeStatus::Ignored => "ignored",
            },
        }
    }
}

/// 工作区中一个文件的完整状态，由 porcelain 状态码对确定性分类而来
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitStatusFile {
    pub repo_path: String,
    pub path: String,
    pub original_path: Option<String>,
    pub index_status: Option<GitFileIndexStatus>,
    pub working_tree_status: Option<GitFileWorkingTreeStatus>,
    pub conflict_status: Option<GitFileConflictStatus>,
}

impl GitStatusFile {
    pub fn from_record(repo_path: &str, record: StatusRecord) -> Self {
        let (conflict, index, working_tree) = classify(record.x, record.y);
        GitStatusFile {
            repo_path: repo_path.to_string(),
            path: record.path,
            original_path: record.original_path,
            index_status: index,
            working_tree_status: working_tree,
            conflict_status: conflict,
        }
    }

    /// 稳定标识，由 (repo_path, path) 派生
    pub fn id(&self) -> String {
        format!("{}|{}", self.repo_path, self.path)
    }

    pub fn conflicted(&self) -> bool {
        self.conflict_status.is_some()
    }

    pub fn staged(&self) -> bool {
        self.index_status.is_some()
    }

    pub fn wip(&self) -> bool {
        self.working_tree_status.is_some()
    }

    /// 有效状态，优先级：冲突 > 暂存区 > 工作区
    pub fn status(&self) -> Option<GitFileStatus> {
        if let Some(conflict) = self.conflict_status {
            return Some(GitFileStatus::Conflict(conflict));
        }
        if let Some(index) = self.index_status {
            return Some(GitFileStatus::Index(index));
        }
        self.working_tree_status.map(GitFileStatus::WorkingTree)
    }

    pub fn status_symbol(&self) -> char {
        self.status().map(|s| s.symbol()).unwrap_or(' ')
    }

    pub fn status_text(&self) -> &'static str {
        self.status().map(|s| s.text()).unwrap_or("unchanged")
    }

    /// 文件名部分，用于展示
    pub fn formatted_path(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// 目录部分，无目录时为空串
    pub fn formatted_directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(index) => &self.path[..index],
            None => "",
        }
    }

    /// 把这个文件的工作区/暂存区状态合成为伪提交。
    ///
    /// 未暂存条目排在前面，且时间戳一次性派生为严格晚于暂存条目，
    /// 保证按时间排序时未暂存变更始终更新。
    pub fn pseudo_commits(&self, user: Option<&GitUser>) -> Vec<GitCommit> {
        let now = Utc::now();

        if self.conflicted() {
            let change = match self.status() {
                Some(status) => self.file_change(status, HEAD, false),
                None => return Vec::new(),
            };
            return vec![GitCommit::pseudo(
                &self.repo_path,
                UNCOMMITTED,
                user,
                now,
                vec![HEAD.to_string()],
                vec![change],
            )];
        }

        let mut commits = Vec::new();

        if let Some(wt) = self.working_tree_status {
            let parent = if self.staged() { UNCOMMITTED_STAGED } else { HEAD };
            let change = self.file_change(GitFileStatus::WorkingTree(wt), parent, false);
            commits.push(GitCommit::pseudo(
                &self.repo_path,
                UNCOMMITTED,
                user,
                now,
                vec![parent.to_string()],
                vec![change],
            ));
        }

        if let Some(index) = self.index_status {
            let date = if self.wip() {
                now - Duration::milliseconds(1)
            } else {
                now
            };
            let change = self.file_change(GitFileStatus::Index(index), HEAD, true);
            commits.push(GitCommit::pseudo(
                &self.repo_path,
                UNCOMMITTED_STAGED,
                user,
                date,
                vec![HEAD.to_string()],
                vec![change],
            ));
        }

        commits
    }

    /// 伪提交对应的文件变更列表，携带有效状态
    pub fn pseudo_file_changes(&self) -> Vec<GitFileChange> {
        let status = match self.status() {
            Some(status) => status,
            None => return Vec::new(),
        };

        if self.conflicted() {
            return vec![self.file_change(status, HEAD, false)];
        }

        let mut changes = Vec::new();
        if self.wip() {
            let previous = if self.staged() { UNCOMMITTED_STAGED } else { HEAD };
            changes.push(self.file_change(status, previous, false));
        }
        if self.staged() {
            changes.push(self.file_change(status, HEAD, true));
        }
        changes
    }

    fn file_change(&self, status: GitFileStatus, previous: &str, staged: bool) -> GitFileChange {
        GitFileChange {
            repo_path: self.repo_path.clone(),
            path: self.path.clone(),
            status,
            original_path: self.original_path.clone(),
            previous_sha: Some(previous.to_string()),
            staged,
        }
    }
}

/// 状态码对的确定性分类：先查冲突表，命中则跳过另外两轴；
/// 否则 x 查暂存区表、y 查工作区表，两者独立，均可缺失。
fn classify(
    x: Option<char>,
    y: Option<char>,
) -> (
    Option<GitFileConflictStatus>,
    Option<GitFileIndexStatus>,
    Option<GitFileWorkingTreeStatus>,
) {
    match (x, y) {
        (Some('?'), Some('?')) => (None, None, Some(GitFileWorkingTreeStatus::Untracked)),
        (Some('!'), Some('!')) => (None, None, Some(GitFileWorkingTreeStatus::Ignored)),
        (Some('A'), Some('A')) => (Some(GitFileConflictStatus::AddedByBoth), None, None),
        (Some('A'), Some('U')) => (Some(GitFileConflictStatus::AddedByUs), None, None),
        (Some('U'), Some('A')) => (Some(GitFileConflictStatus::AddedByThem), None, None),
        (Some('D'), Some('D')) => (Some(GitFileConflictStatus::DeletedByBoth), None, None),
        (Some('D'), Some('U')) => (Some(GitFileConflictStatus::DeletedByUs), None, None),
        (Some('U'), Some('D')) => (Some(GitFileConflictStatus::DeletedByThem), None, None),
        (Some('U'), Some('U')) => (Some(GitFileConflictStatus::ModifiedByBoth), None, None),
        _ => (None, index_status(x), working_tree_status(y)),
    }
}

fn index_status(x: Option<char>) -> Option<GitFileIndexStatus> {
    match x? {
        'A' => Some(GitFileIndexStatus::Added),
        'D' => Some(GitFileIndexStatus::Deleted),
        'M' => Some(GitFileIndexStatus::Modified),
        'R' => Some(GitFileIndexStatus::Renamed),
        'C' => Some(GitFileIndexStatus::Copied),
        _ => None,
    }
}

fn working_tree_status(y: Option<char>) -> Option<GitFileWorkingTreeStatus> {
    match y? {
        'A' => Some(GitFileWorkingTreeStatus::Added),
        'D' => Some(GitFileWorkingTreeStatus::Deleted),
        'M' => Some(GitFileWorkingTreeStatus::Modified),
        _ => None,
    }
}

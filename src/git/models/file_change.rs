use serde::{Deserialize, Serialize};

use crate::git::models::status_file::GitFileStatus;

/// 单个文件在一次（真实或伪）修订中的变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitFileChange {
    pub repo_path: String,
    pub path: String,
    pub status: GitFileStatus,
    /// 重命名/复制的来源路径
    pub original_path: Option<String>,
    /// 对比的上一个修订（真实 hash、HEAD 或保留标识）
    pub previous_sha: Option<String>,
    pub staged: bool,
}

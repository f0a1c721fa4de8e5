use once_cell::sync::Lazy;
use regex::Regex;

/// 表示工作区未暂存变更的保留修订标识（非真实 hash）
pub const UNCOMMITTED: &str = "uncommitted";

/// 表示暂存区变更的保留修订标识（非真实 hash）
pub const UNCOMMITTED_STAGED: &str = "uncommitted-staged";

/// 当前分支顶端
pub const HEAD: &str = "HEAD";

static SHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{40}$").unwrap());

/// 判断字符串是否为完整的 40 位提交 hash
pub fn is_sha(rev: &str) -> bool {
    SHA_RE.is_match(rev)
}

/// 是否为未提交伪修订（包含暂存与未暂存两种）
pub fn is_uncommitted(rev: &str) -> bool {
    rev == UNCOMMITTED || rev == UNCOMMITTED_STAGED
}

pub fn is_uncommitted_staged(rev: &str) -> bool {
    rev == UNCOMMITTED_STAGED
}

/// 展示用的短修订：完整 hash 截断为 8 位，其余原样返回
pub fn shorten(rev: &str) -> &str {
    if is_sha(rev) {
        &rev[..8]
    } else {
        rev
    }
}

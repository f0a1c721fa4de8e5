//! `status --porcelain` 输出的纯文本解析。

/// 重命名/复制记录中新旧路径的分隔符
const RENAME_SEPARATOR: &str = " -> ";

/// 传给执行器的 status 参数（不含子命令本身）
pub fn status_args(include_untracked: bool) -> Vec<String> {
    let untracked = if include_untracked {
        "--untracked-files=all"
    } else {
        "--untracked-files=no"
    };
    vec!["--porcelain".to_string(), untracked.to_string()]
}

/// 一条解析后的 status 记录：两个独立的状态字符加路径。
/// 状态位为空格时对应轴缺失。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub x: Option<char>,
    pub y: Option<char>,
    pub path: String,
    pub original_path: Option<String>,
}

/// 惰性解析 status 记录。行格式为 `XY <path>`，
/// 重命名为 `XY <orig> -> <path>`。装不下状态对加路径的行丢弃，不中断整批。
pub fn parse_status_records(raw: &str) -> impl Iterator<Item = StatusRecord> + '_ {
    raw.lines().filter_map(|line| {
        if line.trim().is_empty() {
            return None;
        }
        // 2 个状态字符 + 1 个空格 + 至少 1 个路径字符
        if line.len() < 4 || !line.is_char_boundary(3) {
            tracing::warn!(line = %line, "dropping malformed status record");
            return None;
        }

        let mut chars = line.chars();
        let x = status_char(chars.next());
        let y = status_char(chars.next());

        let rest = line[3..].trim();
        let (original_path, path) = match rest.split_once(RENAME_SEPARATOR) {
            Some((orig, new)) => (Some(unquote(orig).to_string()), unquote(new).to_string()),
            None => (None, unquote(rest).to_string()),
        };
        if path.is_empty() {
            tracing::warn!(line = %line, "dropping status record without path");
            return None;
        }

        Some(StatusRecord {
            x,
            y,
            path,
            original_path,
        })
    })
}

fn status_char(c: Option<char>) -> Option<char> {
    match c {
        Some(' ') | None => None,
        other => other,
    }
}

/// porcelain 对含特殊字符的路径加引号，展示与匹配都用裸路径
fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let raw = "M  staged.rs\n M wip.rs\nMM both.rs\n?? new.rs\n";
        let records: Vec<_> = parse_status_records(raw).collect();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].x, Some('M'));
        assert_eq!(records[0].y, None);
        assert_eq!(records[0].path, "staged.rs");

        assert_eq!(records[1].x, None);
        assert_eq!(records[1].y, Some('M'));

        assert_eq!(records[2].x, Some('M'));
        assert_eq!(records[2].y, Some('M'));

        assert_eq!(records[3].x, Some('?'));
        assert_eq!(records[3].y, Some('?'));
    }

    #[test]
    fn test_parse_rename() {
        let raw = "R  old_name.rs -> new_name.rs\n";
        let records: Vec<_> = parse_status_records(raw).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].x, Some('R'));
        assert_eq!(records[0].original_path.as_deref(), Some("old_name.rs"));
        assert_eq!(records[0].path, "new_name.rs");
    }

    #[test]
    fn test_parse_quoted_path() {
        let raw = "?? \"with space.rs\"\n";
        let records: Vec<_> = parse_status_records(raw).collect();
        assert_eq!(records[0].path, "with space.rs");
    }

    #[test]
    fn test_short_lines_are_dropped() {
        let raw = "M\n??\n M ok.rs\n";
        let records: Vec<_> = parse_status_records(raw).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "ok.rs");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_status_records("").count(), 0);
        assert_eq!(parse_status_records("\n\n").count(), 0);
    }

    #[test]
    fn test_status_args() {
        assert_eq!(
            status_args(true),
            vec!["--porcelain", "--untracked-files=all"]
        );
        assert_eq!(
            status_args(false),
            vec!["--porcelain", "--untracked-files=no"]
        );
    }
}

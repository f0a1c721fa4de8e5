//! for-each-ref 输出的纯文本解析。
//!
//! 无 I/O、无缓存：provider 负责拿到原始文本，这里只做记录切分与字段映射。

/// 每条记录的字段数，与 `tag_format_args` 的格式串一一对应
const TAG_FIELD_COUNT: usize = 6;

/// 字段分隔符用 NUL，避免与 subject 中的常见字符冲突
const FIELD_SEPARATOR: char = '\0';

/// 传给执行器的格式化参数，使 for-each-ref 输出与解析器的字段布局一致。
///
/// 字段按位置依次是：refname（去掉 refs/tags/ 前缀）、对象 hash、
/// 解引用后的提交 hash、subject、creator 日期、解引用后的提交日期。
pub fn tag_format_args() -> Vec<String> {
    let fields = [
        "%(refname:lstrip=2)",
        "%(objectname)",
        "%(*objectname)",
        "%(subject)",
        "%(creatordate:iso8601-strict)",
        "%(*creatordate:iso8601-strict)",
    ];
    vec![format!("--format={}", fields.join("%00"))]
}

/// 一条解析后的 tag 记录，字段全部显式命名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: String,
    /// 指向的目标提交：附注 tag 取解引用后的 hash，轻量 tag 取对象自身
    pub sha: String,
    pub message: String,
    pub date: Option<String>,
    pub commit_date: Option<String>,
}

/// 惰性解析 tag 记录：按行切记录、按 NUL 切字段、按位置映射。
/// 空行跳过；字段数不符的记录丢弃并告警，不中断整批解析。
pub fn parse_tag_records(raw: &str) -> impl Iterator<Item = TagRecord> + '_ {
    raw.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != TAG_FIELD_COUNT {
            tracing::warn!(
                fields = fields.len(),
                expected = TAG_FIELD_COUNT,
                "dropping malformed tag record"
            );
            return None;
        }

        let dereferenced = fields[2];
        let sha = if dereferenced.is_empty() {
            fields[1]
        } else {
            dereferenced
        };

        Some(TagRecord {
            name: fields[0].to_string(),
            sha: sha.to_string(),
            message: fields[3].to_string(),
            date: optional(fields[4]),
            commit_date: optional(fields[5]),
        })
    })
}

/// 空字段表示缺失，不是错误
fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT: &str = "0123456789abcdef0123456789abcdef01234567";
    const TAG_OBJECT: &str = "fedcba9876543210fedcba9876543210fedcba98";

    fn annotated_line() -> String {
        format!(
            "v1.0\0{}\0{}\0Release 1.0\x002024-03-01T10:00:00+00:00\x002024-02-28T09:00:00+00:00",
            TAG_OBJECT, COMMIT
        )
    }

    #[test]
    fn test_parse_annotated_tag() {
        let records: Vec<_> = parse_tag_records(&annotated_line()).collect();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "v1.0");
        // 附注 tag 取解引用后的提交 hash
        assert_eq!(record.sha, COMMIT);
        assert_eq!(record.message, "Release 1.0");
        assert_eq!(record.date.as_deref(), Some("2024-03-01T10:00:00+00:00"));
        assert_eq!(
            record.commit_date.as_deref(),
            Some("2024-02-28T09:00:00+00:00")
        );
    }

    #[test]
    fn test_parse_lightweight_tag() {
        let raw = format!("v0.1\0{}\0\0\x002024-01-01T00:00:00+00:00\0", COMMIT);
        let records: Vec<_> = parse_tag_records(&raw).collect();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        // 轻量 tag 无解引用对象，sha 落回对象自身
        assert_eq!(record.sha, COMMIT);
        assert_eq!(record.message, "");
        assert!(record.commit_date.is_none());
    }

    #[test]
    fn test_trailing_blank_lines_tolerated() {
        let raw = format!("{}\n\n\n", annotated_line());
        assert_eq!(parse_tag_records(&raw).count(), 1);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let raw = format!("garbage\0only\0four\0fields\n{}", annotated_line());
        let records: Vec<_> = parse_tag_records(&raw).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "v1.0");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_tag_records("").count(), 0);
        assert_eq!(parse_tag_records("\n\n").count(), 0);
    }

    #[test]
    fn test_format_args_match_field_count() {
        let args = tag_format_args();
        assert_eq!(args.len(), 1);
        let separators = args[0].matches("%00").count();
        assert_eq!(separators, TAG_FIELD_COUNT - 1);
    }
}

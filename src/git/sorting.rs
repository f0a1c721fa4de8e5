use chrono::{DateTime, Utc};

use crate::git::models::GitTag;

/// tag 列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSort {
    #[default]
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl TagSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date-desc" => Some(TagSort::DateDesc),
            "date-asc" => Some(TagSort::DateAsc),
            "name-asc" => Some(TagSort::NameAsc),
            "name-desc" => Some(TagSort::NameDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagSort::DateDesc => "date-desc",
            TagSort::DateAsc => "date-asc",
            TagSort::NameAsc => "name-asc",
            TagSort::NameDesc => "name-desc",
        }
    }
}

/// 稳定排序，不改变相等元素的相对顺序
pub fn sort_tags(tags: &mut [GitTag], sort: TagSort) {
    match sort {
        // 缺失日期的 tag 在降序时排到最后
        TagSort::DateDesc => tags.sort_by(|a, b| sort_date(b).cmp(&sort_date(a))),
        TagSort::DateAsc => tags.sort_by(|a, b| sort_date(a).cmp(&sort_date(b))),
        TagSort::NameAsc => tags.sort_by(compare_names),
        TagSort::NameDesc => tags.sort_by(|a, b| compare_names(b, a)),
    }
}

fn sort_date(tag: &GitTag) -> Option<DateTime<Utc>> {
    tag.date.or(tag.commit_date)
}

/// 名称比较先忽略大小写，同名再按原文比较保证确定性
fn compare_names(a: &GitTag, b: &GitTag) -> std::cmp::Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::models::date::parse_git_date;

    fn tag(name: &str, date: Option<&str>) -> GitTag {
        GitTag {
            repo_path: "/repo".to_string(),
            name: name.to_string(),
            sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
            message: String::new(),
            date: date.and_then(parse_git_date),
            commit_date: None,
        }
    }

    #[test]
    fn test_sort_by_date_desc() {
        let mut tags = vec![
            tag("old", Some("2023-01-01T00:00:00+00:00")),
            tag("new", Some("2024-01-01T00:00:00+00:00")),
            tag("undated", None),
        ];
        sort_tags(&mut tags, TagSort::DateDesc);
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_sort_by_date_asc() {
        let mut tags = vec![
            tag("new", Some("2024-01-01T00:00:00+00:00")),
            tag("old", Some("2023-01-01T00:00:00+00:00")),
        ];
        sort_tags(&mut tags, TagSort::DateAsc);
        assert_eq!(tags[0].name, "old");
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut tags = vec![tag("Zeta", None), tag("alpha", None), tag("Beta", None)];
        sort_tags(&mut tags, TagSort::NameAsc);
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zeta"]);

        sort_tags(&mut tags, TagSort::NameDesc);
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Beta", "alpha"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(TagSort::parse("date-desc"), Some(TagSort::DateDesc));
        assert_eq!(TagSort::parse("name-asc"), Some(TagSort::NameAsc));
        assert_eq!(TagSort::parse("unknown"), None);
    }
}

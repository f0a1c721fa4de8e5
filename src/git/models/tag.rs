use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::git::models::date::{self, DateStyle};
use crate::git::parsers::ref_parser::TagRecord;

/// 一个 tag 及其指向的提交信息，由 provider 从解析记录构造，构造后不再变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitTag {
    pub repo_path: String,
    pub name: String,
    /// tag 指向的目标提交（附注 tag 取解引用后的提交）
    pub sha: String,
    pub message: String,
    /// tag 对象自身的日期（轻量 tag 为提交日期）
    pub date: Option<DateTime<Utc>>,
    /// 被指向提交的日期，仅附注 tag 存在
    pub commit_date: Option<DateTime<Utc>>,
}

impl GitTag {
    pub fn from_record(repo_path: &str, record: TagRecord) -> Self {
        GitTag {
            repo_path: repo_path.to_string(),
            name: record.name,
            sha: record.sha,
            message: record.message,
            date: record.date.as_deref().and_then(date::parse_git_date),
            commit_date: record.commit_date.as_deref().and_then(date::parse_git_date),
        }
    }

    /// 稳定标识，由 (repo_path, name) 派生
    pub fn id(&self) -> String {
        format!("{}|tag/{}", self.repo_path, self.name)
    }

    pub fn ref_name(&self) -> &str {
        &self.name
    }

    /// 最后一个 `/` 之后的段，用于层级展示（如 releases/v1.0 -> v1.0）
    pub fn basename(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// 按风格输出 tag 日期，缺失时输出空串
    pub fn formatted_date(&self, style: DateStyle, format: &str) -> String {
        Self::format_optional(&self.date, style, format)
    }

    pub fn formatted_commit_date(&self, style: DateStyle, format: &str) -> String {
        Self::format_optional(&self.commit_date, style, format)
    }

    fn format_optional(value: &Option<DateTime<Utc>>, style: DateStyle, format: &str) -> String {
        match value {
            Some(d) => match style {
                DateStyle::Absolute => date::format_absolute(d, format),
                DateStyle::Relative => date::format_relative(d),
            },
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TagRecord {
        TagRecord {
            name: "releases/v1.0".to_string(),
            sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
            message: "Release".to_string(),
            date: Some("2024-03-01T10:00:00+00:00".to_string()),
            commit_date: Some("2024-02-28T09:00:00+00:00".to_string()),
        }
    }

    #[test]
    fn test_from_record_parses_dates() {
        let tag = GitTag::from_record("/repo", record());
        assert_eq!(tag.name, "releases/v1.0");
        assert!(tag.date.is_some());
        assert!(tag.commit_date.is_some());
    }

    #[test]
    fn test_id_is_stable() {
        let tag = GitTag::from_record("/repo", record());
        assert_eq!(tag.id(), "/repo|tag/releases/v1.0");
    }

    #[test]
    fn test_basename() {
        let tag = GitTag::from_record("/repo", record());
        assert_eq!(tag.basename(), "v1.0");

        let mut plain = record();
        plain.name = "v2.0".to_string();
        assert_eq!(GitTag::from_record("/repo", plain).basename(), "v2.0");
    }

    #[test]
    fn test_formatted_date_missing_is_empty() {
        let mut rec = record();
        rec.date = None;
        rec.commit_date = None;
        let tag = GitTag::from_record("/repo", rec);
        assert_eq!(tag.formatted_date(DateStyle::Absolute, "%Y-%m-%d"), "");
        assert_eq!(tag.formatted_commit_date(DateStyle::Relative, ""), "");
    }
}

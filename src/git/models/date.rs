use chrono::{DateTime, Duration, Utc};

/// 日期展示风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Absolute,
    Relative,
}

impl DateStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "absolute" => Some(DateStyle::Absolute),
            "relative" => Some(DateStyle::Relative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateStyle::Absolute => "absolute",
            DateStyle::Relative => "relative",
        }
    }
}

/// 解析 git 输出的 iso8601-strict 日期，空串或解析失败返回 None
pub fn parse_git_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// 按给定的 chrono 格式串输出绝对日期
pub fn format_absolute(date: &DateTime<Utc>, format: &str) -> String {
    date.format(format).to_string()
}

/// 相对当前时间输出日期（"2 hours ago" / "in 3 days"）
pub fn format_relative(date: &DateTime<Utc>) -> String {
    format_relative_to(date, Utc::now())
}

fn format_relative_to(date: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*date);
    if delta >= Duration::zero() {
        match unit_phrase(delta) {
            Some(phrase) => format!("{} ago", phrase),
            None => "just now".to_string(),
        }
    } else {
        match unit_phrase(-delta) {
            Some(phrase) => format!("in {}", phrase),
            None => "just now".to_string(),
        }
    }
}

fn unit_phrase(delta: Duration) -> Option<String> {
    if delta.num_seconds() < 60 {
        return None;
    }
    let minutes = delta.num_minutes();
    if minutes < 60 {
        return Some(plural(minutes, "minute"));
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return Some(plural(hours, "hour"));
    }
    let days = delta.num_days();
    if days < 7 {
        return Some(plural(days, "day"));
    }
    if days < 30 {
        return Some(plural(days / 7, "week"));
    }
    if days < 365 {
        return Some(plural(days / 30, "month"));
    }
    Some(plural(days / 365, "year"))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_date() {
        let date = parse_git_date("2024-03-01T10:00:00+00:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        // 带时区偏移的输入统一转成 UTC
        let date = parse_git_date("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        assert!(parse_git_date("").is_none());
        assert!(parse_git_date("   ").is_none());
        assert!(parse_git_date("not a date").is_none());
    }

    #[test]
    fn test_format_absolute() {
        let date = parse_git_date("2024-03-01T10:00:00+00:00").unwrap();
        assert_eq!(format_absolute(&date, "%Y-%m-%d"), "2024-03-01");
    }

    #[test]
    fn test_format_relative_past() {
        let now = Utc::now();
        assert_eq!(format_relative_to(&(now - Duration::seconds(5)), now), "just now");
        assert_eq!(
            format_relative_to(&(now - Duration::minutes(1)), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_to(&(now - Duration::hours(2)), now),
            "2 hours ago"
        );
        assert_eq!(
            format_relative_to(&(now - Duration::days(3)), now),
            "3 days ago"
        );
        assert_eq!(
            format_relative_to(&(now - Duration::days(14)), now),
            "2 weeks ago"
        );
        assert_eq!(
            format_relative_to(&(now - Duration::days(90)), now),
            "3 months ago"
        );
        assert_eq!(
            format_relative_to(&(now - Duration::days(800)), now),
            "2 years ago"
        );
    }

    #[test]
    fn test_format_relative_future() {
        let now = Utc::now();
        assert_eq!(
            format_relative_to(&(now + Duration::hours(3)), now),
            "in 3 hours"
        );
        assert_eq!(format_relative_to(&(now + Duration::seconds(10)), now), "just now");
    }

    #[test]
    fn test_date_style_parse() {
        assert_eq!(DateStyle::parse("absolute"), Some(DateStyle::Absolute));
        assert_eq!(DateStyle::parse("relative"), Some(DateStyle::Relative));
        assert_eq!(DateStyle::parse("fuzzy"), None);
    }
}

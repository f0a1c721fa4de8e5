use std::env;
use std::path::PathBuf;

use crate::git::models::DateStyle;
use crate::git::sorting::TagSort;

#[derive(Debug, Clone)]
pub struct Config {
    pub git_program: String,
    pub date_style: String,
    pub date_format: String,
    pub tag_sort: String,
    pub debug: bool,
}

impl Config {
    pub fn new() -> Self {
        // 默认配置
        let mut config = Config {
            git_program: "git".to_string(),
            date_style: "relative".to_string(),
            date_format: "%B %-d, %Y %-I:%M%P".to_string(),
            tag_sort: "date-desc".to_string(),
            debug: false,
        };

        // 加载配置文件
        #[cfg(not(test))]
        config.load_from_env_file();
        // 加载环境变量（覆盖配置文件）
        config.load_from_env();

        config
    }

    pub fn load_from_env_file(&mut self) {
        // 尝试从用户主目录加载
        if let Ok(home) = env::var("HOME") {
            let user_env_path = PathBuf::from(format!("{}/.git-scout/.env", home));
            if user_env_path.exists() {
                dotenvy::from_path(user_env_path).ok();
            }
        }

        // 尝试从当前目录加载
        dotenvy::dotenv().ok();
    }

    pub fn load_from_env(&mut self) {
        if let Ok(program) = env::var("GIT_SCOUT_GIT_PROGRAM") {
            self.git_program = program;
        }
        if let Ok(style) = env::var("GIT_SCOUT_DATE_STYLE") {
            self.date_style = style;
        }
        if let Ok(format) = env::var("GIT_SCOUT_DATE_FORMAT") {
            self.date_format = format;
        }
        if let Ok(sort) = env::var("GIT_SCOUT_TAG_SORT") {
            self.tag_sort = sort;
        }
        if let Ok(debug) = env::var("GIT_SCOUT_DEBUG") {
            self.debug = debug == "1" || debug.eq_ignore_ascii_case("true");
        }
    }

    pub fn update_from_args(&mut self, args: &crate::cli::args::Args) {
        // 命令行参数优先级最高
        if !args.sort.is_empty() {
            self.tag_sort = args.sort.clone();
        }
        if args.debug {
            self.debug = true;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.git_program.is_empty() {
            anyhow::bail!("Git program is empty. Please set GIT_SCOUT_GIT_PROGRAM to a valid executable");
        }
        if DateStyle::parse(&self.date_style).is_none() {
            anyhow::bail!(
                "Unsupported date style: {}. Expected 'absolute' or 'relative'",
                self.date_style
            );
        }
        if TagSort::parse(&self.tag_sort).is_none() {
            anyhow::bail!(
                "Unsupported tag sort: {}. Expected one of date-desc, date-asc, name-asc, name-desc",
                self.tag_sort
            );
        }
        Ok(())
    }

    pub fn date_style(&self) -> DateStyle {
        DateStyle::parse(&self.date_style).unwrap_or(DateStyle::Relative)
    }

    pub fn tag_sort(&self) -> TagSort {
        TagSort::parse(&self.tag_sort).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "git-scout",
    version,
    about = "Git 仓库元数据查询工具 - 读取 tags 与工作区状态，并把未提交变更合成为伪历史",
    long_about = "git-scout 通过调用外部 git 进程读取仓库元数据：列出/创建/删除 tags、查询包含某提交的 tags、解析工作区状态，并把未提交与已暂存的变更合成为可排序的伪提交。同一仓库的并发查询共享一次 git 调用。"
)]
pub struct Args {
    /// 目标仓库路径
    #[arg(short = 'r', long = "repo", default_value = ".")]
    pub repo: String,

    // =============== Tag 查询相关参数 ===============
    /// 列出所有 tags
    #[arg(long = "tag-list", default_value_t = false)]
    pub tag_list: bool,

    /// tag 排序方式（date-desc, date-asc, name-asc, name-desc）
    #[arg(long = "sort", value_name = "ORDER", default_value = "")] // 空字符串表示未指定
    pub sort: String,

    /// 显示指定 tag 的详细信息
    #[arg(long = "tag-info", value_name = "TAG")]
    pub tag_info: Option<String>,

    /// 列出包含指定提交的 tags
    #[arg(long = "tag-contains", value_name = "SHA")]
    pub tag_contains: Option<String>,

    /// 列出恰好指向指定提交的 tags
    #[arg(long = "tag-points-at", value_name = "SHA")]
    pub tag_points_at: Option<String>,

    // =============== Tag 变更相关参数 ===============
    /// 创建新的 tag
    #[arg(long = "tag-create", value_name = "TAG")]
    pub tag_create: Option<String>,

    /// 新 tag 指向的提交（配合 --tag-create，默认 HEAD）
    #[arg(long = "tag-ref", value_name = "REF")]
    pub tag_ref: Option<String>,

    /// tag 备注内容（配合 --tag-create，生成附注 tag）
    #[arg(long = "tag-message", value_name = "MSG")]
    pub tag_message: Option<String>,

    /// 删除指定的 tag
    #[arg(long = "tag-delete", value_name = "TAG")]
    pub tag_delete: Option<String>,

    // =============== 状态相关参数 ===============
    /// 显示工作区状态
    #[arg(long = "status", default_value_t = false)]
    pub status: bool,

    /// 合成并显示未提交变更的伪提交
    #[arg(long = "wip", default_value_t = false)]
    pub wip: bool,

    // =============== 输出相关参数 ===============
    /// 以 JSON 格式输出查询结果
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// 输出调试日志
    #[arg(long = "debug", default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        // 测试默认参数解析
        let args = Args::try_parse_from(["git-scout"]).unwrap();

        assert_eq!(args.repo, ".");
        assert!(!args.tag_list);
        assert_eq!(args.sort, "");
        assert_eq!(args.tag_info, None);
        assert_eq!(args.tag_create, None);
        assert_eq!(args.tag_ref, None);
        assert_eq!(args.tag_message, None);
        assert_eq!(args.tag_delete, None);
        assert_eq!(args.tag_contains, None);
        assert_eq!(args.tag_points_at, None);
        assert!(!args.status);
        assert!(!args.wip);
        assert!(!args.json);
        assert!(!args.debug);
    }

    #[test]
    fn test_args_tag_list_with_sort() {
        let args = Args::try_parse_from([
            "git-scout",
            "--repo",
            "/tmp/repo",
            "--tag-list",
            "--sort",
            "name-asc",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.repo, "/tmp/repo");
        assert!(args.tag_list);
        assert_eq!(args.sort, "name-asc");
        assert!(args.json);
    }

    #[test]
    fn test_args_tag_create_variations() {
        // 轻量 tag
        let args = Args::try_parse_from(["git-scout", "--tag-create", "v1.0.0"]).unwrap();
        assert_eq!(args.tag_create, Some("v1.0.0".to_string()));
        assert_eq!(args.tag_message, None);

        // 附注 tag 指向指定提交
        let args = Args::try_parse_from([
            "git-scout",
            "--tag-create",
            "v2.0.0",
            "--tag-message",
            "Release 2.0.0",
            "--tag-ref",
            "abc1234",
        ])
        .unwrap();
        assert_eq!(args.tag_create, Some("v2.0.0".to_string()));
        assert_eq!(args.tag_message, Some("Release 2.0.0".to_string()));
        assert_eq!(args.tag_ref, Some("abc1234".to_string()));
    }

    #[test]
    fn test_args_tag_queries() {
        let args = Args::try_parse_from(["git-scout", "--tag-contains", "abc1234"]).unwrap();
        assert_eq!(args.tag_contains, Some("abc1234".to_string()));
        assert_eq!(args.tag_points_at, None);

        let args = Args::try_parse_from(["git-scout", "--tag-points-at", "abc1234"]).unwrap();
        assert_eq!(args.tag_points_at, Some("abc1234".to_string()));
    }

    #[test]
    fn test_args_status_and_wip() {
        let args = Args::try_parse_from(["git-scout", "--status", "--wip"]).unwrap();
        assert!(args.status);
        assert!(args.wip);
    }

    #[test]
    fn test_args_short_repo_flag() {
        let args = Args::try_parse_from(["git-scout", "-r", "../other", "--status"]).unwrap();
        assert_eq!(args.repo, "../other");
    }

    #[test]
    fn test_args_invalid_arguments() {
        let result = Args::try_parse_from(["git-scout", "--invalid-flag"]);
        assert!(result.is_err());

        let result = Args::try_parse_from(["git-scout", "-x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_help_and_version() {
        // help/version 会让解析提前返回
        assert!(Args::try_parse_from(["git-scout", "--help"]).is_err());
        assert!(Args::try_parse_from(["git-scout", "--version"]).is_err());
    }
}

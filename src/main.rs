use std::sync::Arc;

use clap::Parser;

use git_scout::cli::args::Args;
use git_scout::config::Config;
use git_scout::git::models::revision;
use git_scout::git::{
    CliGitExecutor, GitCache, StatusProvider, TagListOptions, TagQueryMode, TagsProvider,
    UsersProvider,
};

async fn handle_tag_operations(
    args: &Args,
    config: &Config,
    tags: &TagsProvider,
) -> anyhow::Result<bool> {
    // 返回 true 如果执行了 tag 操作，false 如果应该继续检查其他操作

    if args.tag_list {
        let options = TagListOptions {
            sort: Some(config.tag_sort()),
            ..Default::default()
        };
        let result = tags.get_tags(&args.repo, options).await;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result.values)?);
        } else if result.is_empty() {
            println!("No tags found");
        } else {
            for tag in &result.values {
                println!(
                    "{:<28} {:<10} {:<20} {}",
                    tag.name,
                    revision::shorten(&tag.sha),
                    tag.formatted_date(config.date_style(), &config.date_format),
                    tag.message
                );
            }
        }
        return Ok(true);
    }

    if let Some(name) = &args.tag_info {
        match tags.get_tag(&args.repo, name).await {
            Some(tag) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&tag)?);
                } else {
                    println!("Tag:         {}", tag.name);
                    println!("Commit:      {}", tag.sha);
                    println!(
                        "Tagged:      {}",
                        tag.formatted_date(config.date_style(), &config.date_format)
                    );
                    let commit_date =
                        tag.formatted_commit_date(config.date_style(), &config.date_format);
                    if !commit_date.is_empty() {
                        println!("Committed:   {}", commit_date);
                    }
                    if !tag.message.is_empty() {
                        println!("Message:     {}", tag.message);
                    }
                }
            }
            None => println!("Tag '{}' not found", name),
        }
        return Ok(true);
    }

    if let Some(name) = &args.tag_create {
        tags.create_tag(
            &args.repo,
            name,
            args.tag_ref.as_deref(),
            args.tag_message.as_deref(),
        )
        .await?;
        // 变更成功后驱逐缓存，下一次读取拿到新列表
        tags.invalidate(&args.repo);
        println!("✓ Created tag '{}'", name);
        return Ok(true);
    }

    if let Some(name) = &args.tag_delete {
        tags.delete_tag(&args.repo, name).await?;
        tags.invalidate(&args.repo);
        println!("✓ Deleted tag '{}'", name);
        return Ok(true);
    }

    if let Some(sha) = &args.tag_contains {
        let names = tags
            .get_tags_with_commit(&args.repo, sha, TagQueryMode::Contains)
            .await;
        print_tag_names(&names, args.json)?;
        return Ok(true);
    }

    if let Some(sha) = &args.tag_points_at {
        let names = tags
            .get_tags_with_commit(&args.repo, sha, TagQueryMode::PointsAt)
            .await;
        print_tag_names(&names, args.json)?;
        return Ok(true);
    }

    Ok(false)
}

fn print_tag_names(names: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(names)?);
    } else if names.is_empty() {
        println!("No tags found");
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

async fn handle_status_operations(
    args: &Args,
    config: &Config,
    status: &StatusProvider,
    users: &UsersProvider,
) -> anyhow::Result<bool> {
    if args.status {
        let result = status.get_status(&args.repo).await;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result.files)?);
        } else if result.is_clean() {
            println!("Working tree clean");
        } else {
            for file in &result.files {
                match &file.original_path {
                    Some(orig) => {
                        println!("{} {} -> {}", file.status_symbol(), orig, file.path)
                    }
                    None => println!("{} {}", file.status_symbol(), file.path),
                }
            }
            println!(
                "\n{} staged, {} unstaged, {} conflicted",
                result.staged_count(),
                result.wip_count(),
                result.conflicted_count()
            );
        }
        return Ok(true);
    }

    if args.wip {
        let result = status.get_status(&args.repo).await;
        let user = users.current_user(&args.repo).await;
        let commits = result.pseudo_commits(Some(&user));
        if args.json {
            println!("{}", serde_json::to_string_pretty(&commits)?);
        } else if commits.is_empty() {
            println!("Working tree clean");
        } else {
            for commit in &commits {
                println!("{} (parent: {})", commit.sha, commit.parents.join(", "));
                println!(
                    "  {} <{}> {}",
                    commit.author.name,
                    commit.author.email.as_deref().unwrap_or("unknown"),
                    git_scout::git::models::date::format_relative(&commit.date())
                );
                println!("  {}", commit.message);
                for change in &commit.files {
                    println!("    {} {}", change.status.symbol(), change.path);
                }
            }
        }
        if config.debug {
            tracing::debug!(count = commits.len(), "synthesized pseudo commits");
        }
        return Ok(true);
    }

    Ok(false)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::new();
    config.update_from_args(&args);
    config.validate()?;

    let level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let executor = Arc::new(CliGitExecutor::new(config.git_program.clone()));
    let cache = Arc::new(GitCache::new());
    let tags = TagsProvider::new(executor.clone(), cache.clone());
    let status = StatusProvider::new(executor.clone(), cache.clone());
    let users = UsersProvider::new(executor.clone());

    if handle_tag_operations(&args, &config, &tags).await? {
        return Ok(());
    }
    if handle_status_operations(&args, &config, &status, &users).await? {
        return Ok(());
    }

    println!("Nothing to do. Run with --help to see available queries.");
    Ok(())
}

use async_trait::async_trait;
use tokio::process::Command;

use crate::git::error::ExecError;

/// git 执行能力：在指定仓库目录下执行一组参数，返回原始 stdout 文本。
///
/// 上层的 provider 只依赖这个 trait，测试中用内存 mock 替换真实进程调用。
#[async_trait]
pub trait GitExecutor: Send + Sync {
    async fn execute(&self, repo_path: &str, args: &[&str]) -> Result<String, ExecError>;
}

/// 基于本地 git 命令行的执行器实现
pub struct CliGitExecutor {
    program: String,
}

impl CliGitExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        CliGitExecutor {
            program: program.into(),
        }
    }
}

impl Default for CliGitExecutor {
    fn default() -> Self {
        CliGitExecutor::new("git")
    }
}

#[async_trait]
impl GitExecutor for CliGitExecutor {
    async fn execute(&self, repo_path: &str, args: &[&str]) -> Result<String, ExecError> {
        tracing::debug!(repo = %repo_path, ?args, "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(repo_path)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExecError::Failed {
                exit_code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

use std::sync::Arc;

use crate::git::executor::GitExecutor;
use crate::git::models::GitUser;

/// 仓库本地用户身份查询，供伪提交合成时取邮箱
pub struct UsersProvider {
    executor: Arc<dyn GitExecutor>,
}

impl UsersProvider {
    pub fn new(executor: Arc<dyn GitExecutor>) -> Self {
        UsersProvider { executor }
    }

    /// 读取 user.name / user.email，任一缺失或读取失败都归为 None
    pub async fn current_user(&self, repo_path: &str) -> GitUser {
        if repo_path.is_empty() {
            return GitUser::default();
        }
        let name = self.config_value(repo_path, "user.name").await;
        let email = self.config_value(repo_path, "user.email").await;
        GitUser::new(name, email)
    }

    async fn config_value(&self, repo_path: &str, key: &str) -> Option<String> {
        match self
            .executor
            .execute(repo_path, &["config", "--get", key])
            .await
        {
            Ok(raw) => {
                let value = raw.trim();
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            Err(_) => None,
        }
    }
}

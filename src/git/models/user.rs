use serde::{Deserialize, Serialize};

/// 仓库本地的用户身份（user.name / user.email），两项都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl GitUser {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        GitUser { name, email }
    }
}

use serde::{Deserialize, Serialize};

/// 分页查询结果：一组值加一个不透明的续页游标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub values: Vec<T>,
    pub cursor: Option<String>,
}

impl<T> PagedResult<T> {
    /// 空结果，读路径失败或空仓库路径时统一返回
    pub fn empty() -> Self {
        PagedResult {
            values: Vec::new(),
            cursor: None,
        }
    }

    pub fn from_values(values: Vec<T>) -> Self {
        PagedResult {
            values,
            cursor: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        PagedResult::empty()
    }
}

/// 分页选项；携带显式游标的请求不会把结果存入缓存
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingOptions {
    pub cursor: Option<String>,
}

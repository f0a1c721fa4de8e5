pub mod cache;
pub mod error;
pub mod executor;
pub mod models;
pub mod parsers;
pub mod sorting;
pub mod status;
pub mod tags;
pub mod users;

pub use cache::{GitCache, PendingResult, RepoCache};
pub use error::{ExecError, TagAction, TagError, TagErrorReason};
pub use executor::{CliGitExecutor, GitExecutor};
pub use sorting::TagSort;
pub use status::StatusProvider;
pub use tags::{TagFilter, TagListOptions, TagQueryMode, TagsProvider};
pub use users::UsersProvider;

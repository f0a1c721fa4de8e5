pub mod commit;
pub mod date;
pub mod file_change;
pub mod paged;
pub mod revision;
pub mod status;
pub mod status_file;
pub mod tag;
pub mod user;

pub use commit::{GitCommit, GitCommitIdentity};
pub use date::DateStyle;
pub use file_change::GitFileChange;
pub use paged::{PagedResult, PagingOptions};
pub use status::GitStatus;
pub use status_file::{
    GitFileConflictStatus, GitFileIndexStatus, GitFileStatus, GitFileWorkingTreeStatus,
    GitStatusFile,
};
pub use tag::GitTag;
pub use user::GitUser;

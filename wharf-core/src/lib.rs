mod client;
mod tasks;
mod types;

pub use client::{CODE_ARCHIVE_PASSWORD, CODE_AUTH_REQUIRED, CODE_CANCELLED, FsClient, FsError};
pub use tasks::TaskKind;
pub use types::{
    ArchiveListData, ArchiveMetaData, ArchiveSortConfig, Entity, EntityKind, EntityTree, FsGetData,
    FsListData, TaskInfo, TaskState,
};

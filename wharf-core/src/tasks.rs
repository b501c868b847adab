use crate::client::{FsClient, FsError};
use crate::types::TaskInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Upload,
    Copy,
    Decompress,
    DecompressUpload,
    OfflineDownload,
    OfflineDownloadTransfer,
}

impl TaskKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Upload => "upload",
            TaskKind::Copy => "copy",
            TaskKind::Decompress => "decompress",
            TaskKind::DecompressUpload => "decompress_upload",
            TaskKind::OfflineDownload => "offline_download",
            TaskKind::OfflineDownloadTransfer => "offline_download_transfer",
        }
    }
}

impl FsClient {
    pub async fn task_undone(&self, kind: TaskKind) -> Result<Vec<TaskInfo>, FsError> {
        let tasks: Option<Vec<TaskInfo>> = self
            .get_data(&format!("/api/task/{}/undone", kind.as_str()))
            .await
            .map(Some)
            .or_else(|err| match err {
                // An empty task list is delivered as a null payload.
                FsError::MissingData => Ok(None),
                other => Err(other),
            })?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn task_done(&self, kind: TaskKind) -> Result<Vec<TaskInfo>, FsError> {
        let tasks: Option<Vec<TaskInfo>> = self
            .get_data(&format!("/api/task/{}/done", kind.as_str()))
            .await
            .map(Some)
            .or_else(|err| match err {
                FsError::MissingData => Ok(None),
                other => Err(other),
            })?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn task_cancel(&self, kind: TaskKind, tid: &str) -> Result<(), FsError> {
        self.task_operate(kind, "cancel", tid).await
    }

    pub async fn task_delete(&self, kind: TaskKind, tid: &str) -> Result<(), FsError> {
        self.task_operate(kind, "delete", tid).await
    }

    pub async fn task_retry(&self, kind: TaskKind, tid: &str) -> Result<(), FsError> {
        self.task_operate(kind, "retry", tid).await
    }

    pub async fn task_clear_done(&self, kind: TaskKind) -> Result<(), FsError> {
        self.post_empty(&format!("/api/task/{}/clear_done", kind.as_str()), None)
            .await
    }

    pub async fn task_clear_succeeded(&self, kind: TaskKind) -> Result<(), FsError> {
        self.post_empty(
            &format!("/api/task/{}/clear_succeeded", kind.as_str()),
            None,
        )
        .await
    }

    pub async fn task_retry_failed(&self, kind: TaskKind) -> Result<(), FsError> {
        self.post_empty(&format!("/api/task/{}/retry_failed", kind.as_str()), None)
            .await
    }

    async fn task_operate(&self, kind: TaskKind, operate: &str, tid: &str) -> Result<(), FsError> {
        let mut url = self.endpoint(&format!("/api/task/{}/{operate}", kind.as_str()))?;
        url.query_pairs_mut().append_pair("tid", tid);
        self.post_empty_url(url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kinds_map_to_api_segments() {
        assert_eq!(TaskKind::Upload.as_str(), "upload");
        assert_eq!(TaskKind::OfflineDownloadTransfer.as_str(), "offline_download_transfer");
    }
}

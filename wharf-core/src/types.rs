use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EntityKind {
    #[default]
    Unknown,
    Folder,
    Video,
    Audio,
    Text,
    Image,
}

impl From<u8> for EntityKind {
    fn from(value: u8) -> Self {
        match value {
            1 => EntityKind::Folder,
            2 => EntityKind::Video,
            3 => EntityKind::Audio,
            4 => EntityKind::Text,
            5 => EntityKind::Image,
            _ => EntityKind::Unknown,
        }
    }
}

impl From<EntityKind> for u8 {
    fn from(value: EntityKind) -> Self {
        match value {
            EntityKind::Unknown => 0,
            EntityKind::Folder => 1,
            EntityKind::Video => 2,
            EntityKind::Audio => 3,
            EntityKind::Text => 4,
            EntityKind::Image => 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub is_dir: bool,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(rename = "type", default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTree {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub children: Option<Vec<EntityTree>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FsGetData {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub raw_url: String,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub related: Option<Vec<Entity>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FsListData {
    #[serde(default)]
    pub content: Option<Vec<Entity>>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub write: bool,
    #[serde(default)]
    pub provider: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchiveSortConfig {
    #[serde(default)]
    pub order_by: String,
    #[serde(default)]
    pub order_direction: String,
    #[serde(default)]
    pub extract_folder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveMetaData {
    #[serde(default)]
    pub content: Option<Vec<EntityTree>>,
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub raw_url: String,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub sort: Option<ArchiveSortConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchiveListData {
    #[serde(default)]
    pub content: Vec<Entity>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum TaskState {
    Pending,
    Running,
    Succeeded,
    Canceling,
    Canceled,
    Errored,
    Failing,
    Failed,
    WaitingRetry,
    BeforeRetry,
    Unknown,
}

impl TaskState {
    pub fn is_done(self) -> bool {
        matches!(
            self,
            TaskState::Succeeded | TaskState::Canceled | TaskState::Errored | TaskState::Failed
        )
    }

    pub fn is_retryable(self) -> bool {
        self == TaskState::Failed
    }
}

impl From<u8> for TaskState {
    fn from(value: u8) -> Self {
        match value {
            0 => TaskState::Pending,
            1 => TaskState::Running,
            2 => TaskState::Succeeded,
            3 => TaskState::Canceling,
            4 => TaskState::Canceled,
            5 => TaskState::Errored,
            6 => TaskState::Failing,
            7 => TaskState::Failed,
            8 => TaskState::WaitingRetry,
            9 => TaskState::BeforeRetry,
            _ => TaskState::Unknown,
        }
    }
}

impl From<TaskState> for u8 {
    fn from(value: TaskState) -> Self {
        match value {
            TaskState::Pending => 0,
            TaskState::Running => 1,
            TaskState::Succeeded => 2,
            TaskState::Canceling => 3,
            TaskState::Canceled => 4,
            TaskState::Errored => 5,
            TaskState::Failing => 6,
            TaskState::Failed => 7,
            TaskState::WaitingRetry => 8,
            TaskState::BeforeRetry => 9,
            TaskState::Unknown => 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub creator_role: i32,
    pub state: TaskState,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub total_bytes: u64,
    #[serde(default)]
    pub error: String,
}

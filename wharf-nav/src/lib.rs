mod archive;
mod bus;
mod hints;
mod history;
mod navigator;
mod pagination;
pub mod paths;
mod select;
mod sort;
mod state;
mod surface;

pub use archive::{ArchiveBrowser, ArchiveStatus};
pub use bus::{BusEvent, EventBus};
pub use hints::DirHintTable;
pub use history::{HistoryCache, HistoryEntry, history_key};
pub use navigator::{NavConfig, Navigator};
pub use pagination::{Pagination, PaginationKind};
pub use sort::{GroupDirs, OrderBy, compare_entities, group_dirs, sort_entities};
pub use state::{Lifecycle, ObjStore, SelectableEntity};
pub use surface::{NullSurface, Surface};

use wharf_core::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Initial,
    FetchingObj,
    FetchingObjs,
    FetchingMore,
    Folder,
    File,
    NeedPassword,
}

impl Lifecycle {
    // States that are stable enough to snapshot into the history cache.
    pub fn is_recordable(self) -> bool {
        matches!(
            self,
            Lifecycle::FetchingMore | Lifecycle::Folder | Lifecycle::File
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectableEntity {
    pub entity: Entity,
    pub selected: bool,
}

impl From<Entity> for SelectableEntity {
    fn from(entity: Entity) -> Self {
        Self {
            entity,
            selected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Anchor {
    pub(crate) start: Option<usize>,
    pub(crate) end: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjStore {
    pub obj: Entity,
    pub raw_url: String,
    pub related: Vec<Entity>,
    pub objs: Vec<SelectableEntity>,
    pub total: u64,
    pub write: bool,
    pub readme: String,
    pub header: String,
    pub provider: String,
    pub lifecycle: Lifecycle,
    pub err: String,
    pub(crate) anchor: Anchor,
}

impl ObjStore {
    pub fn set_obj(&mut self, obj: Entity) {
        self.obj = obj;
    }

    pub fn set_raw_url(&mut self, raw_url: impl Into<String>) {
        self.raw_url = raw_url.into();
    }

    pub fn set_related(&mut self, related: Vec<Entity>) {
        self.related = related;
    }

    // Replacing the listing drops the range-selection anchor and forces the
    // directory flag on the current entity, so the entry metadata can never
    // disagree with the presence of a listing.
    pub fn set_objs(&mut self, objs: Vec<Entity>) {
        self.anchor = Anchor::default();
        self.objs = objs.into_iter().map(SelectableEntity::from).collect();
        self.obj.is_dir = true;
    }

    pub fn append_objs(&mut self, objs: Vec<Entity>) {
        self.objs.extend(objs.into_iter().map(SelectableEntity::from));
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn set_write(&mut self, write: bool) {
        self.write = write;
    }

    pub fn set_readme(&mut self, readme: impl Into<String>) {
        self.readme = readme.into();
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn set_provider(&mut self, provider: impl Into<String>) {
        self.provider = provider.into();
    }

    pub fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    pub fn set_err(&mut self, err: impl Into<String>) {
        self.err = err.into();
    }

    // Bulk restore used exclusively by history recovery.
    pub fn apply(&mut self, snapshot: ObjStore) {
        *self = snapshot;
    }

    pub fn reset(&mut self) {
        *self = ObjStore::default();
    }
}

use wharf_core::{FsClient, FsError, FsGetData, FsListData};

use crate::bus::{BusEvent, EventBus};
use crate::history::{HistoryCache, history_key};
use crate::hints::DirHintTable;
use crate::pagination::Pagination;
use crate::paths::path_join;
use crate::state::{Lifecycle, ObjStore};
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct NavConfig {
    pub base_path: String,
    pub pagination: Pagination,
    pub password: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            pagination: Pagination::default(),
            password: String::new(),
        }
    }
}

// Path resolver and navigation controller. Owns every piece of shared
// mutable navigation state (store, hints, history, page counter) so there
// are no ambient singletons; the hosting layer is reached through `Surface`.
pub struct Navigator<S: Surface> {
    client: FsClient,
    surface: S,
    store: ObjStore,
    history: HistoryCache,
    hints: DirHintTable,
    pagination: Pagination,
    base_path: String,
    password: String,
    pathname: String,
    current_page: u32,
    generation: u64,
    first_fetch: bool,
    retry_password: bool,
    bus: Option<EventBus>,
}

impl<S: Surface> Navigator<S> {
    pub fn new(client: FsClient, config: NavConfig, surface: S) -> Self {
        let base_path = if config.base_path.is_empty() {
            "/".to_string()
        } else {
            config.base_path
        };
        Self {
            client,
            surface,
            store: ObjStore::default(),
            history: HistoryCache::default(),
            hints: DirHintTable::default(),
            pagination: config.pagination,
            base_path,
            password: config.password,
            pathname: "/".to_string(),
            current_page: 1,
            generation: 0,
            first_fetch: true,
            retry_password: false,
            bus: None,
        }
    }

    // Announces pathname changes to interested components.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn store(&self) -> &ObjStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ObjStore {
        &mut self.store
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub fn hints(&self) -> &DirHintTable {
        &self.hints
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    // Boot-time restore of the page from the persisted query parameter
    // ("pagination" display mode survives a full reload).
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    // Entry point for every navigation. Priority order: history, known
    // directory, disambiguation probe.
    pub async fn handle_path_change(
        &mut self,
        path: &str,
        page: Option<u32>,
        retry_password: bool,
        force: bool,
    ) {
        let generation = self.next_generation();
        self.retry_password = retry_password;
        self.pathname = path.to_string();
        if let Some(bus) = &self.bus {
            bus.emit(BusEvent::Pathname(path.to_string()));
        }
        self.store.set_err("");
        if self.history.contains(path, page) {
            log::debug!("handle [{}] from history", history_key(path, page));
            self.recover_history(path, page).await;
        } else if self.hints.is_dir(path) {
            log::debug!("handle [{}] as folder", history_key(path, page));
            self.handle_folder(generation, path, page, None, false, force)
                .await;
        } else {
            log::debug!("handle [{}] as obj", history_key(path, page));
            self.handle_obj(generation, path, page).await;
        }
    }

    pub async fn load_more(&mut self) {
        if self.all_loaded() {
            log::debug!("load_more skipped: listing fully loaded");
            return;
        }
        let generation = self.next_generation();
        let path = self.pathname.clone();
        let next = self.current_page + 1;
        self.handle_folder(generation, &path, Some(next), None, true, false)
            .await;
    }

    // Re-fetches the current path at the current page. Load-more modes
    // replay from page 1 up to the previously reached page; the visual
    // scroll offset is captured before and restored (smoothly) after.
    pub async fn refresh(&mut self, retry_password: bool, force: bool) {
        let path = self.pathname.clone();
        let scroll = self.surface.scroll_offset();
        self.history.clear(&path, Some(self.current_page));
        if self.pagination.kind.is_load_more() {
            let reached = self.current_page;
            self.current_page = 1;
            // The replay restarts at page 1; purge that key too so the
            // refetch is not answered from history.
            self.history.clear(&path, Some(1));
            self.handle_path_change(&path, Some(1), retry_password, force)
                .await;
            while self.current_page < reached {
                let before = self.current_page;
                self.load_more().await;
                if self.current_page == before {
                    // A page that failed to advance stops the replay.
                    break;
                }
            }
        } else {
            self.handle_path_change(&path, Some(self.current_page), retry_password, force)
                .await;
        }
        self.surface.scroll_to(scroll, true);
    }

    pub fn all_loaded(&self) -> bool {
        self.pagination.all_loaded(self.current_page, self.store.total)
    }

    // Marks a path as known directory (or not); `push` resolves it against
    // the current pathname first.
    pub fn set_path_as(&mut self, path: &str, dir: bool, push: bool) {
        let path = if push {
            path_join(&self.pathname, path)
        } else {
            path.to_string()
        };
        if dir {
            self.hints.mark_dir(&path);
        } else {
            self.hints.mark_file(&path);
        }
    }

    // Global invalidation by target: following a link must never land on
    // stale history for its destination.
    pub fn invalidate(&mut self, path: &str) {
        self.history.clear(path, None);
    }

    async fn handle_obj(&mut self, generation: u64, path: &str, page: Option<u32>) {
        self.store.set_lifecycle(Lifecycle::FetchingObj);
        let result = self.client.fs_get(path, &self.password).await;
        if !self.is_current(generation) {
            log::debug!("discarding superseded get for [{path}]");
            return;
        }
        match result {
            Ok(data) if data.entity.is_dir => {
                self.store.set_obj(data.entity);
                self.store.set_provider(data.provider);
                self.hints.mark_dir(path);
                self.handle_folder(generation, path, page, None, false, false)
                    .await;
            }
            Ok(data) => {
                self.apply_file(generation, path, page, data);
            }
            Err(err) => self.handle_err(err),
        }
    }

    async fn handle_folder(
        &mut self,
        generation: u64,
        path: &str,
        page: Option<u32>,
        size: Option<u32>,
        append: bool,
        force: bool,
    ) {
        let per_page = size.unwrap_or_else(|| self.pagination.per_page());
        self.store.set_lifecycle(if append {
            Lifecycle::FetchingMore
        } else {
            Lifecycle::FetchingObjs
        });
        let page_index = page.unwrap_or(1);
        let result = self
            .client
            .fs_list(path, &self.password, page_index, per_page, force)
            .await;
        if !self.is_current(generation) {
            log::debug!("discarding superseded listing for [{path}]");
            return;
        }
        match result {
            Ok(data) => {
                self.apply_listing(generation, path, page_index, append, data);
            }
            Err(err) => self.handle_err(err),
        }
    }

    // Commit points. Every fetch result passes through one of these, and
    // each one re-checks its generation so a response from a superseded
    // navigation can never clobber newer state.
    pub(crate) fn apply_file(
        &mut self,
        generation: u64,
        path: &str,
        page: Option<u32>,
        data: FsGetData,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.store.set_obj(data.entity);
        self.store.set_provider(data.provider);
        self.store.set_readme(data.readme);
        self.store.set_header(data.header);
        self.store.set_related(data.related.unwrap_or_default());
        self.store.set_raw_url(data.raw_url);
        self.store.set_lifecycle(Lifecycle::File);
        self.record_history(path, page);
        true
    }

    pub(crate) fn apply_listing(
        &mut self,
        generation: u64,
        path: &str,
        page_index: u32,
        append: bool,
        data: FsListData,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.current_page = page_index;
        if append {
            self.store.append_objs(data.content.unwrap_or_default());
        } else {
            self.store.set_objs(data.content.unwrap_or_default());
            self.store.set_total(data.total);
        }
        self.store.set_readme(data.readme);
        self.store.set_header(data.header);
        self.store.set_write(data.write);
        self.store.set_provider(data.provider);
        self.store.set_lifecycle(Lifecycle::Folder);
        self.record_history(path, Some(page_index));
        true
    }

    fn handle_err(&mut self, err: FsError) {
        let message = err.to_string();
        if err.is_auth_required() {
            self.store.set_lifecycle(Lifecycle::NeedPassword);
            if self.retry_password {
                self.surface.notify_error(&message);
            }
            return;
        }
        if self.first_fetch
            && self.base_path != "/"
            && self.pathname.contains(&self.base_path)
            && message.ends_with("object not found")
        {
            // Boot-time fallback: the URL still carries the configured base
            // prefix; strip it once and retarget instead of erroring.
            self.first_fetch = false;
            let target = self.pathname.replacen(&self.base_path, "", 1);
            let target = if target.is_empty() {
                "/".to_string()
            } else {
                target
            };
            self.surface.redirect(&target);
            return;
        }
        if !err.is_cancelled() {
            self.store.set_err(message);
        }
    }

    fn record_history(&mut self, path: &str, page: Option<u32>) {
        let scroll = self.surface.scroll_offset();
        self.history
            .record(path, page, &self.store, self.current_page, scroll);
    }

    // Restores a recorded snapshot without network access. The entry is
    // retained; eviction only happens through refresh/invalidate.
    async fn recover_history(&mut self, path: &str, page: Option<u32>) {
        let Some(entry) = self.history.get(path, page).cloned() else {
            return;
        };
        self.current_page = entry.page;
        self.store.set_lifecycle(Lifecycle::Initial);
        tokio::task::yield_now().await;
        self.store.apply(entry.snapshot);
        tokio::task::yield_now().await;
        self.surface.scroll_to(entry.scroll, false);
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

use std::collections::HashMap;

use crate::paths::strip_query;
use crate::state::{Lifecycle, ObjStore};

// Navigation key: query string stripped, page appended only past page 1 so
// that "/docs" and "/docs?page=1" address the same entry.
pub fn history_key(path: &str, page: Option<u32>) -> String {
    let pathname = strip_query(path);
    match page {
        Some(page) if page > 1 => format!("{pathname}?page={page}"),
        _ => pathname.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub snapshot: ObjStore,
    pub page: u32,
    pub scroll: f64,
}

#[derive(Debug, Default)]
pub struct HistoryCache {
    map: HashMap<String, HistoryEntry>,
}

impl HistoryCache {
    // Snapshots the store for (path, page). Mid-transition states are not
    // recordable; FetchingMore is normalized to Folder so a restored entry
    // never renders a load-in-progress listing.
    pub fn record(
        &mut self,
        path: &str,
        page: Option<u32>,
        store: &ObjStore,
        current_page: u32,
        scroll: f64,
    ) -> bool {
        if !store.lifecycle.is_recordable() {
            return false;
        }
        let mut snapshot = store.clone();
        if snapshot.lifecycle == Lifecycle::FetchingMore {
            snapshot.set_lifecycle(Lifecycle::Folder);
        }
        let key = history_key(path, page);
        log::debug!("record history: [{key}]");
        self.map.insert(
            key,
            HistoryEntry {
                snapshot,
                page: page.unwrap_or(current_page),
                scroll,
            },
        );
        true
    }

    pub fn contains(&self, path: &str, page: Option<u32>) -> bool {
        self.map.contains_key(&history_key(path, page))
    }

    pub fn get(&self, path: &str, page: Option<u32>) -> Option<&HistoryEntry> {
        self.map.get(&history_key(path, page))
    }

    pub fn clear(&mut self, path: &str, page: Option<u32>) {
        let key = history_key(path, page);
        if self.map.remove(&key).is_some() {
            log::debug!("clear history: [{key}]");
        }
    }

    pub fn clear_all(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

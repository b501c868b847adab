use crate::state::{Anchor, ObjStore};
use wharf_core::Entity;

impl ObjStore {
    // Shift state is an explicit argument; `one` collapses the selection to
    // the clicked row first.
    pub fn select_index(&mut self, index: usize, checked: bool, shift: bool, one: bool) {
        if index >= self.objs.len() {
            return;
        }
        if one {
            self.select_all(false);
        }
        if shift {
            self.select_range(index);
            return;
        }
        self.objs[index].selected = checked;
        self.anchor = if checked {
            Anchor {
                start: Some(index),
                end: Some(index),
            }
        } else {
            Anchor::default()
        };
    }

    pub fn select_all(&mut self, checked: bool) {
        for item in &mut self.objs {
            item.selected = checked;
        }
    }

    pub fn selected_entities(&self) -> Vec<&Entity> {
        self.objs
            .iter()
            .filter(|item| item.selected)
            .map(|item| &item.entity)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.objs.iter().filter(|item| item.selected).count()
    }

    pub fn have_selected(&self) -> bool {
        self.selected_count() > 0
    }

    pub fn one_checked(&self) -> bool {
        self.selected_count() == 1
    }

    pub fn all_checked(&self) -> bool {
        !self.objs.is_empty() && self.selected_count() == self.objs.len()
    }

    pub fn is_indeterminate(&self) -> bool {
        let selected = self.selected_count();
        selected > 0 && selected < self.objs.len()
    }

    fn select_range(&mut self, index: usize) {
        let start = self
            .anchor
            .start
            .or_else(|| self.nearest_selected(index))
            .unwrap_or(index);
        // Clear the previous shift range, keeping the anchor row itself.
        if let (Some(s), Some(e)) = (self.anchor.start, self.anchor.end) {
            let (lo, hi) = if s <= e { (s, e) } else { (e, s) };
            for i in lo..=hi.min(self.objs.len().saturating_sub(1)) {
                if i != s {
                    self.objs[i].selected = false;
                }
            }
        }
        let (lo, hi) = if start <= index {
            (start, index)
        } else {
            (index, start)
        };
        for i in lo..=hi {
            self.objs[i].selected = true;
        }
        self.anchor = Anchor {
            start: Some(start),
            end: Some(index),
        };
    }

    // Re-anchor a shift selection on the closest already-selected row.
    fn nearest_selected(&self, index: usize) -> Option<usize> {
        let len = self.objs.len();
        for offset in 0..len.max(index + 1) {
            if index >= offset && self.objs[index - offset].selected {
                return Some(index - offset);
            }
            if index + offset < len && self.objs[index + offset].selected {
                return Some(index + offset);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> ObjStore {
        let mut store = ObjStore::default();
        store.set_objs(
            names
                .iter()
                .map(|name| Entity {
                    name: name.to_string(),
                    ..Entity::default()
                })
                .collect(),
        );
        store
    }

    fn selected_names(store: &ObjStore) -> Vec<&str> {
        store
            .selected_entities()
            .into_iter()
            .map(|entity| entity.name.as_str())
            .collect()
    }

    #[test]
    fn shift_click_selects_a_range_from_the_anchor() {
        let mut store = store_with(&["a", "b", "c", "d", "e"]);
        store.select_index(1, true, false, false);
        store.select_index(3, true, true, false);
        assert_eq!(selected_names(&store), ["b", "c", "d"]);
    }

    #[test]
    fn shrinking_a_shift_range_clears_the_tail() {
        let mut store = store_with(&["a", "b", "c", "d", "e"]);
        store.select_index(0, true, false, false);
        store.select_index(4, true, true, false);
        assert_eq!(store.selected_count(), 5);
        store.select_index(2, true, true, false);
        assert_eq!(selected_names(&store), ["a", "b", "c"]);
    }

    #[test]
    fn shift_without_anchor_rebases_on_nearest_selected() {
        let mut store = store_with(&["a", "b", "c", "d", "e"]);
        store.objs[4].selected = true;
        store.select_index(2, true, true, false);
        assert_eq!(selected_names(&store), ["c", "d", "e"]);
    }

    #[test]
    fn one_collapses_to_the_clicked_row() {
        let mut store = store_with(&["a", "b", "c"]);
        store.select_all(true);
        store.select_index(1, true, false, true);
        assert_eq!(selected_names(&store), ["b"]);
        assert!(store.one_checked());
    }

    #[test]
    fn unchecking_drops_the_anchor() {
        let mut store = store_with(&["a", "b", "c"]);
        store.select_index(1, true, false, false);
        store.select_index(1, false, false, false);
        assert!(!store.have_selected());
        store.select_index(2, true, true, false);
        assert_eq!(selected_names(&store), ["c"]);
    }

    #[test]
    fn check_queries_cover_the_three_regimes() {
        let mut store = store_with(&["a", "b"]);
        assert!(!store.all_checked());
        store.select_index(0, true, false, false);
        assert!(store.is_indeterminate());
        store.select_all(true);
        assert!(store.all_checked());
        assert!(!store.is_indeterminate());
    }
}

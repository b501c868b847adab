use std::cmp::Ordering;

use wharf_core::Entity;

use crate::state::ObjStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Name,
    Size,
    Modified,
}

impl OrderBy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(OrderBy::Name),
            "size" => Some(OrderBy::Size),
            "modified" => Some(OrderBy::Modified),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDirs {
    Front,
    Back,
}

impl GroupDirs {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "front" => Some(GroupDirs::Front),
            "back" => Some(GroupDirs::Back),
            _ => None,
        }
    }
}

pub fn compare_entities(a: &Entity, b: &Entity, order: OrderBy) -> Ordering {
    match order {
        // Case-insensitive natural order, so file2 sorts before file10.
        OrderBy::Name => {
            alphanumeric_sort::compare_str(&a.name.to_lowercase(), &b.name.to_lowercase())
        }
        OrderBy::Size => a.size.cmp(&b.size),
        OrderBy::Modified => a.modified.cmp(&b.modified),
    }
}

pub fn sort_entities(entities: &mut [Entity], order: OrderBy, reverse: bool) {
    entities.sort_by(|a, b| {
        let ordering = compare_entities(a, b, order);
        if reverse { ordering.reverse() } else { ordering }
    });
}

// Stable partition keeping the relative order inside each group.
pub fn group_dirs(entities: &mut Vec<Entity>, group: GroupDirs) {
    let (dirs, files): (Vec<_>, Vec<_>) = entities.drain(..).partition(|entity| entity.is_dir);
    match group {
        GroupDirs::Front => {
            entities.extend(dirs);
            entities.extend(files);
        }
        GroupDirs::Back => {
            entities.extend(files);
            entities.extend(dirs);
        }
    }
}

impl ObjStore {
    pub fn sort_objs(&mut self, order: OrderBy, reverse: bool) {
        log::debug!("sort: {order:?} reverse={reverse}");
        self.objs.sort_by(|a, b| {
            let ordering = compare_entities(&a.entity, &b.entity, order);
            if reverse { ordering.reverse() } else { ordering }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str, size: u64, is_dir: bool) -> Entity {
        Entity {
            name: name.to_string(),
            size,
            is_dir,
            ..Entity::default()
        }
    }

    #[test]
    fn natural_name_order_handles_numeric_runs() {
        let mut entities = vec![
            entity("file10.txt", 0, false),
            entity("File2.txt", 0, false),
            entity("file1.txt", 0, false),
        ];
        sort_entities(&mut entities, OrderBy::Name, false);
        let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["file1.txt", "File2.txt", "file10.txt"]);
    }

    #[test]
    fn reverse_flips_the_order() {
        let mut entities = vec![entity("a", 1, false), entity("b", 2, false)];
        sort_entities(&mut entities, OrderBy::Size, true);
        assert_eq!(entities[0].name, "b");
    }

    #[test]
    fn grouping_keeps_relative_order() {
        let mut entities = vec![
            entity("z.txt", 0, false),
            entity("docs", 0, true),
            entity("a.txt", 0, false),
            entity("assets", 0, true),
        ];
        group_dirs(&mut entities, GroupDirs::Front);
        let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["docs", "assets", "z.txt", "a.txt"]);
    }

    #[test]
    fn store_sorting_goes_through_the_same_comparator() {
        let mut store = ObjStore::default();
        store.set_objs(vec![entity("b2", 0, false), entity("b10", 0, false)]);
        store.sort_objs(OrderBy::Name, false);
        assert_eq!(store.objs[0].entity.name, "b2");
        assert_eq!(store.objs[1].entity.name, "b10");
    }
}

use std::collections::HashSet;

// Speculative "this path is a directory" knowledge, set on navigation intent
// and proven results, used to skip the disambiguation probe. A hint is only
// removed when a path turns out to be a file.
#[derive(Debug, Default)]
pub struct DirHintTable {
    known: HashSet<String>,
}

impl DirHintTable {
    pub fn mark_dir(&mut self, path: &str) {
        self.known.insert(path.to_string());
    }

    pub fn mark_file(&mut self, path: &str) {
        self.known.remove(path);
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.known.contains(path)
    }

    pub fn clear(&mut self) {
        self.known.clear();
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_a_file_clears_the_directory_hint() {
        let mut hints = DirHintTable::default();
        hints.mark_dir("/docs");
        assert!(hints.is_dir("/docs"));
        hints.mark_file("/docs");
        assert!(!hints.is_dir("/docs"));
    }
}

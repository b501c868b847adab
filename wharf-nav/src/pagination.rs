#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaginationKind {
    #[default]
    Pagination,
    LoadMore,
    AutoLoadMore,
    All,
}

impl PaginationKind {
    pub fn is_load_more(self) -> bool {
        matches!(self, PaginationKind::LoadMore | PaginationKind::AutoLoadMore)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pagination" => Some(PaginationKind::Pagination),
            "load_more" => Some(PaginationKind::LoadMore),
            "auto_load_more" => Some(PaginationKind::AutoLoadMore),
            "all" => Some(PaginationKind::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub kind: PaginationKind,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            kind: PaginationKind::Pagination,
            page_size: 50,
        }
    }
}

impl Pagination {
    // The per_page value sent to the server; 0 asks for the whole listing.
    pub fn per_page(&self) -> u32 {
        if self.kind == PaginationKind::All {
            0
        } else {
            self.page_size
        }
    }

    pub fn all_loaded(&self, current_page: u32, total: u64) -> bool {
        if total == 0 {
            return true;
        }
        if self.per_page() == 0 {
            return true;
        }
        u64::from(current_page) >= total.div_ceil(u64::from(self.per_page()))
    }
}

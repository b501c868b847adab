use tokio::sync::Mutex;
use wharf_core::{CODE_ARCHIVE_PASSWORD, Entity, EntityTree, FsClient, FsError};

use crate::paths::encode_path;
use crate::sort::{GroupDirs, OrderBy, group_dirs, sort_entities};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveStatus {
    pub requiring_password: bool,
    pub wrong_password: bool,
    pub comment: String,
}

#[derive(Debug, Clone)]
struct TreeNode {
    entity: Entity,
    // None means "not listed yet"; directories are filled on first visit.
    children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    fn leaf(entity: Entity) -> Self {
        Self {
            entity,
            children: None,
        }
    }
}

fn to_nodes(tree: Vec<EntityTree>) -> Vec<TreeNode> {
    tree.into_iter()
        .map(|item| TreeNode {
            entity: item.entity,
            children: item.children.map(to_nodes),
        })
        .collect()
}

fn find_node<'a>(level: &'a [TreeNode], inner_path: &[&str]) -> Option<&'a TreeNode> {
    let (first, rest) = inner_path.split_first()?;
    let node = level.iter().find(|node| node.entity.name == *first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_node(node.children.as_deref()?, rest)
    }
}

fn find_node_mut<'a>(level: &'a mut [TreeNode], inner_path: &[&str]) -> Option<&'a mut TreeNode> {
    let (first, rest) = inner_path.split_first()?;
    let node = level.iter_mut().find(|node| node.entity.name == *first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_node_mut(node.children.as_deref_mut()?, rest)
    }
}

#[derive(Debug, Default)]
struct ArchiveState {
    archive_password: String,
    raw_url: String,
    sign: String,
    comment: String,
    order_by: Option<OrderBy>,
    reverse: bool,
    group: Option<GroupDirs>,
    tree: Option<Vec<TreeNode>>,
    requiring_password: bool,
    wrong_password: bool,
}

// Browses one archive through the archive-listing API, building an
// in-memory directory tree lazily from the paginated responses. All tree
// construction is serialized by the state mutex, so two views asking for
// entries at once cannot interleave fetches.
pub struct ArchiveBrowser {
    client: FsClient,
    path: String,
    password: String,
    page_size: u32,
    state: Mutex<ArchiveState>,
}

impl ArchiveBrowser {
    pub fn new(client: FsClient, path: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            password: password.into(),
            page_size: 0,
            state: Mutex::new(ArchiveState::default()),
        }
    }

    // page_size 0 asks the server for whole levels in one response.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub async fn set_archive_password(&self, password: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.archive_password = password.into();
    }

    pub async fn status(&self) -> ArchiveStatus {
        let state = self.state.lock().await;
        ArchiveStatus {
            requiring_password: state.requiring_password,
            wrong_password: state.wrong_password,
            comment: state.comment.clone(),
        }
    }

    // Download URL for a file inside the archive, once the meta is known.
    pub async fn file_url(&self, inner_path: &[&str]) -> Option<String> {
        let state = self.state.lock().await;
        if state.raw_url.is_empty() {
            return None;
        }
        let inner = format!("/{}", inner_path.join("/"));
        let mut url = format!("{}?inner={}", state.raw_url, encode_path(&inner));
        if !state.archive_password.is_empty() {
            url.push_str(&format!(
                "&pass={}",
                urlencoding::encode(&state.archive_password)
            ));
        }
        if !state.sign.is_empty() {
            url.push_str(&format!("&sign={}", state.sign));
        }
        Some(url)
    }

    // Entries of one level inside the archive. Fetches the archive meta on
    // first use, then each missing tree level on demand; revisiting a level
    // is answered from memory. An empty result with `requiring_password`
    // set means the caller must supply an archive password and retry.
    pub async fn entries(&self, inner_path: &[&str]) -> Result<Vec<Entity>, FsError> {
        let mut state = self.state.lock().await;
        if state.requiring_password && state.archive_password.is_empty() {
            return Ok(Vec::new());
        }
        let archive_password = state.archive_password.clone();

        if state.raw_url.is_empty() {
            let meta = match self
                .client
                .fs_archive_meta(&self.path, &self.password, &archive_password, false)
                .await
            {
                Ok(meta) => meta,
                Err(err) => return Self::absorb(&mut state, err),
            };
            if let Some(content) = meta.content {
                state.tree = Some(to_nodes(content));
            }
            state.raw_url = meta.raw_url;
            state.sign = meta.sign;
            state.comment = meta.comment;
            if let Some(sort) = meta.sort {
                state.order_by = OrderBy::parse(&sort.order_by);
                state.reverse = sort.order_direction == "desc";
                state.group = GroupDirs::parse(&sort.extract_folder);
            }
            if meta.encrypted && archive_password.is_empty() {
                state.requiring_password = true;
                return Ok(Vec::new());
            }
        }

        if state.tree.is_none() {
            let content = match self.fetch_level(&archive_password, "/").await {
                Ok(content) => content,
                Err(err) => return Self::absorb(&mut state, err),
            };
            state.tree = Some(content.into_iter().map(TreeNode::leaf).collect());
        }

        for depth in 0..inner_path.len() {
            let visited = &inner_path[..=depth];
            let needs_fetch = {
                let tree = state.tree.as_deref().unwrap_or_default();
                match find_node(tree, visited) {
                    None => return Ok(Vec::new()),
                    Some(node) => node.children.is_none(),
                }
            };
            if needs_fetch {
                let inner = format!("/{}", visited.join("/"));
                let content = match self.fetch_level(&archive_password, &inner).await {
                    Ok(content) => content,
                    Err(err) => return Self::absorb(&mut state, err),
                };
                if let Some(node) =
                    find_node_mut(state.tree.as_deref_mut().unwrap_or_default(), visited)
                {
                    node.children = Some(content.into_iter().map(TreeNode::leaf).collect());
                }
            }
        }

        state.requiring_password = false;
        state.wrong_password = false;

        let tree = state.tree.as_deref().unwrap_or(&[]);
        let level = if inner_path.is_empty() {
            tree
        } else {
            match find_node(tree, inner_path).and_then(|node| node.children.as_deref()) {
                Some(children) => children,
                None => return Ok(Vec::new()),
            }
        };
        let mut entities: Vec<Entity> = level.iter().map(|node| node.entity.clone()).collect();
        if let Some(order_by) = state.order_by {
            sort_entities(&mut entities, order_by, state.reverse);
        }
        if let Some(group) = state.group {
            group_dirs(&mut entities, group);
        }
        Ok(entities)
    }

    async fn fetch_level(
        &self,
        archive_password: &str,
        inner: &str,
    ) -> Result<Vec<Entity>, FsError> {
        let mut items: Vec<Entity> = Vec::new();
        let mut page = 1;
        loop {
            let data = self
                .client
                .fs_archive_list(
                    &self.path,
                    &self.password,
                    archive_password,
                    inner,
                    page,
                    self.page_size,
                    false,
                )
                .await?;
            let fetched = data.content.len();
            items.extend(data.content);
            if self.page_size == 0 || fetched == 0 || items.len() as u64 >= data.total {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    // A 202 is part of the password protocol, not a failure: it flags the
    // password state and yields an empty listing.
    fn absorb(state: &mut ArchiveState, err: FsError) -> Result<Vec<Entity>, FsError> {
        if err.code() == Some(CODE_ARCHIVE_PASSWORD) {
            if !state.archive_password.is_empty() {
                state.wrong_password = true;
            }
            state.requiring_password = true;
            return Ok(Vec::new());
        }
        Err(err)
    }
}

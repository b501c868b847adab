use anyhow::bail;
use wharf_core::{TaskKind, TaskState};
use wharf_nav::{Lifecycle, Navigator, Surface};

use crate::settings::Settings;

// Terminal stand-in for the hosting page: scroll is a line offset, error
// notifications go to the log, redirects are queued for the shell loop.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    scroll: f64,
    pending_redirect: Option<String>,
}

impl TerminalSurface {
    fn take_redirect(&mut self) -> Option<String> {
        self.pending_redirect.take()
    }
}

impl Surface for TerminalSurface {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn scroll_to(&mut self, offset: f64, _smooth: bool) {
        self.scroll = offset;
    }

    fn notify_error(&mut self, message: &str) {
        log::error!("{message}");
    }

    fn redirect(&mut self, path: &str) {
        self.pending_redirect = Some(path.to_string());
    }
}

pub async fn run_status(settings: &Settings) -> anyhow::Result<()> {
    let client = settings.client()?;
    eprintln!("[wharf-ui] server: {}", settings.server_url);
    eprintln!(
        "[wharf-ui] base_path: {}, pagination: {} (page size {})",
        settings.base_path, settings.pagination_kind, settings.page_size
    );
    match client.fs_get("/", &settings.password).await {
        Ok(root) => eprintln!(
            "[wharf-ui] root reachable: provider={}, is_dir={}",
            root.provider, root.entity.is_dir
        ),
        Err(err) => eprintln!("[wharf-ui] root unreachable: {err}"),
    }
    Ok(())
}

pub async fn run_list(settings: &Settings, path: &str, page: Option<u32>) -> anyhow::Result<()> {
    let client = settings.client()?;
    let mut nav = Navigator::new(client, settings.nav_config(), TerminalSurface::default());
    if let Some(page) = page {
        nav.set_current_page(page);
    }
    nav.handle_path_change(path, page, false, false).await;
    if let Some(target) = nav.surface_mut().take_redirect() {
        // Boot-time base-path fallback; follow it once.
        log::info!("redirected to {target}");
        nav.handle_path_change(&target, page, false, false).await;
    }
    if nav.store().lifecycle == Lifecycle::Folder && nav.pagination().kind.is_load_more() {
        while !nav.all_loaded() && nav.store().err.is_empty() {
            let before = nav.current_page();
            nav.load_more().await;
            if nav.current_page() == before {
                break;
            }
        }
    }
    render(&nav)
}

fn render(nav: &Navigator<TerminalSurface>) -> anyhow::Result<()> {
    let store = nav.store();
    if !store.err.is_empty() {
        bail!("{}", store.err);
    }
    match store.lifecycle {
        Lifecycle::Folder => {
            for item in &store.objs {
                let marker = if item.entity.is_dir { "d" } else { "-" };
                println!(
                    "{marker} {:>12}  {}  {}",
                    item.entity.size, item.entity.modified, item.entity.name
                );
            }
            println!(
                "{} of {} entries (page {}, provider {})",
                store.objs.len(),
                store.total,
                nav.current_page(),
                store.provider
            );
            Ok(())
        }
        Lifecycle::File => {
            println!("{} ({} bytes)", store.obj.name, store.obj.size);
            if !store.obj.modified.is_empty() {
                println!("modified: {}", store.obj.modified);
            }
            if !store.raw_url.is_empty() {
                println!("raw_url: {}", store.raw_url);
            }
            if !store.related.is_empty() {
                println!("related: {} entries", store.related.len());
            }
            Ok(())
        }
        Lifecycle::NeedPassword => {
            bail!("password required (set WHARF_PASSWORD and retry)")
        }
        other => bail!("navigation ended in unexpected state: {other:?}"),
    }
}

pub async fn run_tasks(settings: &Settings) -> anyhow::Result<()> {
    let client = settings.client()?;
    let kinds = [
        TaskKind::Upload,
        TaskKind::Copy,
        TaskKind::Decompress,
        TaskKind::OfflineDownload,
    ];
    for kind in kinds {
        let undone = client.task_undone(kind).await?;
        let done = client.task_done(kind).await?;
        println!(
            "{}: {} running, {} finished",
            kind.as_str(),
            undone.len(),
            done.len()
        );
        for task in &undone {
            println!("  {:>5.1}% {:?} {}", task.progress, task.state, task.name);
        }
        for task in done.iter().filter(|task| task.state == TaskState::Failed) {
            println!("  failed: {} ({})", task.name, task.error);
        }
    }
    Ok(())
}

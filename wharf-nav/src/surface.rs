// Seam to whatever is hosting the browser: scroll position, user-facing
// error notifications, and redirects. Injected into the navigator instead of
// reaching for ambient browser globals.
pub trait Surface {
    fn scroll_offset(&self) -> f64;
    fn scroll_to(&mut self, offset: f64, smooth: bool);
    fn notify_error(&mut self, message: &str);
    fn redirect(&mut self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn scroll_to(&mut self, _offset: f64, _smooth: bool) {}

    fn notify_error(&mut self, message: &str) {
        log::error!("{message}");
    }

    fn redirect(&mut self, path: &str) {
        log::info!("redirect to {path}");
    }
}

use super::pagination::Pagination;
use super::surface::{DrawingSurface, RasterSurface};
use super::worker::{DocumentHandle, RenderWorker, RenderedPage, WorkerResponse};
use crate::backend::{PdfBackend, PdfiumBackend};
use crate::config::DisplayConfig;
use crate::error::{PdfError, Result};
use std::time::{Duration, Instant};

/// Single-document viewer state: loads the configured PDF once, renders the
/// current page onto a drawing surface and tracks pagination.
///
/// Load and render run on a worker thread. Call [`PdfDisplay::poll`] from the
/// UI loop to apply their results.
pub struct PdfDisplay<S: DrawingSurface = RasterSurface> {
    config: DisplayConfig,
    worker: Option<RenderWorker>,
    document: Option<DocumentHandle>,
    pagination: Pagination,
    surface: Option<S>,
    loading_document: bool,
    pending_render: Option<u64>,
    last_error: Option<PdfError>,
}

impl PdfDisplay<RasterSurface> {
    /// Binds PDFium on the worker thread and starts loading the configured
    /// document.
    pub fn open(config: DisplayConfig) -> Self {
        let library_dir = config.pdfium_library_dir.clone();
        Self::with_backend(config, move || PdfiumBackend::bind(library_dir.as_deref()))
    }
}

impl<S: DrawingSurface> PdfDisplay<S> {
    pub fn with_backend<B, F>(config: DisplayConfig, init: F) -> Self
    where
        B: PdfBackend,
        F: FnOnce() -> Result<B> + Send + 'static,
    {
        let mut display = Self {
            config,
            worker: None,
            document: None,
            pagination: Pagination::new(),
            surface: None,
            loading_document: false,
            pending_render: None,
            last_error: None,
        };

        match RenderWorker::spawn(init) {
            Ok(worker) => {
                display.worker = Some(worker);
                display.load_document();
            }
            Err(e) => display.record_error("Error starting render worker", e),
        }

        display
    }

    fn load_document(&mut self) {
        let Some(worker) = &self.worker else {
            return;
        };

        let path = self.config.document_path.clone();
        log::info!("Loading PDF {}", path.display());

        match worker.load(path) {
            Ok(()) => self.loading_document = true,
            Err(e) => self.record_error("Error loading PDF", e),
        }
    }

    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.request_render();
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn go_to_previous_page(&mut self) {
        if self.pagination.go_to_previous_page() {
            self.request_render();
        }
    }

    pub fn go_to_next_page(&mut self) {
        if self.pagination.go_to_next_page() {
            self.request_render();
        }
    }

    fn request_render(&mut self) {
        if self.document.is_none() || self.surface.is_none() {
            log::debug!("Render skipped: document or surface not ready");
            return;
        }
        let Some(worker) = &self.worker else {
            return;
        };

        let page = self.pagination.current_page();
        match worker.render(page, self.config.render_scale) {
            Ok(generation) => self.pending_render = Some(generation),
            Err(e) => {
                self.pending_render = None;
                self.record_error("Error rendering page", e);
            }
        }
    }

    /// Applies every result the worker has produced so far. Returns whether
    /// anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            let Some(worker) = &self.worker else {
                return changed;
            };
            match worker.try_recv() {
                Ok(Some(response)) => {
                    self.apply(response);
                    changed = true;
                }
                Ok(None) => return changed,
                Err(e) => {
                    self.worker_lost(e);
                    return true;
                }
            }
        }
    }

    /// Blocks until one worker result has been applied or `timeout` elapses.
    pub fn wait_for_update(&mut self, timeout: Duration) -> bool {
        let Some(worker) = &self.worker else {
            return false;
        };
        match worker.recv_timeout(timeout) {
            Ok(Some(response)) => {
                self.apply(response);
                true
            }
            Ok(None) => false,
            Err(e) => {
                self.worker_lost(e);
                true
            }
        }
    }

    /// Blocks until no load or render is outstanding. Returns `false` on
    /// timeout.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            self.wait_for_update(remaining);
        }
        true
    }

    fn apply(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Loaded(result) => self.apply_loaded(result),
            WorkerResponse::Rendered { generation, result } => {
                if self.pending_render != Some(generation) {
                    log::debug!("Discarding stale render #{}", generation);
                    return;
                }
                self.pending_render = None;
                self.apply_rendered(result);
            }
            WorkerResponse::Skipped { generation } => {
                log::debug!("Render #{} superseded before it started", generation);
            }
        }
    }

    fn apply_loaded(&mut self, result: Result<DocumentHandle>) {
        self.loading_document = false;
        match result {
            Ok(handle) => {
                log::info!(
                    "Loaded PDF {} ({} pages)",
                    handle.path().display(),
                    handle.page_count()
                );
                self.pagination.set_page_count(handle.page_count());
                self.document = Some(handle);
                self.last_error = None;
                self.request_render();
            }
            Err(e) => self.record_error("Error loading PDF", e),
        }
    }

    fn apply_rendered(&mut self, result: Result<RenderedPage>) {
        let rendered = match result {
            Ok(rendered) => rendered,
            Err(e) => {
                self.record_error("Error rendering page", e);
                return;
            }
        };

        let Some(surface) = self.surface.as_mut() else {
            self.record_error("Error rendering page", PdfError::SurfaceUnavailable);
            return;
        };

        surface.resize(rendered.region.width, rendered.region.height);
        surface.clear();
        surface.draw(&rendered.image);
        self.last_error = None;

        log::debug!(
            "Rendered page {} at {}x{}",
            rendered.page,
            rendered.region.width,
            rendered.region.height
        );
    }

    fn worker_lost(&mut self, error: PdfError) {
        self.worker = None;
        self.loading_document = false;
        self.pending_render = None;
        self.record_error("Render worker stopped", error);
    }

    fn record_error(&mut self, context: &str, error: PdfError) {
        log::error!("{}: {}", context, error);
        self.last_error = Some(error);
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count()
    }

    pub fn document(&self) -> Option<&DocumentHandle> {
        self.document.as_ref()
    }

    pub fn is_document_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn is_loading_document(&self) -> bool {
        self.loading_document
    }

    pub fn is_rendering(&self) -> bool {
        self.pending_render.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.loading_document || self.is_rendering()
    }

    pub fn previous_disabled(&self) -> bool {
        self.pagination.is_first_page() || self.is_rendering()
    }

    pub fn next_disabled(&self) -> bool {
        self.pagination.is_last_page() || self.is_rendering()
    }

    pub fn page_indicator(&self) -> String {
        self.pagination.indicator()
    }

    pub fn last_error(&self) -> Option<&PdfError> {
        self.last_error.as_ref()
    }
}

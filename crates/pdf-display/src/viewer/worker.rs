use crate::backend::{PdfBackend, PdfDocument, ViewRegion};
use crate::error::{PdfError, Result};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

/// What the UI thread knows about the loaded document. The document itself
/// stays on the worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    path: PathBuf,
    page_count: usize,
}

impl DocumentHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page: usize,
    pub region: ViewRegion,
    pub image: RgbaImage,
}

#[derive(Debug)]
pub enum WorkerRequest {
    Load {
        path: PathBuf,
    },
    Render {
        generation: u64,
        page: usize,
        scale: f32,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum WorkerResponse {
    Loaded(Result<DocumentHandle>),
    Rendered {
        generation: u64,
        result: Result<RenderedPage>,
    },
    /// A render request was superseded before the worker started it.
    Skipped { generation: u64 },
}

/// Dedicated thread that owns the backend and the open document.
pub struct RenderWorker {
    requests: Sender<WorkerRequest>,
    responses: Receiver<WorkerResponse>,
    latest_generation: Arc<AtomicU64>,
}

impl RenderWorker {
    /// Spawns the worker. `init` runs on the worker thread, so the backend
    /// never has to cross threads.
    pub fn spawn<B, F>(init: F) -> Result<Self>
    where
        B: PdfBackend,
        F: FnOnce() -> Result<B> + Send + 'static,
    {
        let (request_tx, request_rx) = channel::unbounded();
        let (response_tx, response_rx) = channel::unbounded();
        let latest_generation = Arc::new(AtomicU64::new(0));
        let latest = Arc::clone(&latest_generation);

        thread::Builder::new()
            .name("pdf-render".into())
            .spawn(move || {
                let backend = init();
                if let Err(e) = &backend {
                    log::error!("Failed to initialize PDF backend: {}", e);
                }
                serve(&backend, &request_rx, &response_tx, &latest);
                log::debug!("Render worker stopped");
            })
            .map_err(|e| PdfError::ThreadError(format!("Failed to spawn render worker: {}", e)))?;

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            latest_generation,
        })
    }

    pub fn load(&self, path: PathBuf) -> Result<()> {
        self.send(WorkerRequest::Load { path })
    }

    /// Queues a render and returns its generation. Every render queued
    /// earlier becomes stale.
    pub fn render(&self, page: usize, scale: f32) -> Result<u64> {
        let generation = self.latest_generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.send(WorkerRequest::Render {
            generation,
            page,
            scale,
        })?;
        Ok(generation)
    }

    pub fn try_recv(&self) -> Result<Option<WorkerResponse>> {
        match self.responses.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(disconnected()),
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerResponse>> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(disconnected()),
        }
    }

    fn send(&self, request: WorkerRequest) -> Result<()> {
        self.requests.send(request).map_err(|_| disconnected())
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        // Stale every queued render so the worker stops after its current job.
        self.latest_generation.fetch_add(1, Ordering::AcqRel);
        let _ = self.requests.send(WorkerRequest::Shutdown);
    }
}

fn disconnected() -> PdfError {
    PdfError::ThreadError("render worker disconnected".into())
}

fn serve<'a, B: PdfBackend>(
    backend: &'a Result<B>,
    requests: &Receiver<WorkerRequest>,
    responses: &Sender<WorkerResponse>,
    latest_generation: &AtomicU64,
) {
    let mut document: Option<Box<dyn PdfDocument + 'a>> = None;

    for request in requests.iter() {
        let response = match request {
            WorkerRequest::Shutdown => break,
            WorkerRequest::Load { path } => {
                let opened = match backend {
                    Ok(backend) => backend.open_document(&path),
                    Err(e) => Err(e.clone()),
                };
                match opened {
                    Ok(doc) => {
                        let handle = DocumentHandle {
                            path,
                            page_count: doc.page_count(),
                        };
                        document = Some(doc);
                        WorkerResponse::Loaded(Ok(handle))
                    }
                    Err(e) => WorkerResponse::Loaded(Err(e)),
                }
            }
            WorkerRequest::Render {
                generation,
                page,
                scale,
            } => {
                if generation < latest_generation.load(Ordering::Acquire) {
                    WorkerResponse::Skipped { generation }
                } else {
                    WorkerResponse::Rendered {
                        generation,
                        result: render_page(document.as_deref(), page, scale),
                    }
                }
            }
        };

        if responses.send(response).is_err() {
            break;
        }
    }
}

fn render_page(
    document: Option<&dyn PdfDocument>,
    page_number: usize,
    scale: f32,
) -> Result<RenderedPage> {
    let document =
        document.ok_or_else(|| PdfError::RenderFailed("No document loaded".into()))?;

    let page = document.page(page_number)?;
    let region = page.view_region(scale);
    let image = page.render(&region)?;

    if image.width() != region.width || image.height() != region.height {
        return Err(PdfError::RenderFailed(format!(
            "Backend returned {}x{} for a {}x{} region",
            image.width(),
            image.height(),
            region.width,
            region.height
        )));
    }

    Ok(RenderedPage {
        page: page_number,
        region,
        image,
    })
}

use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

use crate::capture::{Capture, RegionCapture};
use crate::export::{DocumentExporter, ExportReport, ExportStatus};
use crate::{Error, ExportConfig, Result};

enum Command {
    Export {
        html: String,
        path: Option<PathBuf>,
        resp: oneshot::Sender<Result<ExportReport>>,
    },
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly exporter backed by a dedicated worker thread.
///
/// The worker thread owns a synchronous `DocumentExporter` and executes
/// commands sent from async tasks. Awaiting [`Exporter::export`] is the single
/// suspend point of an export: the caller resumes once capture, pagination and
/// serialization have all finished. There is no cancellation; once started an
/// export runs to completion or failure.
#[derive(Clone)]
pub struct Exporter {
    cmd_tx: Sender<Command>,
    status: ExportStatus,
}

impl Exporter {
    /// Create a new exporter using the default in-process capture backend.
    pub async fn new(config: Option<ExportConfig>) -> Result<Self> {
        Self::with_capture(RegionCapture, config).await
    }

    /// Create an exporter with a custom capture backend (spawns a background
    /// thread that owns the exporter).
    pub async fn with_capture<C>(capture: C, config: Option<ExportConfig>) -> Result<Self>
    where
        C: Capture + Send + 'static,
    {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (
            oneshot::Sender<Result<ExportStatus>>,
            oneshot::Receiver<Result<ExportStatus>>,
        ) = oneshot::channel();

        thread::spawn(move || {
            let exporter = DocumentExporter::new(capture, config);
            let _ = init_tx.send(Ok(exporter.status()));

            // Command loop
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Export { html, path, resp } => {
                        let res = match path {
                            Some(p) => exporter.export_to_file(&html, p),
                            None => {
                                let mut buf = Vec::new();
                                exporter.export_to_writer(&html, &mut buf)
                            }
                        };
                        if let Err(e) = &res {
                            log::error!("export failed: {}", e);
                        }
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        // Wait for the worker to report initialization
        let status = init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))??;

        Ok(Self { cmd_tx, status })
    }

    /// Export the document, persisting to `path` when given.
    pub async fn export(&self, html: &str, path: Option<&str>) -> Result<ExportReport> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Export {
            html: html.to_string(),
            path: path.map(PathBuf::from),
            resp: tx,
        });
        rx.await
            .map_err(|e| Error::Other(format!("Export canceled: {}", e)))?
    }

    /// Whether an export is currently running on the worker.
    pub fn is_exporting(&self) -> bool {
        self.status.is_exporting()
    }

    /// Shut down the background worker.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}

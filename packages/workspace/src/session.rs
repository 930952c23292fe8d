use crate::wire::{self, Wire};
use artboard_dom::{Document, MoveDirection};
use artboard_host::HostController;
use artboard_preview::{PreviewAgent, RenderBlock};
use artboard_protocol::Rect;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session actor has shut down")]
    Closed,
}

/// Point-in-time copy of the host actor's state.
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    pub document: Document,
    pub selected_id: Option<String>,
    pub rect: Option<Rect>,
    pub revision: u64,
}

/// Point-in-time copy of the preview actor's render state.
#[derive(Debug, Clone)]
pub struct PreviewSnapshot {
    pub blocks: Vec<RenderBlock>,
    pub hydrated: bool,
}

enum HostCommand {
    SetStyle { property: String, value: String },
    MoveSelected(MoveDirection),
    ClearSelection,
    Snapshot(oneshot::Sender<HostSnapshot>),
}

enum PreviewCommand {
    Click { id: String },
    BeginTextEdit { id: String, done: oneshot::Sender<bool> },
    CommitTextEdit { text: String },
    SetViewportWidth { width: f64 },
    Snapshot(oneshot::Sender<PreviewSnapshot>),
}

/// A live editing session: one host actor and one preview actor, spawned
/// on the runtime and joined by the message wire.
///
/// Each actor is a plain `select!` loop over its command queue and its wire
/// inbox, handling one message at a time. Dropping the command senders (via
/// [`EditorSession::shutdown`]) ends both loops; the wire closing ends
/// whichever side outlives its peer.
pub struct EditorSession {
    host_tx: mpsc::UnboundedSender<HostCommand>,
    preview_tx: mpsc::UnboundedSender<PreviewCommand>,
    host_task: JoinHandle<()>,
    preview_task: JoinHandle<()>,
}

impl EditorSession {
    pub fn spawn(document: Document, viewport_width: f64) -> Self {
        let (host_wire, preview_wire) = wire::pair();
        let (host_tx, host_rx) = mpsc::unbounded_channel();
        let (preview_tx, preview_rx) = mpsc::unbounded_channel();

        let host_task = tokio::spawn(run_host(HostController::new(document), host_wire, host_rx));
        let preview_task = tokio::spawn(run_preview(
            PreviewAgent::new(viewport_width),
            preview_wire,
            preview_rx,
        ));

        Self {
            host_tx,
            preview_tx,
            host_task,
            preview_task,
        }
    }

    /// User activation inside the render surface.
    pub fn click(&self, id: impl Into<String>) -> Result<(), SessionError> {
        self.preview(PreviewCommand::Click { id: id.into() })
    }

    /// Inspector style edit against the current selection.
    pub fn set_style(
        &self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.host(HostCommand::SetStyle {
            property: property.into(),
            value: value.into(),
        })
    }

    /// Inspector reorder of the current selection.
    pub fn move_selected(&self, direction: MoveDirection) -> Result<(), SessionError> {
        self.host(HostCommand::MoveSelected(direction))
    }

    pub fn clear_selection(&self) -> Result<(), SessionError> {
        self.host(HostCommand::ClearSelection)
    }

    /// Enter inline editing; resolves to whether the block was editable.
    pub async fn begin_text_edit(&self, id: impl Into<String>) -> Result<bool, SessionError> {
        let (done, began) = oneshot::channel();
        self.preview(PreviewCommand::BeginTextEdit {
            id: id.into(),
            done,
        })?;
        began.await.map_err(|_| SessionError::Closed)
    }

    /// Commit the active inline edit upstream.
    pub fn commit_text_edit(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.preview(PreviewCommand::CommitTextEdit { text: text.into() })
    }

    /// Resize the render surface viewport (an out-of-band reflow trigger).
    pub fn set_viewport_width(&self, width: f64) -> Result<(), SessionError> {
        self.preview(PreviewCommand::SetViewportWidth { width })
    }

    pub async fn host_snapshot(&self) -> Result<HostSnapshot, SessionError> {
        let (reply, snapshot) = oneshot::channel();
        self.host(HostCommand::Snapshot(reply))?;
        snapshot.await.map_err(|_| SessionError::Closed)
    }

    pub async fn preview_snapshot(&self) -> Result<PreviewSnapshot, SessionError> {
        let (reply, snapshot) = oneshot::channel();
        self.preview(PreviewCommand::Snapshot(reply))?;
        snapshot.await.map_err(|_| SessionError::Closed)
    }

    /// End both actors and wait for them to drain.
    pub async fn shutdown(self) {
        drop(self.host_tx);
        drop(self.preview_tx);
        let _ = self.host_task.await;
        let _ = self.preview_task.await;
    }

    fn host(&self, command: HostCommand) -> Result<(), SessionError> {
        self.host_tx.send(command).map_err(|_| SessionError::Closed)
    }

    fn preview(&self, command: PreviewCommand) -> Result<(), SessionError> {
        self.preview_tx
            .send(command)
            .map_err(|_| SessionError::Closed)
    }
}

async fn run_host(
    mut host: HostController,
    mut wire: Wire,
    mut commands: mpsc::UnboundedReceiver<HostCommand>,
) {
    info!("host actor started");
    loop {
        let outbound = tokio::select! {
            command = commands.recv() => match command {
                Some(HostCommand::SetStyle { property, value }) => {
                    host.set_selected_style(property, value)
                }
                Some(HostCommand::MoveSelected(direction)) => host.move_selected(direction),
                Some(HostCommand::ClearSelection) => {
                    host.clear_selection();
                    Vec::new()
                }
                Some(HostCommand::Snapshot(reply)) => {
                    let _ = reply.send(HostSnapshot {
                        document: host.document().clone(),
                        selected_id: host.selected_id().map(str::to_string),
                        rect: host.rect(),
                        revision: host.revision(),
                    });
                    Vec::new()
                }
                None => break,
            },
            frame = wire.recv() => match frame {
                Some(value) => host.handle_value(&value),
                None => break,
            },
        };
        post_all(&wire, &outbound);
    }
    info!("host actor stopped");
}

async fn run_preview(
    mut preview: PreviewAgent,
    mut wire: Wire,
    mut commands: mpsc::UnboundedReceiver<PreviewCommand>,
) {
    info!("preview actor started");
    post_all(&wire, &preview.boot());

    loop {
        let outbound = tokio::select! {
            command = commands.recv() => match command {
                Some(PreviewCommand::Click { id }) => preview.click(&id),
                Some(PreviewCommand::BeginTextEdit { id, done }) => {
                    let _ = done.send(preview.begin_text_edit(&id));
                    Vec::new()
                }
                Some(PreviewCommand::CommitTextEdit { text }) => preview.commit_text_edit(text),
                Some(PreviewCommand::SetViewportWidth { width }) => {
                    preview.set_viewport_width(width)
                }
                Some(PreviewCommand::Snapshot(reply)) => {
                    let _ = reply.send(PreviewSnapshot {
                        blocks: preview.blocks().to_vec(),
                        hydrated: preview.is_hydrated(),
                    });
                    Vec::new()
                }
                None => break,
            },
            frame = wire.recv() => match frame {
                Some(value) => preview.handle_value(&value),
                None => break,
            },
        };
        post_all(&wire, &outbound);
    }
    info!("preview actor stopped");
}

fn post_all(wire: &Wire, messages: &[impl serde::Serialize]) {
    for message in messages {
        if let Err(err) = wire.post(message) {
            // Peer gone mid-send: the frame is lost, the loop notices on
            // its next recv.
            debug!(%err, "dropping outbound frame");
        }
    }
}

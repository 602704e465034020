use std::sync::mpsc;
use std::thread;

use crate::{
    CloseReply, Coordinator, OpenReply, RequestError, SessionStore, WindowHost, WindowId,
};

enum Command {
    Open {
        sender: WindowId,
        urls: Vec<String>,
        reply_tx: mpsc::Sender<OpenReply>,
    },
    Close {
        reply_tx: mpsc::Sender<CloseReply>,
    },
}

/// Thread-backed handle implementing the page agent's single-shot
/// request/response channel to the coordinator.
pub struct CoordinatorHandle {
    cmd_tx: mpsc::Sender<Command>,
}

impl CoordinatorHandle {
    /// Spawns the coordinator on its own thread with a private runtime.
    /// Commands execute strictly sequentially; there is no timeout.
    pub fn spawn<H, S>(host: H, store: S) -> Self
    where
        H: WindowHost + 'static,
        S: SessionStore + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let coordinator = Coordinator::new(host, store);
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    Command::Open {
                        sender,
                        urls,
                        reply_tx,
                    } => {
                        let reply = runtime.block_on(coordinator.handle_open(sender, &urls));
                        let _ = reply_tx.send(reply);
                    }
                    Command::Close { reply_tx } => {
                        let reply = runtime.block_on(coordinator.handle_close());
                        let _ = reply_tx.send(reply);
                    }
                }
            }
        });
        Self { cmd_tx }
    }

    /// Sends an open request and waits for the reply.
    pub fn open_urls(
        &self,
        sender: WindowId,
        urls: Vec<String>,
    ) -> Result<OpenReply, RequestError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.cmd_tx
            .send(Command::Open {
                sender,
                urls,
                reply_tx,
            })
            .map_err(|_| RequestError::CoordinatorGone)?;
        reply_rx.recv().map_err(|_| RequestError::CoordinatorGone)
    }

    /// Sends a close request and waits for the reply.
    pub fn close_tabs(&self) -> Result<CloseReply, RequestError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.cmd_tx
            .send(Command::Close { reply_tx })
            .map_err(|_| RequestError::CoordinatorGone)?;
        reply_rx.recv().map_err(|_| RequestError::CoordinatorGone)
    }
}

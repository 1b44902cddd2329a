//! Control-surface commands and the bus that carries them.
//!
//! The button handler publishes; the event loop drains and applies. Both
//! ends live on the single UI thread, so a switch command is always fully
//! applied before the next animation tick can fire.

use tokio::sync::broadcast;
use tracing::warn;

/// Commands emitted by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cycle to the next search algorithm and restart playback.
    NextAlgorithm,
}

/// Broadcast topic with bounded capacity carrying [`Command`]s.
#[derive(Debug)]
pub struct CommandBus {
    tx: broadcast::Sender<Command>,
    rx: broadcast::Receiver<Command>,
}

impl CommandBus {
    /// Creates a bus that buffers up to `capacity` undrained commands.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = broadcast::channel(capacity);
        Self { tx, rx }
    }

    /// Publishes a command. Send failures are impossible while the bus owns
    /// its own receiver.
    pub fn publish(&self, cmd: Command) {
        let _ = self.tx.send(cmd);
    }

    /// Drains every command queued since the last call, in publish order.
    pub fn drain(&mut self) -> Vec<Command> {
        let mut drained = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(cmd) => drained.push(cmd),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Command receiver lagged, dropping old commands");
                }
                Err(_) => break,
            }
        }
        drained
    }
}

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::model::settings::BotSettings;
use crate::persistence::protocol::{Generation, WriterCommand, WriterEvent};
use crate::persistence::settings_io::write_settings;

/* =========================
   Batch planning
   ========================= */

/// What one wake-up of the writer thread has to do.
#[derive(Default)]
struct Batch {
    latest: Option<(Generation, BotSettings)>,
    superseded: Vec<Generation>,
    flushes: Vec<Sender<()>>,
    shutdown: bool,
}

impl Batch {
    fn collect(commands: impl IntoIterator<Item = WriterCommand>, last_written: Generation) -> Self {
        let mut batch = Batch::default();

        for cmd in commands {
            match cmd {
                WriterCommand::Save { generation, settings } => {
                    if generation <= last_written {
                        batch.superseded.push(generation);
                        continue;
                    }
                    let newer = batch
                        .latest
                        .as_ref()
                        .map_or(true, |(current, _)| generation > *current);
                    if !newer {
                        batch.superseded.push(generation);
                    } else if let Some((older, _)) = batch.latest.replace((generation, settings)) {
                        batch.superseded.push(older);
                    }
                }
                WriterCommand::Flush(ack) => batch.flushes.push(ack),
                WriterCommand::Shutdown => batch.shutdown = true,
            }
        }

        batch
    }
}

/* =========================
   Writer thread
   ========================= */

struct WriterLoop {
    path: PathBuf,
    rx: Receiver<WriterCommand>,
    tx: Sender<WriterEvent>,
    last_written: Generation,
}

impl WriterLoop {
    fn run(&mut self) {
        while let Ok(first) = self.rx.recv() {
            let mut pending = vec![first];
            pending.extend(self.rx.try_iter());

            let batch = Batch::collect(pending, self.last_written);

            for generation in batch.superseded {
                tracing::debug!(generation, "dropping superseded settings save");
                let _ = self.tx.send(WriterEvent::Superseded { generation });
            }

            if let Some((generation, settings)) = batch.latest {
                self.write(generation, &settings);
            }

            for ack in batch.flushes {
                let _ = ack.send(());
            }

            if batch.shutdown {
                break;
            }
        }
    }

    fn write(&mut self, generation: Generation, settings: &BotSettings) {
        match write_settings(&self.path, settings) {
            Ok(()) => {
                self.last_written = generation;
                tracing::info!(path = %self.path.display(), generation, "saved settings");
                let _ = self.tx.send(WriterEvent::Saved { generation });
            }
            Err(err) => {
                // Not retried; the next edit issues a fresh save.
                tracing::error!(generation, "{err}");
                let _ = self.tx.send(WriterEvent::Failed {
                    generation,
                    reason: err.to_string(),
                });
            }
        }
    }
}

/// Handle to the single thread that owns the settings file.
pub struct SettingsWriter {
    cmd_tx: Sender<WriterCommand>,
    event_rx: Receiver<WriterEvent>,
    handle: Option<JoinHandle<()>>,
}

impl SettingsWriter {
    pub fn spawn(path: PathBuf) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            let mut writer = WriterLoop {
                path,
                rx: cmd_rx,
                tx: event_tx,
                last_written: 0,
            };
            writer.run();
        });

        Self {
            cmd_tx,
            event_rx,
            handle: Some(handle),
        }
    }

    pub fn submit(&self, generation: Generation, settings: BotSettings) {
        if self
            .cmd_tx
            .send(WriterCommand::Save { generation, settings })
            .is_err()
        {
            tracing::error!(generation, "settings writer is gone; save dropped");
        }
    }

    /// Blocks until every save submitted so far has been written or dropped.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.cmd_tx.send(WriterCommand::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }

    pub fn poll_events(&self) -> Vec<WriterEvent> {
        self.event_rx.try_iter().collect()
    }
}

impl Drop for SettingsWriter {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(WriterCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

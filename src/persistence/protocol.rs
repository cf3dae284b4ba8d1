use std::sync::mpsc::Sender;

use crate::model::settings::BotSettings;

/// Monotonic ordering token for saves. Higher wins.
pub type Generation = u64;

pub enum WriterCommand {
    Save {
        generation: Generation,
        settings: BotSettings,
    },
    /// Acknowledged once everything queued before it has been handled.
    Flush(Sender<()>),
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterEvent {
    Saved { generation: Generation },
    Failed { generation: Generation, reason: String },
    /// A newer save arrived before this one reached the disk.
    Superseded { generation: Generation },
}

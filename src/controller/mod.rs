pub mod settings;
pub mod transfer;

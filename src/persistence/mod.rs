pub mod protocol;
pub mod settings_io;
pub mod writer;

pub mod autocomplete;
pub mod catalog;
pub mod selection;
pub mod settings;

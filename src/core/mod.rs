pub mod encoding;
pub mod interfaces;
pub mod models;
pub mod orchestrators;

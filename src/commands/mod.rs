pub mod config;
pub mod parse;
pub mod silences;
pub mod until;

// Cinder: hate speech detection chat for the terminal.
//
// This is the library root. Each module corresponds to a stage of the
// classification pipeline or to the chat surface wrapped around it.

pub mod chat;
pub mod classify;
pub mod config;
pub mod output;
pub mod preprocess;

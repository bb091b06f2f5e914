//! shelfgrid-cli: front end for the shelfgrid tally matrix.
//!
//! The binary maps each subcommand onto one [`dispatch::Request`], serves it
//! against a matrix that is either freshly generated or resumed from a
//! snapshot file, and prints the response as JSON or plain text.
pub mod dispatch;
pub mod export;
pub mod format;
pub mod html;
pub mod session;

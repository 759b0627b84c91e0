//! sync-ide-folders library
//!
//! The shipped binary only prints guidance; the canonical sources in
//! `skills/planning-with-files/` are copied into IDE folders by hand.
//!
//! The copy-if-changed machinery is kept here (see [`sync`]) so it can be
//! wired back into the binary later.

pub mod config;
pub mod digest;
pub mod error;
pub mod guidance;
pub mod sync;

//! Command handlers for the ocrscrub CLI.
//!
//! The binary has a single command; its handler lives in [`clean`].

pub mod clean;

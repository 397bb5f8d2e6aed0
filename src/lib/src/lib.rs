//! libdiffer
//!
//! Core library for Live Differ: computes structured line-level diffs
//! between two text files and publishes fresh results whenever either
//! file changes on disk.
//!
//! The two moving parts are [`differ::FileDiffer`], which turns a pair of
//! file paths into a [`model::DiffResult`], and [`notifier::ChangeNotifier`],
//! which watches both paths and pushes recomputed diffs to subscribers
//! through a [`notifier::Broadcaster`].

pub mod config;
pub mod differ;
pub mod error;
pub mod model;
pub mod notifier;
pub mod util;
pub mod view;

pub use crate::error::DifferError;

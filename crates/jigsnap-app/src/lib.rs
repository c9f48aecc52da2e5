//! Shared library module for the Jigsnap app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub(crate) mod action;
pub(crate) mod action_handler;
pub mod app;
pub(crate) mod async_work;
pub(crate) mod image_source;
pub(crate) mod renderer;
pub(crate) mod state;
pub(crate) mod ui;
pub mod version;
pub(crate) mod view_model_builder;

pub use self::app::{JigsnapApp, LaunchOptions};

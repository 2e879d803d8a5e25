//! # keysheet
//!
//! Renders an HTML cheatsheet from a kanata keyboard configuration.
//!
//! The pipeline is linear:
//!
//!     source text
//!       -> parsing    (defsrc geometry, deflayer rows, defalias table)
//!       -> labels     (glyphs, alias descriptions, width classes)
//!       -> render     (Cheatsheet model -> HTML or JSON)
//!
//! [`pipeline::Pipeline`] ties the stages together with file I/O driven by
//! [`config::KeysheetConfig`].

pub mod config;
pub mod error;
pub mod labels;
pub mod parsing;
pub mod pipeline;
pub mod render;

pub use error::{CheatsheetError, ParseError};
pub use pipeline::{OutputFormat, Pipeline};

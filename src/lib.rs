//! circle-area: compute the area of a circle from a radius read on stdin,
//! printing every intermediate step.
//!
//! Layers, innermost first:
//! - [`domain`]: radius parsing, area arithmetic, float rendering (no I/O)
//! - [`application`]: the report over generic console handles
//! - [`config`]: layered settings for logging and colours
//! - [`cli`]: argument parsing, dispatch, diagnostics

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

//! Library components of the roster lookup CLI.

pub mod browse;
pub mod logging;
pub mod render;
pub mod settings;

//! A window full of random static, redrawn at a capped frame rate.
//!
//! The interesting parts are the [`crate::core::FramePacer`], which works out how
//! long to wait between frames, and [`app::App`], which owns the framebuffer
//! and reacts to the events a [`renderers::WindowHost`] feeds it.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod renderers;

pub use app::{run, App};
pub use config::{create_clap_command, Config};
pub use crate::core::Rgba;
pub use error::{Error, FramebufferError, Result};
pub use pipeline::{Framebuffer, Noise, Painter, RenderStep};
pub use renderers::{Event, MinifbHost, WindowHost};

#![warn(clippy::all)]

mod bitgrid;
mod config;
mod engine;
mod error;
mod memory;
mod seed;
mod utils;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use bitgrid::BitGrid;
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use memory::MemoryView;
pub use seed::Seed;
pub use utils::{parse_rle, NiceInt, RlePattern};
#[cfg(target_arch = "wasm32")]
pub use wasm::{Cell, Universe};

//! JavaScript-facing wrapper around [`Engine`].
//!
//! The renderer reads the field straight out of linear memory:
//!
//! ```js
//! const cells = new Uint8Array(memory.buffer, universe.cells(), universe.cells_len());
//! ```
//!
//! The array must be rebuilt after every `tick`.

use crate::{Engine, Error, Seed};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

#[wasm_bindgen]
pub struct Universe {
    engine: Engine,
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl Universe {
    fn build(engine: crate::Result<Engine>) -> Result<Universe, JsValue> {
        console_error_panic_hook::set_once();
        engine.map(|engine| Universe { engine }).map_err(to_js)
    }
}

#[wasm_bindgen]
impl Universe {
    /// Default-sized universe with the fixed starting pattern.
    pub fn new() -> Result<Universe, JsValue> {
        Self::build(Engine::with_seed(Seed::Fixed))
    }

    pub fn with_size(width: u32, height: u32) -> Result<Universe, JsValue> {
        Self::build(Engine::new(width, height, Seed::Fixed))
    }

    /// `seed` is JSON, e.g. `{"pattern":"random","density":0.3}`.
    pub fn with_seed(width: u32, height: u32, seed: &str) -> Result<Universe, JsValue> {
        let seed = Seed::from_json(seed).map_err(to_js)?;
        Self::build(Engine::new(width, height, seed))
    }

    pub fn width(&self) -> u32 {
        self.engine.width()
    }

    pub fn height(&self) -> u32 {
        self.engine.height()
    }

    /// Address of the packed cells; invalid after the next `tick`.
    pub fn cells(&self) -> *const u8 {
        self.engine.cells().as_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.engine.cells().len()
    }

    pub fn tick(&mut self) {
        self.engine.tick();
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), JsValue> {
        self.engine.toggle_cell(row, col).map_err(to_js)
    }

    pub fn cell(&self, row: u32, col: u32) -> Result<Cell, JsValue> {
        let alive = self.engine.get_cell(row, col).map_err(to_js)?;
        Ok(if alive { Cell::Alive } else { Cell::Dead })
    }

    pub fn population(&self) -> f64 {
        self.engine.population() as f64
    }

    pub fn generation(&self) -> f64 {
        self.engine.generation() as f64
    }

    pub fn render(&self) -> String {
        self.engine.to_string()
    }
}

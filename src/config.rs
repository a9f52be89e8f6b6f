pub struct Config;

impl Config {
    pub const DEFAULT_WIDTH: u32 = 128;
    pub const DEFAULT_HEIGHT: u32 = 128;

    pub const FILL_RATE: f64 = 0.3;
    pub const SEED: u64 = 42;

    pub const BENCH_SIDE: u32 = 1 << 10;
    pub const BENCH_GENERATIONS: u64 = 100;

    pub const ALIVE_GLYPH: char = '◼';
    pub const DEAD_GLYPH: char = '◻';

    pub const LOG_FILTER: &'static str = "info";
}

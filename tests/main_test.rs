use bitlife::{Engine, Seed};
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

/// Plain `Vec<bool>` engine the packed one is checked against.
struct NaiveField {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
}

impl NaiveField {
    fn from_engine(engine: &Engine) -> Self {
        let (width, height) = (engine.width() as usize, engine.height() as usize);
        let cells_curr = engine.grid().iter().collect::<Vec<_>>();
        Self {
            cells_next: vec![false; cells_curr.len()],
            cells_curr,
            width,
            height,
        }
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.cells_curr[x + y * self.width]
    }

    fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let x1 = if x == 0 { self.width - 1 } else { x - 1 };
        let x2 = if x == self.width - 1 { 0 } else { x + 1 };
        let y1 = if y == 0 { self.height - 1 } else { y - 1 };
        let y2 = if y == self.height - 1 { 0 } else { y + 1 };
        self.get(x1, y1) as usize
            + self.get(x, y1) as usize
            + self.get(x2, y1) as usize
            + self.get(x1, y) as usize
            + self.get(x2, y) as usize
            + self.get(x1, y2) as usize
            + self.get(x, y2) as usize
            + self.get(x2, y2) as usize
    }

    fn update(&mut self, n: usize) {
        for _ in 0..n {
            for y in 0..self.height {
                for x in 0..self.width {
                    let neighbors = self.count_neighbors(x, y);
                    self.cells_next[x + y * self.width] = if self.get(x, y) {
                        neighbors == 2 || neighbors == 3
                    } else {
                        neighbors == 3
                    };
                }
            }
            std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        }
    }
}

#[test]
fn test_consistency() {
    for (w, h) in [(64, 48), (37, 5), (3, 3), (100, 1 << 7)] {
        let mut life = Engine::new(w, h, Seed::random(FILL_RATE, Some(SEED))).unwrap();
        let mut naive = NaiveField::from_engine(&life);

        for _ in 0..4 {
            life.update(16);
            naive.update(16);
            let cells = life.grid().iter().collect::<Vec<_>>();
            assert_eq!(
                cells.iter().filter(|&&x| x).count() as u64,
                life.population()
            );
            assert_eq!(cells, naive.cells_curr, "{}x{}", w, h);
        }
    }
}

#[test]
fn test_get_single_and_multiple() {
    let (w, h) = (45, 29);
    let life = Engine::new(w, h, Seed::random(FILL_RATE, Some(SEED))).unwrap();
    let view = life.cells();
    assert_eq!(view.len(), (45 * 29 + 7) / 8);

    let mut iter = life.grid().iter();
    for row in 0..h {
        for col in 0..w {
            let idx = (row * w + col) as usize;
            let by_bits = view.as_bytes()[idx / 8] & (1 << (idx % 8)) != 0;
            let v = [
                life.get_cell(row, col).unwrap(),
                life.grid().get_index(idx).unwrap(),
                view.is_alive(idx).unwrap(),
                by_bits,
                iter.next().unwrap(),
            ];
            assert!(v.iter().all(|&x| x == v[0]), "row={} col={} v={:?}", row, col, v);
        }
    }
    assert_eq!(iter.next(), None);
}

#[test]
fn test_set_single_and_multiple() {
    let (w, h) = (31, 17);
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let states = (0..w * h)
        .map(|_| rng.gen_bool(FILL_RATE))
        .collect::<Vec<_>>();

    let mut life = Engine::blank(w, h).unwrap();
    for row in 0..h {
        for col in 0..w {
            life.set_cell(row, col, states[(row * w + col) as usize])
                .unwrap();
        }
    }

    let mut packed = vec![0u8; states.len().div_ceil(8)];
    for (i, _) in states.iter().enumerate().filter(|&(_, &s)| s) {
        packed[i / 8] |= 1 << (i % 8);
    }
    assert_eq!(life.cells().as_bytes(), &packed[..]);
    assert_eq!(
        life.population(),
        states.iter().filter(|&&s| s).count() as u64
    );
}

#[test]
fn test_random_seed_is_reproducible() {
    let a = Engine::new(50, 50, Seed::random(FILL_RATE, Some(SEED))).unwrap();
    let b = Engine::new(50, 50, Seed::random(FILL_RATE, Some(SEED))).unwrap();
    let c = Engine::new(50, 50, Seed::random(FILL_RATE, Some(SEED + 1))).unwrap();
    assert_eq!(a.cells().as_bytes(), b.cells().as_bytes());
    assert_ne!(a.cells().as_bytes(), c.cells().as_bytes());
}

#[test]
fn test_seed_from_json() {
    let seed = Seed::from_json(r#"{"pattern": "random", "density": 0.3, "seed": 42}"#).unwrap();
    let a = Engine::new(20, 10, seed).unwrap();
    let b = Engine::new(20, 10, Seed::random(0.3, Some(42))).unwrap();
    assert_eq!(a.cells().as_bytes(), b.cells().as_bytes());
}

#[test]
fn test_lightweight_spaceship() {
    const LWSS: &[u8] = b"#N LWSS\nx = 5, y = 4, rule = B3/S23\nbo2bo$o4b$o3bo$4o!\n";
    let (w, h) = (20, 10);
    let mut life = Engine::from_rle(LWSS, w, h).unwrap();
    let start = life.cells().as_bytes().to_vec();
    assert_eq!(life.population(), 9);
    // c/2 westwards: one full lap around the torus
    life.update(2 * w as u64);
    assert_eq!(life.cells().as_bytes(), &start[..]);
}

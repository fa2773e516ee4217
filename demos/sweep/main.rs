//! Planekit sweep demo: a headless take on the animated intersection viewer.
//!
//! Each tick rebuilds two segments inside a `W x 2W` frame. The first is the frame's
//! diagonal; the second moves with an oscillating offset `x`. The crossing point is
//! computed and logged instead of drawn.
//!
//! Usage:
//! ```text
//! cargo run --example sweep                     # 40 ticks
//! cargo run --example sweep -- 200              # 200 ticks
//! RUST_LOG=planekit=trace cargo run --example sweep
//! ```

use planekit::{GeoObject, Line, Point, Rectangle};

const UNIT: f64 = 200.0;
const O_X: f64 = 200.0;
const O_Y: f64 = 200.0;
const W: f64 = UNIT;
const H: f64 = 2.0 * UNIT;
const DEFAULT_TICKS: usize = 40;

/// Oscillating state advanced once per tick.
struct Sweep {
    x: f64,
    step: f64,
}

impl Sweep {
    fn new() -> Self {
        Self { x: 0.0, step: 10.0 }
    }

    /// Advances `x`, recomputes both segments and their crossing.
    fn tick(&mut self) -> (Line, Line, Option<Point>) {
        self.x += self.step;
        let diagonal = Line::named(Point::new(O_X, O_Y), Point::new(O_X + W, O_Y + H), "L1");
        let moving = Line::named(
            Point::new(O_X, O_Y + self.x),
            Point::new(O_X + W + 2.0 * self.x, O_Y + H),
            "L2",
        );
        let hit = diagonal.intersection(&moving);
        if self.x >= H || self.x <= 0.0 {
            self.step = -self.step;
        }
        (diagonal, moving, hit)
    }
}

fn main() {
    // Default: WARN for everything, INFO for planekit and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planekit=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sweep=info".parse().unwrap_or_default())
        .add_directive("planekit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ticks = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let frame = Rectangle::named(Point::new(O_X, O_Y), Point::new(O_X + W, O_Y + H), "frame");
    tracing::info!(frame = %frame.describe(), ticks, "starting sweep");

    let mut sweep = Sweep::new();
    for tick in 0..ticks {
        let (l1, l2, hit) = sweep.tick();
        match hit {
            Some(p) => {
                tracing::info!(tick, %l1, %l2, hit = %p, inside = frame.contains(&p), "crossing");
            }
            None => tracing::info!(tick, %l1, %l2, "no crossing"),
        }
    }
}

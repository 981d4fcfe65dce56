/// RGB colors and the fading background
use crate::rand::Xorshift64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random(rng: &mut Xorshift64) -> Self {
        Self::new(rng.next_u8(), rng.next_u8(), rng.next_u8())
    }

    /// CSS `rgb(...)` notation.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Move one channel a single step toward its target.
fn step_channel(current: u8, target: u8) -> u8 {
    match current.cmp(&target) {
        std::cmp::Ordering::Less => current + 1,
        std::cmp::Ordering::Greater => current - 1,
        std::cmp::Ordering::Equal => current,
    }
}

/// Background color that drifts toward a random target, one unit per
/// channel per step.
///
/// Reaching the target does not pick the next one. The owner calls
/// [`BackgroundFade::retarget_if_reached`] once per tick, so every step
/// within a tick heads for the same target.
#[derive(Debug, Clone)]
pub struct BackgroundFade {
    current: Rgb,
    target: Rgb,
    rng: Xorshift64,
}

impl BackgroundFade {
    /// Start at `current` with a random first target.
    pub fn new(current: Rgb, mut rng: Xorshift64) -> Self {
        let target = Rgb::random(&mut rng);
        Self::with_target(current, target, rng)
    }

    pub fn with_target(current: Rgb, target: Rgb, rng: Xorshift64) -> Self {
        Self {
            current,
            target,
            rng,
        }
    }

    pub fn current(&self) -> Rgb {
        self.current
    }

    pub fn target(&self) -> Rgb {
        self.target
    }

    /// Advance one step. Returns the new current color.
    pub fn step(&mut self) -> Rgb {
        self.current = Rgb::new(
            step_channel(self.current.r, self.target.r),
            step_channel(self.current.g, self.target.g),
            step_channel(self.current.b, self.target.b),
        );
        self.current
    }

    /// Pick a new random target if the current color has arrived.
    pub fn retarget_if_reached(&mut self) -> bool {
        if self.current != self.target {
            return false;
        }
        self.target = Rgb::random(&mut self.rng);
        log::debug!("background reached {:?}, next target {:?}", self.current, self.target);
        true
    }
}

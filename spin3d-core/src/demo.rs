/// Simulation state and the per-tick input controller
use std::fmt;
use std::str::FromStr;

use crate::color::{BackgroundFade, Rgb};
use crate::config::Config;
use crate::error::Result;
use crate::geometry::Model;
use crate::pipeline::transform_vertices;
use crate::projection::{Camera, DepthMode};
use crate::rand::Xorshift64;
use crate::scene;
use crate::surface::Surface;
use crate::transform::RotationState;

/// Background color the input-driven variants start from.
pub const INITIAL_BACKGROUND: Rgb = Rgb::RED;

/// Which of the three demos to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Vertex cloud spinning on all three axes by itself.
    Points,
    /// Cube edges, turned with the arrow keys.
    Wireframe,
    /// Depth-sorted colored faces, turned with the arrow keys.
    Filled,
}

impl Variant {
    pub fn config(self) -> Config {
        match self {
            Variant::Points => Config::points(),
            Variant::Wireframe => Config::wireframe(),
            Variant::Filled => Config::filled(),
        }
    }

    /// Whether ticks only advance while a direction key is held.
    pub fn is_input_driven(self) -> bool {
        !matches!(self, Variant::Points)
    }

    fn depth_mode(self) -> DepthMode {
        match self {
            Variant::Filled => DepthMode::Keep,
            Variant::Points | Variant::Wireframe => DepthMode::Discard,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Points => "points",
            Variant::Wireframe => "wireframe",
            Variant::Filled => "filled",
        })
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Variant::Points),
            "wireframe" => Ok(Variant::Wireframe),
            "filled" => Ok(Variant::Filled),
            _ => Err(format!("unknown variant '{s}', expected points, wireframe or filled")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Direction keys held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Keys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    /// Held directions in the order they are handled.
    pub fn held(&self) -> impl Iterator<Item = Direction> {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter_map(|(held, d)| held.then_some(d))
    }
}

impl FromIterator<Direction> for Keys {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut keys = Self::none();
        for d in iter {
            keys.press(d);
        }
        keys
    }
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// State advanced and a frame was presented.
    Redrawn,
    /// Nothing to do this tick.
    Idle,
}

/// One running demo: static model plus the state that changes every tick
#[derive(Debug, Clone)]
pub struct Demo {
    variant: Variant,
    model: Model,
    camera: Camera,
    rotation: RotationState,
    background: BackgroundFade,
    spin_step: f64,
    key_step: f64,
}

impl Demo {
    pub fn new(variant: Variant, config: &Config, rng: Xorshift64) -> Result<Self> {
        Self::with_background(variant, config, BackgroundFade::new(INITIAL_BACKGROUND, rng))
    }

    /// Fails if the model's edges or faces point past its vertex list.
    pub fn with_background(
        variant: Variant,
        config: &Config,
        background: BackgroundFade,
    ) -> Result<Self> {
        let model = Model::cube();
        model.validate()?;
        Ok(Self {
            variant,
            model,
            camera: config.camera(),
            rotation: RotationState::zero(),
            background,
            spin_step: config.spin_step,
            key_step: config.key_step,
        })
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn background(&self) -> Rgb {
        self.background.current()
    }

    /// Swap the camera, e.g. after the surface was resized.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Advance the simulation by one tick without drawing.
    ///
    /// The points variant spins every tick. The cube variants first pick a
    /// new fade target if the last one was reached, then turn once per held
    /// key, stepping the background fade each time. With no key held they
    /// do not turn or redraw.
    pub fn update(&mut self, keys: &Keys) -> Tick {
        if !self.variant.is_input_driven() {
            let step = self.spin_step;
            self.rotation.rotate(step, step, step);
            return Tick::Redrawn;
        }

        self.background.retarget_if_reached();

        let mut handled = false;
        for direction in keys.held() {
            let step = self.key_step;
            match direction {
                Direction::Up => self.rotation.rotate(step, 0.0, 0.0),
                Direction::Down => self.rotation.rotate(-step, 0.0, 0.0),
                Direction::Left => self.rotation.rotate(0.0, step, 0.0),
                Direction::Right => self.rotation.rotate(0.0, -step, 0.0),
            }
            self.background.step();
            handled = true;
        }

        if handled {
            Tick::Redrawn
        } else {
            Tick::Idle
        }
    }

    /// Draw the current state and present it.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let projected = transform_vertices(
            &self.model.vertices,
            &self.rotation,
            &self.camera,
            self.variant.depth_mode(),
        )?;

        match self.variant {
            Variant::Points => scene::draw_points(surface, &projected),
            Variant::Wireframe => {
                scene::draw_wireframe(surface, self.background(), &self.model.edges, &projected)
            }
            Variant::Filled => {
                scene::draw_filled(surface, self.background(), &self.model.faces, &projected)
            }
        }
        surface.present()
    }

    /// Update, then redraw if the update asked for it.
    pub fn tick<S: Surface + ?Sized>(&mut self, keys: &Keys, surface: &mut S) -> Result<Tick> {
        let tick = self.update(keys);
        if tick == Tick::Redrawn {
            log::trace!("{} redraw at {:?}", self.variant, self.rotation);
            self.draw(surface)?;
        }
        Ok(tick)
    }
}

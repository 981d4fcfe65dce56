/// spin3d terminal demo - wireframe cube
///
/// Controls:
///   - Arrow keys / WASD: Rotate the cube
///   - Q/ESC/Ctrl-C: Quit

use anyhow::Result;
use spin3d_core::Variant;

fn main() -> Result<()> {
    env_logger::init();
    spin3d_terminal::run(Variant::Wireframe)
}

/// spin3d terminal demo - rotating point cloud
///
/// The cube's corners spin on all three axes by themselves.
/// Controls:
///   - Q/ESC/Ctrl-C: Quit

use anyhow::Result;
use spin3d_core::Variant;

fn main() -> Result<()> {
    env_logger::init();
    spin3d_terminal::run(Variant::Points)
}

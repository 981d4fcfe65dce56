/// Example: print a single frame of a demo without taking over the terminal
///
/// Usage: cargo run --example snapshot -- [points|wireframe|filled] [ticks]

use anyhow::{anyhow, Result};
use spin3d_core::{Demo, Direction, Keys, Variant, Xorshift64};
use spin3d_terminal::TerminalSurface;
use std::env;
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let variant: Variant = match args.get(1) {
        Some(name) => name.parse().map_err(|e: String| anyhow!(e))?,
        None => Variant::Filled,
    };
    let ticks: u32 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 20,
    };

    let (columns, rows) = (80, 24);
    let config = variant.config().fit_to(columns, rows * 2);
    let mut demo = Demo::new(variant, &config, Xorshift64::from_time())?;
    let mut surface = TerminalSurface::inline(columns as u16, rows as u16, Vec::new());

    // Turn up and left so the cube shows three faces
    let keys = Keys::from_iter([Direction::Up, Direction::Left]);
    for _ in 0..ticks {
        demo.update(&keys);
    }
    demo.draw(&mut surface)?;

    let mut out = io::stdout();
    out.write_all(surface.writer())?;
    writeln!(out)?;
    Ok(())
}

//! Writes every icon asset of the application.
//!
//! Must be run from the `res/` directory: outputs land in the working directory, and the Flutter
//! assets in `../flutter/` next to it.

use {
  anyhow::{Context, Result},
  deskon_icon::driver
};

// assets are laid out relative to the resource directory the generator runs in
fn main() -> Result<()> {
  let res_dir = std::env::current_dir()
    .context("unable to resolve the resource directory")?;

  driver::generate(&res_dir)?;

  println!("All icons generated successfully!");
  Ok(())
}

//! Writing logo rasters to disk.
//!
//! ICO containers are packed with the `ico` crate. When that fails, the first frame alone is
//! written through `image`'s own ICO encoder, and the other sizes are dropped.

use {
  std::{fs, io::Cursor, path::Path},
  ico::{IconDir, IconDirEntry, IconImage, ResourceType},
  image::{ImageFormat, RgbaImage},
  crate::{
    error::{Error, Result},
    logo
  }
};


/// Desktop and installer icon.
pub const DEFAULT_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
/// System tray icon.
pub const TRAY_SIZES: [u32; 3] = [16, 32, 48];
/// Largest frame an ICO entry can hold.
pub const ICO_MAX_SIZE: u32 = 256;

/// How an icon ended up being written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packing {
  /// Every requested size, in request order.
  Multi(Vec<u32>),
  /// Fallback: the first requested size only.
  Single(u32),
}

/// Draw the logo once per size and write all frames into one ICO at `path`.
///
/// If packing the container fails for any reason, a warning is printed and only the first
/// frame is written as a single-resolution ICO. Errors of that second attempt are returned.
pub fn export_ico(path: impl AsRef<Path>, sizes: &[u32]) -> Result<Packing> {
  let path = path.as_ref();
  let frames = sizes.iter()
    .map(|&size| logo::draw(size))
    .collect::<Vec<_>>();
  let first = frames.first().ok_or(Error::NoFrames)?;

  match pack_ico(path, &frames) {
    Ok(()) => {
      println!("Generated {} with sizes: {:?}", path.display(), sizes);
      Ok(Packing::Multi(sizes.to_vec()))
    }
    Err(e) => {
      eprintln!("Warning when saving with sizes: {}", e);
      save_ico(path, first)?;
      println!("Generated {} with single size: {}", path.display(), sizes[0]);
      Ok(Packing::Single(sizes[0]))
    }
  }
}

/// Multi-resolution container. The whole file is encoded before the path is touched.
pub fn pack_ico(path: &Path, frames: &[RgbaImage]) -> Result<()> {
  if frames.is_empty() {
    return Err(Error::NoFrames);
  }
  let mut icon_dir = IconDir::new(ResourceType::Icon);
  for frame in frames {
    let (width, height) = frame.dimensions();
    if width == 0 || width > ICO_MAX_SIZE || width != height {
      return Err(Error::FrameSize(width));
    }
    let image = IconImage::from_rgba_data(width, height, frame.as_raw().clone());
    icon_dir.add_entry(IconDirEntry::encode(&image)?);
  }
  let mut buf = vec![];
  icon_dir.write(&mut buf)?;
  fs::write(path, buf)?;
  Ok(())
}

/// Single-resolution ICO.
pub fn save_ico(path: &Path, frame: &RgbaImage) -> Result<()> {
  let mut buf = Cursor::new(vec![]);
  frame.write_to(&mut buf, ImageFormat::Ico)?;
  fs::write(path, buf.into_inner())?;
  Ok(())
}

pub fn save_png(path: impl AsRef<Path>, frame: &RgbaImage) -> Result<()> {
  let path = path.as_ref();
  let mut buf = Cursor::new(vec![]);
  frame.write_to(&mut buf, ImageFormat::Png)?;
  fs::write(path, buf.into_inner())?;
  println!("Generated {} ({}x{})", path.display(), frame.width(), frame.height());
  Ok(())
}

//! Populates every icon location of the application, one step after another.
//!
//! Steps are not transactional: a failure leaves the outputs of earlier steps in place.

use {
  std::{fs, path::{Path, PathBuf}},
  crate::{
    error::Result,
    export::{self, DEFAULT_SIZES, TRAY_SIZES},
    logo,
    profile,
    util
  }
};

/// Edge length of the general purpose PNG.
pub const PNG_SIZE: u32 = 512;
/// Edge length of the macOS PNG.
pub const MAC_PNG_SIZE: u32 = 1024;

/// Where each asset goes, relative to the resource directory unless joined with [`Layout::under`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
  pub icon: PathBuf,
  pub png: PathBuf,
  pub mac_png: PathBuf,
  pub tray_icon: PathBuf,
  /// Windows runner resource of the Flutter app.
  pub app_icon: PathBuf,
  /// Bundled asset of the Flutter app, a copy of `png`.
  pub asset_png: PathBuf,
}

impl Default for Layout {
  fn default() -> Self {
    Layout {
      icon: "icon.ico".into(),
      png: "icon.png".into(),
      mac_png: "mac-icon.png".into(),
      tray_icon: "tray-icon.ico".into(),
      app_icon: ["..", "flutter", "windows", "runner", "resources", "app_icon.ico"].iter().collect(),
      asset_png: ["..", "flutter", "assets", "icon.png"].iter().collect(),
    }
  }
}

impl Layout {
  pub fn under(&self, res_dir: &Path) -> Self {
    Layout {
      icon: res_dir.join(&self.icon),
      png: res_dir.join(&self.png),
      mac_png: res_dir.join(&self.mac_png),
      tray_icon: res_dir.join(&self.tray_icon),
      app_icon: res_dir.join(&self.app_icon),
      asset_png: res_dir.join(&self.asset_png),
    }
  }
}

/// Write the default [`Layout`] under `res_dir`. Returns the written paths in order.
pub fn generate(res_dir: &Path) -> Result<Vec<PathBuf>> {
  generate_layout(&Layout::default().under(res_dir))
}

pub fn generate_layout(layout: &Layout) -> Result<Vec<PathBuf>> {
  profile!("icon.ico", export::export_ico(&layout.icon, &DEFAULT_SIZES))?;
  report(&layout.icon);

  profile!("icon.png", export::save_png(&layout.png, &logo::draw(PNG_SIZE)))?;
  report(&layout.png);

  profile!("mac-icon.png", export::save_png(&layout.mac_png, &logo::draw(MAC_PNG_SIZE)))?;
  report(&layout.mac_png);

  profile!("tray-icon.ico", export::export_ico(&layout.tray_icon, &TRAY_SIZES))?;
  report(&layout.tray_icon);

  create_parent(&layout.app_icon)?;
  profile!("app_icon.ico", export::export_ico(&layout.app_icon, &DEFAULT_SIZES))?;
  report(&layout.app_icon);

  create_parent(&layout.asset_png)?;
  fs::copy(&layout.png, &layout.asset_png)?;
  println!("Generated {}", layout.asset_png.display());
  report(&layout.asset_png);

  Ok(vec![
    layout.icon.clone(),
    layout.png.clone(),
    layout.mac_png.clone(),
    layout.tray_icon.clone(),
    layout.app_icon.clone(),
    layout.asset_png.clone(),
  ])
}

fn create_parent(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  Ok(())
}

fn report(path: &Path) {
  println!("  {} ({})", path.display(), util::display_size(path));
}

use {
  std::{collections::BTreeSet, fs, path::{Path, PathBuf}},
  anyhow::Result,
  deskon_icon::{driver::{self, Layout}, export::DEFAULT_SIZES},
  ico::IconDir,
  walkdir::WalkDir
};

fn files(root: &Path) -> BTreeSet<PathBuf> {
  WalkDir::new(root)
    .into_iter()
    .filter_map(|entry| entry.ok())
    .filter(|entry| entry.file_type().is_file())
    .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
    .collect()
}

fn ico_sizes(path: &Path) -> Result<Vec<u32>> {
  let icon_dir = IconDir::read(fs::File::open(path)?)?;
  Ok(icon_dir.entries().iter().map(|entry| entry.width()).collect())
}

#[test] fn populates_empty_tree() -> Result<()> {
  let root = tempfile::tempdir()?;
  let res_dir = root.path().join("res");
  fs::create_dir(&res_dir)?;

  let written = driver::generate(&res_dir)?;
  assert_eq!(written.len(), 6);
  assert!(written.iter().all(|path| path.is_file()));

  let expected = [
    "res/icon.ico",
    "res/icon.png",
    "res/mac-icon.png",
    "res/tray-icon.ico",
    "flutter/windows/runner/resources/app_icon.ico",
    "flutter/assets/icon.png",
  ].iter()
    .map(|path| path.split('/').collect::<PathBuf>())
    .collect::<BTreeSet<_>>();
  assert_eq!(files(root.path()), expected);

  let layout = Layout::default().under(&res_dir);
  assert_eq!(ico_sizes(&layout.icon)?, DEFAULT_SIZES.to_vec());
  assert_eq!(ico_sizes(&layout.app_icon)?, DEFAULT_SIZES.to_vec());
  assert_eq!(ico_sizes(&layout.tray_icon)?, vec![16, 32, 48]);
  assert_eq!(image::image_dimensions(&layout.png)?, (512, 512));
  assert_eq!(image::image_dimensions(&layout.mac_png)?, (1024, 1024));
  assert_eq!(fs::read(&layout.png)?, fs::read(&layout.asset_png)?);
  Ok(())
}

#[test] fn keeps_existing_files() -> Result<()> {
  let root = tempfile::tempdir()?;
  let res_dir = root.path().join("res");
  let assets = root.path().join("flutter").join("assets");
  fs::create_dir_all(&res_dir)?;
  fs::create_dir_all(&assets)?;
  fs::write(res_dir.join("generate_icon.py"), "# keep")?;
  fs::write(assets.join("splash.png"), "keep")?;

  driver::generate(&res_dir)?;
  // second run over its own output
  driver::generate(&res_dir)?;

  assert_eq!(fs::read_to_string(res_dir.join("generate_icon.py"))?, "# keep");
  assert_eq!(fs::read_to_string(assets.join("splash.png"))?, "keep");
  assert_eq!(files(root.path()).len(), 8);
  Ok(())
}

#[test] fn stops_at_first_failure() -> Result<()> {
  let root = tempfile::tempdir()?;
  let res_dir = root.path().join("res");
  fs::create_dir(&res_dir)?;
  // a file where the tray icon's directory should be
  let mut layout = Layout::default().under(&res_dir);
  layout.tray_icon = res_dir.join("icon.png").join("tray-icon.ico");

  assert!(driver::generate_layout(&layout).is_err());
  assert!(layout.icon.is_file());
  assert!(layout.png.is_file());
  assert!(layout.mac_png.is_file());
  assert!(!layout.app_icon.exists());
  assert!(!layout.asset_png.exists());
  Ok(())
}

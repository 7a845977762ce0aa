use std::path::Path;

/// Evaluate an expression, print how long it took, and return its value.
#[macro_export]
macro_rules! profile(
  ($title: expr, $body: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Size of the file at `path`, e.g. `"12.31 KB"`. `"?"` when it can't be read.
pub fn display_size(path: &Path) -> String {
  use humansize::{FileSize, file_size_opts as options};

  std::fs::metadata(path)
    .ok()
    .and_then(|meta| meta.len().file_size(options::CONVENTIONAL).ok())
    .unwrap_or_else(|| "?".to_string())
}

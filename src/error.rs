//! Error type of the crate.
//!
//! Only a failed multi-resolution pack is ever recovered from (see [`crate::export`]);
//! everything else propagates to the caller.
use std::fmt;

#[derive(Debug)]
pub enum Error {
  IoError(std::io::Error),
  ImageError(image::ImageError),
  /// Edge length an ICO frame can't hold, must be in `1..=256`.
  FrameSize(u32),
  /// Asked to export an icon without any frame.
  NoFrames,
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::IoError(e)
  }
}

impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::ImageError(e)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      IoError(err) => write!(f, "{}", err),
      ImageError(err) => write!(f, "{}", err),
      FrameSize(size) => write!(f, "ICO frames must be 1..=256 pixels, got {}x{}", size, size),
      NoFrames => write!(f, "no frame sizes given"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::IoError(err) => Some(err),
      Error::ImageError(err) => Some(err),
      _ => None
    }
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

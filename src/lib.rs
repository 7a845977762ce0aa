//! Procedural DeskON logo, exported as ICO and PNG application assets.
//!
//! The logo is composed from signed distance functions: every layer is a [`geometry::Shape`]
//! paired with a color through [`geometry::Shape::texture`], and drawn with
//! [`drawing::Draw`] into an [`image::RgbaImage`]. Dimensions are fractions of the edge length,
//! so the same routine serves a 16 px tray icon and a 1024 px macOS icon.
//!
//! # Basic usage
//! ```no_run
//! # use deskon_icon::{logo, export, error::Result};
//! # fn main() -> Result<()> {
//! let image = logo::draw(512);
//! export::save_png("icon.png", &image)?;
//!
//! // one container, six frames
//! export::export_ico("icon.ico", &export::DEFAULT_SIZES)?;
//! #   Ok(())
//! # }
//! ```
//!
//! Custom layers are drawn the same way:
//! ```
//! # use {
//! #   deskon_icon::{geometry::{Shape, Circle}, drawing::Draw},
//! #   euclid::Vector2D as V2,
//! #   image::{Rgba, RgbaImage}
//! # };
//! let mut image = RgbaImage::new(64, 64);
//! Circle
//!   .translate(V2::splat(0.5)) // world space spans [0, 1]
//!   .scale(0.25)
//!   .texture(Rgba([255u8, 255, 255, 255]))
//!   .draw(&mut image);
//! assert_eq!(image.get_pixel(32, 32).0, [255, 255, 255, 255]);
//! ```
//!
//! [`driver::generate`] writes the complete asset set used by the application.

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod logo;
pub mod export;
pub mod driver;
pub mod util;

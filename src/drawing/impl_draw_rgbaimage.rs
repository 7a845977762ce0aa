#![allow(non_snake_case)]
use {
  euclid::{Point2D, Size2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Texture, rescale_bounding_box},
    geometry::{BoundingBox, PixelSpace, Shape},
    sdf::SDF
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let (bounding_box, offset, min_side) = rescale_bounding_box(self.bounding_box(), resolution);
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = 1.0 / min_side;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        // sample at the pixel center
        let pixel_world = ((pixel.to_f32() + V2::splat(0.5) - offset).to_vector() / min_side)
          .cast_unit().to_point();
        let sdf = self.sdf(pixel_world);
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, col1: Rgba<u8>, col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  blend_over(col1, col2, Δf / Δp)
}

/// Source-over of `fg` onto `bg`, with `fg` alpha scaled by `coverage`.
/// Full coverage of an opaque color replaces the pixel exactly.
pub(crate) fn blend_over(bg: Rgba<u8>, fg: Rgba<u8>, coverage: f32) -> Rgba<u8> {
  let fg_a = fg.0[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
  if fg_a <= 0.0 {
    return bg;
  }
  if fg_a >= 1.0 {
    return fg;
  }
  let bg_a = bg.0[3] as f32 / 255.0;
  let out_a = fg_a + bg_a * (1.0 - fg_a);
  let channel = |i: usize| {
    let c = (fg.0[i] as f32 * fg_a + bg.0[i] as f32 * bg_a * (1.0 - fg_a)) / out_a;
    c.round().clamp(0.0, 255.0) as u8
  };
  Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}

//! The DeskON logo.
//!
//! Every dimension is a fixed fraction of the edge length, truncated to whole pixels, so a
//! given size always produces the same raster. Layers, bottom to top:
//! rounded backdrop, decorative ring (`size > 30`), center disc, "D" glyph (`size > 20`).

use {
  crate::{
    drawing::Draw,
    geometry::{Circle, Rect, Ring, Shape, Translation, Scale, WorldSpace}
  },
  euclid::Vector2D as V2,
  image::{Rgba, RgbaImage}
};

#[cfg(test)] mod tests;

/// #2563EB
pub const BACKGROUND: Rgba<u8> = Rgba([37, 99, 235, 255]);
/// White at 25% opacity.
pub const RING: Rgba<u8> = Rgba([255, 255, 255, 64]);
pub const DISC: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// #3B82F6
pub const GLYPH: Rgba<u8> = Rgba([59, 130, 246, 255]);

/// The ring is drawn only above this edge length.
pub const RING_MIN_SIZE: u32 = 30;
/// The glyph is drawn only above this edge length.
pub const GLYPH_MIN_SIZE: u32 = 20;

/// Draw the logo on a transparent `size` x `size` canvas.
pub fn draw(size: u32) -> RgbaImage {
  let mut image = RgbaImage::new(size, size);
  if size == 0 {
    return image;
  }
  layers(size)
    .iter()
    .for_each(|layer| layer.draw(&mut image));
  image
}

/// Textured layers of the logo, in drawing order.
pub fn layers(size: u32) -> Vec<Box<dyn Draw<RgbaImage>>> {
  let grid = Grid { size };
  let mut layers: Vec<Box<dyn Draw<RgbaImage>>> = vec![
    Box::new(grid.backdrop().texture(BACKGROUND))
  ];
  if size > RING_MIN_SIZE {
    layers.push(Box::new(grid.ring().texture(RING)));
  }
  layers.push(Box::new(grid.disc().texture(DISC)));
  if size > GLYPH_MIN_SIZE {
    layers.push(Box::new(grid.glyph().texture(GLYPH)));
  }
  layers
}

/// Pixel layout of a single logo size. Boxes are inclusive, `[x0, x1]` covers `x1 - x0 + 1` pixels.
#[derive(Debug, Copy, Clone)]
struct Grid {
  size: u32
}

impl Grid {
  fn frac(&self, f: f64) -> u32 {
    (self.size as f64 * f) as u32
  }

  fn center(&self) -> u32 {
    self.size / 2
  }

  fn world(&self, px: f32) -> f32 {
    px / self.size as f32
  }

  fn point(&self, x: f32, y: f32) -> V2<f32, WorldSpace> {
    V2::new(self.world(x), self.world(y))
  }

  fn rect(&self, x0: u32, y0: u32, x1: u32, y1: u32, radius: u32) -> Translation<Rect, f32> {
    let half = self.point((x1 + 1 - x0) as f32, (y1 + 1 - y0) as f32) / 2.0;
    Rect::new(half, self.world(radius as f32))
      .translate(self.point(x0 as f32, y0 as f32) + half)
  }

  /// Center and radius of the circle inscribed in a `diameter` box at `(x0, y0)`.
  fn inscribed(&self, x0: u32, y0: u32, diameter: u32) -> (V2<f32, WorldSpace>, f32) {
    let r = (diameter + 1) as f32 / 2.0;
    (self.point(x0 as f32 + r, y0 as f32 + r), self.world(r))
  }

  fn backdrop(&self) -> Translation<Rect, f32> {
    let edge = self.size - 1;
    self.rect(0, 0, edge, edge, self.frac(0.18))
  }

  // stroke grows inwards from the outer edge
  fn ring(&self) -> Scale<Translation<Ring, f32>, f32> {
    let diameter = self.frac(0.75);
    let origin = (self.size - diameter) / 2;
    let stroke = self.frac(0.04).max(1);
    band(self.inscribed(origin, origin, diameter), self.world(stroke as f32))
  }

  fn disc(&self) -> Scale<Translation<Circle, f32>, f32> {
    let diameter = self.frac(0.32);
    let origin = self.center() - diameter / 2;
    let (center, r) = self.inscribed(origin, origin, diameter);
    Circle.translate(center).scale(r)
  }

  /// Vertical bar, the left half of a band, and a square cap on each end of the bar.
  fn glyph(&self) -> impl Shape {
    let c = self.center();
    let stroke = self.frac(0.08).max(2);
    let x = c - self.frac(0.15);
    let top = c - self.frac(0.25);
    let bottom = c + self.frac(0.25);

    let bar = self.rect(x, top, x + stroke, bottom, 0);

    let diameter = self.frac(0.4);
    let (center, r) = self.inscribed(x - diameter / 2, c - diameter / 2, diameter);
    let left_half = Rect::new(V2::new(r / 2.0, r), 0.0)
      .translate(center - V2::new(r / 2.0, 0.0));
    let arc = band((center, r), self.world(stroke as f32))
      .intersection(left_half);

    let top_cap = self.rect(x, top, x + stroke, top + stroke, 0);
    let bottom_cap = self.rect(x, bottom - stroke, x + stroke, bottom, 0);

    bar.union(arc)
      .union(top_cap)
      .union(bottom_cap)
  }
}

fn band((center, r): (V2<f32, WorldSpace>, f32), stroke: f32) -> Scale<Translation<Ring, f32>, f32> {
  Ring { inner_r: ((r - stroke) / r).max(0.0) }
    .translate(center)
    .scale(r)
}

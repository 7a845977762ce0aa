use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Unit circle with a hole of radius `inner_r` in the middle.
#[derive(Debug, Copy, Clone)]
pub struct Ring {
  pub inner_r: f32
}

/// Axis-aligned box around the origin, sized in world units, with rounded corners.
#[derive(Debug, Copy, Clone)]
pub struct Rect {
  pub half: V2<f32, WorldSpace>,
  pub radius: f32
}

impl Rect {
  /// Corner radius is clamped to the shorter half side.
  pub fn new(half: V2<f32, WorldSpace>, radius: f32) -> Self {
    Rect { half, radius: radius.min(half.x).min(half.y).max(0.0) }
  }
}

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl<S> BoundingBox<f32, S> for Ring {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl<S> BoundingBox<f32, S> for Rect {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      (-self.half).to_point().cast_unit(),
      self.half.to_point().cast_unit()
    )}}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

impl SDF<f32> for Ring {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let r = pixel.to_vector().length();
    (r - 1.0).max(self.inner_r - r)
  }
}

impl SDF<f32> for Rect {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let dist = pixel.to_vector().abs() - (self.half - V2::splat(self.radius));
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist - self.radius
  }
}

use {
  euclid::{Point2D, Box2D},
  crate::geometry::{WorldSpace, Shape, Scale, Translation, BoundingBox},
  num_traits::Float
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c) / self.scale + c.to_vector()).to_point();
    self.shape.sdf(pixel) * self.scale
  }
}

/// Union of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Union<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Union<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    self.s1.sdf(pixel).min(self.s2.sdf(pixel))
  }}

impl<T, S1, S2> BoundingBox<T, WorldSpace> for Union<S1, S2>
  where T: Copy + PartialOrd,
        S1: BoundingBox<T, WorldSpace>,
        S2: BoundingBox<T, WorldSpace> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    self.s1.bounding_box().union(&self.s2.bounding_box())
  }}

/// Intersection of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Intersection<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    self.s1.sdf(pixel).max(self.s2.sdf(pixel))
  }}

impl<T, S1, S2> BoundingBox<T, WorldSpace> for Intersection<S1, S2>
  where T: Copy + PartialOrd + num_traits::Zero,
        S1: BoundingBox<T, WorldSpace>,
        S2: BoundingBox<T, WorldSpace> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    self.s1.bounding_box()
      .intersection(&self.s2.bounding_box())
      .unwrap_or(Box2D::from_size([T::zero(), T::zero()].into()))
  }}

#[cfg(test)] mod tests {
  use {
    super::*,
    crate::geometry::{Circle, Rect},
    euclid::Vector2D as V2
  };

  #[test] fn combinators() {
    let a = Circle.translate(V2::new(0.25, 0.5)).scale(0.25);
    let b = Circle.translate(V2::new(0.5, 0.5)).scale(0.25);
    let inside_a_only = Point2D::new(0.1, 0.5);
    let inside_both = Point2D::new(0.375, 0.5);

    assert!(a.union(b).sdf(inside_a_only) < 0.0);
    assert!(a.intersection(b).sdf(inside_a_only) > 0.0);
    assert!(a.intersection(b).sdf(inside_both) < 0.0);
  }

  #[test] fn scale_preserves_distance() {
    let circle = Circle.translate(V2::splat(0.5)).scale(0.25);
    let d = circle.sdf(Point2D::new(1.0, 0.5));
    assert!((d - 0.25).abs() < 1e-6);
    let rect = Rect::new(V2::new(0.25, 0.125), 0.0).translate(V2::splat(0.5));
    assert!((rect.sdf(Point2D::new(0.5, 0.75)) - 0.125).abs() < 1e-6);
  }
}

use {
  super::*,
  crate::drawing::blend_over,
};

fn contains(image: &RgbaImage, color: Rgba<u8>) -> bool {
  image.pixels().any(|p| *p == color)
}

#[test] fn square_of_requested_size() {
  for size in (1..=64).chain([128, 255, 256, 300]) {
    let image = draw(size);
    assert_eq!(image.dimensions(), (size, size));
  }
}

#[test] fn transparent_outside_backdrop() {
  let image = draw(128);
  assert_eq!(image.get_pixel(0, 0).0[3], 0);
  assert_eq!(image.get_pixel(127, 127).0[3], 0);
}

#[test] fn deterministic() {
  assert_eq!(draw(48).into_raw(), draw(48).into_raw());
}

#[test] fn ring_on_large_sizes() {
  let image = draw(128);
  // midway through the stroke, straight above the center
  assert_eq!(*image.get_pixel(64, 18), blend_over(BACKGROUND, RING, 1.0));
}

#[test] fn no_ring_below_threshold() {
  for size in [16, 24, 29, RING_MIN_SIZE] {
    let image = draw(size);
    let center = size as f32 / 2.0;
    let r = size as f32 * 0.375;
    // right half of the circle, clear of the glyph
    for degrees in (-45..=45).step_by(15) {
      let angle = (degrees as f32).to_radians();
      let x = (center + r * angle.cos()) as u32;
      let y = (center + r * angle.sin()) as u32;
      assert_eq!(*image.get_pixel(x, y), BACKGROUND, "size {} at ({}, {})", size, x, y);
    }
  }
}

#[test] fn no_glyph_below_threshold() {
  for size in 1..=GLYPH_MIN_SIZE {
    assert!(!contains(&draw(size), GLYPH), "size {}", size);
  }
  assert!(contains(&draw(GLYPH_MIN_SIZE + 1), GLYPH));
}

#[test] fn large_logo_layers() {
  for size in [256, 512] {
    let image = draw(size);
    let c = size / 2;
    assert_eq!(*image.get_pixel(size / 10, size / 10), BACKGROUND);
    assert_eq!(*image.get_pixel(c, c), DISC);
    assert!((0..c).any(|x| *image.get_pixel(x, c) == GLYPH));
  }
}

#[test] fn glyph_arc_faces_left() {
  let image = draw(256);
  // arc box spans x in [39, 141], bar at x in [90, 110]
  let row = 128;
  let leftmost = (0..128).find(|&x| *image.get_pixel(x, row) == GLYPH);
  let leftmost = leftmost.expect("glyph on the middle row");
  assert!(leftmost < 50, "{}", leftmost);
  // the arc does not continue right of the bar
  assert_ne!(*image.get_pixel(140, 128), GLYPH);
}

#[test] fn tiny_sizes_are_drawn() {
  let image = draw(1);
  assert_eq!(*image.get_pixel(0, 0), DISC);
  assert!(draw(0).is_empty());
}

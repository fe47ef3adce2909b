use web_sys::Element;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the tracked region, in the same space as [`Point`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Reads the element's current client rect. Never cached by callers.
    pub fn measure(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const NEUTRAL: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn to_transform(self) -> String {
        format!("transform: translate({:.3}px, {:.3}px);", self.dx, self.dy)
    }
}

/// Maps a pointer to a layer translation: displacement from the viewport
/// center, normalized by the half extents, scaled by `factor`.
///
/// An unmeasured or hidden viewport (zero width or height) yields
/// [`Offset::NEUTRAL`].
pub fn compute_offset(pointer: Point, viewport: Rect, factor: f64) -> Offset {
    if !viewport.is_measurable() {
        return Offset::NEUTRAL;
    }

    let rel_x = pointer.x - viewport.left;
    let rel_y = pointer.y - viewport.top;
    let center_x = viewport.width / 2.0;
    let center_y = viewport.height / 2.0;

    Offset {
        dx: (rel_x - center_x) / center_x * factor,
        dy: (rel_y - center_y) / center_y * factor,
    }
}

/// A decorative background layer of the hero section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub class: &'static str,
    pub factor: f64,
}

pub const HERO_LAYERS: [Layer; 3] = [
    Layer { class: "hero-glow hero-glow-top-right", factor: -15.0 },
    Layer { class: "hero-glow hero-glow-bottom-left", factor: -10.0 },
    Layer { class: "hero-orb", factor: -5.0 },
];

/// Offsets for every layer, computed independently from the same inputs.
/// Without a pointer position every layer stays neutral.
pub fn layer_offsets(pointer: Option<Point>, viewport: Rect, layers: &[Layer]) -> Vec<Offset> {
    layers
        .iter()
        .map(|layer| match pointer {
            Some(p) => compute_offset(p, viewport, layer.factor),
            None => Offset::NEUTRAL,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Offset, b: Offset) -> bool {
        (a.dx - b.dx).abs() < 1e-9 && (a.dy - b.dy).abs() < 1e-9
    }

    #[test]
    fn center_is_neutral_for_any_factor() {
        let vp = Rect::new(40.0, 120.0, 300.0, 80.0);
        let center = Point::new(190.0, 160.0);
        for factor in [-15.0, -1.0, 0.0, 0.5, 10.0, 1e6] {
            assert!(approx(compute_offset(center, vp, factor), Offset::NEUTRAL));
        }
    }

    #[test]
    fn corners_map_to_plus_minus_factor() {
        let vp = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(compute_offset(Point::new(200.0, 100.0), vp, 10.0), Offset { dx: 10.0, dy: 10.0 });
        assert_eq!(compute_offset(Point::new(0.0, 0.0), vp, 10.0), Offset { dx: -10.0, dy: -10.0 });
    }

    #[test]
    fn scales_linearly_with_factor() {
        let vp = Rect::new(12.0, 7.0, 640.0, 480.0);
        let points = [Point::new(0.0, 0.0), Point::new(333.3, 90.1), Point::new(-50.0, 900.0)];
        for p in points {
            for f in [-15.0, -5.0, 3.25, 10.0] {
                let single = compute_offset(p, vp, f);
                let double = compute_offset(p, vp, 2.0 * f);
                assert!(approx(double, Offset { dx: 2.0 * single.dx, dy: 2.0 * single.dy }));
            }
        }
    }

    #[test]
    fn degenerate_viewport_is_neutral() {
        let zero_width = Rect::new(0.0, 0.0, 0.0, 100.0);
        let zero_height = Rect::new(10.0, 10.0, 200.0, 0.0);
        let p = Point::new(57.0, 13.0);
        assert_eq!(compute_offset(p, zero_width, 10.0), Offset::NEUTRAL);
        assert_eq!(compute_offset(p, zero_height, -15.0), Offset::NEUTRAL);
        assert_eq!(compute_offset(p, Rect::default(), f64::MAX), Offset::NEUTRAL);
    }

    #[test]
    fn uses_viewport_relative_coordinates() {
        // hero scrolled so its top-left sits at (100, 50)
        let vp = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(compute_offset(Point::new(300.0, 150.0), vp, 10.0), Offset { dx: 10.0, dy: 10.0 });
        assert_eq!(compute_offset(Point::new(100.0, 50.0), vp, 10.0), Offset { dx: -10.0, dy: -10.0 });
    }

    #[test]
    fn negative_factor_reverses_direction() {
        let vp = Rect::new(0.0, 0.0, 200.0, 100.0);
        let off = compute_offset(Point::new(150.0, 25.0), vp, -10.0);
        assert_eq!(off, Offset { dx: -5.0, dy: 5.0 });
    }

    #[test]
    fn outside_viewport_is_unbounded() {
        let vp = Rect::new(0.0, 0.0, 200.0, 100.0);
        let off = compute_offset(Point::new(400.0, -100.0), vp, 1.0);
        assert_eq!(off, Offset { dx: 3.0, dy: -3.0 });
    }

    #[test]
    fn layers_move_at_different_depths() {
        let vp = Rect::new(0.0, 0.0, 200.0, 100.0);
        let offsets = layer_offsets(Some(Point::new(200.0, 100.0)), vp, &HERO_LAYERS);
        assert_eq!(
            offsets,
            vec![
                Offset { dx: -15.0, dy: -15.0 },
                Offset { dx: -10.0, dy: -10.0 },
                Offset { dx: -5.0, dy: -5.0 },
            ]
        );

        let idle = layer_offsets(None, vp, &HERO_LAYERS);
        assert!(idle.iter().all(|o| *o == Offset::NEUTRAL));
    }

    #[test]
    fn transform_style() {
        let off = Offset { dx: -7.5, dy: 2.0 };
        assert_eq!(off.to_transform(), "transform: translate(-7.500px, 2.000px);");
    }
}

use std::f64::consts::SQRT_2;

use gridpal_core::Point;

/// Octile distance between two points: the cost of the cheapest 8-connected
/// walk on an empty grid with unit orthogonal and √2 diagonal steps.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    (hi - lo) as f64 + SQRT_2 * lo as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_cases() {
        let o = Point::ZERO;
        assert_eq!(octile(o, o), 0.0);
        assert_eq!(octile(o, Point::new(4, 0)), 4.0);
        assert_eq!(octile(o, Point::new(0, -2)), 2.0);
        assert_eq!(octile(o, Point::new(2, 2)), 2.0 * SQRT_2);
        assert_eq!(octile(Point::new(3, 1), o), 2.0 + SQRT_2);
    }
}

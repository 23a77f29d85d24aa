//! 2D affine transforms as 3x3 homogeneous matrices
//!
//! Points are column vectors, so `a * b` applies `b` first, then `a`.

use crate::geometry::Point;
use std::ops::Mul;

/// Row-major 3x3 matrix. The top-left 2x2 block holds rotation/scale,
/// the last column holds translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn from_rows(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::from_rows([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation (in y-up coordinates) by `deg` degrees
    pub fn rotation(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// `a * b`: the map that applies `b` first, then `a`
    #[inline]
    pub fn compose(a: &Mat3, b: &Mat3) -> Mat3 {
        let mut r = [[0.0_f32; 3]; 3];
        for (i, row) in r.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a.m[i][0] * b.m[0][j] + a.m[i][1] * b.m[1][j] + a.m[i][2] * b.m[2][j];
            }
        }
        Mat3 { m: r }
    }

    /// Translate * Rotate * Scale: scale first, rotate about the origin, then move
    pub fn trs(t: Point, rot_deg: f32, s: Point) -> Self {
        Self::translation(t.x, t.y) * Self::rotation(rot_deg) * Self::scale(s.x, s.y)
    }

    /// Homogeneous multiply with implicit w = 1
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let m = &self.m;
        Point::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2],
        )
    }

    pub fn transform_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// Element-wise comparison with tolerance
    pub fn approx_eq(&self, other: &Mat3, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::compose(&self, &rhs)
    }
}

impl Mul<Point> for Mat3 {
    type Output = Point;
    #[inline]
    fn mul(self, p: Point) -> Point {
        self.apply(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_identity_is_neutral() {
        let m = Mat3::trs(Point::new(3.0, -2.0), 37.0, Point::new(2.0, 0.5));
        assert!(Mat3::compose(&Mat3::IDENTITY, &m).approx_eq(&m, EPS));
        assert!(Mat3::compose(&m, &Mat3::IDENTITY).approx_eq(&m, EPS));
    }

    #[test]
    fn test_composition_order() {
        // Translate first, then rotate: (0,0) -> (1,0) -> (0,1)
        let m = Mat3::rotation(90.0) * Mat3::translation(1.0, 0.0);
        let direct = m.apply(Point::new(0.0, 0.0));
        let stepwise = Mat3::rotation(90.0).apply(Point::new(1.0, 0.0));
        assert!(direct.approx_eq(&stepwise, EPS));
        assert!(direct.approx_eq(&Point::new(0.0, 1.0), EPS));
    }

    #[test]
    fn test_apply_compose_matches_nested_apply() {
        let a = Mat3::rotation(-30.0) * Mat3::scale(1.5, 2.0);
        let b = Mat3::translation(4.0, 7.0) * Mat3::rotation(75.0);
        let p = Point::new(-3.0, 9.5);
        let composed = Mat3::compose(&a, &b).apply(p);
        let nested = a.apply(b.apply(p));
        assert!(composed.approx_eq(&nested, EPS));
    }

    #[test]
    fn test_composition_is_associative() {
        let a = Mat3::translation(2.0, 1.0);
        let b = Mat3::rotation(45.0);
        let c = Mat3::scale(3.0, 0.25);
        assert!(((a * b) * c).approx_eq(&(a * (b * c)), EPS));
    }

    #[test]
    fn test_trs_on_kite() {
        let kite = [
            Point::new(-20.0, 0.0),
            Point::new(0.0, 40.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, -60.0),
        ];
        let m = Mat3::trs(Point::new(100.0, 520.0), 0.0, Point::new(2.0, 1.0));
        let out = m.transform_points(&kite);
        assert_eq!(out.len(), 4);
        assert!(out[0].approx_eq(&Point::new(60.0, 520.0), EPS));
        assert!(out[3].approx_eq(&Point::new(100.0, 460.0), EPS));
    }

    #[test]
    fn test_scale_then_translate_via_mul_point() {
        let m = Mat3::translation(10.0, 0.0) * Mat3::scale(2.0, 3.0);
        let p = m * Point::new(1.0, 1.0);
        assert!(p.approx_eq(&Point::new(12.0, 3.0), EPS));
    }
}

use nalgebra::Vector2;

use crate::error::GraphError;

/// Euclidean distance.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// `v` re-expressed relative to `origin`.
#[inline]
pub fn translate(v: Vector2<f64>, origin: Vector2<f64>) -> Vector2<f64> {
    v - origin
}

#[inline]
pub fn dot(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    v1.dot(&v2)
}

#[inline]
pub fn magnitude(v: Vector2<f64>) -> f64 {
    v.norm()
}

/// z-component of the 2D cross product `a × b`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Unsigned angle `n1–n2–n3` at vertex `n2`, in `[0, π]`.
///
/// Fails with `DegenerateAngle` when `n1` or `n3` coincides with `n2`.
pub fn angle_at(n1: Vector2<f64>, n2: Vector2<f64>, n3: Vector2<f64>) -> Result<f64, GraphError> {
    let v1 = translate(n1, n2);
    let v3 = translate(n3, n2);
    let denom = magnitude(v1) * magnitude(v3);
    if denom == 0.0 || !denom.is_finite() {
        return Err(GraphError::DegenerateAngle);
    }
    // Rounding can push nearly (anti)parallel arms just outside acos' domain.
    let cos = (dot(v1, v3) / denom).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

use nalgebra::Vector2;

/// Strict orientation test: true iff `p1 → p2 → p3` turns counterclockwise
/// (in a y-up frame). Collinear triples are `false`.
#[inline]
pub fn ccw(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> bool {
    (p3.y - p1.y) * (p2.x - p1.x) > (p2.y - p1.y) * (p3.x - p1.x)
}

/// Proper crossing of segments `ab` and `cd`.
///
/// Collinear overlap and a shared start point (`a == c`) report `false`. A chained
/// pair (`b == c` or `a == d`) can still report `true` depending on the turn
/// direction; callers that need to allow such pairs check endpoints first.
#[inline]
pub fn intersects(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

use std::cmp::Ordering;

use crate::types::Node;

use super::vector::distance;

fn ranked<'a, I>(pool: I, origin: &Node, cmp: impl Fn(f64, f64) -> Ordering) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let o = origin.pos();
    let mut ranked: Vec<(f64, &Node)> = pool
        .into_iter()
        .filter(|n| n.id != origin.id)
        .map(|n| (distance(o, n.pos()), n))
        .collect();
    // Stable: equal distances keep pool order.
    ranked.sort_by(|(da, _), (db, _)| cmp(*da, *db));
    ranked.into_iter().map(|(_, n)| n).collect()
}

/// Up to `count` nodes of `pool` (minus `origin`) by ascending distance to `origin`.
pub fn find_nearest<'a, I>(pool: I, origin: &Node, count: usize) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut out = ranked(pool, origin, |a, b| a.total_cmp(&b));
    out.truncate(count);
    out
}

/// Up to `count` nodes of `pool` (minus `origin`) by descending distance to `origin`.
pub fn find_furthest<'a, I>(pool: I, origin: &Node, count: usize) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut out = ranked(pool, origin, |a, b| b.total_cmp(&a));
    out.truncate(count);
    out
}

/// Closest node of `pool` other than `origin`.
pub fn nearest<'a, I>(pool: I, origin: &Node) -> Option<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let o = origin.pos();
    pool.into_iter()
        .filter(|n| n.id != origin.id)
        .fold(None, |best: Option<(f64, &Node)>, n| {
            let d = distance(o, n.pos());
            match best {
                Some((bd, _)) if bd <= d => best,
                _ => Some((d, n)),
            }
        })
        .map(|(_, n)| n)
}

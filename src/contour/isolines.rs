use super::mesh::{vertex_interpolate, TriMesh};

use geo::{Coord, LineString, MultiLineString};
use std::collections::{HashMap, VecDeque};

// a mesh edge given by its two vertex indices, smallest first
type EdgeKey = (usize, usize);

#[inline]
fn edge_key(a: usize, b: usize) -> EdgeKey {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Marching triangles.
///
/// A vertex is above the level when `value >= level`. Every triangle with
/// vertices on both sides contributes one segment between the crossings of
/// its two mixed edges. Segments are joined through the edges they share so
/// each returned line is maximal, closed rings have equal first and last coords.
pub fn isolines(mesh: &TriMesh, level: f64) -> MultiLineString {
    // maps from mesh edges to where the contour crosses that edge
    let mut crossings: HashMap<EdgeKey, Coord> = HashMap::new();
    let mut segments: Vec<[EdgeKey; 2]> = Vec::new();

    for triangle in mesh.triangles.iter() {
        if !mesh.is_finite_triangle(triangle) {
            continue;
        }

        let above = triangle.map(|i| mesh.values[i] >= level);
        if above[0] == above[1] && above[1] == above[2] {
            continue;
        }

        // exactly two edges are crossed
        let mut crossed = [(0, 0); 2];
        let mut n = 0;
        for e in 0..3 {
            if above[e] != above[(e + 1) % 3] {
                let (a, b) = (triangle[e], triangle[(e + 1) % 3]);
                let key = edge_key(a, b);
                crossings.entry(key).or_insert_with(|| {
                    vertex_interpolate(mesh.corner(key.0), mesh.corner(key.1), level)
                });
                crossed[n] = key;
                n += 1;
            }
        }
        segments.push(crossed);
    }

    MultiLineString::new(stitch(&segments, &crossings))
}

fn stitch(segments: &[[EdgeKey; 2]], crossings: &HashMap<EdgeKey, Coord>) -> Vec<LineString> {
    // an edge is shared by at most two triangles, so by at most two segments
    let mut adjacency: HashMap<EdgeKey, Vec<usize>> = HashMap::with_capacity(crossings.len());
    for (si, segment) in segments.iter().enumerate() {
        for key in segment {
            adjacency.entry(*key).or_default().push(si);
        }
    }

    let mut used = vec![false; segments.len()];
    let mut lines = Vec::new();

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let mut chain = VecDeque::from(segments[start]);

        while let Some(next) = chain
            .back()
            .and_then(|key| follow(*key, segments, &adjacency, &mut used))
        {
            chain.push_back(next);
        }
        while let Some(prev) = chain
            .front()
            .and_then(|key| follow(*key, segments, &adjacency, &mut used))
        {
            chain.push_front(prev);
        }

        lines.push(LineString::new(
            chain.iter().map(|key| crossings[key]).collect(),
        ));
    }
    lines
}

// take the unused segment through `key`, returning its other end
fn follow(
    key: EdgeKey,
    segments: &[[EdgeKey; 2]],
    adjacency: &HashMap<EdgeKey, Vec<usize>>,
    used: &mut [bool],
) -> Option<EdgeKey> {
    let si = *adjacency.get(&key)?.iter().find(|&&si| !used[si])?;
    used[si] = true;

    let [a, b] = segments[si];
    Some(if a == key { b } else { a })
}

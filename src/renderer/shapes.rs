//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in field coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle outline. The stroke straddles the edge,
/// half inside and half outside.
pub fn rect_outline(origin: Vec2, size: Vec2, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = line_width / 2.0;
    let outer_origin = origin - Vec2::splat(half);
    let outer_size = size + Vec2::splat(line_width);

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom bars span the full outer width
    vertices.extend(rect(outer_origin, Vec2::new(outer_size.x, line_width), color));
    vertices.extend(rect(
        Vec2::new(outer_origin.x, origin.y + size.y - half),
        Vec2::new(outer_size.x, line_width),
        color,
    ));
    // Left and right bars fill the gap between them
    let inner_height = size.y - line_width;
    if inner_height > 0.0 {
        vertices.extend(rect(
            Vec2::new(outer_origin.x, origin.y + half),
            Vec2::new(line_width, inner_height),
            color,
        ));
        vertices.extend(rect(
            Vec2::new(origin.x + size.x - half, origin.y + half),
            Vec2::new(line_width, inner_height),
            color,
        ));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a line segment of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for the outline of a regular polygon.
/// The first vertex sits at angle 0 (pointing along +x).
pub fn polygon_outline(
    center: Vec2,
    radius: f32,
    sides: u32,
    line_width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let corner = |i: u32| {
        let angle = (i as f32 * 2.0 * PI) / sides as f32;
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    };

    (0..sides)
        .flat_map(|i| line(corner(i), corner((i + 1) % sides), line_width, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), WHITE);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_rect_outline_straddles_edge() {
        let verts = rect_outline(Vec2::new(150.0, 250.0), Vec2::new(200.0, 150.0), 4.0, WHITE);
        assert_eq!(verts.len(), 24);
        let min_x = verts.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = verts.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = verts.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_x, 148.0);
        assert_eq!(max_x, 352.0);
        assert_eq!(max_y, 402.0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let verts = circle(center, 15.0, WHITE, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 15.0 + 1e-3);
        }
    }

    #[test]
    fn test_ring_between_radii() {
        let center = Vec2::new(0.0, 0.0);
        let verts = ring(center, 14.5, 15.5, WHITE, 12);
        assert_eq!(verts.len(), 72);
        for v in &verts {
            let d = Vec2::from(v.position).length();
            assert!(d >= 14.5 - 1e-3 && d <= 15.5 + 1e-3);
        }
    }

    #[test]
    fn test_pentagon_outline() {
        let verts = polygon_outline(Vec2::ZERO, 7.5, 5, 1.0, WHITE);
        assert_eq!(verts.len(), 30);
    }

    #[test]
    fn test_degenerate_line_does_not_panic() {
        let verts = line(Vec2::ONE, Vec2::ONE, 2.0, WHITE);
        assert_eq!(verts.len(), 6);
    }
}

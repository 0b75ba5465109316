//! Shape generation for 2D primitives
//!
//! Everything is in playfield pixels with y pointing down. Presenters map
//! that to clip space however they like.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::snapshot::{CloudView, ObstacleView, RenderSnapshot};

/// Pipe cap height
pub const CAP_HEIGHT: f32 = 30.0;
/// How far a cap sticks out past the pipe body, both sides combined
pub const CAP_OVERHANG: f32 = 8.0;
/// Grass strip on top of the ground
pub const GRASS_HEIGHT: f32 = 16.0;
/// Spacing of the scrolling ground stripes
pub const STRIPE_PERIOD: f32 = 48.0;

/// Puffs making up a cloud at scale 1: (center offset, radius)
const CLOUD_PUFFS: [(Vec2, f32); 4] = [
    (Vec2::new(24.0, 24.0), 16.0),
    (Vec2::new(40.0, 24.0), 24.0),
    (Vec2::new(48.0, 26.0), 20.0),
    (Vec2::new(52.0, 26.0), 16.0),
];

const CIRCLE_SEGMENTS: u32 = 16;

/// Axis-aligned rectangle as two triangles. Empty for non-positive sizes.
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Rectangle rotated about its center
pub fn rotated_rect(center: Vec2, half: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let corner = |dx: f32, dy: f32| center + rot.rotate(Vec2::new(dx * half.x, dy * half.y));
    let (a, b, c, d) = (
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(-1.0, 1.0),
        corner(1.0, 1.0),
    );
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
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

pub fn cloud(view: &CloudView) -> Vec<Vertex> {
    let origin = Vec2::new(view.x, view.y);
    CLOUD_PUFFS
        .iter()
        .flat_map(|&(offset, radius)| {
            circle(
                origin + offset * view.size,
                radius * view.size,
                colors::CLOUD,
                CIRCLE_SEGMENTS,
            )
        })
        .collect()
}

/// Top and bottom pipe, each a body plus a cap facing the gap
pub fn pipe(view: &ObstacleView, width: f32, playable_height: f32) -> Vec<Vertex> {
    let body_x = view.x + CAP_OVERHANG / 2.0;
    let body_w = width - CAP_OVERHANG;
    let cap_x = view.x - CAP_OVERHANG / 2.0;
    let cap_w = width + CAP_OVERHANG;
    let gap_bottom = view.gap_y + view.gap_height;

    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(body_x, 0.0, body_w, view.gap_y - CAP_HEIGHT, colors::PIPE_BODY));
    vertices.extend(rect(cap_x, view.gap_y - CAP_HEIGHT, cap_w, CAP_HEIGHT, colors::PIPE_CAP));
    vertices.extend(rect(cap_x, gap_bottom, cap_w, CAP_HEIGHT, colors::PIPE_CAP));
    vertices.extend(rect(
        body_x,
        gap_bottom + CAP_HEIGHT,
        body_w,
        playable_height - gap_bottom - CAP_HEIGHT,
        colors::PIPE_BODY,
    ));
    vertices
}

/// Round body with a beak, rotated by the tilt
pub fn bird(x: f32, y: f32, size: f32, tilt_deg: f32) -> Vec<Vertex> {
    let center = Vec2::new(x + size / 2.0, y + size / 2.0);
    let angle = tilt_deg.to_radians();
    let beak_center = center + Vec2::from_angle(angle) * (size / 2.0);

    let mut vertices = circle(center, size / 2.0, colors::BIRD, CIRCLE_SEGMENTS);
    vertices.extend(rotated_rect(
        beak_center,
        Vec2::new(size * 0.1, size * 0.075),
        angle,
        colors::BIRD_BEAK,
    ));
    vertices
}

/// Grass strip, dirt and stripes scrolled by `offset`
pub fn ground(width: f32, top: f32, height: f32, offset: f32) -> Vec<Vertex> {
    let mut vertices = rect(0.0, top, width, height, colors::DIRT);
    vertices.extend(rect(0.0, top, width, GRASS_HEIGHT, colors::GRASS));

    let shift = offset.rem_euclid(STRIPE_PERIOD);
    let stripe_w = STRIPE_PERIOD / 2.0;
    let mut x = -shift;
    while x < width {
        let left = x.max(0.0);
        let right = (x + stripe_w).min(width);
        vertices.extend(rect(
            left,
            top + GRASS_HEIGHT,
            right - left,
            height - GRASS_HEIGHT,
            colors::DIRT_STRIPE,
        ));
        x += STRIPE_PERIOD;
    }
    vertices
}

/// Full frame, back to front: sky, clouds, pipes, bird, ground
pub fn frame(snapshot: &RenderSnapshot) -> Vec<Vertex> {
    let playable = snapshot.height - snapshot.ground_height;
    let obstacle_width = crate::consts::OBSTACLE_WIDTH;

    let mut vertices = rect(0.0, 0.0, snapshot.width, snapshot.height, colors::SKY);
    for view in &snapshot.clouds {
        vertices.extend(cloud(view));
    }
    for view in &snapshot.obstacles {
        vertices.extend(pipe(view, obstacle_width, playable));
    }
    vertices.extend(bird(
        snapshot.entity_x,
        snapshot.entity_y,
        snapshot.entity_size,
        snapshot.entity_tilt,
    ));
    vertices.extend(ground(
        snapshot.width,
        playable,
        snapshot.ground_height,
        snapshot.ground_offset,
    ));
    vertices
}

/// [`frame`] flattened to `x, y, r, g, b, a` floats per vertex, ready for a
/// typed-array upload
pub fn frame_data(snapshot: &RenderSnapshot) -> Vec<f32> {
    bytemuck::cast_slice(&frame(snapshot)).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Obstacle};

    fn bounds(vertices: &[Vertex]) -> (f32, f32, f32, f32) {
        vertices.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x0, y0, x1, y1), v| {
                (
                    x0.min(v.position[0]),
                    y0.min(v.position[1]),
                    x1.max(v.position[0]),
                    y1.max(v.position[1]),
                )
            },
        )
    }

    #[test]
    fn test_rect_is_two_triangles() {
        assert_eq!(rect(0.0, 0.0, 10.0, 5.0, colors::SKY).len(), 6);
        assert!(rect(0.0, 0.0, 0.0, 5.0, colors::SKY).is_empty());
    }

    #[test]
    fn test_pipe_leaves_gap_open() {
        let view = ObstacleView {
            id: 0,
            x: 100.0,
            gap_y: 150.0,
            gap_height: 160.0,
            scored: false,
        };
        let vertices = pipe(&view, 70.0, 504.0);
        assert_eq!(vertices.len(), 24);
        for v in &vertices {
            let y = v.position[1];
            assert!(!(y > 150.0 && y < 310.0), "vertex inside the gap at y={y}");
        }
        let (x0, _, x1, y1) = bounds(&vertices);
        assert_eq!(x0, 96.0);
        assert_eq!(x1, 174.0);
        assert_eq!(y1, 504.0);
    }

    #[test]
    fn test_ground_stripes_stay_on_screen() {
        for offset in [0.0, 3.0, 47.0, 1234.5] {
            let vertices = ground(400.0, 504.0, 96.0, offset);
            let (x0, y0, x1, y1) = bounds(&vertices);
            assert!(x0 >= 0.0 && x1 <= 400.0);
            assert_eq!(y0, 504.0);
            assert_eq!(y1, 600.0);
        }
    }

    #[test]
    fn test_frame_covers_playfield() {
        let mut state = GameState::new(1);
        state.obstacles.push(Obstacle::new(0, 100.0));
        let snapshot = crate::snapshot::RenderSnapshot::capture(&state, 0);
        let vertices = frame(&snapshot);
        assert_eq!(vertices.len() % 3, 0);
        // First quad is the sky
        assert_eq!(vertices[0].color, colors::SKY);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), vertices.len() * Vertex::STRIDE);
    }

    #[test]
    fn test_frame_data_is_interleaved() {
        let state = GameState::new(1);
        let snapshot = crate::snapshot::RenderSnapshot::capture(&state, 0);
        let vertices = frame(&snapshot);
        let data = frame_data(&snapshot);
        assert_eq!(data.len(), vertices.len() * 6);
        // Sky quad starts at the origin
        assert_eq!(&data[..2], &[0.0, 0.0]);
        assert_eq!(&data[2..6], &colors::SKY);
        let last = vertices[vertices.len() - 1];
        assert_eq!(data[data.len() - 6], last.position[0]);
        assert_eq!(data[data.len() - 1], last.color[3]);
    }
}

#![warn(missing_docs)]

//! Planar panel geometry for the foldkit hinge engine.
//!
//! A panel is one rigid face of a solid (or of its unfolded net): a flat
//! mesh in its own local frame, lying in the XY plane with a +Z normal.
//! The factory constructors here are pure and infallible — degenerate
//! (zero) dimensions yield a zero-area panel rather than an error, since
//! parameter bounds upstream exclude zero but a slipped-through zero must
//! not crash the build.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Parametric description of a panel's outline.
///
/// Retained alongside the tessellated mesh so hosts and tests can reason
/// about panels without re-deriving dimensions from vertex data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PanelShape {
    /// Axis-aligned rectangle centered at the origin.
    Rectangle {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
    },
    /// Circle centered at the origin.
    Circle {
        /// Circle radius.
        radius: f64,
    },
    /// Isosceles triangle, base centered on the origin along X, apex on +Y.
    IsoscelesTriangle {
        /// Base edge length.
        base: f64,
        /// Apex height above the base.
        height: f64,
    },
    /// Circular sector, apex at the origin, bisector along +Y.
    Sector {
        /// Sector radius.
        radius: f64,
        /// Opening angle in radians.
        angle: f64,
    },
}

/// Immutable planar mesh for one panel.
///
/// Same flat-array layout the renderer consumes directly: positions and
/// normals as `[x0, y0, z0, x1, ...]` (f32), triangle indices as
/// `[i0, i1, i2, ...]` (u32). `edge_indices` holds index *pairs* tracing
/// the panel boundary, rendered as a line overlay so fold creases stay
/// visible against coplanar neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelMesh {
    /// Flat vertex positions.
    pub vertices: Vec<f32>,
    /// Flat triangle indices.
    pub indices: Vec<u32>,
    /// Flat vertex normals, one per vertex, all +Z in panel space.
    pub normals: Vec<f32>,
    /// Boundary overlay as index pairs into `vertices`.
    pub edge_indices: Vec<u32>,
}

impl PanelMesh {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            edge_indices: Vec::new(),
        }
    }

    fn push_vertex(&mut self, x: f64, y: f64) {
        self.vertices.push(x as f32);
        self.vertices.push(y as f32);
        self.vertices.push(0.0);
        self.normals.push(0.0);
        self.normals.push(0.0);
        self.normals.push(1.0);
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    fn push_edge(&mut self, a: u32, b: u32) {
        self.edge_indices.push(a);
        self.edge_indices.push(b);
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of boundary overlay segments.
    pub fn num_edges(&self) -> usize {
        self.edge_indices.len() / 2
    }
}

/// A rigid planar panel: outline descriptor plus tessellated mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// The parametric outline.
    pub shape: PanelShape,
    /// The tessellated mesh in panel-local space.
    pub mesh: PanelMesh,
}

/// Build a rectangle panel of `width` x `height`, centered at the origin.
pub fn rectangle(width: f64, height: f64) -> Panel {
    let mut mesh = PanelMesh::new();
    let (hw, hh) = (width / 2.0, height / 2.0);
    mesh.push_vertex(-hw, -hh);
    mesh.push_vertex(hw, -hh);
    mesh.push_vertex(hw, hh);
    mesh.push_vertex(-hw, hh);
    mesh.push_triangle(0, 1, 2);
    mesh.push_triangle(0, 2, 3);
    for i in 0..4 {
        mesh.push_edge(i, (i + 1) % 4);
    }
    Panel {
        shape: PanelShape::Rectangle { width, height },
        mesh,
    }
}

/// Build a circle panel of the given radius, centered at the origin.
///
/// `segments` is clamped to at least 3. The mesh is a triangle fan from
/// the center; the overlay traces the rim only.
pub fn circle(radius: f64, segments: u32) -> Panel {
    let n = segments.max(3);
    let mut mesh = PanelMesh::new();
    mesh.push_vertex(0.0, 0.0);
    for i in 0..n {
        let a = std::f64::consts::TAU * (i as f64) / (n as f64);
        mesh.push_vertex(radius * a.cos(), radius * a.sin());
    }
    for i in 0..n {
        let rim = 1 + i;
        let next = 1 + (i + 1) % n;
        mesh.push_triangle(0, rim, next);
        mesh.push_edge(rim, next);
    }
    Panel {
        shape: PanelShape::Circle { radius },
        mesh,
    }
}

/// Build an isosceles triangle panel.
///
/// Local origin convention: the base edge is centered on the origin
/// along X, the apex sits at `(0, height)`.
pub fn isosceles_triangle(base: f64, height: f64) -> Panel {
    let mut mesh = PanelMesh::new();
    mesh.push_vertex(-base / 2.0, 0.0);
    mesh.push_vertex(base / 2.0, 0.0);
    mesh.push_vertex(0.0, height);
    mesh.push_triangle(0, 1, 2);
    for i in 0..3 {
        mesh.push_edge(i, (i + 1) % 3);
    }
    Panel {
        shape: PanelShape::IsoscelesTriangle { base, height },
        mesh,
    }
}

/// Build a circular sector panel.
///
/// Local origin convention: the apex sits at the origin and the sector
/// opens symmetrically about +Y. `segments` (clamped to at least 1)
/// subdivides the arc; the overlay traces radius, arc, radius.
pub fn sector(radius: f64, angle: f64, segments: u32) -> Panel {
    let n = segments.max(1);
    let mut mesh = PanelMesh::new();
    mesh.push_vertex(0.0, 0.0);
    let start = FRAC_PI_2 + angle / 2.0;
    for i in 0..=n {
        let a = start - angle * (i as f64) / (n as f64);
        mesh.push_vertex(radius * a.cos(), radius * a.sin());
    }
    for i in 0..n {
        mesh.push_triangle(0, 1 + i, 2 + i);
        mesh.push_edge(1 + i, 2 + i);
    }
    mesh.push_edge(0, 1);
    mesh.push_edge(n + 1, 0);
    Panel {
        shape: PanelShape::Sector { radius, angle },
        mesh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(panel: &Panel) {
        let mesh = &panel.mesh;
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        assert_eq!(mesh.vertices.len() % 3, 0);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_eq!(mesh.edge_indices.len() % 2, 0);
        let n = mesh.num_vertices() as u32;
        for &i in mesh.indices.iter().chain(mesh.edge_indices.iter()) {
            assert!(i < n, "index {} out of range {}", i, n);
        }
        // Planar with +Z normals throughout.
        for v in mesh.normals.chunks(3) {
            assert_eq!(v, &[0.0f32, 0.0, 1.0][..]);
        }
        for v in mesh.vertices.chunks(3) {
            assert_eq!(v[2], 0.0);
        }
    }

    #[test]
    fn test_rectangle_counts() {
        let panel = rectangle(4.0, 2.0);
        assert_well_formed(&panel);
        assert_eq!(panel.mesh.num_vertices(), 4);
        assert_eq!(panel.mesh.num_triangles(), 2);
        assert_eq!(panel.mesh.num_edges(), 4);
    }

    #[test]
    fn test_rectangle_centered() {
        let panel = rectangle(4.0, 2.0);
        let xs: Vec<f32> = panel.mesh.vertices.chunks(3).map(|v| v[0]).collect();
        let ys: Vec<f32> = panel.mesh.vertices.chunks(3).map(|v| v[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -2.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 1.0);
    }

    #[test]
    fn test_circle_counts() {
        let panel = circle(5.0, 24);
        assert_well_formed(&panel);
        assert_eq!(panel.mesh.num_vertices(), 25);
        assert_eq!(panel.mesh.num_triangles(), 24);
        // Overlay covers the rim only, not the fan spokes.
        assert_eq!(panel.mesh.num_edges(), 24);
    }

    #[test]
    fn test_circle_segment_clamp() {
        let panel = circle(1.0, 0);
        assert_eq!(panel.mesh.num_triangles(), 3);
    }

    #[test]
    fn test_circle_rim_radius() {
        let panel = circle(5.0, 16);
        for v in panel.mesh.vertices.chunks(3).skip(1) {
            let r = (v[0] as f64).hypot(v[1] as f64);
            assert!((r - 5.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_triangle_origin_convention() {
        let panel = isosceles_triangle(8.0, 10.77);
        assert_well_formed(&panel);
        assert_eq!(panel.mesh.num_vertices(), 3);
        let v = &panel.mesh.vertices;
        // Base centered on the origin, apex on +Y.
        assert_eq!(v[0], -4.0);
        assert_eq!(v[1], 0.0);
        assert_eq!(v[3], 4.0);
        assert_eq!(v[6], 0.0);
        assert!((v[7] as f64 - 10.77).abs() < 1e-6);
    }

    #[test]
    fn test_sector_counts_and_symmetry() {
        let panel = sector(10.0, 1.0, 8);
        assert_well_formed(&panel);
        assert_eq!(panel.mesh.num_vertices(), 10);
        assert_eq!(panel.mesh.num_triangles(), 8);
        // radius + 8 arc segments + radius
        assert_eq!(panel.mesh.num_edges(), 10);
        // Opens symmetrically about +Y: first and last arc vertices
        // mirror in X and share Y.
        let v = &panel.mesh.vertices;
        let first = (v[3], v[4]);
        let last = (v[27], v[28]);
        assert!((first.0 + last.0).abs() < 1e-6);
        assert!((first.1 - last.1).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dimensions_do_not_panic() {
        for panel in [
            rectangle(0.0, 0.0),
            circle(0.0, 12),
            isosceles_triangle(0.0, 0.0),
            sector(0.0, 0.0, 4),
        ] {
            assert_well_formed(&panel);
            assert!(panel.mesh.num_vertices() > 0);
        }
    }

    #[test]
    fn test_shape_serde_tagged() {
        let shape = PanelShape::Sector {
            radius: 11.18,
            angle: 2.81,
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains(r#""type":"Sector""#));
        let restored: PanelShape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, restored);
    }
}

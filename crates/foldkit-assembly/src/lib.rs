#![warn(missing_docs)]

//! Articulated panel trees for the foldkit hinge engine.
//!
//! An [`Assembly`] is the full hinge tree for one solid instance: an
//! arena of panel nodes, each holding a rigid planar panel, a static
//! net-layout frame, and (except for the root) the [`Pivot`] hinging it
//! to its parent. Nodes are addressed by index keys rather than owning
//! references, so replacing a tree is drop-and-rebuild with no aliasing
//! to untangle.
//!
//! Assemblies are built by the per-kind functions in [`builders`],
//! posed by an external controller writing pivot rotations, and
//! flattened into world-space panel placements by [`Assembly::world_poses`]
//! each frame.

pub mod builders;
pub mod params;

pub use builders::build;
pub use params::{ParamError, ParamSpec, ParameterSet, SegmentParams, ShapeKind};

use foldkit_math::{Axis, Point3, Transform, Vec3};
use foldkit_panel::Panel;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena key addressing one panel node of an [`Assembly`].
    pub struct PanelId;
}

/// A hinge joint connecting a panel to its parent panel.
///
/// `attachment` and `axis` live in the parent panel's local (mesh)
/// frame; the axis runs along the shared fold edge. Angles are signed
/// radians — opposite edges of a base fold in opposite rotational
/// senses about their unsigned principal axes, so the sign carries the
/// fold direction while the magnitude carries the angle law.
#[derive(Debug, Clone)]
pub struct Pivot {
    /// Hinge position in the parent panel's local frame.
    pub attachment: Vec3,
    /// Principal rotation axis, in the parent panel's local frame.
    pub axis: Axis,
    /// Rotation at fold value 0 (closed solid).
    pub closed_angle: f64,
    /// Rotation at fold value 1 (flat net).
    pub open_angle: f64,
}

/// Whole-assembly rotation applied above the root panel.
///
/// Only the prism uses this: the closed solid stands upright while the
/// open net lies flat, interpolated by the same angle law as any pivot.
#[derive(Debug, Clone, Copy)]
pub struct RootPose {
    /// Principal rotation axis.
    pub axis: Axis,
    /// Rotation at fold value 0.
    pub closed_angle: f64,
    /// Rotation at fold value 1.
    pub open_angle: f64,
}

/// One node of the panel tree.
#[derive(Debug, Clone)]
pub struct PanelNode {
    /// Stable name for hosts and tests ("base", "strip7", "cap+x", ...).
    pub name: String,
    /// The rigid panel carried by this node.
    pub panel: Panel,
    /// Parent node, `None` for the root.
    pub parent: Option<PanelId>,
    /// Child nodes, in attachment order.
    pub children: Vec<PanelId>,
    /// Hinge to the parent, `None` for the root.
    pub pivot: Option<Pivot>,
    /// Static local placement of the panel mesh behind the hinge:
    /// net-layout offset and in-plane orientation.
    pub frame: Transform,
    /// Current hinge rotation in radians; written by the fold
    /// controller, starts at the closed angle.
    pub rotation: f64,
}

/// World placement of one panel, produced by [`Assembly::world_poses`].
#[derive(Debug, Clone)]
pub struct PanelPose {
    /// The posed node.
    pub id: PanelId,
    /// Panel-local-to-world transform.
    pub world: Transform,
}

/// The full hinge tree for one shape instance.
///
/// Strict ownership tree: every node except the root has exactly one
/// parent, and the arena is discarded wholesale when the shape or its
/// parameters change. Exactly one assembly is active in a scene at a
/// time; that exclusivity is the scene composer's concern, not this
/// type's.
#[derive(Debug, Clone)]
pub struct Assembly {
    kind: ShapeKind,
    nodes: SlotMap<PanelId, PanelNode>,
    root: PanelId,
    /// Whole-assembly rotation, if this topology carries one.
    pub root_pose: Option<RootPose>,
    /// Current whole-assembly rotation in radians.
    pub root_rotation: f64,
}

impl Assembly {
    /// Start a tree from its root panel.
    pub(crate) fn new(kind: ShapeKind, name: &str, panel: Panel, frame: Transform) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(PanelNode {
            name: name.to_string(),
            panel,
            parent: None,
            children: Vec::new(),
            pivot: None,
            frame,
            rotation: 0.0,
        });
        Self {
            kind,
            nodes,
            root,
            root_pose: None,
            root_rotation: 0.0,
        }
    }

    /// Attach a panel to `parent` through `pivot`.
    ///
    /// The new node starts posed at the pivot's closed angle, so a
    /// freshly built assembly reads as the solid until a controller
    /// poses it otherwise.
    pub(crate) fn attach(
        &mut self,
        parent: PanelId,
        name: &str,
        panel: Panel,
        pivot: Pivot,
        frame: Transform,
    ) -> PanelId {
        let rotation = pivot.closed_angle;
        let id = self.nodes.insert(PanelNode {
            name: name.to_string(),
            panel,
            parent: Some(parent),
            children: Vec::new(),
            pivot: Some(pivot),
            frame,
            rotation,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The shape kind this tree was built for.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The root node key.
    pub fn root(&self) -> PanelId {
        self.root
    }

    /// Borrow one node.
    pub fn node(&self, id: PanelId) -> Option<&PanelNode> {
        self.nodes.get(id)
    }

    /// Iterate all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (PanelId, &PanelNode)> {
        self.nodes.iter()
    }

    /// Iterate all nodes mutably — the fold controller's write path.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut PanelNode> {
        self.nodes.values_mut()
    }

    /// Number of panels in the tree.
    pub fn panel_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of pivots in the tree (the root pose is not a pivot).
    pub fn pivot_count(&self) -> usize {
        self.nodes.values().filter(|n| n.pivot.is_some()).count()
    }

    /// Find a node by name.
    pub fn find(&self, name: &str) -> Option<PanelId> {
        self.nodes
            .iter()
            .find(|(_, n)| n.name == name)
            .map(|(id, _)| id)
    }

    /// The whole-assembly transform above the root panel.
    pub fn root_transform(&self) -> Transform {
        match self.root_pose {
            Some(pose) => Transform::rotation(pose.axis, self.root_rotation),
            None => Transform::identity(),
        }
    }

    /// Flatten the tree into world placements at its current rotations.
    ///
    /// Pure read: the placement of each panel is
    /// `parent_world · T(attachment) · R(axis, rotation) · frame`,
    /// with the root under [`root_transform`](Self::root_transform).
    pub fn world_poses(&self) -> Vec<PanelPose> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let root_world = self.root_transform().compose(&self.nodes[self.root].frame);
        let mut stack = vec![(self.root, root_world)];
        while let Some((id, world)) = stack.pop() {
            for &child_id in &self.nodes[id].children {
                let child = &self.nodes[child_id];
                let mut local = child.frame.clone();
                if let Some(pivot) = &child.pivot {
                    local = Transform::translation_vec(&pivot.attachment)
                        .compose(&Transform::rotation(pivot.axis, child.rotation))
                        .compose(&child.frame);
                }
                stack.push((child_id, world.compose(&local)));
            }
            out.push(PanelPose { id, world });
        }
        out
    }

    /// Axis-aligned bounds of every posed panel vertex, or `None` for
    /// an assembly whose panels have no vertices.
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        let mut any = false;
        for pose in self.world_poses() {
            let node = &self.nodes[pose.id];
            for v in node.panel.mesh.vertices.chunks(3) {
                let p = pose
                    .world
                    .apply_point(&Point3::new(v[0] as f64, v[1] as f64, v[2] as f64));
                min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
                max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
                any = true;
            }
        }
        any.then_some((min, max))
    }
}

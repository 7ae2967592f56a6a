#![warn(missing_docs)]

//! Fold control for foldkit assemblies.
//!
//! One scalar in [0,1] drives every hinge: 0 poses the closed solid,
//! 1 the flat net, and everything between is a linear interpolation of
//! each pivot between its closed and open angles. The controller owns
//! the current value; it holds no reference to any assembly, so the
//! scene layer can rebuild trees freely and re-apply the value to
//! whatever is active.

use foldkit_assembly::Assembly;
use foldkit_math::lerp;

/// Owner of the process-wide fold value.
///
/// A new controller starts at 0 (closed solid), matching the pose a
/// freshly built assembly carries.
#[derive(Debug, Clone)]
pub struct FoldController {
    fold: f64,
}

impl Default for FoldController {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldController {
    /// Controller at fold 0.
    pub fn new() -> Self {
        Self { fold: 0.0 }
    }

    /// The current fold value.
    pub fn fold(&self) -> f64 {
        self.fold
    }

    /// Record a new fold value without touching any assembly.
    ///
    /// Out-of-range input is clamped silently — this is a continuous
    /// control, not a validated command. Used directly when no
    /// assembly is active yet; the value still takes effect on the
    /// next [`apply_to`](Self::apply_to).
    pub fn set_target(&mut self, value: f64) {
        self.fold = value.clamp(0.0, 1.0);
    }

    /// Clamp-and-store `value`, then pose `assembly` at it.
    pub fn set_fold(&mut self, assembly: &mut Assembly, value: f64) {
        self.set_target(value);
        self.apply_to(assembly);
    }

    /// Pose `assembly` at the current fold value.
    ///
    /// Walks every pivot and sets its rotation to
    /// `lerp(closed, open, fold)`, then poses the whole-assembly
    /// rotation by the same law. Idempotent with no other side
    /// effects. Must be called on every assembly swap so the new tree
    /// never renders at a stale fold.
    pub fn apply_to(&self, assembly: &mut Assembly) {
        let v = self.fold;
        for node in assembly.nodes_mut() {
            if let Some(pivot) = &node.pivot {
                node.rotation = lerp(pivot.closed_angle, pivot.open_angle, v);
            }
        }
        let pose = assembly.root_pose;
        assembly.root_rotation = match pose {
            Some(pose) => lerp(pose.closed_angle, pose.open_angle, v),
            None => 0.0,
        };
    }
}

#![warn(missing_docs)]

//! foldkit — parametric solids that unfold into their nets.
//!
//! Six solids (cube, box, cylinder, square pyramid, cone, triangular
//! prism) each build into an articulated tree of rigid panels joined
//! by hinge pivots. One scalar fold value in [0,1] morphs the tree
//! between the closed solid (0) and its flat net (1).
//!
//! # Example
//!
//! ```rust
//! use foldkit::{default_assembly, FoldController, ShapeKind};
//!
//! let mut assembly = default_assembly(ShapeKind::Pyramid);
//! let mut controller = FoldController::new();
//! controller.set_fold(&mut assembly, 0.5);
//! for pose in assembly.world_poses() {
//!     // hand pose.world and the panel mesh to the renderer
//!     let _ = pose.world;
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use foldkit_assembly::builders::{
    box_assembly, build, cone_assembly, cube_assembly, cylinder_assembly, prism_assembly,
    pyramid_assembly,
};
pub use foldkit_assembly::{
    Assembly, PanelId, PanelNode, PanelPose, ParamError, ParamSpec, ParameterSet, Pivot, RootPose,
    SegmentParams, ShapeKind,
};
pub use foldkit_fold::FoldController;
pub use foldkit_math::{lerp, Axis, Point3, Tolerance, Transform, Vec3};
pub use foldkit_panel::{
    circle, isosceles_triangle, rectangle, sector, Panel, PanelMesh, PanelShape,
};
pub use foldkit_scene::{RenderSurface, SceneComposer, SceneHost, ViewCamera};

/// Build `kind` with schema-default dimensions and default segment
/// quality.
pub fn default_assembly(kind: ShapeKind) -> Assembly {
    build(kind, &ParameterSet::new(), &SegmentParams::default())
}

/// A serializable shape description: kind plus dimension overrides.
///
/// This is the only thing front-ends persist — the assembly tree
/// itself is transient and rebuilt from the description on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescription {
    /// Which solid to build.
    pub kind: ShapeKind,
    /// Dimension overrides; absent names use schema defaults.
    #[serde(default)]
    pub params: ParameterSet,
}

impl ShapeDescription {
    /// Description of `kind` with schema-default dimensions.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            params: ParameterSet::new(),
        }
    }

    /// Build the described assembly.
    pub fn build(&self, segments: &SegmentParams) -> Assembly {
        build(self.kind, &self.params, segments)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Errors from quality preset loading.
#[derive(Error, Debug)]
pub enum PresetError {
    /// The preset text is not valid TOML for the expected table.
    #[error("invalid quality preset: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct QualityPreset {
    #[serde(default)]
    segments: SegmentParams,
}

/// Parse curved-surface segment counts from a TOML preset.
///
/// ```toml
/// [segments]
/// cylinder = 48
/// cone = 48
/// ```
///
/// Missing keys (or a missing table) fall back to the defaults.
pub fn segment_preset_from_toml(text: &str) -> Result<SegmentParams, PresetError> {
    let preset: QualityPreset = toml::from_str(text)?;
    Ok(preset.segments)
}

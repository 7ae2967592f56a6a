//! Shape kinds, parameter schemas, and segment configuration.
//!
//! Every solid is described by a [`ShapeKind`] plus a [`ParameterSet`]
//! of named positive dimensions. The schema (names, bounds, defaults)
//! is fixed per kind; validation and clamping are caller-side concerns,
//! builders themselves never fail on a parameter set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The closed set of foldable solids.
///
/// Each kind selects exactly one assembly builder and one parameter
/// schema. The set is fixed — topologies are hand-authored, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Cube: six equal square faces.
    Cube,
    /// Rectangular box with three independent dimensions.
    Box,
    /// Cylinder, lateral surface approximated by flat strips.
    Cylinder,
    /// Square pyramid.
    Pyramid,
    /// Cone, lateral surface approximated by a fan of wedges.
    Cone,
    /// Triangular prism.
    Prism,
}

/// Schema entry for one named dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: &'static str,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Default value.
    pub default: f64,
}

const CUBE_PARAMS: &[ParamSpec] = &[ParamSpec {
    name: "side",
    min: 1.0,
    max: 20.0,
    default: 5.0,
}];

const BOX_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "length",
        min: 1.0,
        max: 20.0,
        default: 6.0,
    },
    ParamSpec {
        name: "width",
        min: 1.0,
        max: 20.0,
        default: 4.0,
    },
    ParamSpec {
        name: "height",
        min: 1.0,
        max: 20.0,
        default: 3.0,
    },
];

const CYLINDER_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "radius",
        min: 1.0,
        max: 10.0,
        default: 5.0,
    },
    ParamSpec {
        name: "height",
        min: 1.0,
        max: 20.0,
        default: 10.0,
    },
];

const PYRAMID_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "side",
        min: 1.0,
        max: 16.0,
        default: 8.0,
    },
    ParamSpec {
        name: "height",
        min: 1.0,
        max: 20.0,
        default: 10.0,
    },
];

const CONE_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "radius",
        min: 1.0,
        max: 10.0,
        default: 5.0,
    },
    ParamSpec {
        name: "height",
        min: 1.0,
        max: 20.0,
        default: 10.0,
    },
];

const PRISM_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "base",
        min: 1.0,
        max: 12.0,
        default: 4.0,
    },
    ParamSpec {
        name: "height",
        min: 1.0,
        max: 10.0,
        default: 3.0,
    },
    ParamSpec {
        name: "length",
        min: 2.0,
        max: 20.0,
        default: 8.0,
    },
];

impl ShapeKind {
    /// All shape kinds, in display order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cube,
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Pyramid,
        ShapeKind::Cone,
        ShapeKind::Prism,
    ];

    /// The fixed parameter schema for this kind.
    pub fn schema(&self) -> &'static [ParamSpec] {
        match self {
            ShapeKind::Cube => CUBE_PARAMS,
            ShapeKind::Box => BOX_PARAMS,
            ShapeKind::Cylinder => CYLINDER_PARAMS,
            ShapeKind::Pyramid => PYRAMID_PARAMS,
            ShapeKind::Cone => CONE_PARAMS,
            ShapeKind::Prism => PRISM_PARAMS,
        }
    }

    /// Look up one schema entry by name.
    pub fn spec(&self, name: &str) -> Option<&'static ParamSpec> {
        self.schema().iter().find(|s| s.name == name)
    }

    /// Lowercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Cone => "cone",
            ShapeKind::Prism => "prism",
        }
    }
}

/// Errors surfaced by caller-side parameter validation.
#[derive(Error, Debug)]
pub enum ParamError {
    /// The set names a parameter the kind's schema does not have.
    #[error("unknown parameter `{name}` for {kind:?}")]
    Unknown {
        /// Shape kind whose schema was checked.
        kind: ShapeKind,
        /// The offending parameter name.
        name: String,
    },
    /// A value lies outside its schema bounds.
    #[error("parameter `{name}` = {value} outside [{min}, {max}]")]
    OutOfRange {
        /// The offending parameter name.
        name: String,
        /// The offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// Named dimension values for one shape instance.
///
/// Stored sparsely: any dimension absent from the set resolves to its
/// schema default at build time, so a default-constructed set builds
/// the default solid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    /// Empty set — every dimension resolves to its schema default.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding every schema default for `kind` explicitly.
    pub fn defaults(kind: ShapeKind) -> Self {
        let mut set = Self::new();
        for spec in kind.schema() {
            set.set(spec.name, spec.default);
        }
        set
    }

    /// Set a dimension value.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Raw lookup.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Resolve a dimension against `kind`'s schema: the stored value if
    /// present, else the schema default, else 0.0 for a name the schema
    /// does not know.
    pub fn dim(&self, kind: ShapeKind, name: &str) -> f64 {
        self.get(name)
            .or_else(|| kind.spec(name).map(|s| s.default))
            .unwrap_or(0.0)
    }

    /// A copy with every known dimension clamped into its schema
    /// bounds. Unknown names pass through untouched; [`validate`]
    /// reports them.
    ///
    /// [`validate`]: Self::validate
    pub fn clamped(&self, kind: ShapeKind) -> Self {
        let mut out = self.clone();
        for (name, value) in self.values.iter() {
            if let Some(spec) = kind.spec(name) {
                out.set(name, value.clamp(spec.min, spec.max));
            }
        }
        out
    }

    /// Check every stored value against `kind`'s schema.
    pub fn validate(&self, kind: ShapeKind) -> Result<(), ParamError> {
        for (name, &value) in self.values.iter() {
            let spec = kind.spec(name).ok_or_else(|| ParamError::Unknown {
                kind,
                name: name.clone(),
            })?;
            if value < spec.min || value > spec.max {
                return Err(ParamError::OutOfRange {
                    name: name.clone(),
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }

    /// Number of explicitly stored dimensions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no dimensions are stored explicitly.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate stored `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Segment counts for the curved-surface approximations.
///
/// How finely the cylinder ring and the cone fan subdivide their
/// curved surfaces is a visual-quality/panel-count tradeoff, not a
/// correctness knob; counts are clamped to at least 3 on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentParams {
    /// Strip count for the cylinder's lateral surface.
    #[serde(default = "default_segment_count")]
    pub cylinder: u32,
    /// Wedge count for the cone's lateral surface.
    #[serde(default = "default_segment_count")]
    pub cone: u32,
}

fn default_segment_count() -> u32 {
    24
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            cylinder: default_segment_count(),
            cone: default_segment_count(),
        }
    }
}

impl SegmentParams {
    /// The same count for both curved solids.
    pub fn uniform(count: u32) -> Self {
        Self {
            cylinder: count,
            cone: count,
        }
    }

    /// Effective cylinder strip count (clamped to at least 3).
    pub fn cylinder_segments(&self) -> u32 {
        self.cylinder.max(3)
    }

    /// Effective cone wedge count (clamped to at least 3).
    pub fn cone_segments(&self) -> u32 {
        self.cone.max(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_defaults_within_bounds() {
        for kind in ShapeKind::ALL {
            for spec in kind.schema() {
                assert!(spec.min > 0.0, "{}: bounds must exclude zero", spec.name);
                assert!(spec.min <= spec.default && spec.default <= spec.max);
            }
        }
    }

    #[test]
    fn test_defaults_round_trip() {
        let set = ParameterSet::defaults(ShapeKind::Box);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("length"), Some(6.0));
        assert_eq!(set.dim(ShapeKind::Box, "width"), 4.0);
    }

    #[test]
    fn test_dim_falls_back_to_schema_default() {
        let set = ParameterSet::new();
        assert_eq!(set.dim(ShapeKind::Cube, "side"), 5.0);
        assert_eq!(set.dim(ShapeKind::Cube, "no-such-dim"), 0.0);
    }

    #[test]
    fn test_clamped_respects_bounds() {
        let set = ParameterSet::new()
            .with("side", 1000.0)
            .with("bogus", -3.0);
        let clamped = set.clamped(ShapeKind::Cube);
        assert_eq!(clamped.get("side"), Some(20.0));
        // Unknown names pass through for validate() to flag.
        assert_eq!(clamped.get("bogus"), Some(-3.0));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let set = ParameterSet::new().with("side", 0.0);
        match set.validate(ShapeKind::Cube) {
            Err(ParamError::OutOfRange { name, value, .. }) => {
                assert_eq!(name, "side");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected OutOfRange, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_validate_rejects_unknown() {
        let set = ParameterSet::new().with("radius", 5.0);
        assert!(matches!(
            set.validate(ShapeKind::Cube),
            Err(ParamError::Unknown { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        for kind in ShapeKind::ALL {
            ParameterSet::defaults(kind).validate(kind).unwrap();
        }
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&ShapeKind::Pyramid).unwrap();
        assert_eq!(json, r#""Pyramid""#);
        let restored: ShapeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ShapeKind::Pyramid);
    }

    #[test]
    fn test_parameter_set_serde_transparent() {
        let set = ParameterSet::new().with("radius", 5.0).with("height", 10.0);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"height":10.0,"radius":5.0}"#);
        let restored: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, restored);
    }

    #[test]
    fn test_segment_params_clamp() {
        let segs = SegmentParams::uniform(1);
        assert_eq!(segs.cylinder_segments(), 3);
        assert_eq!(SegmentParams::default().cone_segments(), 24);
    }
}

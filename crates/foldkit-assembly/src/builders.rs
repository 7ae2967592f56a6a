//! Hand-authored hinge assembly builders, one per shape kind.
//!
//! Shared conventions:
//!
//! - The net unfolds in the XY plane and folds rise toward +Z.
//! - A child panel's placement in its parent's mesh frame is
//!   `T(attachment) · R(axis, rotation) · frame`, where `frame` is the
//!   static net-layout placement (offset beyond the fold edge, plus any
//!   in-plane spin pointing the panel outward).
//! - Hinge axes are principal axes of the parent's mesh frame, running
//!   along the shared fold edge; fold direction is the angle's sign.
//! - Box-like faces close at a quarter turn. Apex-converging faces
//!   (pyramid sides, the cone fan tilt, prism wings) close at the slant
//!   angle derived from the shape's own dimensions. Segmented curved
//!   surfaces (cylinder ring, cone fan) close at their angular span
//!   divided evenly over the segment hinges.
//!
//! Builders are deterministic pure functions and always succeed for
//! positive dimensions; zero dimensions degrade to zero-area panels.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use foldkit_math::{Axis, Transform, Vec3};
use foldkit_panel::{circle, isosceles_triangle, rectangle, sector};

use crate::params::{ParameterSet, SegmentParams, ShapeKind};
use crate::{Assembly, Pivot, RootPose};

/// Build the assembly for `kind`, resolving dimensions against the
/// kind's schema (missing names fall back to schema defaults).
pub fn build(kind: ShapeKind, params: &ParameterSet, segments: &SegmentParams) -> Assembly {
    match kind {
        ShapeKind::Cube => cube_assembly(params.dim(kind, "side")),
        ShapeKind::Box => box_assembly(
            params.dim(kind, "length"),
            params.dim(kind, "width"),
            params.dim(kind, "height"),
        ),
        ShapeKind::Cylinder => cylinder_assembly(
            params.dim(kind, "radius"),
            params.dim(kind, "height"),
            segments.cylinder_segments(),
        ),
        ShapeKind::Pyramid => {
            pyramid_assembly(params.dim(kind, "side"), params.dim(kind, "height"))
        }
        ShapeKind::Cone => cone_assembly(
            params.dim(kind, "radius"),
            params.dim(kind, "height"),
            segments.cone_segments(),
        ),
        ShapeKind::Prism => prism_assembly(
            params.dim(kind, "base"),
            params.dim(kind, "height"),
            params.dim(kind, "length"),
        ),
    }
}

/// Cube of the given side: base, four sides, and a lid chained off the
/// +Y side. Five hinges, each a quarter turn when closed.
pub fn cube_assembly(side: f64) -> Assembly {
    let s = side;
    let mut asm = Assembly::new(
        ShapeKind::Cube,
        "base",
        rectangle(s, s),
        Transform::identity(),
    );
    let base = asm.root();

    // (name, attachment, axis, fold sign); the panel offset beyond the
    // edge equals the attachment for a square side.
    let sides = [
        ("side+x", Vec3::new(s / 2.0, 0.0, 0.0), Axis::Y, -1.0),
        ("side-x", Vec3::new(-s / 2.0, 0.0, 0.0), Axis::Y, 1.0),
        ("side+y", Vec3::new(0.0, s / 2.0, 0.0), Axis::X, 1.0),
        ("side-y", Vec3::new(0.0, -s / 2.0, 0.0), Axis::X, -1.0),
    ];
    let mut lid_parent = base;
    for (name, attachment, axis, sign) in sides {
        let id = asm.attach(
            base,
            name,
            rectangle(s, s),
            Pivot {
                attachment,
                axis,
                closed_angle: sign * FRAC_PI_2,
                open_angle: 0.0,
            },
            Transform::translation_vec(&attachment),
        );
        if name == "side+y" {
            lid_parent = id;
        }
    }

    // Lid folds over at the far edge of the +Y side, same quarter-turn
    // sense as its parent.
    asm.attach(
        lid_parent,
        "top",
        rectangle(s, s),
        Pivot {
            attachment: Vec3::new(0.0, s / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(0.0, s / 2.0, 0.0),
    );
    asm
}

/// Rectangular box `length x width x height`: the cube topology with
/// asymmetric panel sizes. The lid chains off the back (+Y) panel.
pub fn box_assembly(length: f64, width: f64, height: f64) -> Assembly {
    let (p, l, t) = (length, width, height);
    let mut asm = Assembly::new(
        ShapeKind::Box,
        "base",
        rectangle(p, l),
        Transform::identity(),
    );
    let base = asm.root();

    let back = asm.attach(
        base,
        "back",
        rectangle(p, t),
        Pivot {
            attachment: Vec3::new(0.0, l / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(0.0, t / 2.0, 0.0),
    );
    asm.attach(
        base,
        "front",
        rectangle(p, t),
        Pivot {
            attachment: Vec3::new(0.0, -l / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: -FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(0.0, -t / 2.0, 0.0),
    );
    asm.attach(
        base,
        "right",
        rectangle(t, l),
        Pivot {
            attachment: Vec3::new(p / 2.0, 0.0, 0.0),
            axis: Axis::Y,
            closed_angle: -FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(t / 2.0, 0.0, 0.0),
    );
    asm.attach(
        base,
        "left",
        rectangle(t, l),
        Pivot {
            attachment: Vec3::new(-p / 2.0, 0.0, 0.0),
            axis: Axis::Y,
            closed_angle: FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(-t / 2.0, 0.0, 0.0),
    );
    asm.attach(
        back,
        "top",
        rectangle(p, l),
        Pivot {
            attachment: Vec3::new(0.0, t / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(0.0, l / 2.0, 0.0),
    );
    asm
}

/// Square pyramid: base plus four triangular faces hinged at the base
/// edges. Faces close at the slant angle `atan2(height, side/2)` — the
/// apex-converging law, not a fixed quarter turn.
pub fn pyramid_assembly(side: f64, height: f64) -> Assembly {
    let s = side;
    let slant = height.hypot(s / 2.0);
    let tilt = height.atan2(s / 2.0);
    let mut asm = Assembly::new(
        ShapeKind::Pyramid,
        "base",
        rectangle(s, s),
        Transform::identity(),
    );
    let base = asm.root();

    // (name, attachment, axis, fold sign, in-plane spin pointing the
    // face outward)
    let faces = [
        ("face+y", Vec3::new(0.0, s / 2.0, 0.0), Axis::X, 1.0, 0.0),
        ("face-y", Vec3::new(0.0, -s / 2.0, 0.0), Axis::X, -1.0, PI),
        (
            "face+x",
            Vec3::new(s / 2.0, 0.0, 0.0),
            Axis::Y,
            -1.0,
            -FRAC_PI_2,
        ),
        (
            "face-x",
            Vec3::new(-s / 2.0, 0.0, 0.0),
            Axis::Y,
            1.0,
            FRAC_PI_2,
        ),
    ];
    for (name, attachment, axis, sign, spin) in faces {
        asm.attach(
            base,
            name,
            isosceles_triangle(s, slant),
            Pivot {
                attachment,
                axis,
                closed_angle: sign * tilt,
                open_angle: 0.0,
            },
            Transform::rotation_z(spin),
        );
    }
    asm
}

/// Cylinder: the lateral surface as `segments` flat strips chained into
/// a ring, plus two end circles hinged to the middle strip.
///
/// Strip width is the chord `2r·sin(pi/N)` so the closed ring meets
/// edge-to-edge: each strip hinge turns the polygon's exterior angle
/// `2pi/N`, and the strip centers sit on the inscribed circle.
pub fn cylinder_assembly(radius: f64, height: f64, segments: u32) -> Assembly {
    let n = segments.max(3) as usize;
    let step = TAU / n as f64;
    let w = 2.0 * radius * (PI / n as f64).sin();
    let mid = n / 2;

    let mut asm = Assembly::new(
        ShapeKind::Cylinder,
        &format!("strip{mid}"),
        rectangle(w, height),
        Transform::identity(),
    );
    let root = asm.root();

    // Strips chain outward both ways from the middle segment, curling
    // the same way so the ring closes above the net.
    let mut prev = root;
    for i in mid + 1..n {
        prev = asm.attach(
            prev,
            &format!("strip{i}"),
            rectangle(w, height),
            Pivot {
                attachment: Vec3::new(w / 2.0, 0.0, 0.0),
                axis: Axis::Y,
                closed_angle: -step,
                open_angle: 0.0,
            },
            Transform::translation(w / 2.0, 0.0, 0.0),
        );
    }
    let mut prev = root;
    for i in (0..mid).rev() {
        prev = asm.attach(
            prev,
            &format!("strip{i}"),
            rectangle(w, height),
            Pivot {
                attachment: Vec3::new(-w / 2.0, 0.0, 0.0),
                axis: Axis::Y,
                closed_angle: step,
                open_angle: 0.0,
            },
            Transform::translation(-w / 2.0, 0.0, 0.0),
        );
    }

    // End circles hang off the middle strip's long edges and fold a
    // quarter turn to cap the ring.
    asm.attach(
        root,
        "top",
        circle(radius, segments),
        Pivot {
            attachment: Vec3::new(0.0, height / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(0.0, radius, 0.0),
    );
    asm.attach(
        root,
        "bottom",
        circle(radius, segments),
        Pivot {
            attachment: Vec3::new(0.0, -height / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: -FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::translation(0.0, -radius, 0.0),
    );
    asm
}

/// Cone: a static base circle plus a fan of `segments` wedges sharing
/// one apex.
///
/// The lateral surface develops into a sector of radius `slant` and
/// angle `2pi*r/slant`; each wedge covers an equal share of it. The
/// first wedge carries the radial tilt hinge for the whole fan (closed
/// at `atan2(r, height)`); every following wedge hinges off its
/// predecessor about the apex-to-rim direction, closed at the sector
/// angle's per-wedge share.
pub fn cone_assembly(radius: f64, height: f64, segments: u32) -> Assembly {
    let n = segments.max(3);
    let slant = radius.hypot(height);
    let sector_angle = if slant > 0.0 { TAU * radius / slant } else { 0.0 };
    let step = sector_angle / n as f64;
    let tilt = radius.atan2(height);

    let mut asm = Assembly::new(
        ShapeKind::Cone,
        "base",
        circle(radius, n),
        Transform::identity(),
    );
    let root = asm.root();

    // Wedges are one-segment sectors: apex at the local origin, so the
    // whole fan shares the apex sitting on the base circle's rim.
    let mut prev = asm.attach(
        root,
        "wedge0",
        sector(slant, step, 1),
        Pivot {
            attachment: Vec3::new(0.0, radius, 0.0),
            axis: Axis::X,
            closed_angle: tilt,
            open_angle: 0.0,
        },
        Transform::identity(),
    );
    for i in 1..n {
        prev = asm.attach(
            prev,
            &format!("wedge{i}"),
            sector(slant, step, 1),
            Pivot {
                attachment: Vec3::zeros(),
                axis: Axis::Y,
                closed_angle: step,
                open_angle: 0.0,
            },
            // Static spread: each wedge occupies the next share of the
            // developed sector, clockwise from its predecessor.
            Transform::rotation_z(-step),
        );
    }
    asm
}

/// Triangular prism: rectangular base, two roof wings closing at the
/// slant angle `atan2(height, base/2)`, two triangular end caps closing
/// at a quarter turn, and a whole-assembly pose that stands the closed
/// prism upright.
pub fn prism_assembly(base: f64, height: f64, length: f64) -> Assembly {
    let wing_w = height.hypot(base / 2.0);
    let tilt = height.atan2(base / 2.0);
    let mut asm = Assembly::new(
        ShapeKind::Prism,
        "base",
        rectangle(length, base),
        Transform::identity(),
    );
    let root = asm.root();

    asm.attach(
        root,
        "wing+y",
        rectangle(length, wing_w),
        Pivot {
            attachment: Vec3::new(0.0, base / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: tilt,
            open_angle: 0.0,
        },
        Transform::translation(0.0, wing_w / 2.0, 0.0),
    );
    asm.attach(
        root,
        "wing-y",
        rectangle(length, wing_w),
        Pivot {
            attachment: Vec3::new(0.0, -base / 2.0, 0.0),
            axis: Axis::X,
            closed_angle: -tilt,
            open_angle: 0.0,
        },
        Transform::translation(0.0, -wing_w / 2.0, 0.0),
    );
    asm.attach(
        root,
        "cap+x",
        isosceles_triangle(base, height),
        Pivot {
            attachment: Vec3::new(length / 2.0, 0.0, 0.0),
            axis: Axis::Y,
            closed_angle: -FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::rotation_z(-FRAC_PI_2),
    );
    asm.attach(
        root,
        "cap-x",
        isosceles_triangle(base, height),
        Pivot {
            attachment: Vec3::new(-length / 2.0, 0.0, 0.0),
            axis: Axis::Y,
            closed_angle: FRAC_PI_2,
            open_angle: 0.0,
        },
        Transform::rotation_z(FRAC_PI_2),
    );

    asm.root_pose = Some(RootPose {
        axis: Axis::X,
        closed_angle: FRAC_PI_2,
        open_angle: 0.0,
    });
    asm.root_rotation = FRAC_PI_2;
    asm
}

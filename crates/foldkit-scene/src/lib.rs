#![warn(missing_docs)]

//! Scene composition for foldkit.
//!
//! [`SceneComposer`] owns the single active [`Assembly`] and the fold
//! controller, and mediates between the pure geometry kernel and an
//! environment the caller provides: a drawable surface, a camera, and
//! a host that attaches renderable trees to the visible scene. All
//! three hooks are optional — without them, shape and fold operations
//! still update internal state and simply skip the rendering calls.
//!
//! The composer owns no animation loop. Driving the fold continuously
//! (easing, timers) is the caller's concern, layered on top by calling
//! [`SceneComposer::set_fold`] repeatedly; the composer stays a pure
//! function of its last-set inputs.

use foldkit_assembly::{build, Assembly, PanelPose, ParameterSet, SegmentParams, ShapeKind};
use foldkit_fold::FoldController;
use foldkit_math::{Point3, Vec3};
use tracing::debug;

/// A drawable surface with known pixel dimensions.
///
/// Resize notifications arrive through
/// [`SceneComposer::handle_resize`], not through this trait.
pub trait RenderSurface {
    /// Current pixel dimensions `(width, height)`.
    fn size(&self) -> (u32, u32);
}

/// A look-at camera owned by the environment.
pub trait ViewCamera {
    /// Position the camera at `eye` looking toward `target`.
    fn look_at(&mut self, eye: Point3, target: Point3, up: Vec3);
    /// Update the projection aspect ratio.
    fn set_aspect(&mut self, aspect: f64);
    /// Return to the environment's default view.
    fn reset(&mut self);
}

/// The environment's handle on the visible scene graph.
///
/// `attach` uploads a tree's render resources; `detach` releases the
/// previously attached tree's. The composer guarantees detach-before-
/// attach on every swap, so at most one tree is ever visible.
pub trait SceneHost {
    /// Add a renderable tree to the visible scene.
    fn attach(&mut self, assembly: &Assembly);
    /// Remove the current tree and release its resources.
    fn detach(&mut self);
}

/// Owner of the active assembly and its fold state.
pub struct SceneComposer {
    assembly: Option<Assembly>,
    controller: FoldController,
    segments: SegmentParams,
    host: Option<Box<dyn SceneHost>>,
    camera: Option<Box<dyn ViewCamera>>,
    surface: Option<Box<dyn RenderSurface>>,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComposer {
    /// Composer with no active assembly, default segment quality, and
    /// no environment hooks.
    pub fn new() -> Self {
        Self {
            assembly: None,
            controller: FoldController::new(),
            segments: SegmentParams::default(),
            host: None,
            camera: None,
            surface: None,
        }
    }

    /// Composer using the given curved-surface segment counts.
    pub fn with_segments(segments: SegmentParams) -> Self {
        let mut composer = Self::new();
        composer.segments = segments;
        composer
    }

    /// Install the scene-graph host.
    pub fn set_host(&mut self, host: Box<dyn SceneHost>) {
        self.host = Some(host);
    }

    /// Install the camera.
    pub fn set_camera(&mut self, camera: Box<dyn ViewCamera>) {
        self.camera = Some(camera);
    }

    /// Install the drawable surface.
    pub fn set_surface(&mut self, surface: Box<dyn RenderSurface>) {
        self.surface = Some(surface);
    }

    /// Replace the active assembly with a fresh build of `kind`.
    ///
    /// Build-then-swap: the new tree is fully built and posed at the
    /// current fold value before the old tree is detached, so the
    /// scene never observes a partially mutated or wrongly folded
    /// tree. The old assembly's render resources are released by the
    /// host's `detach` before the new tree attaches.
    pub fn set_shape(&mut self, kind: ShapeKind, params: &ParameterSet) {
        let mut next = build(kind, params, &self.segments);
        self.controller.apply_to(&mut next);
        debug!(
            shape = kind.label(),
            panels = next.panel_count(),
            pivots = next.pivot_count(),
            fold = self.controller.fold(),
            "assembly swap"
        );
        if let Some(host) = &mut self.host {
            if self.assembly.is_some() {
                host.detach();
            }
            host.attach(&next);
        }
        self.assembly = Some(next);
    }

    /// Set the fold value, posing the active assembly if there is one.
    ///
    /// Out-of-range values clamp silently. Without an active assembly
    /// the value is still recorded and takes effect on the next
    /// [`set_shape`](Self::set_shape).
    pub fn set_fold(&mut self, value: f64) {
        match &mut self.assembly {
            Some(assembly) => self.controller.set_fold(assembly, value),
            None => self.controller.set_target(value),
        }
    }

    /// The current fold value.
    pub fn fold(&self) -> f64 {
        self.controller.fold()
    }

    /// The active assembly's shape kind, if any.
    pub fn kind(&self) -> Option<ShapeKind> {
        self.assembly.as_ref().map(|a| a.kind())
    }

    /// Borrow the active assembly.
    pub fn assembly(&self) -> Option<&Assembly> {
        self.assembly.as_ref()
    }

    /// World placements of every panel at the current fold — the
    /// per-frame read path for the external render loop. Empty when no
    /// assembly is active.
    pub fn poses(&self) -> Vec<PanelPose> {
        self.assembly
            .as_ref()
            .map(|a| a.world_poses())
            .unwrap_or_default()
    }

    /// Reset the camera to its default view, then frame the active
    /// assembly from its posed bounding box. No-op without a camera;
    /// plain reset without an assembly.
    pub fn reset_view(&mut self) {
        let Some(camera) = &mut self.camera else {
            return;
        };
        camera.reset();
        if let Some(surface) = &self.surface {
            let (w, h) = surface.size();
            if h > 0 {
                camera.set_aspect(w as f64 / h as f64);
            }
        }
        let Some(bounds) = self.assembly.as_ref().and_then(|a| a.bounding_box()) else {
            return;
        };
        let (min, max) = bounds;
        let target = Point3::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        );
        let radius = ((max - min).norm() / 2.0).max(1.0);
        let eye = target + Vec3::new(1.6, -2.2, 1.4) * radius;
        camera.look_at(eye, target, Vec3::z());
    }

    /// Forward a surface resize to the camera's aspect ratio. No-op
    /// without a camera.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "surface resize");
        if let Some(camera) = &mut self.camera {
            if height > 0 {
                camera.set_aspect(width as f64 / height as f64);
            }
        }
    }
}

impl Drop for SceneComposer {
    fn drop(&mut self) {
        // Release the live tree's render resources with the composer.
        if self.assembly.is_some() {
            if let Some(host) = &mut self.host {
                host.detach();
            }
        }
    }
}

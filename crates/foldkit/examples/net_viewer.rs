//! Headless walkthrough of the fold engine: drive a composer through
//! every solid, sweep the fold, and print what a renderer would see.
//!
//! Run with `cargo run --example net_viewer`.

use anyhow::{Context, Result};
use foldkit::{Assembly, ParameterSet, SceneComposer, SceneHost, ShapeKind};

/// Console stand-in for a real scene graph: logs attach/detach so the
/// swap discipline is visible.
struct ConsoleHost;

impl SceneHost for ConsoleHost {
    fn attach(&mut self, assembly: &Assembly) {
        println!(
            "  [scene] attached {} ({} panels, {} pivots)",
            assembly.kind().label(),
            assembly.panel_count(),
            assembly.pivot_count()
        );
    }
    fn detach(&mut self) {
        println!("  [scene] detached previous tree");
    }
}

fn main() -> Result<()> {
    let mut composer = SceneComposer::new();
    composer.set_host(Box::new(ConsoleHost));

    for kind in ShapeKind::ALL {
        println!("{}:", kind.label());
        composer.set_shape(kind, &ParameterSet::new());
        for fold in [0.0, 0.5, 1.0] {
            composer.set_fold(fold);
            let assembly = composer.assembly().context("no active assembly")?;
            let (min, max) = assembly
                .bounding_box()
                .context("assembly has no geometry")?;
            println!(
                "  fold {:.1}: extent x=[{:6.2}, {:6.2}] y=[{:6.2}, {:6.2}] z=[{:6.2}, {:6.2}]",
                fold, min.x, max.x, min.y, max.y, min.z, max.z
            );
        }
    }
    Ok(())
}

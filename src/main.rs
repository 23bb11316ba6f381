//! Headless demo driver.
//!
//! Builds a synthetic scene of named bounding boxes and drives the camera
//! engine the way a render loop would: issue a move or focus request, then
//! tick once per "frame" until the transition settles. Run with
//! `RUST_LOG=debug` to watch goal changes and convergence.

use std::collections::HashMap;

use flyto::bounds::BoundingBox;
use flyto::controller::{CameraSink, SceneProvider, ViewController};
use flyto::error::FlytoError;
use flyto::framing::FramingPolicy;
use flyto::options::Options;
use glam::Vec3;

/// Named world-space boxes standing in for a scene graph.
struct DemoScene {
    objects: HashMap<String, BoundingBox>,
}

impl DemoScene {
    fn new() -> Self {
        let mut objects = HashMap::new();
        // Unit cube at the origin, like the viewer's placeholder shape.
        let _ = objects.insert(
            "DemoCube".to_owned(),
            BoundingBox {
                min: Vec3::splat(-0.5),
                max: Vec3::splat(0.5),
            },
        );
        let _ = objects.insert(
            "Terrain".to_owned(),
            BoundingBox {
                min: Vec3::new(-200.0, -1.0, -200.0),
                max: Vec3::new(200.0, 1.0, 200.0),
            },
        );
        let _ = objects.insert("Marker".to_owned(), BoundingBox::at_point(Vec3::new(8.0, 0.0, -3.0)));
        Self { objects }
    }
}

impl SceneProvider for DemoScene {
    type Handle = BoundingBox;

    fn find_by_name(&self, name: &str) -> Option<Self::Handle> {
        self.objects.get(name).copied()
    }

    fn world_bounds(&self, handle: &Self::Handle) -> BoundingBox {
        *handle
    }
}

/// Camera stand-in that just remembers the last applied pose.
#[derive(Default)]
struct LoggingCamera {
    position: Vec3,
    target: Vec3,
}

impl CameraSink for LoggingCamera {
    fn apply_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }
}

/// Tick until the transition settles (capped, in case of misconfig).
fn run_to_rest(controller: &mut ViewController, camera: &mut LoggingCamera, label: &str) {
    const MAX_FRAMES: u32 = 1_000;
    for frame in 1..=MAX_FRAMES {
        let _ = controller.tick(camera);
        if !controller.is_animating() {
            log::info!(
                "{label}: settled after {frame} frames at {:?} looking at {:?}",
                camera.position,
                camera.target
            );
            return;
        }
    }
    log::warn!("{label}: still animating after {MAX_FRAMES} frames");
}

fn main() -> Result<(), FlytoError> {
    env_logger::init();

    let options = Options::default();
    let scene = DemoScene::new();
    let mut camera = LoggingCamera::default();
    let mut controller = ViewController::new(&options);

    controller.move_to(Vec3::new(0.0, 5.0, 12.0), None)?;
    run_to_rest(&mut controller, &mut camera, "move_to");

    controller.focus_on(&scene, "DemoCube")?;
    run_to_rest(&mut controller, &mut camera, "focus DemoCube");

    controller.focus_on(&scene, "Terrain")?;
    run_to_rest(&mut controller, &mut camera, "focus Terrain");

    // Radius-scaled clip planes the render side would apply for the
    // terrain framing.
    let radius = scene
        .find_by_name("Terrain")
        .map_or(0.0, |b| b.bounding_sphere().radius);
    let (near, far) = FramingPolicy::clip_planes(radius);
    log::info!("terrain clip planes: near {near:.2} far {far:.2}");

    // Focusing a missing object warns and leaves the camera alone.
    if let Err(e) = controller.focus_on(&scene, "missing") {
        log::info!("focus missing: {e}");
    }

    // A new goal mid-flight preempts the old one.
    controller.focus_on(&scene, "Marker")?;
    for _ in 0..10 {
        let _ = controller.tick(&mut camera);
    }
    controller.move_to(Vec3::new(3.0, 3.0, 3.0), None)?;
    run_to_rest(&mut controller, &mut camera, "preempted move");

    Ok(())
}

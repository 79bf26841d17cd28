//! Falling Spheres Demo
//!
//! Run with: `cargo run --bin falling-spheres`
//!
//! A headless sandbox scene: a row of spheres dropped above a ground
//! plane under gravity, stepped at 60 Hz. Each second of simulated time
//! the world state is printed as one JSON line, so the output can be
//! piped into a plotting tool or diffed between runs.

use glam::Vec3;
use serde::Serialize;

use sandbox_engine::physics::{
    Body, BoundingSphere, Collider, PhysicsEngine, PhysicsError, Plane,
};

const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
const DT: f32 = 1.0 / 60.0;
const SIM_SECONDS: usize = 5;

/// One body's state in a frame dump.
#[derive(Serialize)]
struct BodyState {
    pos: [f32; 3],
    vel: [f32; 3],
}

/// One JSON line of output.
#[derive(Serialize)]
struct FrameDump {
    time: f32,
    contacts: usize,
    bodies: Vec<BodyState>,
}

fn build_scene() -> Result<PhysicsEngine, PhysicsError> {
    let mut engine = PhysicsEngine::new();

    // Static-ish ground plane at y = 0. A huge mass keeps the placeholder
    // velocity-inversion response from visibly launching it.
    let ground = Collider::Plane(Plane::new(Vec3::Y, 0.0));
    engine.add_body(Body::new(ground, 1.0e9)?);

    // A row of unit spheres dropped from increasing heights.
    for i in 0..4 {
        let center = Vec3::new(i as f32 * 3.0, 4.0 + i as f32 * 2.0, 0.0);
        let sphere = Collider::Sphere(BoundingSphere::new(center, 1.0)?);
        engine.add_body(Body::new(sphere, 1.0)?);
    }

    Ok(engine)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = build_scene()?;
    let steps = (SIM_SECONDS as f32 / DT) as usize;

    for step in 0..=steps {
        if step > 0 {
            engine.apply_force(GRAVITY);
        }
        let summary = if step > 0 {
            engine.update(DT)?
        } else {
            Default::default()
        };

        // Dump once per simulated second (and the initial state).
        if step % 60 == 0 {
            let dump = FrameDump {
                time: step as f32 * DT,
                contacts: summary.contacts,
                bodies: engine
                    .bodies()
                    .map(|body| BodyState {
                        pos: body.pos().to_array(),
                        vel: body.vel().to_array(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string(&dump)?);
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // Any engine error means the scene is miswired; stop and surface it.
        eprintln!("simulation aborted: {err}");
        std::process::exit(1);
    }
}

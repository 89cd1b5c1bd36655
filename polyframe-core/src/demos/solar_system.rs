/// A spinning sun with planets, a moon and a rocket in nested orbits
use std::time::Duration;

use nalgebra::Matrix3;

use crate::animation::AnimatedBody;
use crate::canvas::{Canvas, Color};
use crate::error::Result;
use crate::geometry::VertexList;
use crate::renderer::{DrawStats, Renderer};
use crate::scene::{NodeId, SceneGraph};
use crate::shapes::regular_polygon;
use crate::transform::Transform;

use super::Demo;

const WIDTH: usize = 1000;
const HEIGHT: usize = 600;
const CENTER: (f64, f64) = (500.0, 300.0);

const SUN_RADIUS: f64 = 35.0;
const SUN_SPIN: f64 = 0.5;
const SUN_COLOR: Color = Color::rgb(240, 220, 150);

/// Static description of something orbiting the sun or another orbiter
struct Orbit {
    name: &'static str,
    /// Index into `ORBITS` of the body this one circles; `None` for the sun
    around: Option<usize>,
    distance: f64,
    radius: f64,
    sides: usize,
    speed: f64,
    color: Color,
}

const ORBITS: [Orbit; 4] = [
    Orbit {
        name: "venus",
        around: None,
        distance: 100.0,
        radius: 20.0,
        sides: 20,
        speed: 1.5,
        color: Color::rgb(240, 70, 70),
    },
    Orbit {
        name: "earth",
        around: None,
        distance: 200.0,
        radius: 22.0,
        sides: 20,
        speed: 1.0,
        color: Color::rgb(0, 180, 240),
    },
    Orbit {
        name: "moon",
        around: Some(1),
        distance: 50.0,
        radius: 10.0,
        sides: 20,
        speed: 3.0,
        color: Color::rgb(210, 240, 240),
    },
    Orbit {
        name: "rocket",
        around: None,
        distance: 130.0,
        radius: 8.0,
        sides: 6,
        speed: 0.2,
        color: Color::rgb(230, 20, 200),
    },
];

struct Orbiter {
    /// Frame that carries the orbit; children inherit it
    frame: NodeId,
    /// The drawn body, scaled inside its frame
    body_node: NodeId,
    body: AnimatedBody,
    shape: VertexList,
}

pub struct SolarSystem {
    scene: SceneGraph,
    sun_frame: NodeId,
    sun_node: NodeId,
    sun: AnimatedBody,
    sun_shape: VertexList,
    orbiters: Vec<Orbiter>,
}

fn sun_local(spin: f64) -> Matrix3<f64> {
    Transform::translation_matrix(CENTER.0, CENTER.1) * Transform::rotation_matrix(spin)
}

/// Swing out to `distance` at `angle`, then cancel the parent's spin so the
/// body and anything orbiting it do not tumble with the parent
fn orbit_local(angle: f64, distance: f64, parent_spin: f64) -> Matrix3<f64> {
    Transform::rotation_matrix(angle)
        * Transform::translation_matrix(distance, 0.0)
        * Transform::rotation_matrix(-parent_spin)
}

impl SolarSystem {
    pub fn new() -> Result<Self> {
        let mut scene = SceneGraph::new();
        let sun = AnimatedBody::spinning(0.0, SUN_SPIN);
        let sun_frame = scene.add_root("sun-frame", sun_local(sun.angle()));
        let sun_node = scene.add_child(sun_frame, "sun", Transform::scale_matrix(SUN_RADIUS))?;

        let mut orbiters: Vec<Orbiter> = Vec::with_capacity(ORBITS.len());
        for orbit in &ORBITS {
            let parent = match orbit.around {
                Some(index) => orbiters[index].frame,
                None => sun_frame,
            };
            let body = AnimatedBody::spinning(0.0, orbit.speed);
            let frame = scene.add_child(
                parent,
                &format!("{}-frame", orbit.name),
                orbit_local(body.angle(), orbit.distance, 0.0),
            )?;
            let body_node = scene.add_child(frame, orbit.name, Transform::scale_matrix(orbit.radius))?;
            orbiters.push(Orbiter {
                frame,
                body_node,
                body,
                shape: regular_polygon(orbit.sides),
            });
        }

        Ok(Self {
            scene,
            sun_frame,
            sun_node,
            sun,
            sun_shape: regular_polygon(20),
            orbiters,
        })
    }

    fn update_poses(&mut self) -> Result<()> {
        self.scene.set_local(self.sun_frame, sun_local(self.sun.angle()))?;
        for (orbit, orbiter) in ORBITS.iter().zip(&self.orbiters) {
            let parent_spin = match orbit.around {
                Some(index) => self.orbiters[index].body.angle(),
                None => self.sun.angle(),
            };
            let local = orbit_local(orbiter.body.angle(), orbit.distance, parent_spin);
            self.scene.set_local(orbiter.frame, local)?;
        }
        Ok(())
    }
}

impl Demo for SolarSystem {
    fn title(&self) -> &str {
        "Solar System"
    }

    fn canvas_size(&self) -> (usize, usize) {
        (WIDTH, HEIGHT)
    }

    fn background(&self) -> Color {
        Color::BLACK
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(10)
    }

    fn draw(&mut self, canvas: &mut Canvas, renderer: &Renderer) -> Result<DrawStats> {
        self.update_poses()?;

        let sun = self.scene.world(self.sun_node)?;
        let mut stats = renderer.draw_shape(canvas, &self.sun_shape, &sun, SUN_COLOR)?;
        for (orbit, orbiter) in ORBITS.iter().zip(&self.orbiters) {
            let world = self.scene.world(orbiter.body_node)?;
            stats += renderer.draw_shape(canvas, &orbiter.shape, &world, orbit.color)?;
        }
        Ok(stats)
    }

    fn advance(&mut self) {
        self.sun.advance();
        for orbiter in &mut self.orbiters {
            orbiter.body.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn center_of(system: &mut SolarSystem, name: &str) -> Point2<f64> {
        let id = system.scene.find(name).unwrap();
        system.scene.world(id).unwrap().transform_point(&Point2::origin())
    }

    #[test]
    fn test_initial_layout() {
        let mut system = SolarSystem::new().unwrap();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        system.draw(&mut canvas, &Renderer::default()).unwrap();

        assert_eq!(canvas.get(535, 300), Some(SUN_COLOR));
        assert_eq!(canvas.get(722, 300), Some(ORBITS[1].color));
        assert_eq!(canvas.get(760, 300), Some(ORBITS[2].color));
    }

    fn polar(degrees: f64, distance: f64) -> (f64, f64) {
        let radians = crate::transform::deg_to_rad(degrees);
        (distance * radians.cos(), distance * radians.sin())
    }

    #[test]
    fn test_orbit_angle_adds_sun_spin() {
        let mut system = SolarSystem::new().unwrap();
        for _ in 0..90 {
            system.advance();
        }
        system.update_poses().unwrap();
        // Sun has spun 45 degrees and earth has orbited 90 on top of that
        let earth = center_of(&mut system, "earth");
        let (dx, dy) = polar(135.0, 200.0);
        assert!((earth.x - (CENTER.0 + dx)).abs() < 1e-9);
        assert!((earth.y - (CENTER.1 + dy)).abs() < 1e-9);
    }

    #[test]
    fn test_moon_follows_earth() {
        let mut system = SolarSystem::new().unwrap();
        for _ in 0..30 {
            system.advance();
        }
        system.update_poses().unwrap();
        let earth = center_of(&mut system, "earth");
        let moon = center_of(&mut system, "moon");
        // Earth's 30 degrees plus the moon's own 90, the sun's spin cancelled
        let (dx, dy) = polar(120.0, 50.0);
        assert!((moon.x - earth.x - dx).abs() < 1e-9);
        assert!((moon.y - earth.y - dy).abs() < 1e-9);
    }
}

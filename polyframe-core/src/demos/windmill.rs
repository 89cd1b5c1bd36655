/// Five wings turning around the hub of a windmill
use std::time::Duration;

use nalgebra::Matrix3;

use crate::animation::AnimatedBody;
use crate::canvas::{Canvas, Color};
use crate::error::Result;
use crate::geometry::VertexList;
use crate::renderer::{DrawStats, Renderer};
use crate::scene::{NodeId, SceneGraph};
use crate::shapes::rectangle_block;
use crate::transform::Transform;

use super::Demo;

const WIDTH: usize = 1000;
const HEIGHT: usize = 600;

const BODY_HEIGHT: f64 = 200.0;
const BODY_WIDTH: f64 = 70.0;
const WING_HEIGHT: f64 = 120.0;
const WING_WIDTH: f64 = 40.0;
/// Hub sits slightly left of the wing's right edge
const HUB_NUDGE: f64 = 4.0;
const WING_SPEED: f64 = 2.0;

const WING_COLORS: [Color; 5] = [
    Color::rgb(255, 153, 255),
    Color::rgb(183, 150, 255),
    Color::rgb(102, 190, 255),
    Color::rgb(60, 235, 255),
    Color::rgb(102, 190, 255),
];

struct Wing {
    node: NodeId,
    body: AnimatedBody,
    color: Color,
}

pub struct Windmill {
    scene: SceneGraph,
    tower: NodeId,
    wings: Vec<Wing>,
    tower_shape: VertexList,
    wing_shape: VertexList,
}

/// Rotate a wing about the middle of its bottom edge
fn wing_local(degrees: f64) -> Matrix3<f64> {
    Transform::rotation_matrix(degrees) * Transform::translation_matrix(-WING_WIDTH / 2.0, -WING_HEIGHT)
}

impl Windmill {
    pub fn new() -> Result<Self> {
        let mut scene = SceneGraph::new();
        let tower = scene.add_root(
            "tower",
            Transform::translation_matrix(
                WIDTH as f64 / 2.0 - BODY_WIDTH / 2.0,
                HEIGHT as f64 - BODY_HEIGHT - 1.0,
            ),
        );
        let hub_local = Transform::translation_matrix(WING_WIDTH / 2.0 - HUB_NUDGE, 0.0)
            * Transform::translation_matrix(0.0, -WING_HEIGHT)
            * Transform::translation_matrix(WING_WIDTH / 2.0, WING_HEIGHT);
        let hub = scene.add_child(tower, "hub", hub_local)?;

        let spacing = 360.0 / WING_COLORS.len() as f64;
        let mut wings = Vec::with_capacity(WING_COLORS.len());
        for (i, &color) in WING_COLORS.iter().enumerate() {
            let body = AnimatedBody::spinning(i as f64 * spacing, WING_SPEED);
            let node = scene.add_child(hub, &format!("wing{}", i + 1), wing_local(body.angle()))?;
            wings.push(Wing { node, body, color });
        }

        Ok(Self {
            scene,
            tower,
            wings,
            tower_shape: rectangle_block(BODY_HEIGHT, BODY_WIDTH),
            wing_shape: rectangle_block(WING_HEIGHT, WING_WIDTH),
        })
    }
}

impl Demo for Windmill {
    fn title(&self) -> &str {
        "Windmill"
    }

    fn canvas_size(&self) -> (usize, usize) {
        (WIDTH, HEIGHT)
    }

    fn background(&self) -> Color {
        Color::BLACK
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(20)
    }

    fn draw(&mut self, canvas: &mut Canvas, renderer: &Renderer) -> Result<DrawStats> {
        for wing in &self.wings {
            self.scene.set_local(wing.node, wing_local(wing.body.angle()))?;
        }

        let tower = self.scene.world(self.tower)?;
        let mut stats = renderer.draw_shape(canvas, &self.tower_shape, &tower, Color::WHITE)?;
        for wing in &self.wings {
            let world = self.scene.world(wing.node)?;
            stats += renderer.draw_shape(canvas, &self.wing_shape, &world, wing.color)?;
        }
        Ok(stats)
    }

    fn advance(&mut self) {
        for wing in &mut self.wings {
            wing.body.advance();
        }
    }
}

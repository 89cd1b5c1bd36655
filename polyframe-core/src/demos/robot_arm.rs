/// A four-link arm on a fixed base, each joint swinging back and forth
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

const BLOCK_HEIGHT: f64 = 100.0;
const BLOCK_WIDTH: f64 = 30.0;

/// `(limit, velocity)` in degrees for each joint, base outward
const JOINTS: [(f64, f64); 4] = [(15.0, 1.0), (30.0, 2.0), (45.0, 3.0), (60.0, 4.0)];

const LINK_COLORS: [Color; 4] = [
    Color::rgb(255, 153, 255),
    Color::rgb(183, 150, 255),
    Color::rgb(102, 190, 255),
    Color::rgb(60, 235, 255),
];

struct Link {
    node: NodeId,
    joint: AnimatedBody,
    color: Color,
}

pub struct RobotArm {
    scene: SceneGraph,
    base: NodeId,
    links: Vec<Link>,
    block: VertexList,
}

/// Stack a link on top of its parent, turned about the middle of its bottom edge
fn link_local(degrees: f64) -> Matrix3<f64> {
    Transform::translation_matrix(0.0, -BLOCK_HEIGHT)
        * Transform::rotation_about(BLOCK_WIDTH / 2.0, BLOCK_HEIGHT, degrees)
}

impl RobotArm {
    pub fn new() -> Result<Self> {
        let mut scene = SceneGraph::new();
        let base = scene.add_root(
            "base",
            Transform::translation_matrix(WIDTH as f64 / 2.0, HEIGHT as f64 - BLOCK_HEIGHT - 1.0),
        );

        let mut links = Vec::with_capacity(JOINTS.len());
        let mut parent = base;
        for (i, (&(limit, velocity), &color)) in JOINTS.iter().zip(&LINK_COLORS).enumerate() {
            let joint = AnimatedBody::oscillating(velocity, limit);
            let node = scene.add_child(parent, &format!("link{}", i + 1), link_local(joint.angle()))?;
            links.push(Link { node, joint, color });
            parent = node;
        }

        Ok(Self {
            scene,
            base,
            links,
            block: rectangle_block(BLOCK_HEIGHT, BLOCK_WIDTH),
        })
    }

    pub fn joint_angles(&self) -> Vec<f64> {
        self.links.iter().map(|link| link.joint.angle()).collect()
    }
}

impl Demo for RobotArm {
    fn title(&self) -> &str {
        "Robot Arm"
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
        for link in &self.links {
            self.scene.set_local(link.node, link_local(link.joint.angle()))?;
        }

        let base = self.scene.world(self.base)?;
        let mut stats = renderer.draw_shape(canvas, &self.block, &base, Color::WHITE)?;
        for link in &self.links {
            let world = self.scene.world(link.node)?;
            stats += renderer.draw_shape(canvas, &self.block, &world, link.color)?;
        }
        Ok(stats)
    }

    fn advance(&mut self) {
        for link in &mut self.links {
            link.joint.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn test_straight_arm_stacks_blocks() {
        let mut arm = RobotArm::new().unwrap();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        arm.draw(&mut canvas, &Renderer::default()).unwrap();

        // Base spans y 499..=599; each link sits 100 pixels higher
        assert_eq!(canvas.get(500, 599), Some(Color::WHITE));
        assert_eq!(canvas.get(500, 450), Some(LINK_COLORS[0]));
        assert_eq!(canvas.get(500, 350), Some(LINK_COLORS[1]));
        assert_eq!(canvas.get(530, 250), Some(LINK_COLORS[2]));
        assert_eq!(canvas.get(515, 99), Some(LINK_COLORS[3]));
    }

    #[test]
    fn test_joints_respect_limits() {
        let mut arm = RobotArm::new().unwrap();
        for _ in 0..500 {
            arm.advance();
            for (angle, (limit, _)) in arm.joint_angles().iter().zip(JOINTS) {
                assert!(angle.abs() <= limit);
            }
        }
    }

    #[test]
    fn test_tip_inherits_every_joint() {
        let mut arm = RobotArm::new().unwrap();
        for _ in 0..5 {
            arm.advance();
        }
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        arm.draw(&mut canvas, &Renderer::default()).unwrap();

        let tip = arm.scene.find("link4").unwrap();
        let pose = arm.scene.world(tip).unwrap();
        // Top-center of the last block, walked by hand through the chain
        let mut expected = Point2::new(BLOCK_WIDTH / 2.0, 0.0);
        for link in arm.links.iter().rev() {
            expected = link_local(link.joint.angle()).transform_point(&expected);
        }
        let expected = Transform::translation_matrix(500.0, 499.0).transform_point(&expected);
        let actual = pose.transform_point(&Point2::new(BLOCK_WIDTH / 2.0, 0.0));
        assert!((actual - expected).norm() < 1e-9);
        // Cumulative lean is 5 + 10 + 15 + 20 = 50 degrees clockwise
        assert!(actual.x > 515.0);
    }
}

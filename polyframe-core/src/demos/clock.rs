/// Analog clock: a 36-gon face and two hands that tick once a minute
use std::time::Duration;

use nalgebra::Matrix3;

use crate::animation::AnimatedBody;
use crate::canvas::{Canvas, Color};
use crate::error::Result;
use crate::geometry::VertexList;
use crate::renderer::{DrawStats, Renderer};
use crate::scene::{NodeId, SceneGraph};
use crate::shapes::{regular_polygon, segment};
use crate::transform::Transform;

use super::{ClockTime, Demo};

const SIZE: usize = 500;
const FACE_SIDES: usize = 36;
const FACE_RADIUS: f64 = 200.0;
const MINUTE_LENGTH: f64 = 160.0;
const HOUR_LENGTH: f64 = 100.0;

/// Degrees per minute for each hand
const MINUTE_STEP: f64 = 6.0;
const HOUR_STEP: f64 = 0.5;

struct Hand {
    node: NodeId,
    body: AnimatedBody,
    shape: VertexList,
    length: f64,
    color: Color,
}

pub struct Clock {
    scene: SceneGraph,
    face: NodeId,
    face_shape: VertexList,
    minute: Hand,
    hour: Hand,
}

/// A hand hangs from the center, so lift it to point at 12 before turning it
fn hand_local(length: f64, degrees: f64) -> Matrix3<f64> {
    Transform::rotation_matrix(degrees) * Transform::translation_matrix(0.0, -length)
}

impl Clock {
    pub fn new(time: ClockTime) -> Result<Self> {
        let minute_angle = time.minute as f64 * MINUTE_STEP;
        // The hour hand starts on the hour mark; minutes only move it as it ticks
        let hour_angle = (time.hour % 12) as f64 * 30.0;

        let mut scene = SceneGraph::new();
        let center = (SIZE / 2) as f64;
        let dial = scene.add_root("dial", Transform::translation_matrix(center, center));
        let face = scene.add_child(dial, "face", Transform::scale_matrix(FACE_RADIUS))?;

        let mut hand = |name: &str, length: f64, angle: f64, step: f64, color: Color| -> Result<Hand> {
            let node = scene.add_child(dial, name, hand_local(length, angle))?;
            Ok(Hand {
                node,
                body: AnimatedBody::spinning(angle, step),
                shape: segment(length),
                length,
                color,
            })
        };
        let minute = hand("minute", MINUTE_LENGTH, minute_angle, MINUTE_STEP, Color::BLUE)?;
        let hour = hand("hour", HOUR_LENGTH, hour_angle, HOUR_STEP, Color::RED)?;

        Ok(Self {
            scene,
            face,
            face_shape: regular_polygon(FACE_SIDES),
            minute,
            hour,
        })
    }

    /// Current `(minute, hour)` hand angles in degrees
    pub fn hand_angles(&self) -> (f64, f64) {
        (self.minute.body.angle(), self.hour.body.angle())
    }
}

impl Demo for Clock {
    fn title(&self) -> &str {
        "Clock"
    }

    fn canvas_size(&self) -> (usize, usize) {
        (SIZE, SIZE)
    }

    fn background(&self) -> Color {
        Color::WHITE
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_secs(60)
    }

    fn draw(&mut self, canvas: &mut Canvas, renderer: &Renderer) -> Result<DrawStats> {
        let face = self.scene.world(self.face)?;
        let mut stats = renderer.draw_shape(canvas, &self.face_shape, &face, Color::GRAY)?;

        for hand in [&self.minute, &self.hour] {
            self.scene.set_local(hand.node, hand_local(hand.length, hand.body.angle()))?;
            let world = self.scene.world(hand.node)?;
            stats += renderer.draw_shape(canvas, &hand.shape, &world, hand.color)?;
        }
        Ok(stats)
    }

    fn advance(&mut self) {
        self.minute.body.advance();
        self.hour.body.advance();
    }
}

/// Per-body angle state advanced once per frame
use log::trace;

/// Rotation state of one animated body (in degrees).
///
/// Without a limit the angle keeps growing by `velocity` each tick. With a
/// limit the body swings back and forth inside `[-limit, limit]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedBody {
    angle: f64,
    velocity: f64,
    limit: Option<f64>,
}

impl AnimatedBody {
    /// A body that spins at a constant rate
    pub fn spinning(angle: f64, velocity: f64) -> Self {
        Self {
            angle,
            velocity,
            limit: None,
        }
    }

    /// A body that swings between `-limit` and `+limit`
    pub fn oscillating(velocity: f64, limit: f64) -> Self {
        Self {
            angle: 0.0,
            velocity,
            limit: Some(limit.abs()),
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn limit(&self) -> Option<f64> {
        self.limit
    }

    /// Step one tick
    pub fn advance(&mut self) {
        self.angle += self.velocity;

        let Some(limit) = self.limit else {
            return;
        };
        if self.angle >= limit {
            self.angle = limit;
            self.velocity = -self.velocity.abs();
            trace!("body reached +{} and turns back", limit);
        } else if self.angle <= -limit {
            self.angle = -limit;
            self.velocity = self.velocity.abs();
            trace!("body reached -{} and turns back", limit);
        }
    }
}

impl Default for AnimatedBody {
    fn default() -> Self {
        Self::spinning(0.0, 0.0)
    }
}

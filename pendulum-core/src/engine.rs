use crate::error::{check_finite, check_length, check_mass, ConfigError};
use crate::integrator;
use glam::DVec2;

/// Gravitational acceleration in arm-length units per time unit squared.
pub const GRAVITY: f64 = 9.8;
/// Duration of one simulation tick.
pub const TICK: f64 = 1.0 / 60.0;
/// Screen units per arm-length unit.
pub const SCALE: f64 = 50.0;

/// Constants shared by the integrators and the scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f64,
    pub tick: f64,
    pub scale: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            tick: TICK,
            scale: SCALE,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(ConfigError::InvalidParams {
                parameter: "gravity",
                value: self.gravity,
            });
        }
        if !self.tick.is_finite() || self.tick <= 0.0 {
            return Err(ConfigError::InvalidParams {
                parameter: "tick",
                value: self.tick,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidParams {
                parameter: "scale",
                value: self.scale,
            });
        }
        Ok(())
    }
}

/// The mass at the end of a pendulum arm.
///
/// The position is derived from the pivot (or the preceding bob), the arm
/// length and the angle. Only the integrators write it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bob {
    pub(crate) pos: DVec2,
    pub(crate) arm_length: f64,
    pub(crate) angle: f64,
    pub(crate) velocity: f64,
    pub(crate) acceleration: f64,
    pub(crate) mass: f64,
}

impl Bob {
    fn at_rest(arm_length: f64, angle: f64, mass: f64) -> Self {
        Self {
            pos: DVec2::ZERO,
            arm_length,
            angle,
            velocity: 0.0,
            acceleration: 0.0,
            mass,
        }
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn arm_length(&self) -> f64 {
        self.arm_length
    }

    /// Angle from the downward vertical in radians. Never wrapped.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Offset of this bob from its anchor for the current angle
    pub(crate) fn arm_offset(&self, scale: f64) -> DVec2 {
        let reach = self.arm_length * scale;
        DVec2::new(reach * self.angle.sin(), reach * self.angle.cos())
    }
}

/// A single pendulum: one bob swinging from a fixed pivot
#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    pub(crate) pivot: DVec2,
    pub(crate) bob: Bob,
    pub(crate) params: PhysicsParams,
}

impl Pendulum {
    /// Build a pendulum at rest and run the initialisation update so the bob
    /// position is populated.
    pub fn new(
        pivot: DVec2,
        arm_length: f64,
        angle: f64,
        params: PhysicsParams,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        check_finite("pivot_x", pivot.x)?;
        check_finite("pivot_y", pivot.y)?;
        let arm_length = check_length("arm_length", arm_length)?;
        let angle = check_finite("angle", angle)?;

        let mut pendulum = Self {
            pivot,
            bob: Bob::at_rest(arm_length, angle, 1.0),
            params,
        };
        integrator::advance_pendulum(&mut pendulum);

        tracing::debug!(
            pivot = ?pivot,
            arm_length,
            angle,
            "constructed pendulum"
        );
        Ok(pendulum)
    }

    pub fn advance(&mut self) {
        integrator::advance_pendulum(self);
    }

    pub fn pivot(&self) -> DVec2 {
        self.pivot
    }

    pub fn bob(&self) -> &Bob {
        &self.bob
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }
}

/// Two bobs chained from a fixed pivot
#[derive(Debug, Clone, PartialEq)]
pub struct DoublePendulum {
    pub(crate) pivot: DVec2,
    pub(crate) first: Bob,
    pub(crate) second: Bob,
    pub(crate) params: PhysicsParams,
}

impl DoublePendulum {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pivot: DVec2,
        first_arm_length: f64,
        second_arm_length: f64,
        first_angle: f64,
        second_angle: f64,
        first_mass: f64,
        second_mass: f64,
        params: PhysicsParams,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        check_finite("pivot_x", pivot.x)?;
        check_finite("pivot_y", pivot.y)?;
        let first_arm_length = check_length("first_arm_length", first_arm_length)?;
        let second_arm_length = check_length("second_arm_length", second_arm_length)?;
        let first_angle = check_finite("first_angle", first_angle)?;
        let second_angle = check_finite("second_angle", second_angle)?;
        let first_mass = check_mass("first_mass", first_mass)?;
        let second_mass = check_mass("second_mass", second_mass)?;

        // Positive masses keep this at least 2*first_mass, but a first mass
        // below the precision of second_mass rounds it to zero.
        let denominator =
            integrator::mass_denominator(first_mass, second_mass, first_angle, second_angle);
        if !denominator.is_finite() || denominator == 0.0 {
            return Err(ConfigError::DegenerateDenominator { value: denominator });
        }

        let mut pendulum = Self {
            pivot,
            first: Bob::at_rest(first_arm_length, first_angle, first_mass),
            second: Bob::at_rest(second_arm_length, second_angle, second_mass),
            params,
        };
        integrator::advance_double_pendulum(&mut pendulum);

        tracing::debug!(
            pivot = ?pivot,
            first_arm_length,
            second_arm_length,
            first_angle,
            second_angle,
            first_mass,
            second_mass,
            "constructed double pendulum"
        );
        Ok(pendulum)
    }

    pub fn advance(&mut self) {
        integrator::advance_double_pendulum(self);
    }

    pub fn pivot(&self) -> DVec2 {
        self.pivot
    }

    pub fn first(&self) -> &Bob {
        &self.first
    }

    pub fn second(&self) -> &Bob {
        &self.second
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }
}

/// Either kind of pendulum, so callers can drive and draw them uniformly
#[derive(Debug, Clone, PartialEq)]
pub enum PendulumSystem {
    Single(Pendulum),
    Double(DoublePendulum),
}

impl PendulumSystem {
    pub fn advance(&mut self) {
        match self {
            Self::Single(p) => p.advance(),
            Self::Double(p) => p.advance(),
        }
    }

    pub fn params(&self) -> &PhysicsParams {
        match self {
            Self::Single(p) => p.params(),
            Self::Double(p) => p.params(),
        }
    }

    pub fn pivot(&self) -> DVec2 {
        match self {
            Self::Single(p) => p.pivot(),
            Self::Double(p) => p.pivot(),
        }
    }

    /// Current bob positions, innermost first
    pub fn bob_positions(&self) -> Vec<DVec2> {
        match self {
            Self::Single(p) => vec![p.bob.pos],
            Self::Double(p) => vec![p.first.pos, p.second.pos],
        }
    }

    /// Pivot followed by every bob: the polyline to draw for the arms
    pub fn positions(&self) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(3);
        points.push(self.pivot());
        points.extend(self.bob_positions());
        points
    }

    pub fn bob_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Double(_) => 2,
        }
    }
}

impl From<Pendulum> for PendulumSystem {
    fn from(p: Pendulum) -> Self {
        Self::Single(p)
    }
}

impl From<DoublePendulum> for PendulumSystem {
    fn from(p: DoublePendulum) -> Self {
        Self::Double(p)
    }
}

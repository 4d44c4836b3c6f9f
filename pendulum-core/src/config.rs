//! Construction parameters and presets
//!
//! Configuration is plain data fixed before the run starts. Validation happens
//! when it is turned into engine types, so every failure surfaces before any
//! frame is produced.

use crate::engine::{DoublePendulum, Pendulum, PendulumSystem, PhysicsParams};
use crate::error::ConfigError;
use glam::DVec2;

/// Single pendulum set-up
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumConfig {
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub arm_length: f64,
    pub angle: f64,
    pub trace: usize,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            pivot_x: 400.0,
            pivot_y: 400.0,
            arm_length: 5.0,
            angle: 3.0,
            trace: 1000,
        }
    }
}

impl PendulumConfig {
    pub fn build(&self, params: PhysicsParams) -> Result<Pendulum, ConfigError> {
        Pendulum::new(
            DVec2::new(self.pivot_x, self.pivot_y),
            self.arm_length,
            self.angle,
            params,
        )
    }
}

/// Double pendulum set-up
#[derive(Debug, Clone, PartialEq)]
pub struct DoublePendulumConfig {
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub first_arm_length: f64,
    pub second_arm_length: f64,
    pub first_angle: f64,
    pub second_angle: f64,
    pub first_mass: f64,
    pub second_mass: f64,
    pub trace: usize,
}

impl Default for DoublePendulumConfig {
    fn default() -> Self {
        Self {
            pivot_x: 400.0,
            pivot_y: 200.0,
            first_arm_length: 5.0,
            second_arm_length: 5.0,
            first_angle: 3.0,
            second_angle: 3.0,
            first_mass: 10.0,
            second_mass: 10.0,
            trace: 3000,
        }
    }
}

impl DoublePendulumConfig {
    pub fn build(&self, params: PhysicsParams) -> Result<DoublePendulum, ConfigError> {
        DoublePendulum::new(
            DVec2::new(self.pivot_x, self.pivot_y),
            self.first_arm_length,
            self.second_arm_length,
            self.first_angle,
            self.second_angle,
            self.first_mass,
            self.second_mass,
            params,
        )
    }
}

/// Which pendulum to run, with its set-up
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationConfig {
    Single(PendulumConfig),
    Double(DoublePendulumConfig),
}

impl SimulationConfig {
    pub fn trace_capacity(&self) -> usize {
        match self {
            Self::Single(c) => c.trace,
            Self::Double(c) => c.trace,
        }
    }

    /// Validate and construct the pendulum, including its initial update
    pub fn build_system(&self, params: PhysicsParams) -> Result<PendulumSystem, ConfigError> {
        if self.trace_capacity() == 0 {
            return Err(ConfigError::InvalidTraceCapacity);
        }
        Ok(match self {
            Self::Single(c) => c.build(params)?.into(),
            Self::Double(c) => c.build(params)?.into(),
        })
    }
}

impl From<PendulumConfig> for SimulationConfig {
    fn from(c: PendulumConfig) -> Self {
        Self::Single(c)
    }
}

impl From<DoublePendulumConfig> for SimulationConfig {
    fn from(c: DoublePendulumConfig) -> Self {
        Self::Double(c)
    }
}

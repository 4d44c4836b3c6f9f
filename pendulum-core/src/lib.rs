pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod runtime;
pub mod scheduler;
pub mod trace;

pub use config::{DoublePendulumConfig, PendulumConfig, SimulationConfig};
pub use engine::{Bob, DoublePendulum, Pendulum, PendulumSystem, PhysicsParams, GRAVITY, SCALE, TICK};
pub use error::ConfigError;
pub use runtime::{
    build_simulation_context, build_simulation_context_with_params, FrameReport,
    SimulationContext,
};
pub use scheduler::{FixedStep, TickReport};
pub use trace::{TraceBuffer, TraceSet};

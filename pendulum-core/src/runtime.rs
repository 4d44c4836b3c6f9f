use crate::config::SimulationConfig;
use crate::engine::{PendulumSystem, PhysicsParams};
use crate::error::ConfigError;
use crate::scheduler::FixedStep;
use crate::trace::{TraceBuffer, TraceSet};
use glam::DVec2;

/// What happened during one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub ticks: u32,
    pub dropped_ticks: u32,
}

/// Everything the frame loop needs: the pendulum, its scheduler and trails
#[derive(Debug, Clone)]
pub struct SimulationContext {
    system: PendulumSystem,
    scheduler: FixedStep,
    traces: TraceSet,
    total_ticks: u64,
}

/// Validate a configuration and build a ready-to-run context.
///
/// `max_ticks_per_frame` caps catch-up after a stall; `None` runs every
/// accumulated tick.
pub fn build_simulation_context(
    config: &SimulationConfig,
    max_ticks_per_frame: Option<u32>,
) -> Result<SimulationContext, ConfigError> {
    build_simulation_context_with_params(config, PhysicsParams::default(), max_ticks_per_frame)
}

pub fn build_simulation_context_with_params(
    config: &SimulationConfig,
    params: PhysicsParams,
    max_ticks_per_frame: Option<u32>,
) -> Result<SimulationContext, ConfigError> {
    let system = config.build_system(params)?;
    let traces = TraceSet::new(system.bob_count(), config.trace_capacity())?;
    let scheduler = FixedStep::new(params.tick).with_max_ticks_per_frame(max_ticks_per_frame);

    Ok(SimulationContext {
        system,
        scheduler,
        traces,
        total_ticks: 0,
    })
}

impl SimulationContext {
    /// Feed elapsed wall time, advance the pendulum by the whole ticks it
    /// covers, then record the current bob positions in the trails.
    pub fn step_frame(&mut self, elapsed: f64) -> FrameReport {
        let system = &mut self.system;
        let report = self.scheduler.tick_with_report(elapsed, || system.advance());
        self.total_ticks += u64::from(report.ticks);

        self.traces.push_all(&self.system.bob_positions());

        tracing::trace!(
            elapsed,
            ticks = report.ticks,
            total_ticks = self.total_ticks,
            "frame stepped"
        );

        FrameReport {
            ticks: report.ticks,
            dropped_ticks: report.dropped,
        }
    }

    pub fn system(&self) -> &PendulumSystem {
        &self.system
    }

    /// Pivot followed by each bob
    pub fn polyline(&self) -> Vec<DVec2> {
        self.system.positions()
    }

    pub fn traces(&self) -> &[TraceBuffer] {
        self.traces.buffers()
    }

    /// Ticks advanced since construction, excluding the initial update
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn scheduler(&self) -> &FixedStep {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DoublePendulumConfig, PendulumConfig};

    #[test]
    fn test_frame_pushes_trace_even_without_ticks() {
        let config = SimulationConfig::from(PendulumConfig::default());
        let mut ctx = build_simulation_context(&config, None).unwrap();
        let report = ctx.step_frame(0.001);
        assert_eq!(report.ticks, 0);
        assert_eq!(ctx.traces()[0].len(), 1);
        assert_eq!(ctx.traces()[0].latest(), Some(ctx.polyline()[1]));
    }

    #[test]
    fn test_trails_match_bob_count_for_both_kinds() {
        let configs = [
            SimulationConfig::from(PendulumConfig::default()),
            SimulationConfig::from(DoublePendulumConfig::default()),
        ];
        for config in configs {
            let mut ctx = build_simulation_context(&config, None).unwrap();
            for _ in 0..5 {
                ctx.step_frame(0.02);
            }
            let bobs = ctx.system().bob_count();
            assert_eq!(ctx.traces().len(), bobs);
            assert_eq!(ctx.polyline().len(), bobs + 1);
            for (trace, pos) in ctx.traces().iter().zip(ctx.system().bob_positions()) {
                assert_eq!(trace.len(), 5);
                assert_eq!(trace.latest(), Some(pos));
            }
        }
    }

    #[test]
    fn test_double_context_has_two_trails() {
        let config = SimulationConfig::from(DoublePendulumConfig::default());
        let mut ctx = build_simulation_context(&config, None).unwrap();
        let report = ctx.step_frame(0.1);
        assert_eq!(report.ticks, 6);
        assert_eq!(ctx.total_ticks(), 6);
        assert_eq!(ctx.traces().len(), 2);
        assert_eq!(ctx.polyline().len(), 3);
    }
}

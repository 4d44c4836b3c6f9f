//! Window and drawing for a running simulation
//!
//! The viewer owns the frame loop: each repaint measures the wall time since
//! the previous one, lets the simulation catch up, and draws the arms and
//! trails from the positions the core hands back.

use eframe::egui;
use pendulum_core::SimulationContext;
use std::time::Instant;

pub const WINDOW_SIZE: f32 = 800.0;

const ARM_COLOR: egui::Color32 = egui::Color32::WHITE;
const TRAIL_COLORS: [egui::Color32; 2] = [egui::Color32::GREEN, egui::Color32::RED];

pub struct ViewerApp {
    sim: SimulationContext,
    last_frame: Instant,
}

impl ViewerApp {
    pub fn new(sim: SimulationContext, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            sim,
            last_frame: Instant::now(),
        }
    }
}

fn to_screen(origin: egui::Pos2, p: glam::DVec2) -> egui::Pos2 {
    origin + egui::vec2(p.x as f32, p.y as f32)
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        let report = self.sim.step_frame(elapsed);
        if report.dropped_ticks > 0 {
            tracing::info!(dropped = report.dropped_ticks, "viewer stalled");
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();

                for (trace, color) in self.sim.traces().iter().zip(TRAIL_COLORS) {
                    if trace.len() > 1 {
                        let points: Vec<_> = trace.contents().map(|p| to_screen(origin, p)).collect();
                        painter.add(egui::Shape::line(points, egui::Stroke::new(1.0, color)));
                    }
                }

                let arms: Vec<_> = self
                    .sim
                    .polyline()
                    .into_iter()
                    .map(|p| to_screen(origin, p))
                    .collect();
                painter.add(egui::Shape::line(arms, egui::Stroke::new(1.5, ARM_COLOR)));
            });

        // Keep the frame loop running
        ctx.request_repaint();
    }
}

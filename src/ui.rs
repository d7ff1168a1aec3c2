/*
 * UI Module
 *
 * The controls panel, built with nannou_egui: population counter, the three
 * weight sliders, a reset button and a pause toggle. The panel starts hidden
 * and is shown with the toggle button in the top-left corner.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams};

/// What the user asked for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub reset: bool,
    pub changes: ParamChanges,
}

// Update the UI and report the actions taken
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiActions {
    let mut reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Area::new("controls_toggle")
        .fixed_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            let label = if params.show_controls { "Hide controls" } else { "Show controls" };
            if ui.button(label).clicked() {
                params.show_controls = !params.show_controls;
            }
        });

    if params.show_controls {
        egui::Window::new("Simulation Controls")
            .default_pos([10.0, 45.0])
            .resizable(false)
            .show(&ctx, |ui| {
                ui.label(format!("Boids: {}", debug_info.boid_count));

                ui.collapsing("Flocking Behavior", |ui| {
                    let range = SimulationParams::get_weight_range;
                    ui.add(egui::Slider::new(&mut params.weights.separation, range()).fixed_decimals(1).text("Separation"));
                    ui.add(egui::Slider::new(&mut params.weights.alignment, range()).fixed_decimals(1).text("Alignment"));
                    ui.add(egui::Slider::new(&mut params.weights.cohesion, range()).fixed_decimals(1).text("Cohesion"));
                });

                if ui.button("Reset").clicked() {
                    reset = true;
                }
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
                ui.label(format!("Frames simulated: {}", debug_info.frames_simulated));
                ui.label("Tap to add a boid, hold to attract the flock");
            });
    }

    UiActions {
        reset,
        changes: params.detect_changes(),
    }
}

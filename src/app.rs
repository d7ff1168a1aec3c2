/*
 * Application Module
 *
 * This module defines the nannou model and the frame loop controller.
 * Each update it feeds UI edits and input requests to the simulation, reads
 * the current window size as the canvas extent, and steps the simulation
 * once, recording its draw commands for `view`.
 */

use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::boid::Bounds;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::{seed_from_env, SimulationParams};
use crate::renderer::view;
use crate::simulation::{SimCommand, Simulation};
use crate::sink::FrameRecording;
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub press: input::PressTracker,
    pub mouse_position: Point2,
    pub frame: FrameRecording,
}

pub fn bounds_of(window_rect: Rect) -> Bounds {
    Bounds::new(window_rect.w(), window_rect.h())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            // 80% of the monitor
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1024.0, 768.0),
    };

    let window_id = app
        .new_window()
        .title("Depth Flock")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .touch(input::touch)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to create the main window");

    let window = app.window(window_id).expect("Main window closed during startup");
    let egui = Egui::from_window(&window);

    let params = SimulationParams::with_seed(seed_from_env());
    let bounds = bounds_of(window.rect());
    log::info!(
        "Canvas {:.0}x{:.0}, seed {:?}",
        bounds.width,
        bounds.height,
        params.seed
    );

    let simulation = Simulation::new(params.weights, params.tuning, params.seed, bounds);

    Model {
        simulation,
        params,
        egui,
        debug_info: DebugInfo::default(),
        press: input::PressTracker::new(),
        mouse_position: Point2::ZERO,
        frame: FrameRecording::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.boid_count = model.simulation.flock().len();
    model.debug_info.frames_simulated = model.simulation.frame_count();

    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if actions.changes.weights_changed {
        let w = model.params.weights;
        log::debug!(
            "Weights: separation {:.1}, alignment {:.1}, cohesion {:.1}",
            w.separation,
            w.alignment,
            w.cohesion
        );
        model.simulation.submit(SimCommand::SetWeights(w));
    }
    if actions.changes.pause_toggled {
        log::info!(
            "Simulation {}",
            if model.params.pause_simulation { "paused" } else { "resumed" }
        );
    }
    if actions.reset {
        model.simulation.submit(SimCommand::Reset);
    }

    input::poll_long_press(model, Instant::now());

    // While paused, requests stay queued and the last frame keeps being drawn
    if model.params.pause_simulation {
        return;
    }

    // The window may have been resized since the last frame
    let bounds = bounds_of(app.window_rect());
    model.frame.clear();
    model.simulation.step(bounds, &mut model.frame);
}

/*
 * Input Module
 *
 * This module turns mouse and touch events into simulation requests.
 * A short press adds a boid where it was released. Holding a press for
 * LONG_PRESS makes the pointer an attraction point that follows the pointer
 * until release.
 *
 * Window coordinates (origin at the center, y up) are converted to canvas
 * coordinates (origin top-left, y down) before anything reaches the core.
 */

use std::time::{Duration, Instant};

use nannou::event::TouchEvent;
use nannou::prelude::*;
use nannou::winit::event::{MouseButton, TouchPhase};

use crate::app::Model;
use crate::simulation::SimCommand;

pub const LONG_PRESS: Duration = Duration::from_millis(300);

// Window point to canvas point
pub fn to_canvas(point: Point2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

#[derive(Debug, Clone, Copy)]
struct Press {
    started: Instant,
    position: Vec2,
    long: bool,
}

/// Tap vs long-press state for a single pointer.
#[derive(Debug, Default)]
pub struct PressTracker {
    press: Option<Press>,
}

impl PressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    #[cfg(test)]
    fn is_long_press(&self) -> bool {
        self.press.map_or(false, |p| p.long)
    }

    pub fn press(&mut self, position: Vec2, now: Instant) {
        self.press = Some(Press {
            started: now,
            position,
            long: false,
        });
    }

    // Called every frame; promotes a held press to a long press
    pub fn poll(&mut self, now: Instant) -> Option<SimCommand> {
        let press = self.press.as_mut()?;
        if !press.long && now.duration_since(press.started) >= LONG_PRESS {
            press.long = true;
            return Some(SimCommand::SetAttraction(press.position));
        }
        None
    }

    pub fn moved(&mut self, position: Vec2) -> Option<SimCommand> {
        let press = self.press.as_mut()?;
        press.position = position;
        if press.long {
            Some(SimCommand::SetAttraction(position))
        } else {
            None
        }
    }

    pub fn release(&mut self, position: Vec2, now: Instant) -> Option<SimCommand> {
        let press = self.press.take()?;
        let long = press.long || now.duration_since(press.started) >= LONG_PRESS;
        if long {
            Some(SimCommand::ClearAttraction)
        } else {
            Some(SimCommand::AddBoid(position))
        }
    }

    // Touch cancelled by the system: never adds a boid
    pub fn cancel(&mut self) -> Option<SimCommand> {
        let press = self.press.take()?;
        if press.long {
            Some(SimCommand::ClearAttraction)
        } else {
            None
        }
    }
}

fn submit(model: &mut Model, command: Option<SimCommand>) {
    if let Some(command) = command {
        model.simulation.submit(command);
    }
}

// Promote held presses; called once per update
pub fn poll_long_press(model: &mut Model, now: Instant) {
    let command = model.press.poll(now);
    submit(model, command);
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
    let command = model.press.moved(to_canvas(pos, app.window_rect()));
    submit(model, command);
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    // Clicks on the controls panel belong to egui
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }
    let position = to_canvas(model.mouse_position, app.window_rect());
    model.press.press(position, Instant::now());
}

// Mouse released event handler
pub fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let position = to_canvas(model.mouse_position, app.window_rect());
    let command = model.press.release(position, Instant::now());
    submit(model, command);
}

// Touch event handler, same rules as the mouse
pub fn touch(app: &App, model: &mut Model, touch: TouchEvent) {
    let position = to_canvas(touch.position, app.window_rect());
    let command = match touch.phase {
        TouchPhase::Started => {
            if !model.egui.ctx().is_pointer_over_area() {
                model.press.press(position, Instant::now());
            }
            None
        }
        TouchPhase::Moved => model.press.moved(position),
        TouchPhase::Ended => model.press.release(position, Instant::now()),
        TouchPhase::Cancelled => model.press.cancel(),
    };
    submit(model, command);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

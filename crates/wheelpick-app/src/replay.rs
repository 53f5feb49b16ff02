//! Scripted gesture replay against a picker on a manual frame clock.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use wheelpick_core::datetime::{hours_12, minutes, month_label, months};
use wheelpick_core::{Axis, ManualScheduler, PickerConfig, PointerEvent, PointerRouter, WheelPicker};

use crate::AppError;

/// Interval between delivered frames, in milliseconds.
pub const FRAME_MS: f64 = 16.0;

/// Upper bound on frames run after the last event.
const MAX_FRAMES: usize = 10_000;

/// Which item list a script drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelKind {
    #[default]
    Hours,
    Minutes,
    Months,
}

impl WheelKind {
    /// Row labels for this wheel.
    pub fn labels(self) -> Vec<String> {
        match self {
            WheelKind::Hours => hours_12().iter().map(|h| h.to_string()).collect(),
            WheelKind::Minutes => minutes(1).iter().map(|m| format!("{:02}", m)).collect(),
            WheelKind::Months => months()
                .iter()
                .map(|&m| month_label(m).to_string())
                .collect(),
        }
    }
}

/// A named sequence of pointer events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    pub name: String,
    pub wheel: WheelKind,
    pub item_height: f64,
    pub initial_index: usize,
    pub axis: Axis,
    /// Coordinate of the selection band center along `axis`.
    pub band_center: f64,
    pub events: Vec<PointerEvent>,
}

impl Default for ReplayScript {
    fn default() -> Self {
        Self {
            name: "script".to_string(),
            wheel: WheelKind::Hours,
            item_height: 44.0,
            initial_index: 0,
            axis: Axis::Vertical,
            band_center: 0.0,
            events: Vec::new(),
        }
    }
}

impl ReplayScript {
    /// Parse a script from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::Parse(e.to_string()))
    }

    /// Load a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

/// What a replay ended with.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub name: String,
    pub selected_index: usize,
    pub selected_label: String,
    /// Every index reported to the selection callback, in order.
    pub callbacks: Vec<usize>,
    /// Frames delivered to the picker.
    pub frames: usize,
    /// Clock time when the picker went idle.
    pub finished_at: f64,
}

#[derive(Debug, Default)]
struct FrameClock {
    now: f64,
    frames: usize,
}

impl FrameClock {
    /// Deliver frames due before `time`, then move the clock to it.
    fn advance_to<T>(&mut self, picker: &mut WheelPicker<T>, time: f64) {
        while picker.scheduler().has_pending() && self.now + FRAME_MS <= time {
            self.now += FRAME_MS;
            self.tick(picker);
        }
        self.now = self.now.max(time);
    }

    fn run_until_idle<T>(&mut self, picker: &mut WheelPicker<T>) {
        let mut remaining = MAX_FRAMES;
        while picker.scheduler().has_pending() && remaining > 0 {
            self.now += FRAME_MS;
            self.tick(picker);
            remaining -= 1;
        }
        if remaining == 0 {
            log::warn!("Picker still animating after {} frames", MAX_FRAMES);
        }
    }

    fn tick<T>(&mut self, picker: &mut WheelPicker<T>) {
        if let Some(tick) = picker.scheduler_mut().take_pending() {
            picker.on_frame(tick, self.now);
            self.frames += 1;
        }
    }
}

fn event_time(event: &PointerEvent) -> Option<f64> {
    match event {
        PointerEvent::Down { time, .. }
        | PointerEvent::Move { time, .. }
        | PointerEvent::Up { time, .. } => Some(*time),
        PointerEvent::Cancel | PointerEvent::Scroll { .. } => None,
    }
}

/// Run `script` against a fresh picker and report where it settled.
pub fn replay(script: &ReplayScript, config: &PickerConfig) -> Result<ReplayOutcome, AppError> {
    let mut picker = WheelPicker::new(
        script.wheel.labels(),
        script.initial_index,
        script.item_height,
        config.clone(),
        ManualScheduler::new(),
    )?;

    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    picker.on_selected_change(move |index| sink.borrow_mut().push(index));

    let mut router = PointerRouter::new(script.axis, script.band_center);
    let mut clock = FrameClock::default();
    log::debug!("Replaying {} ({} events)", script.name, script.events.len());

    for event in &script.events {
        if let Some(time) = event_time(event) {
            clock.advance_to(&mut picker, time);
        }
        log::trace!("{:.0}ms {:?}", clock.now, event);
        router.handle(&mut picker, event.clone());
    }
    clock.run_until_idle(&mut picker);

    let callbacks = calls.borrow().clone();
    Ok(ReplayOutcome {
        name: script.name.clone(),
        selected_index: picker.selected_index(),
        selected_label: picker.selected_item().clone(),
        callbacks,
        frames: clock.frames,
        finished_at: clock.now,
    })
}

fn at(y: f64) -> Point {
    Point::new(0.0, y)
}

/// Gestures replayed when no script is given.
pub fn builtin_scripts() -> Vec<ReplayScript> {
    vec![
        ReplayScript {
            name: "slow drag".to_string(),
            events: vec![
                PointerEvent::Down {
                    position: at(300.0),
                    time: 0.0,
                },
                PointerEvent::Move {
                    position: at(212.0),
                    time: 100.0,
                },
                PointerEvent::Up {
                    position: at(212.0),
                    time: 400.0,
                },
            ],
            ..Default::default()
        },
        ReplayScript {
            name: "flick".to_string(),
            wheel: WheelKind::Minutes,
            item_height: 40.0,
            events: vec![
                PointerEvent::Down {
                    position: at(400.0),
                    time: 0.0,
                },
                PointerEvent::Move {
                    position: at(360.0),
                    time: 16.0,
                },
                PointerEvent::Move {
                    position: at(300.0),
                    time: 32.0,
                },
                PointerEvent::Move {
                    position: at(220.0),
                    time: 48.0,
                },
                PointerEvent::Up {
                    position: at(220.0),
                    time: 50.0,
                },
            ],
            ..Default::default()
        },
        ReplayScript {
            name: "tap".to_string(),
            wheel: WheelKind::Months,
            band_center: 110.0,
            events: vec![
                PointerEvent::Down {
                    position: at(198.0),
                    time: 0.0,
                },
                PointerEvent::Up {
                    position: at(199.0),
                    time: 80.0,
                },
            ],
            ..Default::default()
        },
    ]
}

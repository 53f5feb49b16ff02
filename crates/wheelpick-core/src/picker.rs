//! The wheel picker engine.
//!
//! One engine drives every wheel in the app (hours, minutes, meridiem,
//! day/month/year). It owns the transient interaction state and reports
//! settled selections to its owner; rendering is left to an adapter that
//! reads [`WheelPicker::current_visual_state`].

use crate::config::PickerConfig;
use crate::error::{PickerError, PickerResult};
use crate::mapping::{
    OffsetBounds, VisualWeight, index_from_offset, offset_from_index, visual_weight,
    visual_weight_at,
};
use crate::scheduler::{FrameScheduler, ManualScheduler, TickId};
use crate::settle::{self, Animation, SettlePlan};
use crate::tracker::GestureState;
use std::fmt;

/// A settle animation together with the tick it is waiting on.
#[derive(Debug, Clone, PartialEq)]
pub struct Settle {
    pub animation: Animation,
    pub tick: TickId,
}

/// Interaction phase. Exactly one is active at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerPhase {
    /// At rest on `selected_index`.
    #[default]
    Idle,
    /// Pointer is down and the wheel follows it.
    Dragging(GestureState),
    /// Animating toward a row.
    Settling(Settle),
}

impl PickerPhase {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Check if a settle animation is running.
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling(_))
    }
}

/// Snapshot for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    /// Current scroll offset in pixels.
    pub offset: f64,
    /// Opacity per item, same order as the item list.
    pub opacity: Vec<f32>,
    /// Scale per item, same order as the item list.
    pub scale: Vec<f32>,
}

impl VisualState {
    /// Weight of one row.
    pub fn weight(&self, index: usize) -> Option<VisualWeight> {
        Some(VisualWeight {
            opacity: *self.opacity.get(index)?,
            scale: *self.scale.get(index)?,
        })
    }
}

type ChangeCallback = Box<dyn FnMut(usize)>;

/// Touch/drag wheel selector over an ordered list of items.
pub struct WheelPicker<T, S: FrameScheduler = ManualScheduler> {
    items: Vec<T>,
    selected_index: usize,
    offset: f64,
    item_height: f64,
    config: PickerConfig,
    phase: PickerPhase,
    scheduler: S,
    on_change: Option<ChangeCallback>,
    scroll_remainder: f64,
}

impl<T: fmt::Debug, S: FrameScheduler + fmt::Debug> fmt::Debug for WheelPicker<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPicker")
            .field("items", &self.items)
            .field("selected_index", &self.selected_index)
            .field("offset", &self.offset)
            .field("item_height", &self.item_height)
            .field("phase", &self.phase)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

impl<T, S: FrameScheduler> WheelPicker<T, S> {
    /// Create a picker resting on `initial_index` (clamped into the list).
    pub fn new(
        items: Vec<T>,
        initial_index: usize,
        item_height: f64,
        config: PickerConfig,
        scheduler: S,
    ) -> PickerResult<Self> {
        if !item_height.is_finite() || item_height <= 0.0 {
            log::warn!("Rejecting picker with item height {}", item_height);
            return Err(PickerError::InvalidItemHeight(item_height));
        }
        if items.is_empty() {
            return Err(PickerError::EmptyItems);
        }
        if let Err(e) = config.validate() {
            log::warn!("Rejecting picker config: {}", e);
            return Err(e.into());
        }

        let selected_index = initial_index.min(items.len() - 1);
        Ok(Self {
            offset: offset_from_index(selected_index, item_height),
            items,
            selected_index,
            item_height,
            config,
            phase: PickerPhase::Idle,
            scheduler,
            on_change: None,
            scroll_remainder: 0.0,
        })
    }

    /// Register the callback fired when the user settles on a row.
    ///
    /// Replaces any previous callback. Programmatic updates never fire it.
    pub fn on_selected_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Begin a drag. Cancels any running settle without reporting it.
    pub fn on_pointer_down(&mut self, position: f64, now: f64) {
        self.cancel_settle();
        self.scroll_remainder = 0.0;
        log::debug!("Drag start at {:.1} (offset {:.1})", position, self.offset);
        self.phase = PickerPhase::Dragging(GestureState::start(position, self.offset, now));
    }

    /// Track the pointer. Ignored unless a drag is in progress.
    pub fn on_pointer_move(&mut self, position: f64, now: f64) {
        let bounds = self.bounds();
        if let PickerPhase::Dragging(gesture) = &mut self.phase {
            self.offset = gesture.update(position, now, &bounds, &self.config);
        }
    }

    /// Release the pointer and settle on the resolved row.
    ///
    /// Ignored unless a drag is in progress.
    pub fn on_pointer_up(&mut self, now: f64) {
        if !self.phase.is_dragging() {
            return;
        }
        let PickerPhase::Dragging(gesture) = std::mem::take(&mut self.phase) else {
            return;
        };

        let release = gesture.release(now, &self.config);
        let plan = settle::resolve(release, self.items.len(), self.item_height, &self.config);
        log::debug!(
            "Drag release at offset {:.1}, velocity {:.0} px/s -> row {} in {:.0}ms",
            release.offset,
            release.velocity,
            plan.target_index,
            plan.duration_ms
        );
        self.start_settle(plan, true);
    }

    /// Abandon a drag without settling, leaving the wheel where it is.
    ///
    /// Used when the host loses the pointer (e.g. touch cancel); the next
    /// frame request re-syncs to the current selection.
    pub fn on_pointer_cancel(&mut self) {
        if self.phase.is_dragging() {
            self.phase = PickerPhase::Idle;
            self.sync_to(self.selected_index);
        }
    }

    /// Deliver a frame tick from the scheduler.
    ///
    /// Ticks other than the one currently awaited are ignored, so a tick
    /// cancelled by a new gesture can never move the wheel.
    pub fn on_frame(&mut self, tick: TickId, now: f64) {
        let PickerPhase::Settling(settle) = &mut self.phase else {
            log::trace!("Ignoring tick {:?} while not settling", tick);
            return;
        };
        if settle.tick != tick {
            log::trace!("Ignoring stale tick {:?}", tick);
            return;
        }

        let frame = settle.animation.sample(now, self.config.ease_power);
        self.offset = frame.offset;
        log::trace!("Settle frame: offset {:.2}, progress {:.3}", frame.offset, frame.progress);

        if !frame.is_complete() {
            settle.tick = self.scheduler.request_tick();
            return;
        }

        let index = settle.animation.target_index;
        let notify = settle.animation.notify;
        self.phase = PickerPhase::Idle;
        self.selected_index = index;
        log::debug!("Settled on row {}", index);
        if notify {
            self.notify(index);
        }
    }

    /// Select a row from code. Clamps out-of-range indices.
    ///
    /// The wheel animates to the row; the change callback is not fired.
    /// During a drag only the selection is updated and the release decides
    /// where the wheel lands.
    pub fn set_selected_index(&mut self, index: usize) {
        let index = self.clamp_index(index);
        self.selected_index = index;
        if !self.phase.is_dragging() {
            self.sync_to(index);
        }
    }

    /// Replace the item list.
    ///
    /// A selection past the new end is clamped to the last row without
    /// firing the change callback.
    pub fn set_items(&mut self, items: Vec<T>) -> PickerResult<()> {
        if items.is_empty() {
            return Err(PickerError::EmptyItems);
        }
        self.items = items;
        let last = self.items.len() - 1;

        match &self.phase {
            PickerPhase::Dragging(_) => {
                self.selected_index = self.selected_index.min(last);
            }
            PickerPhase::Settling(settle) => {
                let target = settle.animation.target_index;
                let notify = settle.animation.notify;
                self.selected_index = self.selected_index.min(last);
                if target > last {
                    log::debug!(
                        "Settle target {} beyond new list, retargeting to {}",
                        target,
                        last
                    );
                    self.start_settle(self.plan_for(last), notify);
                }
            }
            PickerPhase::Idle => {
                if self.selected_index > last {
                    log::debug!(
                        "Selection {} beyond new list, clamping to {}",
                        self.selected_index,
                        last
                    );
                    self.selected_index = last;
                    self.sync_to(last);
                }
            }
        }
        Ok(())
    }

    /// Select the row the user tapped.
    ///
    /// Reports the change at once (if the row differs) and animates to it.
    pub fn tap_index(&mut self, index: usize) {
        let index = self.clamp_index(index);
        self.select_discrete(index);
    }

    /// Move the selection by `delta` rows (wheel notch, arrow key).
    pub fn step(&mut self, delta: i64) {
        let from = self.target_index() as i64;
        let last = (self.items.len() - 1) as i64;
        let index = from.saturating_add(delta).clamp(0, last) as usize;
        self.select_discrete(index);
    }

    /// Feed scroll-wheel travel in pixels along the wheel axis.
    ///
    /// Positive deltas move toward earlier rows, like dragging downward.
    /// Every full `item_height` of travel steps one row.
    pub fn on_scroll(&mut self, delta: f64) {
        if self.phase.is_dragging() || !delta.is_finite() {
            return;
        }
        self.scroll_remainder += delta;
        let rows = (self.scroll_remainder / self.item_height).trunc();
        if rows != 0.0 {
            self.scroll_remainder %= self.item_height;
            self.step((rows as i64).saturating_neg());
        }
    }

    /// Row drawn under `position`, given the coordinate of the selection
    /// band's center along the same axis.
    pub fn row_at(&self, position: f64, center: f64) -> usize {
        index_from_offset(self.offset - (position - center), self.item_height, self.items.len())
    }

    /// Offset and per-row weights for rendering.
    pub fn current_visual_state(&self) -> VisualState {
        let current = self.visual_index();
        let (opacity, scale): (Vec<f32>, Vec<f32>) = (0..self.items.len())
            .map(|i| {
                let w = visual_weight(i.abs_diff(current), &self.config);
                (w.opacity, w.scale)
            })
            .unzip();
        VisualState {
            offset: self.offset,
            opacity,
            scale,
        }
    }

    /// Weight of a row using its fractional distance from the band.
    pub fn smooth_weight(&self, index: usize) -> VisualWeight {
        let center = -self.offset / self.item_height;
        visual_weight_at(index as f64 - center, &self.config)
    }

    /// Row nearest the selection band right now.
    pub fn visual_index(&self) -> usize {
        index_from_offset(self.offset, self.item_height, self.items.len())
    }

    /// Row the wheel is heading to: the settle target, or the selection.
    pub fn target_index(&self) -> usize {
        match &self.phase {
            PickerPhase::Settling(settle) => settle.animation.target_index,
            _ => self.selected_index,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> &T {
        &self.items[self.selected_index]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a picker holds at least one item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn phase(&self) -> &PickerPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_settling()
    }

    /// Allowed resting offsets.
    pub fn bounds(&self) -> OffsetBounds {
        OffsetBounds::new(self.items.len(), self.item_height)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn select_discrete(&mut self, index: usize) {
        let changed = index != self.selected_index;
        self.selected_index = index;
        self.sync_to(index);
        if changed {
            log::debug!("Discrete selection of row {}", index);
            self.notify(index);
        }
    }

    /// Animate to `index` without reporting it.
    fn sync_to(&mut self, index: usize) {
        self.start_settle(self.plan_for(index), false);
    }

    fn plan_for(&self, index: usize) -> SettlePlan {
        SettlePlan {
            target_index: index,
            target_offset: offset_from_index(index, self.item_height),
            duration_ms: settle::settle_duration(0.0, &self.config),
        }
    }

    fn start_settle(&mut self, plan: SettlePlan, notify: bool) {
        self.cancel_settle();
        let animation = Animation::new(self.offset, plan, notify);
        let tick = self.scheduler.request_tick();
        self.phase = PickerPhase::Settling(Settle { animation, tick });
    }

    fn cancel_settle(&mut self) {
        if let PickerPhase::Settling(settle) = &self.phase {
            log::debug!("Cancelling settle toward row {}", settle.animation.target_index);
            self.scheduler.cancel_tick(settle.tick);
            self.phase = PickerPhase::Idle;
        }
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.items.len() - 1)
    }

    fn notify(&mut self, index: usize) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(index);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub(crate) const FRAME_MS: f64 = 16.0;

    /// Deliver ticks until the picker stops asking for them.
    pub(crate) fn run_until_idle<T>(picker: &mut WheelPicker<T>, now: &mut f64) {
        let mut frames = 0;
        while let Some(tick) = picker.scheduler_mut().take_pending() {
            *now += FRAME_MS;
            picker.on_frame(tick, *now);
            frames += 1;
            assert!(frames < 1000, "settle never finished");
        }
    }

    fn run_frames<T>(picker: &mut WheelPicker<T>, now: &mut f64, count: usize) {
        for _ in 0..count {
            if let Some(tick) = picker.scheduler_mut().take_pending() {
                *now += FRAME_MS;
                picker.on_frame(tick, *now);
            }
        }
    }

    fn record(picker: &mut WheelPicker<impl Sized>) -> Rc<RefCell<Vec<usize>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        picker.on_selected_change(move |i| sink.borrow_mut().push(i));
        calls
    }

    fn hours() -> Vec<u32> {
        (1..=12).collect()
    }

    fn minutes() -> Vec<u32> {
        (0..60).collect()
    }

    fn picker<T>(items: Vec<T>, initial: usize, height: f64) -> WheelPicker<T> {
        WheelPicker::new(items, initial, height, PickerConfig::default(), ManualScheduler::new())
            .unwrap()
    }

    #[test]
    fn test_new_rests_on_initial_index() {
        let p = picker(hours(), 3, 44.0);
        assert_eq!(p.selected_index(), 3);
        assert_eq!(*p.selected_item(), 4);
        assert!((p.offset() + 132.0).abs() < f64::EPSILON);
        assert_eq!(*p.phase(), PickerPhase::Idle);
    }

    #[test]
    fn test_new_clamps_initial_index() {
        let p = picker(hours(), 40, 44.0);
        assert_eq!(p.selected_index(), 11);
    }

    #[test]
    fn test_new_rejects_bad_item_height() {
        for height in [0.0, -44.0, f64::NAN, f64::INFINITY] {
            let result = WheelPicker::new(
                hours(),
                0,
                height,
                PickerConfig::default(),
                ManualScheduler::new(),
            );
            assert!(matches!(result, Err(PickerError::InvalidItemHeight(_))));
        }
    }

    #[test]
    fn test_new_rejects_empty_items() {
        let result = WheelPicker::<u32>::new(
            Vec::new(),
            0,
            44.0,
            PickerConfig::default(),
            ManualScheduler::new(),
        );
        assert_eq!(result.unwrap_err(), PickerError::EmptyItems);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = PickerConfig {
            ease_power: 1.0,
            ..Default::default()
        };
        let result = WheelPicker::new(hours(), 0, 44.0, config, ManualScheduler::new());
        assert!(matches!(result, Err(PickerError::InvalidConfig(_))));
    }

    #[test]
    fn test_slow_drag_settles_two_rows_down() {
        let mut p = picker(hours(), 0, 44.0);
        let calls = record(&mut p);

        p.on_pointer_down(300.0, 0.0);
        p.on_pointer_move(256.0, 100.0);
        p.on_pointer_move(212.0, 200.0);
        assert!((p.offset() + 88.0).abs() < f64::EPSILON);
        assert!(calls.borrow().is_empty());

        // Pointer rested before lift, so no momentum
        p.on_pointer_up(400.0);
        assert!(p.is_animating());
        assert_eq!(p.selected_index(), 0);

        let mut now = 400.0;
        run_until_idle(&mut p, &mut now);

        assert_eq!(p.selected_index(), 2);
        assert_eq!(*p.selected_item(), 3);
        assert_eq!(*calls.borrow(), vec![2]);
        assert!((p.offset() + 88.0).abs() < f64::EPSILON);
        assert_eq!(*p.phase(), PickerPhase::Idle);
    }

    #[test]
    fn test_fast_downward_flick_clamps_to_first_row() {
        let config = PickerConfig {
            momentum_coefficient: 0.25,
            velocity_smoothing: 1.0,
            ..Default::default()
        };
        let mut p = WheelPicker::new(minutes(), 0, 40.0, config, ManualScheduler::new()).unwrap();
        let calls = record(&mut p);

        p.on_pointer_down(100.0, 0.0);
        p.on_pointer_move(120.0, 10.0);
        match p.phase() {
            PickerPhase::Dragging(g) => assert!((g.velocity - 2000.0).abs() < 1e-9),
            other => panic!("expected drag, got {:?}", other),
        }
        p.on_pointer_up(12.0);

        let mut now = 12.0;
        run_until_idle(&mut p, &mut now);

        assert_eq!(p.selected_index(), 0);
        assert!((p.offset()).abs() < f64::EPSILON);
        assert_eq!(*calls.borrow(), vec![0]);
    }

    #[test]
    fn test_upward_flick_projects_momentum() {
        let config = PickerConfig {
            velocity_smoothing: 1.0,
            ..Default::default()
        };
        let mut p = WheelPicker::new(minutes(), 0, 40.0, config, ManualScheduler::new()).unwrap();

        p.on_pointer_down(300.0, 0.0);
        // -40 px in 10 ms = -4000 px/s; -40 + -1000 = -1040 -> row 26
        p.on_pointer_move(260.0, 10.0);
        p.on_pointer_up(15.0);

        let mut now = 15.0;
        run_until_idle(&mut p, &mut now);
        assert_eq!(p.selected_index(), 26);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut p = picker(vec!["only"], 0, 40.0);
        let calls = record(&mut p);

        p.on_pointer_down(0.0, 0.0);
        p.on_pointer_move(-500.0, 5.0);
        p.on_pointer_up(6.0);

        let mut now = 6.0;
        run_until_idle(&mut p, &mut now);

        assert_eq!(p.selected_index(), 0);
        assert!((p.offset()).abs() < f64::EPSILON);
        assert_eq!(*calls.borrow(), vec![0]);
    }

    #[test]
    fn test_programmatic_select_animates_without_callback() {
        let mut p = picker(hours(), 0, 44.0);
        let calls = record(&mut p);

        p.set_selected_index(5);
        assert_eq!(p.selected_index(), 5);
        assert!(p.is_animating());

        let mut now = 0.0;
        run_frames(&mut p, &mut now, 4);
        assert!(p.offset() < 0.0 && p.offset() > -220.0);

        run_until_idle(&mut p, &mut now);
        assert!((p.offset() + 220.0).abs() < f64::EPSILON);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_programmatic_select_clamps() {
        let mut p = picker(hours(), 0, 44.0);
        p.set_selected_index(99);
        assert_eq!(p.selected_index(), 11);

        let mut now = 0.0;
        run_until_idle(&mut p, &mut now);
        assert!((p.offset() + 484.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_index_is_zero_distance() {
        let mut p = picker(hours(), 4, 44.0);
        let calls = record(&mut p);
        let before = p.offset();

        p.set_selected_index(4);
        match p.phase() {
            PickerPhase::Settling(s) => assert!((s.animation.distance()).abs() < f64::EPSILON),
            other => panic!("expected settle, got {:?}", other),
        }

        let mut now = 0.0;
        run_until_idle(&mut p, &mut now);
        assert!((p.offset() - before).abs() < f64::EPSILON);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_new_gesture_cancels_settle() {
        let config = PickerConfig {
            velocity_smoothing: 1.0,
            ..Default::default()
        };
        let mut p = WheelPicker::new(minutes(), 0, 40.0, config, ManualScheduler::new()).unwrap();
        let calls = record(&mut p);

        // Flick toward a far row
        p.on_pointer_down(300.0, 0.0);
        p.on_pointer_move(260.0, 10.0);
        p.on_pointer_up(15.0);
        assert_eq!(p.target_index(), 26);

        let mut now = 15.0;
        run_frames(&mut p, &mut now, 3);
        let stale = match p.phase() {
            PickerPhase::Settling(s) => s.tick,
            other => panic!("expected settle, got {:?}", other),
        };

        // Catch the wheel mid-flight
        p.on_pointer_down(200.0, now);
        assert!(p.is_dragging());
        assert!(!p.scheduler().has_pending());

        // A late delivery of the cancelled tick changes nothing
        let caught = p.offset();
        p.on_frame(stale, now + 16.0);
        assert!(p.is_dragging());
        assert!((p.offset() - caught).abs() < f64::EPSILON);

        // Let go after resting: lands on the nearest row, reports only that
        p.on_pointer_up(now + 500.0);
        let landing = p.target_index();
        let mut now = now + 500.0;
        run_until_idle(&mut p, &mut now);

        assert_eq!(*calls.borrow(), vec![landing]);
        assert_ne!(landing, 26);
    }

    #[test]
    fn test_release_always_in_range() {
        let config = PickerConfig {
            velocity_smoothing: 1.0,
            ..Default::default()
        };
        for &distance in &[-100_000.0, -5000.0, -37.0, 0.0, 12.0, 900.0, 1.0e7] {
            for &dt in &[0.001, 1.0, 16.0] {
                let mut p =
                    WheelPicker::new(minutes(), 30, 40.0, config.clone(), ManualScheduler::new())
                        .unwrap();
                p.on_pointer_down(0.0, 0.0);
                p.on_pointer_move(distance, dt);
                p.on_pointer_up(dt);

                let mut now = dt;
                run_until_idle(&mut p, &mut now);
                assert!(p.selected_index() < 60);
                assert!(p.bounds().contains(p.offset()));
            }
        }
    }

    #[test]
    fn test_move_and_up_without_gesture_are_ignored() {
        let mut p = picker(hours(), 2, 44.0);
        p.on_pointer_move(500.0, 10.0);
        assert!((p.offset() + 88.0).abs() < f64::EPSILON);

        p.set_selected_index(6);
        p.on_pointer_up(20.0);
        assert!(p.is_animating());
        assert_eq!(p.target_index(), 6);
    }

    #[test]
    fn test_pointer_cancel_returns_to_selection() {
        let mut p = picker(hours(), 2, 44.0);
        let calls = record(&mut p);
        p.on_pointer_down(0.0, 0.0);
        p.on_pointer_move(-300.0, 50.0);
        p.on_pointer_cancel();

        let mut now = 50.0;
        run_until_idle(&mut p, &mut now);
        assert_eq!(p.selected_index(), 2);
        assert!((p.offset() + 88.0).abs() < f64::EPSILON);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_set_items_clamps_without_callback() {
        let mut p = picker((1..=31).collect::<Vec<u32>>(), 30, 40.0);
        let calls = record(&mut p);

        p.set_items((1..=28).collect()).unwrap();
        assert_eq!(p.selected_index(), 27);

        let mut now = 0.0;
        run_until_idle(&mut p, &mut now);
        assert!((p.offset() + 27.0 * 40.0).abs() < f64::EPSILON);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_set_items_keeps_valid_selection() {
        let mut p = picker((1..=31).collect::<Vec<u32>>(), 10, 40.0);
        p.set_items((1..=30).collect()).unwrap();
        assert_eq!(p.selected_index(), 10);
        assert!(!p.is_animating());
    }

    #[test]
    fn test_set_items_rejects_empty() {
        let mut p = picker(hours(), 0, 44.0);
        assert_eq!(p.set_items(Vec::new()), Err(PickerError::EmptyItems));
        assert_eq!(p.len(), 12);
    }

    #[test]
    fn test_set_items_retargets_running_settle() {
        let mut p = picker((1..=31).collect::<Vec<u32>>(), 0, 40.0);
        let calls = record(&mut p);
        p.on_pointer_down(0.0, 0.0);
        p.on_pointer_move(-1200.0, 100.0);
        p.on_pointer_up(400.0);
        assert_eq!(p.target_index(), 30);

        p.set_items((1..=28).collect()).unwrap();
        assert_eq!(p.target_index(), 27);

        let mut now = 400.0;
        run_until_idle(&mut p, &mut now);
        assert_eq!(p.selected_index(), 27);
        assert_eq!(*calls.borrow(), vec![27]);
    }

    #[test]
    fn test_tap_reports_immediately() {
        let mut p = picker(hours(), 0, 44.0);
        let calls = record(&mut p);

        p.tap_index(3);
        assert_eq!(p.selected_index(), 3);
        assert_eq!(*calls.borrow(), vec![3]);

        let mut now = 0.0;
        run_until_idle(&mut p, &mut now);
        assert_eq!(*calls.borrow(), vec![3]);
        assert!((p.offset() + 132.0).abs() < f64::EPSILON);

        p.tap_index(3);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_step_clamps() {
        let mut p = picker(hours(), 10, 44.0);
        let calls = record(&mut p);
        p.step(5);
        assert_eq!(p.selected_index(), 11);
        p.step(1);
        p.step(-3);
        assert_eq!(p.selected_index(), 8);
        assert_eq!(*calls.borrow(), vec![11, 8]);
    }

    #[test]
    fn test_scroll_accumulates_rows() {
        let mut p = picker(hours(), 5, 44.0);
        p.on_scroll(-30.0);
        assert_eq!(p.selected_index(), 5);
        p.on_scroll(-30.0);
        assert_eq!(p.selected_index(), 6);
        p.on_scroll(100.0);
        assert_eq!(p.selected_index(), 5);
    }

    #[test]
    fn test_step_saturates() {
        let mut p = picker(hours(), 5, 44.0);
        let calls = record(&mut p);
        p.step(i64::MAX);
        assert_eq!(p.selected_index(), 11);
        p.step(i64::MIN);
        assert_eq!(p.selected_index(), 0);
        assert_eq!(*calls.borrow(), vec![11, 0]);
    }

    #[test]
    fn test_huge_scroll_clamps() {
        let mut p = picker(hours(), 5, 44.0);
        p.on_scroll(-1.0e300);
        assert_eq!(p.selected_index(), 11);
        p.on_scroll(1.0e300);
        assert_eq!(p.selected_index(), 0);

        // Leftover travel stays below one row
        p.on_scroll(-30.0);
        assert!(p.selected_index() <= 1);
        let mut now = 0.0;
        run_until_idle(&mut p, &mut now);
        assert!(p.bounds().contains(p.offset()));
    }

    #[test]
    fn test_programmatic_select_during_drag() {
        let mut p = picker(hours(), 0, 44.0);
        let calls = record(&mut p);

        p.on_pointer_down(300.0, 0.0);
        p.on_pointer_move(212.0, 100.0);
        p.set_selected_index(7);

        // The gesture keeps the wheel
        assert!(p.is_dragging());
        assert_eq!(p.selected_index(), 7);
        assert!((p.offset() + 88.0).abs() < f64::EPSILON);
        assert!(!p.scheduler().has_pending());
        assert!(calls.borrow().is_empty());

        // Release decides the landing row
        p.on_pointer_up(400.0);
        let mut now = 400.0;
        run_until_idle(&mut p, &mut now);
        assert_eq!(p.selected_index(), 2);
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_programmatic_select_overrides_settle() {
        let config = PickerConfig {
            velocity_smoothing: 1.0,
            ..Default::default()
        };
        let mut p = WheelPicker::new(minutes(), 0, 40.0, config, ManualScheduler::new()).unwrap();
        let calls = record(&mut p);

        p.on_pointer_down(300.0, 0.0);
        p.on_pointer_move(260.0, 10.0);
        p.on_pointer_up(15.0);
        assert_eq!(p.target_index(), 26);

        let mut now = 15.0;
        run_frames(&mut p, &mut now, 3);
        let stale = match p.phase() {
            PickerPhase::Settling(s) => s.tick,
            other => panic!("expected settle, got {:?}", other),
        };

        p.set_selected_index(5);
        assert_eq!(p.target_index(), 5);
        match p.phase() {
            PickerPhase::Settling(s) => {
                assert!(!s.animation.notify);
                assert_ne!(s.tick, stale);
            }
            other => panic!("expected settle, got {:?}", other),
        }

        run_until_idle(&mut p, &mut now);
        assert_eq!(p.selected_index(), 5);
        assert!((p.offset() + 200.0).abs() < 1e-9);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_row_at() {
        let p = picker(hours(), 2, 44.0);
        assert_eq!(p.row_at(100.0, 100.0), 2);
        assert_eq!(p.row_at(144.0, 100.0), 3);
        assert_eq!(p.row_at(10.0, 100.0), 0);
        assert_eq!(p.row_at(5000.0, 100.0), 11);
    }

    #[test]
    fn test_visual_state_follows_drag() {
        let mut p = picker(hours(), 0, 44.0);
        let state = p.current_visual_state();
        assert_eq!(state.opacity.len(), 12);
        assert_eq!(state.scale.len(), 12);
        assert_eq!(state.weight(0), Some(VisualWeight::FULL));
        assert!(state.opacity[1] < 1.0);

        p.on_pointer_down(0.0, 0.0);
        p.on_pointer_move(-132.0, 100.0);
        let state = p.current_visual_state();
        assert!((state.offset + 132.0).abs() < f64::EPSILON);
        assert_eq!(state.weight(3), Some(VisualWeight::FULL));
        assert_eq!(state.weight(12), None);
        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn test_smooth_weight_peaks_at_band() {
        let p = picker(hours(), 4, 44.0);
        assert_eq!(p.smooth_weight(4), VisualWeight::FULL);
        assert!(p.smooth_weight(5).opacity < 1.0);
    }
}

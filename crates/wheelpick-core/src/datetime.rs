//! Item lists and composite wheels for picking dates and times.

use crate::config::PickerConfig;
use crate::error::PickerResult;
use crate::picker::WheelPicker;
use crate::scheduler::{FrameScheduler, TickId};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Hours on a 12-hour clock, 1 through 12.
pub fn hours_12() -> Vec<u32> {
    (1..=12).collect()
}

/// Hours on a 24-hour clock, 0 through 23.
pub fn hours_24() -> Vec<u32> {
    (0..24).collect()
}

/// Minutes in increments of `step` (0 is treated as 1).
pub fn minutes(step: u32) -> Vec<u32> {
    (0..60).step_by(step.max(1) as usize).collect()
}

/// Months, 1 through 12.
pub fn months() -> Vec<u32> {
    (1..=12).collect()
}

/// Days of the given month.
pub fn days(year: i32, month: u32) -> Vec<u32> {
    (1..=days_in_month(year, month)).collect()
}

/// Years in a range, oldest first.
pub fn years(range: RangeInclusive<i32>) -> Vec<i32> {
    range.collect()
}

/// Number of days in a month. Months outside 1..=12 are clamped.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = month.clamp(1, 12);
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Short English month name.
pub fn month_label(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// AM/PM column of a 12-hour time wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const ALL: [Meridiem; 2] = [Meridiem::Am, Meridiem::Pm];

    fn of_hour(hour24: u32) -> Self {
        if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Columns of a [`DateWheels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Day,
    Month,
    Year,
}

/// Day, month and year wheels kept consistent with each other.
///
/// When the month or year changes, the day wheel is given the new month's
/// length and a day past the end is clamped to the last day.
pub struct DateWheels<S: FrameScheduler> {
    pub day: WheelPicker<u32, S>,
    pub month: WheelPicker<u32, S>,
    pub year: WheelPicker<i32, S>,
}

impl<S: FrameScheduler> DateWheels<S> {
    /// Build wheels showing `date`, with years from `year_range`.
    ///
    /// A date outside the range is clamped to the nearest year.
    pub fn new(
        date: NaiveDate,
        year_range: RangeInclusive<i32>,
        item_height: f64,
        config: PickerConfig,
        mut scheduler: impl FnMut() -> S,
    ) -> PickerResult<Self> {
        let first_year = *year_range.start();
        let year_items = years(year_range);
        let year_index = (date.year() - first_year).max(0) as usize;
        let year = WheelPicker::new(
            year_items,
            year_index,
            item_height,
            config.clone(),
            scheduler(),
        )?;
        let year_value = *year.selected_item();

        let month = WheelPicker::new(
            months(),
            date.month0() as usize,
            item_height,
            config.clone(),
            scheduler(),
        )?;
        let day = WheelPicker::new(
            days(year_value, date.month()),
            date.day0() as usize,
            item_height,
            config,
            scheduler(),
        )?;

        Ok(Self { day, month, year })
    }

    /// Currently selected date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            *self.year.selected_item(),
            *self.month.selected_item(),
            *self.day.selected_item(),
        )
    }

    /// Show `date` without reporting it to the callbacks.
    pub fn set_date(&mut self, date: NaiveDate) {
        let first_year = self.year.items()[0];
        self.year
            .set_selected_index((date.year() - first_year).max(0) as usize);
        self.month.set_selected_index(date.month0() as usize);
        self.sync_days();
        self.day.set_selected_index(date.day0() as usize);
    }

    /// Deliver a frame tick to one column, then re-sync the day list.
    pub fn on_frame(&mut self, field: DateField, tick: TickId, now: f64) {
        match field {
            DateField::Day => self.day.on_frame(tick, now),
            DateField::Month => self.month.on_frame(tick, now),
            DateField::Year => self.year.on_frame(tick, now),
        }
        if field != DateField::Day {
            self.sync_days();
        }
    }

    /// Match the day list to the selected month. Returns true if it changed.
    pub fn sync_days(&mut self) -> bool {
        let year = *self.year.selected_item();
        let month = *self.month.selected_item();
        let count = days_in_month(year, month) as usize;
        if count == self.day.len() {
            return false;
        }
        log::debug!("{}-{:02} has {} days", year, month, count);
        // `days` never returns an empty list
        self.day.set_items(days(year, month)).is_ok()
    }

    /// Check if any column is dragging or settling.
    pub fn is_busy(&self) -> bool {
        self.day.is_dragging()
            || self.day.is_animating()
            || self.month.is_dragging()
            || self.month.is_animating()
            || self.year.is_dragging()
            || self.year.is_animating()
    }
}

/// Columns of a [`TimeWheels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hour,
    Minute,
    Meridiem,
}

/// 12-hour clock wheels: hour, minute and AM/PM.
pub struct TimeWheels<S: FrameScheduler> {
    pub hour: WheelPicker<u32, S>,
    pub minute: WheelPicker<u32, S>,
    pub meridiem: WheelPicker<Meridiem, S>,
    minute_step: u32,
}

impl<S: FrameScheduler> TimeWheels<S> {
    /// Build wheels showing `time`, with minutes in `minute_step` increments.
    pub fn new(
        time: NaiveTime,
        minute_step: u32,
        item_height: f64,
        config: PickerConfig,
        mut scheduler: impl FnMut() -> S,
    ) -> PickerResult<Self> {
        let minute_step = minute_step.max(1);
        let (hour_index, minute_index, meridiem) = Self::indices(time, minute_step);
        Ok(Self {
            hour: WheelPicker::new(
                hours_12(),
                hour_index,
                item_height,
                config.clone(),
                scheduler(),
            )?,
            minute: WheelPicker::new(
                minutes(minute_step),
                minute_index,
                item_height,
                config.clone(),
                scheduler(),
            )?,
            meridiem: WheelPicker::new(
                Meridiem::ALL.to_vec(),
                meridiem,
                item_height,
                config,
                scheduler(),
            )?,
            minute_step,
        })
    }

    /// Currently selected time (seconds are zero).
    pub fn time(&self) -> NaiveTime {
        let hour12 = *self.hour.selected_item() % 12;
        let hour24 = match self.meridiem.selected_item() {
            Meridiem::Am => hour12,
            Meridiem::Pm => hour12 + 12,
        };
        NaiveTime::from_hms_opt(hour24, *self.minute.selected_item(), 0).unwrap_or_default()
    }

    /// Show `time` without reporting it to the callbacks.
    ///
    /// Minutes are rounded down to the wheel's step.
    pub fn set_time(&mut self, time: NaiveTime) {
        let (hour, minute, meridiem) = Self::indices(time, self.minute_step);
        self.hour.set_selected_index(hour);
        self.minute.set_selected_index(minute);
        self.meridiem.set_selected_index(meridiem);
    }

    /// Deliver a frame tick to one column.
    pub fn on_frame(&mut self, field: TimeField, tick: TickId, now: f64) {
        match field {
            TimeField::Hour => self.hour.on_frame(tick, now),
            TimeField::Minute => self.minute.on_frame(tick, now),
            TimeField::Meridiem => self.meridiem.on_frame(tick, now),
        }
    }

    fn indices(time: NaiveTime, minute_step: u32) -> (usize, usize, usize) {
        let hour24 = time.hour();
        // 12-hour wheel starts at 1: 1 -> index 0, 12 -> index 11
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = match Meridiem::of_hour(hour24) {
            Meridiem::Am => 0,
            Meridiem::Pm => 1,
        };
        (
            (hour12 - 1) as usize,
            (time.minute() / minute_step) as usize,
            meridiem,
        )
    }
}

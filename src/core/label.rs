//! Time-slot label creation: validates raw hour/minute input and builds a
//! normalized `HH:MM-HH:MM` tag with a fresh id.

use crate::errors::ValidationError;
use crate::models::{SlotLabel, TimeSlot};
use chrono::NaiveTime;
use log::info;
use regex::Regex;
use std::sync::LazyLock;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}):(\d{1,2})\s*-\s*(\d{1,2}):(\d{1,2})\s*$").expect("valid range regex")
});

pub struct TimeLabelFactory;

impl TimeLabelFactory {
    /// Build a tag from four raw user-entered values.
    pub fn create_label(
        start_hour: &str,
        start_minute: &str,
        end_hour: &str,
        end_minute: &str,
    ) -> Result<TimeSlot, ValidationError> {
        let sh = parse_component("start hour", start_hour, 23)?;
        let sm = parse_component("start minute", start_minute, 59)?;
        let eh = parse_component("end hour", end_hour, 23)?;
        let em = parse_component("end minute", end_minute, 59)?;

        Self::create_label_from_parts(sh, sm, eh, em)
    }

    /// Same as [`create_label`](Self::create_label) for callers holding numbers.
    pub fn create_label_from_parts(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<TimeSlot, ValidationError> {
        let start = to_time(start_hour, start_minute, ["start hour", "start minute"])?;
        let end = to_time(end_hour, end_minute, ["end hour", "end minute"])?;

        let label = format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"));
        Ok(TimeSlot::new(SlotLabel::new(label)))
    }

    /// Accepts the `H:MM-H:MM` shorthand and validates it like four fields.
    pub fn create_from_range(text: &str) -> Result<TimeSlot, ValidationError> {
        let caps = RANGE_RE
            .captures(text)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "time range",
                value: text.trim().to_string(),
            })?;

        Self::create_label(&caps[1], &caps[2], &caps[3], &caps[4])
    }

    /// Free-text variant: the label is taken as typed, only trimmed.
    pub fn create_free_text(text: &str) -> Result<TimeSlot, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(TimeSlot::new(SlotLabel::new(trimmed)))
    }
}

fn parse_component(field: &'static str, raw: &str, max: u32) -> Result<u32, ValidationError> {
    let value = raw.trim();
    match value.parse::<u32>() {
        Ok(v) if v <= max => Ok(v),
        _ => {
            info!("event=label_rejected field={field} value={value}");
            Err(ValidationError::OutOfRange {
                field,
                value: value.to_string(),
            })
        }
    }
}

fn to_time(hour: u32, minute: u32, fields: [&'static str; 2]) -> Result<NaiveTime, ValidationError> {
    if hour > 23 {
        return Err(ValidationError::OutOfRange {
            field: fields[0],
            value: hour.to_string(),
        });
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| ValidationError::OutOfRange {
        field: fields[1],
        value: minute.to_string(),
    })
}

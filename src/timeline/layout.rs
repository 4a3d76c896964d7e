//! Pure layout math for the horizontal day timeline.
//!
//! Maps clock times onto layout units under a discrete zoom level and maps
//! pointer deltas back into clock-minute deltas. This is a best-effort
//! layout boundary, not a validation boundary: malformed times render at
//! offset zero and inverted durations fall back to a default width.

use crate::utils::time::parse_hhmm;

/// Fallback duration in minutes when an activity has no usable end time.
pub const DEFAULT_DURATION_MINUTES: f32 = 60.0;

/// Discrete zoom steps for the timeline, expressed as clock minutes
/// represented by one layout unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomLevel {
    /// 4x magnification: one layout unit covers a quarter minute.
    Quarter,
    /// 2x magnification.
    Half,
    /// One layout unit per minute.
    #[default]
    Normal,
    /// One layout unit covers two minutes.
    Double,
    /// One layout unit covers four minutes.
    Quadruple,
}

impl ZoomLevel {
    /// Clock minutes represented by one layout unit at this zoom.
    pub fn minutes_per_unit(&self) -> f32 {
        match self {
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
            Self::Quadruple => 4.0,
        }
    }

    /// All zoom steps from closest-in to furthest-out.
    pub fn all() -> [ZoomLevel; 5] {
        [
            Self::Quarter,
            Self::Half,
            Self::Normal,
            Self::Double,
            Self::Quadruple,
        ]
    }
}

/// Horizontal offset in layout units for a clock time.
/// Malformed time strings lay out at offset 0 rather than erroring.
pub fn time_to_offset(time: &str, zoom: ZoomLevel) -> f32 {
    let minutes = parse_hhmm(time).unwrap_or(0);
    minutes as f32 / zoom.minutes_per_unit()
}

/// Width in layout units for a start/end pair.
///
/// When the end is missing, malformed, or precedes the start, the default
/// duration applies; the result is floored at `min_width` so zero-length
/// intervals never collapse to an invisible element.
pub fn duration_to_width(
    start: Option<&str>,
    end: Option<&str>,
    zoom: ZoomLevel,
    min_width: f32,
) -> f32 {
    let start_minutes = start.and_then(parse_hhmm);
    let end_minutes = end.and_then(parse_hhmm);

    let duration = match (start_minutes, end_minutes) {
        (Some(s), Some(e)) if e > s => (e - s) as f32,
        _ => DEFAULT_DURATION_MINUTES,
    };

    (duration / zoom.minutes_per_unit()).max(min_width)
}

/// Convert a pointer delta in layout units back into clock minutes,
/// rounded to the nearest whole minute.
pub fn offset_delta_to_minutes(delta: f32, zoom: ZoomLevel) -> i64 {
    (delta * zoom.minutes_per_unit()).round() as i64
}

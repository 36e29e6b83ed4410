//! Execution timeline.
//!
//! Turns completion-ordered processes into contiguous segments starting
//! at tick 0, with explicit idle gaps.

use serde::Serialize;

use crate::models::{CompletedProcess, Tick};

/// One contiguous stretch of processor time, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// No process running.
    Idle { start: Tick, end: Tick },
    /// A process running its whole burst.
    Run { name: String, start: Tick, end: Tick },
}

impl Segment {
    /// First tick of the segment.
    pub fn start(&self) -> Tick {
        match self {
            Segment::Idle { start, .. } | Segment::Run { start, .. } => *start,
        }
    }

    /// Tick the segment ends at (exclusive).
    pub fn end(&self) -> Tick {
        match self {
            Segment::Idle { end, .. } | Segment::Run { end, .. } => *end,
        }
    }

    /// Length in ticks.
    pub fn len(&self) -> Tick {
        self.end() - self.start()
    }

    /// Whether the segment covers no ticks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gantt cell text, including the closing bar.
    fn cell(&self) -> String {
        match self {
            Segment::Idle { .. } => format!(" IDLE({}) |", self.len()),
            Segment::Run { name, .. } => format!("  {name}  |"),
        }
    }
}

/// Ordered, non-overlapping segments covering `[0, last finish)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Builds the timeline from processes ordered by finish time.
    pub fn from_completed(completed: &[CompletedProcess]) -> Self {
        let mut segments = Vec::with_capacity(completed.len() * 2);
        let mut cursor: Tick = 0;

        for c in completed {
            if c.start_time() > cursor {
                segments.push(Segment::Idle {
                    start: cursor,
                    end: c.start_time(),
                });
            }
            segments.push(Segment::Run {
                name: c.name().to_string(),
                start: c.start_time(),
                end: c.finish_time(),
            });
            cursor = c.finish_time();
        }

        Self { segments }
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Gantt chart as a bar line and a tick-axis line.
    ///
    /// Each boundary tick is printed at the column of its `|`, or one
    /// space after the previous label if that column is already taken.
    pub fn gantt(&self) -> (String, String) {
        let mut bars = String::from("|");
        let mut axis = String::from("0");
        let mut column = 0usize;

        for segment in &self.segments {
            let cell = segment.cell();
            column += cell.chars().count();
            bars.push_str(&cell);

            let axis_width = axis.chars().count();
            if axis_width >= column {
                axis.push(' ');
            } else {
                axis.extend(std::iter::repeat(' ').take(column - axis_width));
            }
            axis.push_str(&segment.end().to_string());
        }

        (bars, axis)
    }
}

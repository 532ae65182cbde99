//! Pointer drag sessions.
//!
//! A session starts on pointer-down, sees a stream of moves, and ends on release or
//! when the pointer leaves the surface. One [`SessionSlot`] holds at most one session,
//! so sharing a slot between controls of the same kind (both sliders, say) keeps
//! their drags mutually exclusive. Every exit path empties the slot.

use crate::editor::{ReorderOutcome, SkillCollection};
use crate::tone::SliderTrack;
use tracing::debug;

/// Behaviour of one kind of drag.
pub trait DragSession {
    type Update;
    type Outcome;

    fn on_move(&mut self, x: f64, y: f64) -> Self::Update;

    /// Called when the pointer is released over the surface.
    fn finish(self) -> Self::Outcome;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Begin {
    Started,
    /// Another session of this kind is still running; the new one was dropped.
    Busy,
}

#[derive(Debug)]
pub struct SessionSlot<S: DragSession> {
    active: Option<S>,
}

impl<S: DragSession> Default for SessionSlot<S> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<S: DragSession> SessionSlot<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&S> {
        self.active.as_ref()
    }

    pub fn begin(&mut self, session: S) -> Begin {
        if self.active.is_some() {
            debug!("drag ignored: a session is already running");
            return Begin::Busy;
        }
        self.active = Some(session);
        Begin::Started
    }

    /// None when no session is running.
    pub fn update(&mut self, x: f64, y: f64) -> Option<S::Update> {
        self.active.as_mut().map(|s| s.on_move(x, y))
    }

    /// Pointer released on the surface.
    pub fn release(&mut self) -> Option<S::Outcome> {
        self.active.take().map(S::finish)
    }

    /// Pointer left the surface. The session ends without producing an outcome.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            debug!("drag cancelled");
        }
        was_active
    }
}

/// Dragging a slider thumb. Emits the live percentage on every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDrag {
    track: SliderTrack,
    percentage: f64,
}

impl SliderDrag {
    /// Pointer-down at `x` already moves the thumb there.
    pub fn start(track: SliderTrack, x: f64) -> Self {
        Self {
            track,
            percentage: track.percentage_at(x),
        }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl DragSession for SliderDrag {
    type Update = f64;
    type Outcome = f64;

    fn on_move(&mut self, x: f64, _y: f64) -> f64 {
        self.percentage = self.track.percentage_at(x);
        self.percentage
    }

    fn finish(self) -> f64 {
        self.percentage
    }
}

/// Dragging a row of the skill list to a new position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderDrag {
    from: usize,
    over: usize,
    len: usize,
    origin_y: f64,
    row_height: f64,
}

/// A finished reorder drag, ready to be applied to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderMove {
    pub from: usize,
    pub to: usize,
}

impl ReorderMove {
    pub fn apply(self, collection: &mut SkillCollection) -> ReorderOutcome {
        collection.reorder(self.from, self.to)
    }
}

impl ReorderDrag {
    /// `origin_y` is where the pointer went down; rows are `row_height` tall.
    pub fn start(from: usize, len: usize, origin_y: f64, row_height: f64) -> Self {
        Self {
            from,
            over: from,
            len,
            origin_y,
            row_height,
        }
    }

    pub fn hovered(&self) -> usize {
        self.over
    }
}

impl DragSession for ReorderDrag {
    type Update = usize;
    type Outcome = ReorderMove;

    fn on_move(&mut self, _x: f64, y: f64) -> usize {
        if self.len == 0 || self.row_height <= 0.0 {
            return self.over;
        }
        let rows = ((y - self.origin_y) / self.row_height).round();
        let target = self.from as f64 + rows;
        self.over = target.clamp(0.0, (self.len - 1) as f64) as usize;
        self.over
    }

    fn finish(self) -> ReorderMove {
        ReorderMove {
            from: self.from,
            to: self.over,
        }
    }
}

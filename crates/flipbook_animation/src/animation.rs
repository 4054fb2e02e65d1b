//! Frame animation
//!
//! An [`Animation`] owns an ordered list of frames and the time each one is
//! displayed for. Advancing the clock with [`Animation::play`] wraps around the
//! total cycle length and resolves the frame whose display window contains the
//! new clock value.
//!
//! Frame windows are closed on the right: frame `i` is shown while
//! `cumulative[i - 1] < clock <= cumulative[i]` (frame 0 also owns `clock == 0`).
//! A clock sitting exactly on a boundary therefore still shows the frame that is
//! ending there.

use serde::{Deserialize, Serialize};

use crate::error::{validate_elapsed, AnimationError, Result};

/// How long each frame of an animation is displayed
///
/// Units are a caller convention (ticks or seconds); the animation only
/// requires them to be positive and consistent with the deltas passed to
/// [`Animation::play`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Durations {
    /// The same duration for every frame
    Uniform(f32),
    /// One duration per frame
    ///
    /// A shorter list is completed by repeating its last value, a longer one
    /// is cut to the frame count.
    PerFrame(Vec<f32>),
}

impl Durations {
    /// The same duration for every frame
    pub fn uniform(duration: f32) -> Self {
        Durations::Uniform(duration)
    }

    /// One duration per frame, length-corrected on construction of the animation
    pub fn per_frame(durations: impl IntoIterator<Item = f32>) -> Self {
        Durations::PerFrame(durations.into_iter().collect())
    }

    /// Expand to exactly `count` durations and validate every value
    pub fn resolve(&self, count: usize) -> Result<Vec<f32>> {
        let resolved = match self {
            Durations::Uniform(duration) => vec![*duration; count],
            Durations::PerFrame(durations) => {
                let Some(&last) = durations.last() else {
                    return Err(AnimationError::InvalidArgument(
                        "duration list cannot be empty".to_string(),
                    ));
                };
                let mut resolved = durations.clone();
                resolved.resize(count, last);
                resolved
            }
        };

        if let Some((index, duration)) = resolved
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_finite() || **d <= 0.0)
        {
            return Err(AnimationError::InvalidArgument(format!(
                "duration of frame {index} must be positive and finite (got {duration})"
            )));
        }

        Ok(resolved)
    }
}

impl From<f32> for Durations {
    fn from(duration: f32) -> Self {
        Durations::Uniform(duration)
    }
}

impl From<Vec<f32>> for Durations {
    fn from(durations: Vec<f32>) -> Self {
        Durations::PerFrame(durations)
    }
}

impl From<&[f32]> for Durations {
    fn from(durations: &[f32]) -> Self {
        Durations::PerFrame(durations.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for Durations {
    fn from(durations: [f32; N]) -> Self {
        Durations::PerFrame(durations.to_vec())
    }
}

/// Smallest f32 strictly greater than a positive finite `value`
fn next_up(value: f32) -> f32 {
    f32::from_bits(value.to_bits() + 1)
}

/// A looping, clock-driven sequence of frames
#[derive(Clone, Debug)]
pub struct Animation<F> {
    frames: Vec<F>,
    durations: Vec<f32>,
    /// Inclusive prefix sums of `durations`, strictly increasing
    cumulative: Vec<f32>,
    starting_index: usize,
    /// Position in the cycle, always in `[0, total_duration)`
    clock: f32,
    current_index: usize,
}

impl<F> Animation<F> {
    /// Create an animation starting on its first frame
    pub fn new(frames: Vec<F>, durations: impl Into<Durations>) -> Result<Self> {
        Self::with_starting_index(frames, durations, 0)
    }

    /// Create an animation starting on `starting_index`
    ///
    /// Fails with [`AnimationError::InvalidArgument`] for an empty frame list or
    /// unusable durations, and with [`AnimationError::OutOfRange`] when the
    /// starting index is not a valid frame.
    pub fn with_starting_index(
        frames: Vec<F>,
        durations: impl Into<Durations>,
        starting_index: usize,
    ) -> Result<Self> {
        if frames.is_empty() {
            return Err(AnimationError::InvalidArgument(
                "an animation needs at least one frame".to_string(),
            ));
        }

        let durations = durations.into().resolve(frames.len())?;
        let cumulative = cumulative_durations(&durations)?;

        if starting_index >= frames.len() {
            return Err(AnimationError::OutOfRange {
                index: starting_index,
                len: frames.len(),
            });
        }

        let mut animation = Self {
            frames,
            durations,
            cumulative,
            starting_index,
            clock: 0.0,
            current_index: 0,
        };
        animation.place_at(starting_index);
        Ok(animation)
    }

    /// Advance the clock by `elapsed` time units, wrapping around the cycle
    ///
    /// Any non-negative delta is accepted, including several full cycles at
    /// once. A negative or non-finite delta leaves the animation untouched.
    pub fn play(&mut self, elapsed: f32) -> Result<()> {
        validate_elapsed(elapsed)?;
        self.advance(elapsed);
        Ok(())
    }

    /// Advance without validating `elapsed`; callers must have checked it
    pub(crate) fn advance(&mut self, elapsed: f32) {
        let total = self.total_duration();
        self.clock = (self.clock + elapsed % total) % total;
        self.current_index = self.index_at(self.clock);
    }

    /// The frame to display right now
    pub fn current_frame(&self) -> &F {
        &self.frames[self.current_index]
    }

    /// Jump to the start of `index`'s display window
    pub fn seek(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(AnimationError::OutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        self.place_at(index);
        Ok(())
    }

    /// Return to the frame the animation was created on
    pub fn reset(&mut self) {
        self.place_at(self.starting_index);
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    pub fn frame_at(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Per-frame durations after broadcast and length correction
    pub fn durations(&self) -> &[f32] {
        &self.durations
    }

    pub fn cumulative_durations(&self) -> &[f32] {
        &self.cumulative
    }

    /// Length of one full cycle
    pub fn total_duration(&self) -> f32 {
        // Never empty: construction rejects empty frame lists
        self.cumulative[self.cumulative.len() - 1]
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn starting_index(&self) -> usize {
        self.starting_index
    }

    /// Place the clock just inside `index`'s window
    fn place_at(&mut self, index: usize) {
        self.clock = match index {
            0 => 0.0,
            i => next_up(self.cumulative[i - 1]),
        };
        self.current_index = index;
        debug_assert_eq!(self.index_at(self.clock), index);
    }

    /// Smallest index whose cumulative duration is `>= clock`
    fn index_at(&self, clock: f32) -> usize {
        self.cumulative
            .partition_point(|&edge| edge < clock)
            .min(self.cumulative.len() - 1)
    }
}

/// Build the inclusive prefix sums, rejecting totals that stop growing
fn cumulative_durations(durations: &[f32]) -> Result<Vec<f32>> {
    let mut cumulative = Vec::with_capacity(durations.len());
    let mut total = 0.0f32;

    for (index, &duration) in durations.iter().enumerate() {
        let next = total + duration;
        if !next.is_finite() {
            return Err(AnimationError::InvalidArgument(
                "total animation duration overflows".to_string(),
            ));
        }
        // Each window must hold at least one clock value past its left edge
        if index > 0 && next <= next_up(total) {
            return Err(AnimationError::InvalidArgument(format!(
                "duration of frame {index} ({duration}) is too small to advance a running total of {total}"
            )));
        }
        cumulative.push(next);
        total = next;
    }

    Ok(cumulative)
}

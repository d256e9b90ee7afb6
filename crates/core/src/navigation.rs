use thiserror::Error;

use crate::model::SlideIndex;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigatorError {
    #[error("a navigator needs at least one slide")]
    NoSlides,
}

/// Why a navigation request was dropped.
///
/// A rejection is an expected outcome of user interaction, not a fault: the
/// caller treats it as a no-op (optionally logging it) and the presentation
/// state is guaranteed unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRejection {
    /// A transition is already in flight.
    Locked,
    /// The target is the slide already shown.
    SameSlide,
    /// The target lies outside `1..=total`.
    OutOfRange,
}

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An accepted slide change, handed to the choreography driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    from: SlideIndex,
    to: SlideIndex,
}

impl Transition {
    #[must_use]
    pub fn from(&self) -> SlideIndex {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> SlideIndex {
        self.to
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.to > self.from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Display state derived from the navigator, refreshed when a destination
/// slide becomes active.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSnapshot {
    pub counter: String,
    /// Fraction of the deck reached, in `(0, 1]`.
    pub progress: f32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

//
// ─── NAVIGATOR ─────────────────────────────────────────────────────────────────
//

/// Owns the current slide position and the transition lock.
///
/// The navigator is pure state: it decides which transitions are valid and
/// records the lock, while the timing of the two-phase choreography lives in
/// the services layer. While a transition is in flight every further request
/// is rejected (dropped, not queued).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: SlideIndex,
    total: u32,
    in_flight: Option<SlideIndex>,
}

impl Navigator {
    /// # Errors
    ///
    /// Returns `NavigatorError::NoSlides` when `total` is zero.
    pub fn new(total: u32) -> Result<Self, NavigatorError> {
        if total == 0 {
            return Err(NavigatorError::NoSlides);
        }
        Ok(Self {
            current: SlideIndex::FIRST,
            total,
            in_flight: None,
        })
    }

    /// Like [`Navigator::new`], but starting on `start` (clamped into range).
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::NoSlides` when `total` is zero.
    pub fn starting_at(total: u32, start: SlideIndex) -> Result<Self, NavigatorError> {
        let mut navigator = Self::new(total)?;
        navigator.current = SlideIndex::new(start.value().min(total));
        Ok(navigator)
    }

    #[must_use]
    pub fn current(&self) -> SlideIndex {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// True while a transition is in flight.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Requests a transition to `target`.
    ///
    /// On success the lock is taken and `current` already points at the
    /// destination, mirroring how the counter and progress bar refresh
    /// mid-transition. The lock stays held until [`Navigator::complete`].
    ///
    /// # Errors
    ///
    /// Returns the [`NavRejection`] describing why the request was dropped;
    /// the navigator is unchanged in that case.
    pub fn go_to(&mut self, target: SlideIndex) -> Result<Transition, NavRejection> {
        if self.in_flight.is_some() {
            return Err(NavRejection::Locked);
        }
        if target == self.current {
            return Err(NavRejection::SameSlide);
        }
        if target.value() > self.total {
            return Err(NavRejection::OutOfRange);
        }

        let transition = Transition {
            from: self.current,
            to: target,
        };
        self.current = target;
        self.in_flight = Some(target);
        Ok(transition)
    }

    /// # Errors
    ///
    /// Rejected at the last slide or while locked; see [`Navigator::go_to`].
    pub fn next(&mut self) -> Result<Transition, NavRejection> {
        if self.current.value() >= self.total {
            return Err(NavRejection::OutOfRange);
        }
        self.go_to(self.current.succ())
    }

    /// # Errors
    ///
    /// Rejected at the first slide or while locked; see [`Navigator::go_to`].
    pub fn previous(&mut self) -> Result<Transition, NavRejection> {
        if self.current == SlideIndex::FIRST {
            return Err(NavRejection::OutOfRange);
        }
        self.go_to(self.current.pred())
    }

    /// Releases the transition lock. No-op when nothing is in flight.
    pub fn complete(&mut self) {
        self.in_flight = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> NavSnapshot {
        let current = self.current.value();
        NavSnapshot {
            counter: format!("{current} / {}", self.total),
            progress: current as f32 / self.total as f32,
            prev_enabled: current > 1,
            next_enabled: current < self.total,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigator {
        Navigator::new(10).unwrap()
    }

    #[test]
    fn zero_slides_is_rejected() {
        assert_eq!(Navigator::new(0), Err(NavigatorError::NoSlides));
    }

    #[test]
    fn starting_at_clamps_into_range() {
        let navigator = Navigator::starting_at(10, SlideIndex::new(99)).unwrap();
        assert_eq!(navigator.current(), SlideIndex::new(10));
    }

    #[test]
    fn out_of_range_targets_leave_state_unchanged() {
        let mut navigator = nav();
        let before = navigator.clone();
        assert_eq!(
            navigator.go_to(SlideIndex::new(11)),
            Err(NavRejection::OutOfRange)
        );
        assert_eq!(navigator, before);
    }

    #[test]
    fn same_slide_is_rejected() {
        let mut navigator = nav();
        assert_eq!(
            navigator.go_to(SlideIndex::FIRST),
            Err(NavRejection::SameSlide)
        );
        assert!(!navigator.is_locked());
    }

    #[test]
    fn accepted_transition_locks_until_complete() {
        let mut navigator = nav();
        let transition = navigator.go_to(SlideIndex::new(3)).unwrap();
        assert_eq!(transition.from(), SlideIndex::new(1));
        assert_eq!(transition.to(), SlideIndex::new(3));
        assert_eq!(transition.direction(), Direction::Forward);
        assert!(navigator.is_locked());
        assert_eq!(navigator.current(), SlideIndex::new(3));

        // Everything is dropped while locked, even otherwise-valid targets.
        assert_eq!(
            navigator.go_to(SlideIndex::new(5)),
            Err(NavRejection::Locked)
        );
        assert_eq!(navigator.next(), Err(NavRejection::Locked));

        navigator.complete();
        assert!(!navigator.is_locked());
        assert!(navigator.go_to(SlideIndex::new(5)).is_ok());
    }

    #[test]
    fn backward_transition_reports_direction() {
        let mut navigator = Navigator::starting_at(10, SlideIndex::new(5)).unwrap();
        let transition = navigator.previous().unwrap();
        assert_eq!(transition.direction(), Direction::Backward);
    }

    #[test]
    fn next_stops_at_last_slide() {
        let mut navigator = Navigator::starting_at(3, SlideIndex::new(3)).unwrap();
        assert_eq!(navigator.next(), Err(NavRejection::OutOfRange));
        assert_eq!(navigator.current(), SlideIndex::new(3));
        assert!(!navigator.is_locked());
    }

    #[test]
    fn previous_stops_at_first_slide() {
        let mut navigator = nav();
        assert_eq!(navigator.previous(), Err(NavRejection::OutOfRange));
        assert_eq!(navigator.current(), SlideIndex::FIRST);
    }

    #[test]
    fn snapshot_derives_counter_progress_and_buttons() {
        let first = nav().snapshot();
        assert_eq!(first.counter, "1 / 10");
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert!((first.progress - 0.1).abs() < f32::EPSILON);

        let last = Navigator::starting_at(10, SlideIndex::new(10))
            .unwrap()
            .snapshot();
        assert_eq!(last.counter, "10 / 10");
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
        assert!((last.progress - 1.0).abs() < f32::EPSILON);
    }
}

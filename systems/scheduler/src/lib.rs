#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deferred transition scheduler responsible for completing delayed transitions.
//!
//! The scheduler never cancels anything. Every transition it records fires
//! exactly once; the world decides whether the completion still applies.

use std::{cmp::Ordering, collections::BinaryHeap, time::Duration};

use labyrinth_core::{Command, Event, TransitionToken};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    deadline: Duration,
    sequence: u64,
    token: TransitionToken,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the earliest deadline first.
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pure system that turns scheduled transitions into completion commands once
/// enough time has elapsed.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    horizon: Duration,
    next_sequence: u64,
    pending: BinaryHeap<Pending>,
}

impl Scheduler {
    /// Creates a scheduler with no outstanding transitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes world events and emits at most one due completion.
    ///
    /// Transitions are recorded relative to the scheduler's current instant.
    /// Elapsed time extends the horizon; the earliest transition whose
    /// deadline lies within it is completed and the clock moves to that
    /// deadline, so transitions scheduled by the resulting events are ordered
    /// against the remaining ones. Callers keep feeding events back until no
    /// command is emitted.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::TransitionScheduled { token, delay } => self.schedule(*token, *delay),
                Event::TimeAdvanced { dt } => {
                    self.horizon = self.horizon.saturating_add(*dt);
                }
                _ => {}
            }
        }

        match self.pop_due() {
            Some(pending) => {
                self.now = pending.deadline;
                out.push(Command::CompleteTransition {
                    token: pending.token,
                });
            }
            None => self.now = self.horizon,
        }
    }

    /// Number of transitions that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Time elapsed since the scheduler was created, as seen by fired transitions.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, token: TransitionToken, delay: Duration) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.pending.push(Pending {
            deadline: self.now.saturating_add(delay),
            sequence,
            token,
        });
    }

    fn pop_due(&mut self) -> Option<Pending> {
        let due = self
            .pending
            .peek()
            .is_some_and(|pending| pending.deadline <= self.horizon);
        if due {
            self.pending.pop()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{GameState, Timer};

    #[test]
    fn earlier_deadline_orders_first_in_heap() {
        let token = TransitionToken::new(GameState::LevelGameplay, Timer::MoveSettle);
        let early = Pending {
            deadline: Duration::from_millis(10),
            sequence: 5,
            token,
        };
        let late = Pending {
            deadline: Duration::from_millis(20),
            sequence: 0,
            token,
        };
        assert!(early > late);
    }

    #[test]
    fn idle_handle_advances_clock_to_horizon() {
        let mut scheduler = Scheduler::new();
        let mut commands = Vec::new();
        scheduler.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_millis(250),
            }],
            &mut commands,
        );
        assert!(commands.is_empty());
        assert_eq!(scheduler.now(), Duration::from_millis(250));
    }
}

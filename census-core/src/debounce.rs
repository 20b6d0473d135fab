//! Generation-counted debouncing.
//!
//! The host owns the actual timer: it calls [`Debouncer::schedule`], sleeps,
//! then hands the ticket back to [`Debouncer::fire`]. A ticket only applies if
//! nothing was scheduled or reset in the meantime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<T> {
    generation: u64,
    value: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer<T> {
    generation: u64,
    settled: T,
}

impl<T: Clone> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            generation: 0,
            settled: initial,
        }
    }

    /// The value visible to readers.
    pub fn value(&self) -> &T {
        &self.settled
    }

    /// Request `value` to become visible after the host's delay.
    pub fn schedule(&mut self, value: T) -> Ticket<T> {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            value,
        }
    }

    /// Apply `value` immediately and cancel anything pending.
    pub fn reset(&mut self, value: T) {
        self.generation += 1;
        self.settled = value;
    }

    /// Apply a ticket whose delay elapsed. Returns whether it was still current.
    pub fn fire(&mut self, ticket: Ticket<T>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.settled = ticket.value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_applies_latest_ticket() {
        let mut debouncer = Debouncer::new(false);
        let ticket = debouncer.schedule(true);
        assert!(!debouncer.value());
        assert!(debouncer.fire(ticket));
        assert!(*debouncer.value());
    }

    #[test]
    fn test_newer_schedule_supersedes() {
        let mut debouncer = Debouncer::new(0);
        let first = debouncer.schedule(1);
        let second = debouncer.schedule(2);
        assert!(!debouncer.fire(first));
        assert_eq!(*debouncer.value(), 0);
        assert!(debouncer.fire(second));
        assert_eq!(*debouncer.value(), 2);
    }

    #[test]
    fn test_reset_cancels_pending() {
        let mut debouncer = Debouncer::new(false);
        let ticket = debouncer.schedule(true);
        debouncer.reset(false);
        assert!(!debouncer.fire(ticket));
        assert!(!debouncer.value());
    }
}

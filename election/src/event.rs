//! Events published on the election's public log.

use agora_types::VoterAddress;

use crate::phase::Phase;
use crate::proposal::ProposalId;

/// Election-level events that observers can subscribe to via the [`EventBus`].
///
/// Events mirror committed state changes; they are informational and never
/// required for correctness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElectionEvent {
    /// An address was added to the voter roster.
    VoterRegistered { voter: VoterAddress },
    /// A proposal was appended to the proposal book.
    ProposalSubmitted { id: ProposalId },
    /// A voter recorded their ballot.
    VoteCast {
        voter: VoterAddress,
        proposal: ProposalId,
    },
    /// The workflow moved to the next phase.
    PhaseChanged { previous: Phase, next: Phase },
}

/// Synchronous fan-out event bus for election events.
///
/// Listeners are invoked inline on the emitting call; keep handlers fast to
/// avoid stalling the operation that emitted the event.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&ElectionEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&ElectionEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &ElectionEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn emit_calls_all_listeners() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();

        let c1 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        }));

        let c2 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c2.fetch_add(10, Ordering::SeqCst);
        }));

        bus.emit(&ElectionEvent::ProposalSubmitted { id: 0 });

        assert_eq!(counter.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn emit_with_no_listeners_is_noop() {
        let bus = EventBus::new();
        bus.emit(&ElectionEvent::PhaseChanged {
            previous: Phase::RegisteringVoters,
            next: Phase::ProposalsOpen,
        }); // should not panic
    }

    #[test]
    fn listener_receives_the_emitted_event() {
        let seen: Arc<Mutex<Vec<ElectionEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        let sink = Arc::clone(&seen);
        bus.subscribe(Box::new(move |event| {
            sink.lock().unwrap().push(event.clone());
        }));

        let event = ElectionEvent::VoteCast {
            voter: VoterAddress::new("alice"),
            proposal: 2,
        };
        bus.emit(&event);

        assert_eq!(seen.lock().unwrap().as_slice(), &[event]);
    }

    #[test]
    fn default_creates_empty_bus() {
        let bus = EventBus::default();
        assert!(bus.listeners.is_empty());
    }
}

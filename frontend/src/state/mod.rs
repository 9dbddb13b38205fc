pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod toast;

use leptos::*;

use self::toast::Notification;

/// Runs a pure transition over the value held by `signal`, stores the next
/// value and hands back the transition's side output. `None` once the signal
/// has been disposed, i.e. the view went away while a request was in flight.
pub fn transition<S, R>(signal: RwSignal<S>, step: impl FnOnce(S) -> (S, R)) -> Option<R>
where
    S: Clone + 'static,
{
    let (next, output) = step(signal.try_get_untracked()?);
    if signal.try_set(next).is_some() {
        return None;
    }
    Some(output)
}

pub fn apply<S>(signal: RwSignal<S>, step: impl FnOnce(S) -> S)
where
    S: Clone + 'static,
{
    transition(signal, |state| (step(state), ()));
}

/// Identifies one issued load. Only the most recently issued load may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSequence {
    issued: u64,
}

impl LoadSequence {
    pub fn issue(&mut self) -> LoadTicket {
        self.issued = self.issued.wrapping_add(1);
        LoadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }
}

/// Outcome of starting a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep<R> {
    Send(R),
    Rejected(Notification),
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut loads = LoadSequence::default();
        let first = loads.issue();
        assert!(loads.is_current(first));
        let second = loads.issue();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }

    #[test]
    fn transition_stores_next_state_and_returns_output() {
        let runtime = create_runtime();
        let counter = create_rw_signal(1u32);
        let previous = transition(counter, |n| (n + 1, n));
        assert_eq!(previous, Some(1));
        assert_eq!(counter.get_untracked(), 2);
        apply(counter, |n| n * 10);
        assert_eq!(counter.get_untracked(), 20);
        runtime.dispose();
    }

    #[test]
    fn transition_on_disposed_signal_is_skipped() {
        let runtime = create_runtime();
        let counter = create_rw_signal(1u32);
        counter.dispose();
        assert_eq!(transition(counter, |n| (n + 1, n)), None);
        runtime.dispose();
    }
}

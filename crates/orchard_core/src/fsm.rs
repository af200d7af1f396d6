//! Guarded state machines
//!
//! A machine is a flat table of `(from, event, to)` rows. Rows may carry a
//! guard that reads a caller-owned context, and actions run when the row is
//! taken. Rows are tried in the order they were added and the first accepting
//! row wins. An event no row accepts is ignored.
//!
//! ```ignore
//! let mut machine = StateMachine::builder(Phase::Idle)
//!     .on(Phase::Idle, Input::Focus, Phase::Editing)
//!     .on_if(Phase::Editing, Input::Blur, Phase::Filled, |text: &String| !text.is_empty())
//!     .on(Phase::Editing, Input::Blur, Phase::Idle)
//!     .build();
//! machine.send(Input::Focus, &text);
//! ```

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Predicate over the context deciding whether a row may be taken
pub type Guard<C> = Box<dyn Fn(&C) -> bool + Send>;

/// Side effect run on entry, exit, or while taking a row
pub type Action = Box<dyn FnMut() + Send>;

type Hooks<S> = FxHashMap<S, SmallVec<[Action; 1]>>;

fn run_hooks<S: Eq + Hash>(hooks: &mut Hooks<S>, state: &S) {
    for hook in hooks.get_mut(state).into_iter().flatten() {
        hook();
    }
}

/// One row of the transition table
pub struct Transition<S, E, C = ()> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard<C>>,
    pub actions: SmallVec<[Action; 2]>,
}

impl<S, E, C> Transition<S, E, C> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    pub fn with_guard<F: Fn(&C) -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn matches(&self, state: &S, event: &E, ctx: &C) -> bool
    where
        S: PartialEq,
        E: PartialEq,
    {
        if self.from_state != *state || self.event != *event {
            return false;
        }
        match &self.guard {
            Some(guard) => guard(ctx),
            None => true,
        }
    }
}

/// Collects rows and hooks, then [`build`](Self::build)s the machine
pub struct StateMachineBuilder<S, E, C = ()> {
    initial: S,
    table: Vec<Transition<S, E, C>>,
    entered: Hooks<S>,
    exited: Hooks<S>,
    history_limit: usize,
}

impl<S, E, C> StateMachineBuilder<S, E, C>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq,
{
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            table: Vec::new(),
            entered: Hooks::default(),
            exited: Hooks::default(),
            history_limit: 0,
        }
    }

    pub fn transition(mut self, row: Transition<S, E, C>) -> Self {
        self.table.push(row);
        self
    }

    /// Unconditional row
    pub fn on(self, from: S, event: E, to: S) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Row taken only while `guard` holds for the context
    pub fn on_if<F>(self, from: S, event: E, to: S, guard: F) -> Self
    where
        F: Fn(&C) -> bool + Send + 'static,
    {
        self.transition(Transition::new(from, event, to).with_guard(guard))
    }

    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: S, hook: F) -> Self {
        self.entered.entry(state).or_default().push(Box::new(hook));
        self
    }

    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: S, hook: F) -> Self {
        self.exited.entry(state).or_default().push(Box::new(hook));
        self
    }

    /// Keep the last `limit` transitions. History is off by default.
    pub fn record_history(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn build(self) -> StateMachine<S, E, C> {
        StateMachine {
            state: self.initial,
            table: self.table,
            entered: self.entered,
            exited: self.exited,
            history: VecDeque::with_capacity(self.history_limit),
            history_limit: self.history_limit,
        }
    }
}

/// A running machine
pub struct StateMachine<S, E, C = ()> {
    state: S,
    table: Vec<Transition<S, E, C>>,
    entered: Hooks<S>,
    exited: Hooks<S>,
    history: VecDeque<(S, E, S)>,
    history_limit: usize,
}

impl<S, E, C> StateMachine<S, E, C>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq,
{
    pub fn builder(initial: S) -> StateMachineBuilder<S, E, C> {
        StateMachineBuilder::new(initial)
    }

    pub fn current_state(&self) -> S {
        self.state
    }

    /// Recent transitions, oldest first
    pub fn history(&self) -> Vec<(S, E, S)> {
        self.history.iter().copied().collect()
    }

    /// Whether `event` would move the machine given `ctx`
    pub fn can_send(&self, event: E, ctx: &C) -> bool {
        self.table
            .iter()
            .any(|row| row.matches(&self.state, &event, ctx))
    }

    /// Deliver `event` and return the resulting state.
    ///
    /// Exit hooks of the old state run first, then the row's actions, then
    /// entry hooks of the new state.
    pub fn send(&mut self, event: E, ctx: &C) -> S {
        let from = self.state;
        let Some(row) = self
            .table
            .iter_mut()
            .find(|row| row.matches(&from, &event, ctx))
        else {
            return from;
        };

        let to = row.to_state;
        run_hooks(&mut self.exited, &from);
        for action in row.actions.iter_mut() {
            action();
        }
        self.state = to;
        self.remember(from, event, to);
        run_hooks(&mut self.entered, &to);
        to
    }

    fn remember(&mut self, from: S, event: E, to: S) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back((from, event, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Door {
        Closed,
        Open,
        Locked,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Act {
        Push,
        Pull,
        Lock,
        Unlock,
    }

    fn door() -> StateMachine<Door, Act> {
        StateMachine::builder(Door::Closed)
            .on(Door::Closed, Act::Push, Door::Open)
            .on(Door::Open, Act::Pull, Door::Closed)
            .on(Door::Closed, Act::Lock, Door::Locked)
            .on(Door::Locked, Act::Unlock, Door::Closed)
            .record_history(8)
            .build()
    }

    #[test]
    fn test_walks_the_table() {
        let mut fsm = door();
        assert_eq!(fsm.current_state(), Door::Closed);

        assert_eq!(fsm.send(Act::Push, &()), Door::Open);
        fsm.send(Act::Pull, &());
        fsm.send(Act::Lock, &());
        assert_eq!(fsm.current_state(), Door::Locked);
        assert_eq!(
            fsm.history(),
            &[
                (Door::Closed, Act::Push, Door::Open),
                (Door::Open, Act::Pull, Door::Closed),
                (Door::Closed, Act::Lock, Door::Locked),
            ]
        );
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let mut fsm = door();
        assert!(!fsm.can_send(Act::Unlock, &()));
        assert_eq!(fsm.send(Act::Unlock, &()), Door::Closed);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut fsm = door();
        for _ in 0..100 {
            fsm.send(Act::Push, &());
            fsm.send(Act::Pull, &());
        }
        let history = fsm.history();
        assert_eq!(history.len(), 8);
        assert_eq!(history[7], (Door::Open, Act::Pull, Door::Closed));

        let mut quiet: StateMachine<Door, Act> = StateMachine::builder(Door::Closed)
            .on(Door::Closed, Act::Push, Door::Open)
            .build();
        quiet.send(Act::Push, &());
        assert!(quiet.history().is_empty());
    }

    #[test]
    fn test_guards_read_context() {
        let mut fsm: StateMachine<Door, Act, bool> = StateMachine::builder(Door::Closed)
            .on_if(Door::Closed, Act::Push, Door::Open, |has_key: &bool| *has_key)
            .build();

        fsm.send(Act::Push, &false);
        assert_eq!(fsm.current_state(), Door::Closed);
        assert!(!fsm.can_send(Act::Push, &false));

        assert!(fsm.can_send(Act::Push, &true));
        fsm.send(Act::Push, &true);
        assert_eq!(fsm.current_state(), Door::Open);
    }

    #[test]
    fn test_first_accepting_row_wins() {
        let build = || -> StateMachine<Door, Act, u32> {
            StateMachine::builder(Door::Closed)
                .on_if(Door::Closed, Act::Push, Door::Locked, |n: &u32| *n > 10)
                .on(Door::Closed, Act::Push, Door::Open)
                .build()
        };

        assert_eq!(build().send(Act::Push, &3), Door::Open);
        assert_eq!(build().send(Act::Push, &11), Door::Locked);
    }

    #[test]
    fn test_hook_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (enter_log, exit_log, action_log) = (log.clone(), log.clone(), log.clone());

        let mut fsm: StateMachine<Door, Act> = StateMachine::builder(Door::Closed)
            .transition(
                Transition::new(Door::Closed, Act::Push, Door::Open)
                    .with_action(move || action_log.lock().unwrap().push("swing")),
            )
            .on(Door::Open, Act::Pull, Door::Closed)
            .on_exit(Door::Closed, move || exit_log.lock().unwrap().push("leave"))
            .on_enter(Door::Open, move || enter_log.lock().unwrap().push("enter"))
            .build();

        fsm.send(Act::Push, &());
        assert_eq!(*log.lock().unwrap(), vec!["leave", "swing", "enter"]);

        fsm.send(Act::Pull, &());
        assert_eq!(log.lock().unwrap().len(), 3);
    }
}

//! Action sequencer for scripted scenes
//!
//! A cutscene is a list of actions run one after another. Each action gets
//! `enter` once, `update` every frame until it reports completion, `draw`
//! every frame while it is the active one, and `exit` once right after its
//! final update. The sequencer knows nothing about what an action does; all
//! shared game state reaches the actions through a caller-owned context.

use log::debug;

use crate::renderer::Renderer;

/// One phase of scripted behaviour
///
/// `C` is the context shared by every action in a run. It is passed by
/// reference into each hook, never stored.
pub trait Action<C> {
    /// Short label for logs: the type name without its path or generics
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Called once when the action becomes active
    fn enter(&mut self, _ctx: &mut C) {}

    /// Advance one tick. Returns `true` once the action is done.
    ///
    /// An action that never returns `true` stalls its sequence forever.
    fn update(&mut self, ctx: &mut C) -> bool;

    /// Render the current state. Must not change simulation state.
    fn draw(&self, _ctx: &C, _renderer: &mut dyn Renderer) {}

    /// Called once, straight after the final `update`
    fn exit(&mut self, _ctx: &mut C) {}
}

/// Where the sequencer is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Nothing entered yet
    NotStarted,
    /// Action at this index has been entered and not exited
    Active(usize),
    /// Every action has exited
    Finished,
}

/// Drives an ordered list of actions, one active at a time
pub struct ActionSequencer<C> {
    actions: Vec<Box<dyn Action<C>>>,
    state: SequencerState,
}

impl<C> ActionSequencer<C> {
    /// Build a sequencer; actions run in the order given
    ///
    /// An empty list starts out `Finished` and never calls anything.
    pub fn new(actions: Vec<Box<dyn Action<C>>>) -> Self {
        let state = if actions.is_empty() {
            SequencerState::Finished
        } else {
            SequencerState::NotStarted
        };
        Self { actions, state }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SequencerState::Finished
    }

    /// Number of actions in the run
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Name of the action currently running, if any
    pub fn active_name(&self) -> Option<&'static str> {
        match self.state {
            SequencerState::Active(index) => self.actions.get(index).map(|a| a.name()),
            _ => None,
        }
    }

    /// Drive one frame. Returns `true` once the whole sequence is done.
    ///
    /// The first call enters action 0 and updates it in the same frame.
    /// After that, an action entered because its predecessor finished gets
    /// its first update on the following frame.
    pub fn update(&mut self, ctx: &mut C) -> bool {
        let index = match self.state {
            SequencerState::Finished => return true,
            SequencerState::Active(index) => index,
            SequencerState::NotStarted => {
                let Some(first) = self.actions.first_mut() else {
                    self.state = SequencerState::Finished;
                    return true;
                };
                debug!("Sequence starting with {}", first.name());
                first.enter(ctx);
                self.state = SequencerState::Active(0);
                0
            }
        };

        let action = &mut self.actions[index];
        if !action.update(ctx) {
            return false;
        }

        action.exit(ctx);
        debug!("Action {} ({}) finished", index, action.name());

        let next = index + 1;
        match self.actions.get_mut(next) {
            Some(action) => {
                debug!("Entering action {} ({})", next, action.name());
                action.enter(ctx);
                self.state = SequencerState::Active(next);
                false
            }
            None => {
                debug!("Sequence finished after {} actions", self.actions.len());
                self.state = SequencerState::Finished;
                true
            }
        }
    }

    /// Draw the active action. Does nothing before the first update or
    /// after the sequence has finished.
    pub fn draw(&self, ctx: &C, renderer: &mut dyn Renderer) {
        if let SequencerState::Active(index) = self.state {
            self.actions[index].draw(ctx, renderer);
        }
    }
}

// Key presses reduce to two intents; they are latched here between ticks.

/// Semantic player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Jump,
    Restart,
}

impl Action {
    /// Map a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Action> {
        match key {
            " " | "Spacebar" | "ArrowUp" => Some(Action::Jump),
            "Enter" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// At most one pending intent of each kind; repeats before the next tick collapse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingInput {
    jump: bool,
    restart: bool,
}

impl PendingInput {
    pub fn push(&mut self, action: Action) {
        match action {
            Action::Jump => self.jump = true,
            Action::Restart => self.restart = true,
        }
    }

    /// Consume the latched intents as `(jump, restart)`.
    pub fn take(&mut self) -> (bool, bool) {
        let taken = (self.jump, self.restart);
        *self = Self::default();
        taken
    }
}

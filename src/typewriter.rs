const TYPE_DELAY_MS: u32 = 100;
const DELETE_DELAY_MS: u32 = 50;
const PAUSE_DELAY_MS: u32 = 2_000;

/// What the machine will do on its next step. Exactly one phase applies to
/// any state, so a single re-armed timer is enough to drive the whole cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
    Advancing,
}

/// Looping typewriter over a fixed list of role strings: reveal one char at
/// a time, hold the full string, delete it faster, move to the next role.
pub struct Typewriter {
    roles: &'static [&'static str],
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// `roles` must be non-empty.
    pub fn new(roles: &'static [&'static str]) -> Self {
        debug_assert!(!roles.is_empty());
        Self {
            roles,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn target(&self) -> &'static str {
        self.roles[self.index]
    }

    fn target_chars(&self) -> usize {
        self.target().chars().count()
    }

    /// Currently revealed prefix of the active role.
    pub fn text(&self) -> &'static str {
        let target = self.target();
        match target.char_indices().nth(self.shown) {
            Some((offset, _)) => &target[..offset],
            None => target,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.deleting {
            if self.shown > 0 {
                Phase::Deleting
            } else {
                Phase::Advancing
            }
        } else if self.shown < self.target_chars() {
            Phase::Typing
        } else {
            Phase::Pausing
        }
    }

    /// Delay to wait before calling `step` again. Advancing is immediate: it
    /// only rolls the index over before typing resumes.
    pub fn delay_ms(&self) -> u32 {
        match self.phase() {
            Phase::Typing => TYPE_DELAY_MS,
            Phase::Pausing => PAUSE_DELAY_MS,
            Phase::Deleting => DELETE_DELAY_MS,
            Phase::Advancing => 0,
        }
    }

    /// Applies exactly one transition.
    pub fn step(&mut self) {
        match self.phase() {
            Phase::Typing => self.shown += 1,
            Phase::Pausing => self.deleting = true,
            Phase::Deleting => self.shown -= 1,
            Phase::Advancing => {
                self.deleting = false;
                self.index = (self.index + 1) % self.roles.len();
            }
        }
    }
}

//! Trailing-edge debounce bookkeeping.
//!
//! Arming hands out a generation token; a sleeping task checks its token
//! is still current before firing, so a newer keystroke supersedes any
//! pending action. At most one armed token exists at a time.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Clone, Copy, Debug, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    /// Supersede any pending token and return the new one.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether `token` is still the most recently armed one.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}

//! Frame-based key repeat.
//!
//! A held key fires once on the frame it goes down, then waits a longer
//! initial delay, then fires every (shorter) interval until released.

use std::collections::HashMap;
use std::hash::Hash;

/// Default frames before the first repeat (~500ms at 60fps)
pub const DEFAULT_REPEAT_DELAY_FRAMES: u32 = 30;
/// Default frames between repeats (~50ms at 60fps)
pub const DEFAULT_REPEAT_INTERVAL_FRAMES: u32 = 3;

/// Timer state for one held key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRepeatState {
    pub initial_press: bool,
    pub frames_held: u32,
    pub frames_until_next: u32,
}

/// Tracks repeat timers for every key currently held.
#[derive(Debug, Clone)]
pub struct KeyRepeatController<K> {
    states: HashMap<K, KeyRepeatState>,
    initial_delay: u32,
    interval: u32,
}

impl<K: Eq + Hash + Copy> Default for KeyRepeatController<K> {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_DELAY_FRAMES, DEFAULT_REPEAT_INTERVAL_FRAMES)
    }
}

impl<K: Eq + Hash + Copy> KeyRepeatController<K> {
    pub fn new(initial_delay: u32, interval: u32) -> Self {
        Self {
            states: HashMap::new(),
            initial_delay: initial_delay.max(1),
            interval: interval.max(1),
        }
    }

    /// Advance `key` by one frame; returns true when its action should fire
    pub fn poll(&mut self, key: K, held: bool) -> bool {
        if !held {
            self.states.remove(&key);
            return false;
        }

        match self.states.get_mut(&key) {
            None => {
                self.states.insert(
                    key,
                    KeyRepeatState {
                        initial_press: true,
                        frames_held: 0,
                        frames_until_next: self.initial_delay,
                    },
                );
                true
            }
            Some(state) => {
                state.initial_press = false;
                state.frames_held += 1;
                if state.frames_held >= state.frames_until_next {
                    state.frames_held = 0;
                    state.frames_until_next = self.interval;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn state(&self, key: K) -> Option<&KeyRepeatState> {
        self.states.get(&key)
    }

    pub fn is_tracking(&self, key: K) -> bool {
        self.states.contains_key(&key)
    }

    /// Drop every timer (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

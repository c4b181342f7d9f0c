use super::*;
use crate::progress::Outcome;

pub const ANSWER_MAX_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Digit(char),
    Clear,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    None,
    Win,
}

/// Live state of one level-play screen. The persisted position is loaded on
/// entry and written through the tracker; everything here is in-memory only.
#[derive(Debug, Clone)]
pub struct PlaySession {
    pub level_number: usize,
    pub task_index: usize,
    /// Mirrors `task_index`; selects the background tint.
    pub stage: usize,
    pub answer: String,
    pub result: SessionResult,
    /// Feedback de rechazo: instante (tiempo de egui) hasta el que tiembla
    /// la tarjeta.
    pub shake_until: f64,
}

impl<S: KvStore> IceTrialsApp<S> {
    pub fn start_session(&mut self, level_number: usize) {
        let saved = self.tracker.level_progress(level_number);
        self.session = Some(PlaySession {
            level_number,
            task_index: saved.task_index,
            stage: saved.stage,
            answer: String::new(),
            result: SessionResult::None,
            shake_until: 0.0,
        });
        self.state = AppState::LevelPlay;
    }

    /// On-screen keypad. Input is ignored entirely once the level is won.
    pub fn key_press(&mut self, key: KeyPress) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.result != SessionResult::None {
            return;
        }
        match key {
            KeyPress::Clear => session.answer.clear(),
            KeyPress::Backspace => {
                session.answer.pop();
            }
            KeyPress::Digit(d) => {
                if d.is_ascii_digit() && session.answer.len() < ANSWER_MAX_LEN {
                    session.answer.push(d);
                }
            }
        }
    }

    /// "Check" button: runs the answer through the tracker. `now` is egui's
    /// clock, used to time the reject shake.
    pub fn check_answer(&mut self, now: f64) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.result != SessionResult::None {
            return;
        }
        let (level_number, task_index, candidate) = (
            session.level_number,
            session.task_index,
            session.answer.clone(),
        );
        let Some(level) = self.levels.get(level_number - 1).cloned() else {
            return;
        };

        let outcome = self.tracker.submit_answer(&level, task_index, &candidate);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match outcome {
            Outcome::Rejected => {
                // La respuesta se queda en pantalla para corregirla.
                session.shake_until = now + 0.35;
            }
            Outcome::Advanced(next) => {
                session.task_index = next;
                session.stage = next;
                session.answer.clear();
            }
            Outcome::Completed => {
                session.result = SessionResult::Win;
            }
        }
    }

    /// Win overlay "Next Level". Only offered below the last level.
    pub fn next_level(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let next = session.level_number + 1;
        if next <= self.levels.len() {
            self.start_session(next);
        }
    }

    pub fn has_next_level(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.level_number < self.levels.len())
    }
}

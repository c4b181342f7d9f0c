use crate::model::Level;
use crate::store::KvStore;

// Claves heredadas del formato de guardado original; no cambiar.
pub const KEY_UNLOCKED: &str = "ice_trials_unlocked_v1";
pub const KEY_RESUME_LEVEL: &str = "ice_trials_resume_level";
pub const TASK_PREFIX: &str = "ice_trials_task_";
pub const STAGE_PREFIX: &str = "ice_trials_stage_";

pub const TASKS_PER_LEVEL: usize = 3;

/// Saved position inside a level. `stage` only selects the background visual
/// and is always written equal to `task_index`; both keys are kept so the
/// persisted key space matches the original save format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub task_index: usize,
    pub stage: usize,
}

/// Global unlock counters. `unlocked` is the highest reachable level,
/// `resume` the level the player last advanced to. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockState {
    pub unlocked: usize,
    pub resume: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Wrong answer: no state change, the input stays for correction.
    Rejected,
    /// Correct answer on task 0 or 1; carries the new task index.
    Advanced(usize),
    /// Correct answer on the final task: next level unlocked, this level's
    /// saved progress cleared.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Level is above the unlock count; the UI refuses navigation.
    Locked,
    /// Selecting below the progress front rewound the unlock counters down
    /// to this level and wiped its saved position.
    Rewind(usize),
    /// Enter the level with whatever progress is persisted for it.
    Resume(usize),
}

/// The level-progress state machine over an injected key/value store.
///
/// Per level the states are Task0 → Task1 → Task2 → Completed, advancing only
/// on a correct answer; a wrong answer is a self-loop. Completing Task2 of
/// level L raises the global unlock count to at least L+1.
pub struct ProgressTracker<S> {
    store: S,
}

impl<S: KvStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn task_key(level: usize) -> String {
        format!("{TASK_PREFIX}{level}")
    }

    fn stage_key(level: usize) -> String {
        format!("{STAGE_PREFIX}{level}")
    }

    fn parse_or_zero(raw: Option<String>) -> usize {
        raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
    }

    fn parse_min_one(raw: Option<String>) -> usize {
        raw.and_then(|v| v.trim().parse().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(1)
    }

    /// Never fails: absent or malformed data is valid initial state (0, 0).
    pub fn level_progress(&self, level: usize) -> LevelProgress {
        let (tk, sk) = (Self::task_key(level), Self::stage_key(level));
        let raw = self.store.multi_get(&[tk.as_str(), sk.as_str()]);
        LevelProgress {
            task_index: Self::parse_or_zero(raw[0].clone()),
            stage: Self::parse_or_zero(raw[1].clone()),
        }
    }

    pub fn save_level_progress(&mut self, level: usize, task_index: usize, stage: usize) {
        let (tk, sk) = (Self::task_key(level), Self::stage_key(level));
        let (tv, sv) = (task_index.to_string(), stage.to_string());
        self.store
            .multi_set(&[(tk.as_str(), tv.as_str()), (sk.as_str(), sv.as_str())]);
    }

    pub fn clear_level_progress(&mut self, level: usize) {
        let (tk, sk) = (Self::task_key(level), Self::stage_key(level));
        self.store.multi_remove(&[tk.as_str(), sk.as_str()]);
    }

    pub fn unlock_state(&self) -> UnlockState {
        let raw = self.store.multi_get(&[KEY_UNLOCKED, KEY_RESUME_LEVEL]);
        UnlockState {
            unlocked: Self::parse_min_one(raw[0].clone()),
            resume: Self::parse_min_one(raw[1].clone()),
        }
    }

    /// Checks `candidate` against the task's expected answer and advances the
    /// per-level state machine. Exact string equality after trimming; no
    /// numeric coercion ("020" does not match "20").
    pub fn submit_answer(&mut self, level: &Level, task_index: usize, candidate: &str) -> Outcome {
        let task = match level.tasks.get(task_index) {
            Some(t) => t,
            None => return Outcome::Rejected,
        };
        if candidate.trim() != task.answer {
            return Outcome::Rejected;
        }

        let next = task_index + 1;
        if next < TASKS_PER_LEVEL {
            self.save_level_progress(level.number, next, next);
            return Outcome::Advanced(next);
        }

        // Última tarea: desbloquea el siguiente nivel y limpia este.
        let unlocked = self.unlock_state().unlocked.max(level.number + 1);
        let resume = level.number + 1;
        let (uv, rv) = (unlocked.to_string(), resume.to_string());
        self.store
            .multi_set(&[(KEY_UNLOCKED, uv.as_str()), (KEY_RESUME_LEVEL, rv.as_str())]);
        self.clear_level_progress(level.number);
        Outcome::Completed
    }

    /// Level-list tap handler. `index` is 0-based; `total_levels` clamps the
    /// unlock count, which is never validated against the table on write.
    pub fn select_level(&mut self, index: usize, total_levels: usize) -> NavigationDecision {
        let level_number = index + 1;
        let state = self.unlock_state();
        let max_unlocked = state.unlocked.min(total_levels);
        let progress_top = state.unlocked.max(state.resume);

        if level_number > max_unlocked {
            return NavigationDecision::Locked;
        }
        if level_number < progress_top {
            self.rewind_to_level(level_number);
            return NavigationDecision::Rewind(level_number);
        }
        NavigationDecision::Resume(level_number)
    }

    /// Replay-from-here: drops the unlock counters down to `level` and wipes
    /// its saved position. Higher levels become locked again until the chain
    /// is recompleted; this matches the shipped behavior.
    fn rewind_to_level(&mut self, level: usize) {
        let v = level.to_string();
        self.store
            .multi_set(&[(KEY_UNLOCKED, v.as_str()), (KEY_RESUME_LEVEL, v.as_str())]);
        self.clear_level_progress(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_levels_embedded;
    use crate::store::MemoryStore;

    fn tracker() -> ProgressTracker<MemoryStore> {
        ProgressTracker::new(MemoryStore::new())
    }

    #[test]
    fn fresh_state_defaults() {
        let t = tracker();
        assert_eq!(
            t.level_progress(3),
            LevelProgress { task_index: 0, stage: 0 }
        );
        assert_eq!(t.unlock_state(), UnlockState { unlocked: 1, resume: 1 });
    }

    #[test]
    fn saved_progress_round_trips() {
        let mut t = tracker();
        t.save_level_progress(4, 2, 2);
        assert_eq!(
            t.level_progress(4),
            LevelProgress { task_index: 2, stage: 2 }
        );
        t.clear_level_progress(4);
        assert_eq!(
            t.level_progress(4),
            LevelProgress { task_index: 0, stage: 0 }
        );
    }

    #[test]
    fn malformed_stored_values_fall_back_to_defaults() {
        let mut t = tracker();
        t.store_mut().set(KEY_UNLOCKED, "banana");
        t.store_mut().set(KEY_RESUME_LEVEL, "-3");
        t.store_mut().set(&format!("{TASK_PREFIX}2"), "");
        t.store_mut().set(&format!("{STAGE_PREFIX}2"), "two");

        assert_eq!(t.unlock_state(), UnlockState { unlocked: 1, resume: 1 });
        assert_eq!(
            t.level_progress(2),
            LevelProgress { task_index: 0, stage: 0 }
        );
    }

    #[test]
    fn zero_unlocked_count_is_treated_as_one() {
        let mut t = tracker();
        t.store_mut().set(KEY_UNLOCKED, "0");
        assert_eq!(t.unlock_state().unlocked, 1);
    }

    #[test]
    fn correct_answer_on_early_task_advances_without_unlocking() {
        let levels = read_levels_embedded();
        let mut t = tracker();

        assert_eq!(t.submit_answer(&levels[0], 0, "20"), Outcome::Advanced(1));
        assert_eq!(
            t.level_progress(1),
            LevelProgress { task_index: 1, stage: 1 }
        );
        assert_eq!(t.unlock_state().unlocked, 1);

        // Whitespace is trimmed, value is not coerced.
        assert_eq!(t.submit_answer(&levels[0], 1, " 15 "), Outcome::Advanced(2));
        assert_eq!(t.submit_answer(&levels[0], 1, "015"), Outcome::Rejected);
    }

    #[test]
    fn wrong_answer_leaves_everything_untouched() {
        let levels = read_levels_embedded();
        let mut t = tracker();
        t.save_level_progress(1, 1, 1);

        assert_eq!(t.submit_answer(&levels[0], 1, "99"), Outcome::Rejected);
        assert_eq!(
            t.level_progress(1),
            LevelProgress { task_index: 1, stage: 1 }
        );
        assert_eq!(t.unlock_state(), UnlockState { unlocked: 1, resume: 1 });
    }

    #[test]
    fn completing_final_task_unlocks_next_level_and_clears_progress() {
        let levels = read_levels_embedded();
        let mut t = tracker();
        for (i, answer) in ["20", "15", "24"].iter().enumerate() {
            t.submit_answer(&levels[0], i, answer);
        }

        assert_eq!(t.unlock_state(), UnlockState { unlocked: 2, resume: 2 });
        assert_eq!(
            t.level_progress(1),
            LevelProgress { task_index: 0, stage: 0 }
        );
        assert_eq!(t.store().get(&format!("{TASK_PREFIX}1")), None);

        // Level 2 is now selectable and starts at task 0.
        assert_eq!(t.select_level(1, 15), NavigationDecision::Resume(2));
    }

    #[test]
    fn unlock_count_never_decreases_on_replay_completion() {
        let levels = read_levels_embedded();
        let mut t = tracker();
        t.store_mut().set(KEY_UNLOCKED, "7");

        assert_eq!(t.submit_answer(&levels[0], 2, "24"), Outcome::Completed);
        // max(7, 2) = 7, pero resume sí baja al nivel recién completado + 1.
        assert_eq!(t.unlock_state(), UnlockState { unlocked: 7, resume: 2 });
    }

    #[test]
    fn locked_levels_refuse_navigation_without_mutating() {
        let mut t = tracker();
        assert_eq!(t.select_level(1, 15), NavigationDecision::Locked);
        assert!(t.store().is_empty());
    }

    #[test]
    fn unlock_count_is_clamped_to_the_level_table() {
        let mut t = tracker();
        t.store_mut().set(KEY_UNLOCKED, "99");
        t.store_mut().set(KEY_RESUME_LEVEL, "99");
        assert_eq!(t.select_level(15, 15), NavigationDecision::Locked);
    }

    #[test]
    fn selecting_below_the_progress_front_rewinds() {
        let mut t = tracker();
        t.store_mut().set(KEY_UNLOCKED, "5");
        t.store_mut().set(KEY_RESUME_LEVEL, "5");
        t.save_level_progress(3, 2, 2);

        assert_eq!(t.select_level(2, 15), NavigationDecision::Rewind(3));
        assert_eq!(t.unlock_state(), UnlockState { unlocked: 3, resume: 3 });
        assert_eq!(
            t.level_progress(3),
            LevelProgress { task_index: 0, stage: 0 }
        );
        // Levels 4 and 5 are locked again until level 3 is recompleted.
        assert_eq!(t.select_level(3, 15), NavigationDecision::Locked);
        assert_eq!(t.select_level(4, 15), NavigationDecision::Locked);
    }

    #[test]
    fn selecting_the_current_front_resumes_in_place() {
        let mut t = tracker();
        t.store_mut().set(KEY_UNLOCKED, "3");
        t.store_mut().set(KEY_RESUME_LEVEL, "3");
        t.save_level_progress(3, 1, 1);

        assert_eq!(t.select_level(2, 15), NavigationDecision::Resume(3));
        assert_eq!(
            t.level_progress(3),
            LevelProgress { task_index: 1, stage: 1 }
        );
        assert_eq!(t.unlock_state().unlocked, 3);
    }

    #[test]
    fn fresh_install_scenario_level_one() {
        let levels = read_levels_embedded();
        let mut t = tracker();

        assert_eq!(t.select_level(0, 15), NavigationDecision::Resume(1));
        assert_eq!(t.submit_answer(&levels[0], 0, "20"), Outcome::Advanced(1));
        assert_eq!(t.submit_answer(&levels[0], 1, "15"), Outcome::Advanced(2));
        assert_eq!(t.submit_answer(&levels[0], 2, "24"), Outcome::Completed);
        assert_eq!(t.unlock_state().unlocked, 2);
        assert_eq!(t.store().get(&format!("{TASK_PREFIX}1")), None);
        assert_eq!(t.store().get(&format!("{STAGE_PREFIX}1")), None);
    }
}

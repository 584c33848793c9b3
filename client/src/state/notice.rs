#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use yoga::views::Notice;

/// The snackbar slot. At most one notice is visible; a newer one replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    /// Bumped on every `show` so a stale dismiss timer can tell it lost.
    pub generation: u64,
}

impl NoticeState {
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.current = Some(notice);
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if nothing newer has been shown since `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.dismiss();
        }
    }
}

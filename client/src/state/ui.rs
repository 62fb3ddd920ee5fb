//! Transient user-visible notices (the toast surface).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: the notice stack.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

/// A single transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Notice severity, for styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl UiState {
    /// Push an error notice; returns its id for dismissal.
    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, text.into())
    }

    /// Push an informational notice; returns its id for dismissal.
    pub fn push_info(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Info, text.into())
    }

    /// Remove a notice by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    fn push(&mut self, level: NoticeLevel, text: String) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id = self.next_notice_id.wrapping_add(1);
        self.notices.push(Notice { id, level, text });
        id
    }
}

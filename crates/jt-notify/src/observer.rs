//! Bridges [`TraceObserver`] to a [`Presenter`].

use jt_core::Timestamp;
use jt_trace::TraceObserver;
use jt_tracker::JourneyEvent;

use crate::{Notice, Presenter};

/// A [`TraceObserver`] that runs every event through a [`Presenter`] and
/// keeps the notices it decided to show.
pub struct NoticeObserver {
    presenter: Presenter,
    notices:   Vec<Notice>,
}

impl NoticeObserver {
    pub fn new(presenter: Presenter) -> Self {
        Self { presenter, notices: Vec::new() }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

impl TraceObserver for NoticeObserver {
    fn on_event(&mut self, at: Timestamp, event: &JourneyEvent) {
        if let Some(notice) = self.presenter.present(event, at) {
            self.notices.push(notice);
        }
    }

    fn on_replay_end(&mut self, _last_at: Timestamp) {
        self.presenter.reset();
    }
}

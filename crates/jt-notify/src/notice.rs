//! Notification decisions.

use std::fmt;

use jt_core::Timestamp;

/// Platform notification slot.  A new notice with a tag supersedes the
/// previous notice with the same tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NoticeTag {
    /// The single, continuously updated journey notice.
    Journey,
    /// The one-off arrival alert.
    Arrival,
}

impl NoticeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeTag::Journey => "journey",
            NoticeTag::Arrival => "arrival",
        }
    }
}

impl fmt::Display for NoticeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What the notice is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Started,
    /// More than the "almost there" threshold remains.
    Countdown { minutes: u64 },
    AlmostThere,
    Arrived,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::Started               => f.write_str("started"),
            NoticeKind::Countdown { minutes } => write!(f, "{minutes} min"),
            NoticeKind::AlmostThere           => f.write_str("almost there"),
            NoticeKind::Arrived               => f.write_str("arrived"),
        }
    }
}

/// Which existing notices to close before showing this one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Replace {
    /// Only the notice carrying the same tag.
    SameTag,
    /// Every notice this presenter has shown.
    All,
}

/// A decision to show a notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind:        NoticeKind,
    pub tag:         NoticeTag,
    pub at:          Timestamp,
    /// Journey progress in `[0, 100]`.
    pub percent:     f64,
    pub remaining_m: f64,
    /// Destination name from the journey config, if any.
    pub label:       Option<String>,
    /// Update quietly (no sound or vibration).
    pub silent:      bool,
    /// Keep on screen until the user dismisses it.
    pub sticky:      bool,
    pub replaces:    Replace,
}

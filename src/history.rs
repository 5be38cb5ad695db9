//! Search and tab filtering for the conversation history screen.

use crate::data::{ChatSession, SessionKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryTab {
    #[default]
    All,
    Chats,
    Calls,
}

impl HistoryTab {
    pub const ALL: [HistoryTab; 3] = [HistoryTab::All, HistoryTab::Chats, HistoryTab::Calls];

    pub fn label(self) -> &'static str {
        match self {
            HistoryTab::All => "All",
            HistoryTab::Chats => "Chats",
            HistoryTab::Calls => "Calls",
        }
    }

    pub fn admits(self, kind: SessionKind) -> bool {
        match self {
            HistoryTab::All => true,
            HistoryTab::Chats => kind == SessionKind::Chat,
            HistoryTab::Calls => kind == SessionKind::Call,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            HistoryTab::All => "No conversations found",
            HistoryTab::Chats => "No chat conversations found",
            HistoryTab::Calls => "No call recordings found",
        }
    }
}

/// True when the summary or any transcript line contains `query`, ignoring
/// case. An empty query matches everything.
pub fn session_matches(session: &ChatSession, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    session.summary.to_lowercase().contains(&needle)
        || session
            .messages
            .iter()
            .any(|line| line.text.to_lowercase().contains(&needle))
}

/// Sessions matching `query`, in their original order.
pub fn filter_sessions<'a>(sessions: &'a [ChatSession], query: &str) -> Vec<&'a ChatSession> {
    sessions
        .iter()
        .filter(|session| session_matches(session, query))
        .collect()
}

/// Search then restrict to the active tab.
pub fn visible_sessions<'a>(
    sessions: &'a [ChatSession],
    query: &str,
    tab: HistoryTab,
) -> Vec<&'a ChatSession> {
    filter_sessions(sessions, query)
        .into_iter()
        .filter(|session| tab.admits(session.kind))
        .collect()
}

pub fn find_session<'a>(sessions: &'a [ChatSession], id: &str) -> Option<&'a ChatSession> {
    sessions.iter().find(|session| session.id == id)
}

/// Most recent session by date.
pub fn latest_session(sessions: &[ChatSession]) -> Option<&ChatSession> {
    sessions.iter().max_by_key(|session| session.date)
}

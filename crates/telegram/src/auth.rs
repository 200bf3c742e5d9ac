//! Sender checks for admin-only handlers

use std::collections::HashSet;
use std::sync::Arc;
use teloxide::types::{Message, UserId};

/// Telegram users allowed to add tracks
///
/// An empty list allows everyone.
#[derive(Debug, Clone, Default)]
pub struct Admins {
    ids: Arc<HashSet<u64>>,
}

impl Admins {
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: Arc::new(ids.into_iter().collect()),
        }
    }

    /// Whether no restriction is configured
    pub fn is_open(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn allows(&self, user: UserId) -> bool {
        self.is_open() || self.ids.contains(&user.0)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Filter for the handler tree: lets messages from admins through
pub fn is_admin_message(msg: Message, admins: Admins) -> bool {
    let allowed = msg.from().map(|user| admins.allows(user.id)).unwrap_or(false);
    if !allowed {
        tracing::debug!("Ignoring admin-only message in chat {}", msg.chat.id);
    }
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_admins() {
        let admins = Admins::new([1001, 1002]);
        assert!(!admins.is_open());
        assert_eq!(admins.len(), 2);
        assert!(admins.allows(UserId(1001)));
        assert!(!admins.allows(UserId(42)));
    }

    #[test]
    fn test_open_admins() {
        let admins = Admins::default();
        assert!(admins.is_open());
        assert!(admins.allows(UserId(42)));
    }
}

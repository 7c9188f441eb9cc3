//! Conversation state and history trimming

use cabinet_llm::Message;

/// Default ceiling on the number of turns kept in the conversation
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Ordered sequence of turns owned by one dispatch
///
/// The first turn is the original request. It is the canonical statement
/// of the task and is never evicted by trimming, even after every
/// intermediate turn has been dropped.
#[derive(Debug, Clone)]
pub struct Conversation {
    turns: Vec<Message>,
}

impl Conversation {
    /// Create a conversation seeded with the original request
    #[must_use]
    pub fn new(first: Message) -> Self {
        Self { turns: vec![first] }
    }

    /// Append a turn
    pub fn push(&mut self, turn: Message) {
        self.turns.push(turn);
    }

    /// The turns, in order
    #[must_use]
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// Number of turns
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the conversation has no turns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Sliding-window trim: keep the first turn plus the most recent
    /// `limit - 1` turns
    ///
    /// Dropped turns are gone permanently; there is no summarization.
    pub fn trim_to(&mut self, limit: usize) {
        if limit == 0 || self.turns.len() <= limit {
            return;
        }
        let tail_start = self.turns.len() - (limit - 1);
        let tail = self.turns.split_off(tail_start);
        self.turns.truncate(1);
        self.turns.extend(tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_llm::Content;

    fn text_of(message: &Message) -> &str {
        match &message.content {
            Content::Text(text) => text,
            Content::Blocks(_) => panic!("expected text turn"),
        }
    }

    #[test]
    fn test_no_trim_below_limit() {
        let mut conversation = Conversation::new(Message::user("request"));
        for i in 0..19 {
            conversation.push(Message::assistant(format!("turn {}", i)));
        }
        conversation.trim_to(20);
        assert_eq!(conversation.len(), 20);
    }

    #[test]
    fn test_trim_keeps_first_turn_and_recent_tail() {
        let mut conversation = Conversation::new(Message::user("turn 0"));
        for i in 1..25 {
            conversation.push(Message::assistant(format!("turn {}", i)));
        }
        assert_eq!(conversation.len(), 25);

        conversation.trim_to(20);

        // Original request plus exactly the most recent 19 turns
        assert_eq!(conversation.len(), 20);
        assert_eq!(text_of(&conversation.turns()[0]), "turn 0");
        assert_eq!(text_of(&conversation.turns()[1]), "turn 6");
        assert_eq!(text_of(&conversation.turns()[19]), "turn 24");
    }

    #[test]
    fn test_trim_is_idempotent() {
        let mut conversation = Conversation::new(Message::user("turn 0"));
        for i in 1..30 {
            conversation.push(Message::assistant(format!("turn {}", i)));
        }
        conversation.trim_to(20);
        let snapshot: Vec<String> = conversation
            .turns()
            .iter()
            .map(|m| text_of(m).to_string())
            .collect();

        conversation.trim_to(20);
        let again: Vec<String> = conversation
            .turns()
            .iter()
            .map(|m| text_of(m).to_string())
            .collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_trim_to_one_keeps_only_request() {
        let mut conversation = Conversation::new(Message::user("turn 0"));
        for i in 1..5 {
            conversation.push(Message::assistant(format!("turn {}", i)));
        }
        conversation.trim_to(1);
        assert_eq!(conversation.len(), 1);
        assert_eq!(text_of(&conversation.turns()[0]), "turn 0");
    }
}

/// Message shown once every snippet has been voted on.
pub const ALL_VOTED_MESSAGE: &str =
    "You've voted on all available texts for now. Thank you for your contribution!";
/// Message shown when the deck was built with no snippets.
pub const NO_SNIPPETS_MESSAGE: &str = "No text snippets available for voting at the moment.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSnippet {
    pub id: String,
    pub text: String,
}

impl TextSnippet {
    pub fn new<S: Into<String>, T: Into<String>>(id: S, text: T) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vote {
    Ai,
    Human,
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vote::Ai => write!(f, "AI"),
            Vote::Human => write!(f, "Human"),
        }
    }
}

/// A zero-based cursor over a fixed snippet list. Votes are logged only;
/// nothing is persisted. The snippet list is never mutated after construction.
pub struct VotingDeck {
    snippets: Vec<TextSnippet>,
    cursor: usize,
    votes_cast: usize,
}

impl VotingDeck {
    pub fn new(snippets: Vec<TextSnippet>) -> Self {
        Self {
            snippets,
            cursor: 0,
            votes_cast: 0,
        }
    }

    /// The snippet at the cursor, or None once the deck is exhausted.
    pub fn current(&self) -> Option<&TextSnippet> {
        self.snippets.get(self.cursor)
    }

    /// Zero-based cursor position. Clamped to the snippet count.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn votes_cast(&self) -> usize {
        self.votes_cast
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.snippets.len()
    }

    /// Terminal or empty-deck message, None while snippets remain.
    pub fn message(&self) -> Option<&'static str> {
        if self.snippets.is_empty() {
            Some(NO_SNIPPETS_MESSAGE)
        } else if self.is_exhausted() {
            Some(ALL_VOTED_MESSAGE)
        } else {
            None
        }
    }

    /// Record a vote for the current snippet and advance the cursor,
    /// clamping at the end of the list. Returns false when there is
    /// nothing left to vote on.
    pub fn cast(&mut self, vote: Vote) -> bool {
        let Some(snippet) = self.current() else {
            return false;
        };
        crate::info!("Voted on snippet {}: {}", snippet.id, vote);
        self.votes_cast += 1;
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> VotingDeck {
        VotingDeck::new(
            (0..n)
                .map(|i| TextSnippet::new(format!("s{i}"), format!("text {i}")))
                .collect(),
        )
    }

    #[test]
    fn advances_without_duplicates() {
        let mut deck = deck_of(3);
        let mut seen = Vec::new();
        while let Some(snippet) = deck.current() {
            seen.push(snippet.id.clone());
            assert!(deck.cast(Vote::Human));
        }
        assert_eq!(seen, vec!["s0", "s1", "s2"]);
        assert_eq!(deck.votes_cast(), 3);
    }

    #[test]
    fn terminal_message_exactly_at_end() {
        let mut deck = deck_of(2);
        assert_eq!(deck.message(), None);
        deck.cast(Vote::Ai);
        assert_eq!(deck.message(), None);
        deck.cast(Vote::Human);
        assert_eq!(deck.position(), 2);
        assert_eq!(deck.message(), Some(ALL_VOTED_MESSAGE));
    }

    #[test]
    fn cursor_clamps_past_the_end() {
        let mut deck = deck_of(1);
        assert!(deck.cast(Vote::Ai));
        assert!(!deck.cast(Vote::Ai));
        assert!(!deck.cast(Vote::Human));
        assert_eq!(deck.position(), 1);
        assert_eq!(deck.votes_cast(), 1);
    }

    #[test]
    fn empty_deck_has_its_own_message() {
        let deck = deck_of(0);
        assert_eq!(deck.current(), None);
        assert_eq!(deck.message(), Some(NO_SNIPPETS_MESSAGE));
    }
}

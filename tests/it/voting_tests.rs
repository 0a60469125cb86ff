use super::*;
use text_verifier::config::sample_snippets;
use text_verifier::voting::{ALL_VOTED_MESSAGE, NO_SNIPPETS_MESSAGE};

#[test]
fn seeded_deck_runs_to_the_terminal_message() {
    let mut deck = VotingDeck::new(sample_snippets());
    let total = deck.len();
    assert!(total > 0);

    let mut shown = Vec::new();
    while let Some(snippet) = deck.current() {
        shown.push(snippet.id.clone());
        assert_eq!(deck.message(), None);
        deck.cast(Vote::Ai);
    }

    // Every snippet shown exactly once, in seed order.
    assert_eq!(shown.len(), total);
    let mut deduped = shown.clone();
    deduped.dedup();
    assert_eq!(deduped, shown);

    assert_eq!(deck.position(), total);
    assert_eq!(deck.message(), Some(ALL_VOTED_MESSAGE));
    assert_eq!(deck.votes_cast(), total);
}

#[test]
fn votes_past_the_end_are_ignored() {
    let mut deck = VotingDeck::new(vec![TextSnippet::new("only", "one snippet")]);
    assert!(deck.cast(Vote::Human));
    assert!(!deck.cast(Vote::Human));
    assert_eq!(deck.votes_cast(), 1);
    assert_eq!(deck.position(), 1);
}

#[test]
fn empty_deck_reports_no_snippets() {
    let deck = VotingDeck::new(Vec::new());
    assert_eq!(deck.message(), Some(NO_SNIPPETS_MESSAGE));
}

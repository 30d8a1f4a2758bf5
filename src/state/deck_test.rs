use super::*;

fn authored() -> SlideDeck<&'static str> {
    SlideDeck::capture(vec![vec!["a", "b", "c"], vec!["d", "e"]])
}

#[test]
fn narrow_layout_has_one_card_per_group() {
    let groups = authored().layout(ViewportState::Narrow);
    assert_eq!(groups.len(), 5);
    assert!(groups.iter().all(|g| g.cards.len() == 1));
    assert_eq!(flatten(&groups), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn wide_layout_restores_authored_grouping() {
    let groups = authored().layout(ViewportState::Wide);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].cards, vec!["a", "b", "c"]);
    assert_eq!(groups[1].cards, vec!["d", "e"]);
}

#[test]
fn exactly_one_group_is_active_and_it_is_the_first() {
    for state in [ViewportState::Narrow, ViewportState::Wide] {
        let groups = authored().layout(state);
        assert_eq!(groups.iter().filter(|g| g.active).count(), 1);
        assert_eq!(active_index(&groups), Some(0));
    }
}

#[test]
fn three_card_group_becomes_three_single_card_groups() {
    let deck = SlideDeck::capture(vec![vec![1, 2, 3]]);
    let groups = deck.layout(ViewportState::Narrow);
    assert_eq!(
        groups,
        vec![
            SlideGroup { cards: vec![1], active: true },
            SlideGroup { cards: vec![2], active: false },
            SlideGroup { cards: vec![3], active: false },
        ]
    );
}

#[test]
fn round_trip_preserves_card_order() {
    let deck = authored();
    let before = flatten(&deck.layout(ViewportState::Narrow));
    let wide = flatten(&deck.layout(ViewportState::Wide));
    let after = flatten(&deck.layout(ViewportState::Narrow));
    assert_eq!(before, wide);
    assert_eq!(before, after);
}

#[test]
fn capture_drops_empty_groups() {
    let deck = SlideDeck::capture(vec![vec![], vec!["x"], vec![]]);
    assert_eq!(deck.card_count(), 1);
    assert_eq!(deck.layout(ViewportState::Wide).len(), 1);
}

#[test]
fn empty_deck_lays_out_nothing() {
    let deck: SlideDeck<u8> = SlideDeck::capture(Vec::new());
    assert!(deck.is_empty());
    assert!(deck.layout(ViewportState::Narrow).is_empty());
    assert_eq!(active_index(&deck.layout(ViewportState::Wide)), None);
}

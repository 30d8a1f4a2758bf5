//! Slide-group partitioning for the responsive carousel.
//!
//! A [`SlideDeck`] captures the authored grouping once at load. Every layout
//! is derived from that capture, never from a previous layout, so repeated
//! reflows cannot drift: card identity and order are fixed at capture time.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use super::viewport::ViewportState;

/// One navigable carousel unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideGroup<C> {
    pub cards: Vec<C>,
    pub active: bool,
}

/// Canonical card sequence plus the authored wide-screen grouping.
#[derive(Clone, Debug)]
pub struct SlideDeck<C> {
    authored: Vec<Vec<C>>,
}

impl<C: Clone> SlideDeck<C> {
    /// Capture the authored grouping. Empty groups are dropped.
    #[must_use]
    pub fn capture(authored: Vec<Vec<C>>) -> Self {
        Self {
            authored: authored.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authored.is_empty()
    }

    /// Total number of cards across all authored groups.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.authored.iter().map(Vec::len).sum()
    }

    /// Canonical card order.
    pub fn cards(&self) -> impl Iterator<Item = &C> {
        self.authored.iter().flatten()
    }

    /// Groups for the given size class, first group active.
    #[must_use]
    pub fn layout(&self, state: ViewportState) -> Vec<SlideGroup<C>> {
        let groups: Vec<Vec<C>> = match state {
            ViewportState::Narrow => self.cards().map(|c| vec![c.clone()]).collect(),
            ViewportState::Wide => self.authored.clone(),
        };
        groups
            .into_iter()
            .enumerate()
            .map(|(i, cards)| SlideGroup { cards, active: i == 0 })
            .collect()
    }
}

/// Flatten groups back into card order.
#[must_use]
pub fn flatten<C: Clone>(groups: &[SlideGroup<C>]) -> Vec<C> {
    groups.iter().flat_map(|g| g.cards.iter().cloned()).collect()
}

/// Index of the active group, if any.
#[must_use]
pub fn active_index<C>(groups: &[SlideGroup<C>]) -> Option<usize> {
    groups.iter().position(|g| g.active)
}

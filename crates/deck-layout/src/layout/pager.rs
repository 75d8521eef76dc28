//! Paging of the flat card sequence

use crate::types::CardPair;

/// One physical sheet's worth of cards, in grid order (row by row)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Zero-based page number within the deck
    pub index: usize,
    pub cards: Vec<CardPair>,
}

impl Page {
    pub fn new(index: usize, cards: Vec<CardPair>) -> Self {
        Self { index, cards }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Split card pairs into pages of `columns * rows` cards.
///
/// Order is preserved and only the final page may be short. An empty
/// input produces no pages.
pub fn build_pages(cards: &[CardPair], columns: usize, rows: usize) -> Vec<Page> {
    let per_page = (columns * rows).max(1);
    cards
        .chunks(per_page)
        .enumerate()
        .map(|(index, chunk)| Page::new(index, chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(count: usize) -> Vec<CardPair> {
        (0..count)
            .map(|i| CardPair::new(format!("front-{i}.png"), None))
            .collect()
    }

    #[test]
    fn test_build_pages_partial_last_page() {
        let pages = build_pages(&cards(12), 2, 5);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].cards.len(), 10);
        assert_eq!(pages[1].cards.len(), 2);
        assert_eq!(pages[1].index, 1);
    }

    #[test]
    fn test_build_pages_is_lossless() {
        for count in [0, 1, 8, 9, 23, 64] {
            let input = cards(count);
            let pages = build_pages(&input, 3, 3);
            assert_eq!(pages.len(), count.div_ceil(9));
            let rebuilt: Vec<CardPair> = pages.into_iter().flat_map(|p| p.cards).collect();
            assert_eq!(rebuilt, input);
        }
    }

    #[test]
    fn test_build_pages_empty() {
        assert!(build_pages(&[], 3, 3).is_empty());
    }
}

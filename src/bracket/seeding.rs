//! Random draw and round layout.
//!
//! Seeding shuffles the field with a Fisher-Yates pass so every ordering
//! is equally likely, then pairs adjacent entrants into matches. The same
//! pairing walk lays out later rounds from a list of winners.

use rand::seq::SliceRandom;

use super::entities::{Competitor, Slot};

/// Shuffle the field into a random seeding order.
pub fn draw(mut competitors: Vec<Competitor>) -> Vec<Competitor> {
    competitors.shuffle(&mut rand::rng());
    competitors
}

/// Pair adjacent entrants into match slots. An entrant left without a
/// partner receives a bye.
pub fn pair_up(entrants: Vec<Competitor>) -> Vec<(Slot, Slot)> {
    let mut pairs = Vec::with_capacity(entrants.len().div_ceil(2));
    let mut entrants = entrants.into_iter();
    while let Some(first) = entrants.next() {
        let second = entrants.next().map_or(Slot::Bye, Slot::Filled);
        pairs.push((Slot::Filled(first), second));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(size: usize) -> Vec<Competitor> {
        (0..size)
            .map(|n| Competitor::new(&format!("Competitor{n}")).unwrap())
            .collect()
    }

    #[test]
    fn test_draw_keeps_every_competitor() {
        let original = field(16);
        let mut drawn = draw(original.clone());
        assert_eq!(drawn.len(), original.len());

        drawn.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_draw_changes_order() {
        let original = field(16);
        let first = draw(original.clone());
        let second = draw(original.clone());

        // Two independent shuffles of 16 entrants landing identically on
        // the original order is vanishingly unlikely.
        let unmoved = |shuffled: &[Competitor]| {
            shuffled
                .iter()
                .zip(original.iter())
                .filter(|(a, b)| a == b)
                .count()
        };
        assert!(unmoved(&first) < 16 || unmoved(&second) < 16);
    }

    #[test]
    fn test_pair_up_even_field() {
        let pairs = pair_up(field(4));
        assert_eq!(pairs.len(), 2);
        for (slot_a, slot_b) in &pairs {
            assert!(slot_a.competitor().is_some());
            assert!(slot_b.competitor().is_some());
        }
    }

    #[test]
    fn test_pair_up_odd_field_gets_bye() {
        let pairs = pair_up(field(3));
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].1.competitor().is_some());
        assert!(pairs[1].1.is_bye());
    }

    #[test]
    fn test_pair_up_preserves_adjacency() {
        let entrants = field(4);
        let pairs = pair_up(entrants.clone());
        assert_eq!(pairs[0].0.competitor(), Some(&entrants[0]));
        assert_eq!(pairs[0].1.competitor(), Some(&entrants[1]));
        assert_eq!(pairs[1].0.competitor(), Some(&entrants[2]));
        assert_eq!(pairs[1].1.competitor(), Some(&entrants[3]));
    }
}

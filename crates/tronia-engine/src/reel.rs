//! Draw → symbol mapping over the weighted reel

use crate::symbols::{Move, MoveSet};

/// Partition of [0, 1) into contiguous closed-open intervals, one per
/// symbol, sized by the symbol's probability and laid out in the weight
/// table's row order. Replays are reproducible because both the order
/// and the bounds are fixed at construction.
#[derive(Debug, Clone)]
pub struct ReelLayout {
    symbols: Vec<Move>,
    /// Cumulative upper bounds; the last entry is forced to exactly 1.0
    /// so floating-point drift cannot open a gap at the top end.
    bounds: Vec<f64>,
}

impl ReelLayout {
    pub fn new(set: &MoveSet) -> Self {
        let mut symbols = Vec::with_capacity(set.rows().len());
        let mut bounds = Vec::with_capacity(set.rows().len());
        let mut acc = 0.0f64;
        for row in set.rows() {
            acc += row.probability;
            symbols.push(row.symbol);
            bounds.push(acc);
        }
        if let Some(last) = bounds.last_mut() {
            *last = 1.0;
        }
        Self { symbols, bounds }
    }

    /// Map a uniform draw in [0, 1) to its symbol: the first interval
    /// whose upper bound exceeds the draw. Draws outside [0, 1) break
    /// the caller contract; the engine only ever consumes draws it
    /// produced itself.
    pub fn from_draw(&self, draw: f64) -> Move {
        debug_assert!((0.0..1.0).contains(&draw), "draw out of range: {draw}");
        for (i, &bound) in self.bounds.iter().enumerate() {
            if draw < bound {
                return self.symbols[i];
            }
        }
        // Unreachable for legal draws: the last bound is exactly 1.0.
        self.symbols[self.symbols.len() - 1]
    }

    /// Interval upper bounds, in symbol order
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Symbols in interval order
    pub fn symbols(&self) -> &[Move] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ReelLayout {
        ReelLayout::new(&MoveSet::standard())
    }

    #[test]
    fn test_bounds_are_contiguous_and_end_at_one() {
        let layout = layout();
        let bounds = layout.bounds();
        let mut prev = 0.0;
        for &bound in bounds {
            assert!(bound > prev);
            prev = bound;
        }
        assert_eq!(*bounds.last().unwrap(), 1.0);
    }

    #[test]
    fn test_zero_maps_to_first_symbol() {
        let layout = layout();
        assert_eq!(layout.from_draw(0.0), layout.symbols()[0]);
    }

    #[test]
    fn test_interval_boundaries_are_closed_open() {
        let layout = layout();
        let bounds = layout.bounds();
        // A draw exactly on a boundary belongs to the interval above it.
        for i in 0..bounds.len() - 1 {
            assert_eq!(layout.from_draw(bounds[i]), layout.symbols()[i + 1]);
        }
        // Just below a boundary still belongs to the interval below.
        for i in 0..bounds.len() - 1 {
            let just_below = bounds[i] - 1e-12;
            assert_eq!(layout.from_draw(just_below), layout.symbols()[i]);
        }
    }

    #[test]
    fn test_every_draw_maps_to_exactly_one_symbol() {
        let layout = layout();
        // Fine grid over [0, 1), including the value closest to 1.
        for step in 0..10_000 {
            let draw = step as f64 / 10_000.0;
            let symbol = layout.from_draw(draw);
            assert!(Move::ALL.contains(&symbol));
        }
        let almost_one = 1.0 - f64::EPSILON;
        assert!(Move::ALL.contains(&layout.from_draw(almost_one)));
    }

    #[test]
    fn test_interval_sizes_match_probabilities() {
        let set = MoveSet::standard();
        let layout = ReelLayout::new(&set);
        let bounds = layout.bounds();
        let mut prev = 0.0;
        for (i, row) in set.rows().iter().enumerate() {
            let width = bounds[i] - prev;
            assert!((width - row.probability).abs() < 1e-9);
            prev = bounds[i];
        }
    }
}

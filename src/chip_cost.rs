//! Minimum cost to stack every chip on one position when a 2-space move is free and a 1-space move costs 1.
//!
//! Any chip can reach any position of the same parity for free, so the only cost is moving the chips of
//! one parity across to the other, one unit each. Moving whichever group is smaller wins.

pub fn min_cost_to_move_chips(positions: &[i64]) -> usize {
    let num_even_chips = positions.iter().filter(|&&chip| chip % 2 == 0).count();
    let num_odd_chips = positions.len() - num_even_chips;
    num_even_chips.min(num_odd_chips)
}

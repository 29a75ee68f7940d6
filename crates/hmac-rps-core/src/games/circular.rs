//! Circular N-move rules.
//!
//! Moves sit on a circle in argument order. Each move loses to the `n / 2`
//! moves that follow it and beats the `n / 2` moves that precede it, so
//! three moves give plain rock-paper-scissors.

use super::traits::{GameRules, Verdict};
use super::MoveSet;

/// Judge `user_move` against `computer_move` on a circle of `n` moves.
///
/// The user loses when the computer's move is between one and `n / 2` steps
/// ahead of the user's move, wrapping modulo `n`, and wins otherwise.
/// `n` must be odd and both indices must be below `n`.
pub fn determine_winner(user_move: usize, computer_move: usize, n: usize) -> Verdict {
    debug_assert!(user_move < n && computer_move < n, "move index out of range");

    if user_move == computer_move {
        return Verdict::Draw;
    }

    let half = n / 2;
    let steps_ahead = (computer_move + n - user_move) % n;

    if (1..=half).contains(&steps_ahead) {
        Verdict::Lose
    } else {
        Verdict::Win
    }
}

/// Circular rules bound to a fixed number of moves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircularRules {
    move_count: usize,
}

impl CircularRules {
    pub fn new(move_count: usize) -> Self {
        Self { move_count }
    }

    /// Rules for every move in `moves`
    pub fn for_moves(moves: &MoveSet) -> Self {
        Self::new(moves.len())
    }
}

impl GameRules for CircularRules {
    fn move_count(&self) -> usize {
        self.move_count
    }

    fn judge(&self, user_move: usize, computer_move: usize) -> Verdict {
        determine_winner(user_move, computer_move, self.move_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROCK: usize = 0;
    const PAPER: usize = 1;
    const SCISSORS: usize = 2;

    /// Wrap-around comparison as first written for the console game.
    fn legacy_winner(user_move: usize, computer_move: usize, n: usize) -> Verdict {
        if user_move == computer_move {
            return Verdict::Draw;
        }
        let half = n / 2;
        if (computer_move > user_move && computer_move <= user_move + half)
            || (computer_move < user_move && computer_move + n <= user_move + half)
        {
            Verdict::Lose
        } else {
            Verdict::Win
        }
    }

    fn odd_sizes() -> impl Iterator<Item = usize> {
        (3..=51).step_by(2)
    }

    #[test]
    fn test_rps_paper_beats_rock() {
        assert_eq!(determine_winner(ROCK, PAPER, 3), Verdict::Lose);
        assert_eq!(determine_winner(PAPER, ROCK, 3), Verdict::Win);
    }

    #[test]
    fn test_rps_scissors_beats_paper() {
        assert_eq!(determine_winner(PAPER, SCISSORS, 3), Verdict::Lose);
        assert_eq!(determine_winner(SCISSORS, PAPER, 3), Verdict::Win);
    }

    #[test]
    fn test_rps_rock_beats_scissors() {
        assert_eq!(determine_winner(SCISSORS, ROCK, 3), Verdict::Lose);
        assert_eq!(determine_winner(ROCK, SCISSORS, 3), Verdict::Win);
    }

    #[test]
    fn test_same_move_draws() {
        for n in odd_sizes() {
            for i in 0..n {
                assert_eq!(determine_winner(i, i, n), Verdict::Draw, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn test_exactly_one_side_wins() {
        for n in odd_sizes() {
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let forward = determine_winner(i, j, n);
                    let backward = determine_winner(j, i, n);
                    assert_ne!(forward, Verdict::Draw);
                    assert_eq!(forward, backward.reversed(), "n={n} i={i} j={j}");
                }
            }
        }
    }

    #[test]
    fn test_five_moves_beat_two_lose_two() {
        let n = 5;
        for i in 0..n {
            let wins = (0..n).filter(|&j| determine_winner(i, j, n) == Verdict::Win).count();
            let losses = (0..n).filter(|&j| determine_winner(i, j, n) == Verdict::Lose).count();
            assert_eq!(wins, 2, "move {i}");
            assert_eq!(losses, 2, "move {i}");
        }
    }

    #[test]
    fn test_every_move_balanced_for_odd_sizes() {
        for n in odd_sizes() {
            let half = n / 2;
            for i in 0..n {
                let wins = (0..n).filter(|&j| determine_winner(i, j, n) == Verdict::Win).count();
                assert_eq!(wins, half, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn test_matches_legacy_wraparound() {
        for n in odd_sizes() {
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(
                        determine_winner(i, j, n),
                        legacy_winner(i, j, n),
                        "n={n} i={i} j={j}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_circular_rules_judge() {
        let rules = CircularRules::new(3);
        assert_eq!(rules.move_count(), 3);
        assert_eq!(rules.judge(ROCK, PAPER), Verdict::Lose);
        assert_eq!(rules.judge(PAPER, ROCK), Verdict::Win);
        assert_eq!(rules.judge(SCISSORS, SCISSORS), Verdict::Draw);
    }
}

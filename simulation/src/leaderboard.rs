//! Reward pool that receives a dead pet's stake.
//!
//! Entries keep insertion order internally; ranking is a display concern only.

use serde::{Deserialize, Serialize};

use crate::components::LeaderboardEntry;
use crate::names;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

/// One row of the ranked view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position.
    pub rank: usize,
    pub name: String,
    pub avatar: String,
    pub balance: f64,
    /// Percentage of the total pool held by this entry.
    pub share_percent: f64,
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    /// Leaderboard seeded with the default roster.
    pub fn with_default_roster() -> Self {
        Self::new(names::default_roster())
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_pool(&self) -> f64 {
        self.entries.iter().map(|e| e.balance).sum()
    }

    /// Split `amount` evenly across every entry.
    ///
    /// Returns the per-entry payout, or `None` if there is nobody to pay.
    pub fn redistribute(&mut self, amount: f64) -> Option<f64> {
        if self.entries.is_empty() || !amount.is_finite() || amount <= 0.0 {
            return None;
        }

        let share = amount / self.entries.len() as f64;
        for entry in &mut self.entries {
            entry.balance += share;
        }
        Some(share)
    }

    /// Entries by descending balance; equal balances keep insertion order.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let total = self.total_pool();
        let mut sorted: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.balance.total_cmp(&a.balance));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                name: entry.name.clone(),
                avatar: entry.avatar.clone(),
                balance: entry.balance,
                share_percent: if total > 0.0 { entry.balance / total * 100.0 } else { 0.0 },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(balances: &[f64]) -> Leaderboard {
        Leaderboard::new(
            balances
                .iter()
                .enumerate()
                .map(|(i, b)| LeaderboardEntry::new(format!("player{}", i), "👾", *b))
                .collect(),
        )
    }

    #[test]
    fn test_redistribute_even_split() {
        let mut lb = board(&[1.0, 2.0, 3.0, 4.0]);
        let before = lb.total_pool();

        let share = lb.redistribute(2.0).unwrap();
        assert!((share - 0.5).abs() < 1e-12);
        assert!((lb.total_pool() - before - 2.0).abs() < 1e-9);
        assert!((lb.entries()[0].balance - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_redistribute_empty_is_noop() {
        let mut lb = Leaderboard::default();
        assert_eq!(lb.redistribute(1.0), None);
        assert!(lb.is_empty());
    }

    #[test]
    fn test_ranked_is_stable_descending() {
        let lb = board(&[3.0, 5.0, 3.0, 1.0]);
        let ranked = lb.ranked();

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["player1", "player0", "player2", "player3"]);
        assert_eq!(ranked[0].rank, 1);
        assert!((ranked.iter().map(|r| r.share_percent).sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_share_percent_of_empty_pool() {
        let lb = board(&[0.0, 0.0]);
        assert!(lb.ranked().iter().all(|r| r.share_percent == 0.0));
    }
}

//! Display names and glyphs
//!
//! Starting leaderboard roster and per-species mood glyphs.

use crate::components::{LeaderboardEntry, Mood, Species};

/// Reward recipients every session starts with: (name, avatar, balance)
const DEFAULT_ROSTER: &[(&str, &str, f64)] = &[
    ("0xDead...Beef", "👾", 12.5),
    ("0xCafe...Babe", "🤖", 8.2),
    ("0xFeed...Face", "👽", 5.7),
    ("0xC0de...D00d", "🎮", 3.1),
    ("0xB00B...1337", "🕹️", 1.8),
];

pub fn default_roster() -> Vec<LeaderboardEntry> {
    DEFAULT_ROSTER
        .iter()
        .map(|&(name, avatar, balance)| LeaderboardEntry::new(name, avatar, balance))
        .collect()
}

/// Glyph shown for a species in a given mood
pub fn mood_glyph(species: Species, mood: Mood) -> &'static str {
    let glyphs: [&str; 4] = match species {
        Species::Glitch => ["👾", "💀", "😈", "🤪"],
        Species::Neon => ["🤖", "🔋", "⚡", "😴"],
        Species::Pixel => ["👽", "🛸", "✨", "💫"],
        Species::Cyber => ["🎮", "🕹️", "🎯", "🔥"],
    };
    match mood {
        Mood::Happy => glyphs[0],
        Mood::Okay => glyphs[1],
        Mood::Sad => glyphs[2],
        Mood::Critical => glyphs[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].name, "0xDead...Beef");
        assert!(roster.iter().all(|e| e.balance > 0.0));
    }

    #[test]
    fn test_mood_glyphs() {
        assert_eq!(mood_glyph(Species::Glitch, Mood::Happy), "👾");
        assert_eq!(mood_glyph(Species::Cyber, Mood::Critical), "🔥");
    }
}

//! Static IPL dataset served to every session.
//!
//! The dataset is a fixed read-only lookup table with no update path. It is
//! constructed once at startup and shared across sessions behind an `Arc`;
//! because nothing mutates it after construction, no locking is required.

use std::collections::HashMap;

/// Immutable team, schedule, and player data.
#[derive(Debug, Clone)]
pub struct Dataset {
    teams: Vec<String>,
    schedule: Vec<String>,
    players: HashMap<String, String>,
}

impl Dataset {
    /// Builds the dataset from its constituent tables.
    #[must_use]
    pub fn new(
        teams: Vec<String>,
        schedule: Vec<String>,
        players: HashMap<String, String>,
    ) -> Self {
        Self {
            teams,
            schedule,
            players,
        }
    }

    /// The sample dataset the server ships with.
    #[must_use]
    pub fn sample() -> Self {
        let teams = ["MI", "CSK", "RCB", "KKR", "SRH", "DC", "RR", "PBKS"]
            .map(String::from)
            .to_vec();
        let schedule = [
            "MI vs CSK - 1st April 7:30 PM",
            "RCB vs KKR - 2nd April 7:30 PM",
            "SRH vs DC - 3rd April 7:30 PM",
        ]
        .map(String::from)
        .to_vec();
        let players = [
            ("Rohit", "Rohit Sharma - MI Captain, Opener"),
            ("Dhoni", "MS Dhoni - CSK Captain, Wicketkeeper"),
            ("Virat", "Virat Kohli - RCB Captain, Batsman"),
            ("Andre", "Andre Russell - KKR All-rounder"),
        ]
        .into_iter()
        .map(|(name, info)| (name.to_string(), info.to_string()))
        .collect();
        Self::new(teams, schedule, players)
    }

    /// Team codes in their fixed order.
    #[must_use]
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Fixture descriptions in their fixed order.
    #[must_use]
    pub fn schedule(&self) -> &[String] {
        &self.schedule
    }

    /// Looks up a player by exact, case-sensitive key.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&str> {
        self.players.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teams_keep_their_fixed_order() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.teams().first().map(String::as_str), Some("MI"));
        assert_eq!(dataset.teams().last().map(String::as_str), Some("PBKS"));
        assert_eq!(dataset.teams().len(), 8);
    }

    #[test]
    fn player_lookup_is_case_sensitive() {
        let dataset = Dataset::sample();
        assert!(dataset.player("Rohit").is_some());
        assert!(dataset.player("rohit").is_none());
        assert!(dataset.player("ROHIT").is_none());
    }
}

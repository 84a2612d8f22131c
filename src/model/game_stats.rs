use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Lifetime record for one game, stored as camelCase JSON.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    pub games_played: u32,
    pub best_score: u32,
    pub total_score: u64,
    pub last_played: Option<DateTime<Utc>>,
}

impl GameStats {
    /// Folds one completed play into the record.
    pub fn recorded(&self, score: u32, now: DateTime<Utc>) -> GameStats {
        GameStats {
            games_played: self.games_played.saturating_add(1),
            best_score: self.best_score.max(score),
            total_score: self.total_score.saturating_add(u64::from(score)),
            last_played: Some(now),
        }
    }

    pub fn has_plays(&self) -> bool {
        self.games_played > 0
    }

    /// Rounded mean score; zero before the first play.
    pub fn average_score(&self) -> u64 {
        if self.games_played == 0 {
            return 0;
        }
        let games = u64::from(self.games_played);
        (self.total_score + games / 2) / games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_recorded_updates_all_fields() {
        let now = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap();
        let stats = GameStats::default().recorded(7, now).recorded(4, now);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.best_score, 7);
        assert_eq!(stats.total_score, 11);
        assert_eq!(stats.last_played, Some(now));
    }

    #[test]
    fn test_average_rounds_half_up() {
        let stats = GameStats {
            games_played: 2,
            best_score: 6,
            total_score: 11,
            last_played: None,
        };
        assert_eq!(stats.average_score(), 6);
        assert_eq!(GameStats::default().average_score(), 0);
    }

    #[test]
    fn test_json_layout_is_camel_case() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let stats = GameStats::default().recorded(3, now);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["gamesPlayed"], 1);
        assert_eq!(json["bestScore"], 3);
        assert_eq!(json["totalScore"], 3);
        assert_eq!(json["lastPlayed"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let stats: GameStats = serde_json::from_str(r#"{"gamesPlayed": 3}"#).unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.best_score, 0);
        assert!(stats.last_played.is_none());
    }
}

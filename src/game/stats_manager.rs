use crate::model::{GameId, GameStats};
use crate::storage::{self, KeyValueStore};
use chrono::{DateTime, Utc};
use log::info;
use std::collections::HashMap;
use std::rc::Rc;

pub const STATS_KEY_PREFIX: &str = "enissa_stats_";

pub fn stats_key(game: GameId) -> String {
    format!("{STATS_KEY_PREFIX}{}", game.key())
}

/// Per-game lifetime statistics backed by the key-value store.
pub struct StatsManager {
    store: Rc<dyn KeyValueStore>,
    stats: HashMap<GameId, GameStats>,
}

impl StatsManager {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let mut manager = Self {
            store,
            stats: HashMap::new(),
        };
        manager.load_all();
        manager
    }

    fn load_all(&mut self) {
        for game in GameId::all().into_iter().filter(GameId::is_scored) {
            if let Some(stats) = storage::load_json::<GameStats>(self.store.as_ref(), &stats_key(game)) {
                self.stats.insert(game, stats);
            }
        }
    }

    pub fn record(&mut self, game: GameId, score: u32) -> storage::Result<GameStats> {
        self.record_at(game, score, Utc::now())
    }

    pub fn record_at(
        &mut self,
        game: GameId,
        score: u32,
        now: DateTime<Utc>,
    ) -> storage::Result<GameStats> {
        // another window may have written since we loaded
        let current = storage::load_json::<GameStats>(self.store.as_ref(), &stats_key(game))
            .or_else(|| self.stats.get(&game).cloned())
            .unwrap_or_default();
        let updated = current.recorded(score, now);

        storage::save_json(self.store.as_ref(), &stats_key(game), &updated)?;
        info!(
            target: "stats",
            "Recorded {} for {}: {} plays, best {}",
            score, game, updated.games_played, updated.best_score
        );
        self.stats.insert(game, updated.clone());
        Ok(updated)
    }

    /// Forgets every game's statistics, in memory and in the store.
    pub fn reset_all(&mut self) -> storage::Result<()> {
        for game in GameId::all().into_iter().filter(GameId::is_scored) {
            self.store.remove(&stats_key(game))?;
            self.stats.remove(&game);
        }
        info!(target: "stats", "Statistics reset");
        Ok(())
    }

    /// `None` until the game has been completed once.
    pub fn get(&self, game: GameId) -> Option<&GameStats> {
        self.stats.get(&game).filter(|stats| stats.has_plays())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn manager() -> (Rc<MemoryStore>, StatsManager) {
        let store = Rc::new(MemoryStore::new());
        let manager = StatsManager::new(store.clone());
        (store, manager)
    }

    #[test]
    fn test_no_stats_before_first_play() {
        let (_, manager) = manager();
        assert!(manager.get(GameId::Math).is_none());
    }

    #[test]
    fn test_record_creates_then_updates() {
        let (store, mut manager) = manager();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        manager.record_at(GameId::Memory, 80, now).unwrap();
        let stats = manager.record_at(GameId::Memory, 60, now).unwrap();

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.best_score, 80);
        assert_eq!(stats.total_score, 140);
        assert_eq!(manager.get(GameId::Memory), Some(&stats));

        let raw = store.get("enissa_stats_memory").unwrap().unwrap();
        assert!(raw.contains("\"gamesPlayed\":2"));
    }

    #[test]
    fn test_stats_are_loaded_from_store() {
        let store = Rc::new(MemoryStore::new());
        store
            .set(
                "enissa_stats_focus",
                r#"{"gamesPlayed":4,"bestScore":21,"totalScore":60,"lastPlayed":"2024-05-01T10:00:00Z"}"#,
            )
            .unwrap();

        let manager = StatsManager::new(store);
        let stats = manager.get(GameId::Focus).unwrap();
        assert_eq!(stats.best_score, 21);
        assert_eq!(stats.average_score(), 15);
    }

    #[test]
    fn test_games_are_independent() {
        let (_, mut manager) = manager();
        manager.record(GameId::Puzzle, 900).unwrap();
        assert!(manager.get(GameId::Puzzle).is_some());
        assert!(manager.get(GameId::Reading).is_none());
    }

    #[test]
    fn test_reset_all_forgets_stored_stats() {
        let (store, mut manager) = manager();
        manager.record(GameId::Math, 7).unwrap();
        manager.record(GameId::Focus, 18).unwrap();

        manager.reset_all().unwrap();

        assert!(manager.get(GameId::Math).is_none());
        assert!(manager.get(GameId::Focus).is_none());
        assert_eq!(store.get("enissa_stats_math").unwrap(), None);
        assert!(StatsManager::new(store).get(GameId::Focus).is_none());
    }
}

use super::helpers::{chip, hbox, subheading, vbox};
use crate::game::stats_manager::StatsManager;
use crate::model::GameId;
use chrono::Local;
use gtk4::prelude::*;

/// Lifetime stats for one game, or `None` before its first finished play.
pub fn stats_panel(stats: &StatsManager, game: GameId) -> Option<gtk4::Box> {
    let record = stats.get(game).filter(|record| record.has_plays())?;

    let panel = vbox(6);
    panel.add_css_class("card");
    panel.append(&subheading("📊 Deine Statistik"));

    let row = hbox(8);
    row.append(&chip(&format!("Gespielt: {}", record.games_played)));
    row.append(&chip(&format!("Bestwert: {}", record.best_score)));
    row.append(&chip(&format!("Durchschnitt: {}", record.average_score())));
    panel.append(&row);

    if let Some(last_played) = record.last_played {
        let date = last_played.with_timezone(&Local).format("%d.%m.%Y %H:%M");
        panel.append(&gtk4::Label::new(Some(&format!("Zuletzt gespielt: {date}"))));
    }
    Some(panel)
}

//! Catch journal — a running record of everything the player has landed,
//! exportable to JSON next to the executable (F12).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::shared::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchRecord {
    pub species: String,
    pub value: u32,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatchJournal {
    pub catches: Vec<CatchRecord>,
}

impl CatchJournal {
    pub fn total_value(&self) -> u32 {
        self.catches.iter().map(|c| c.value).sum()
    }
}

pub fn record_catches(
    mut events: EventReader<FishCaughtEvent>,
    mut journal: ResMut<CatchJournal>,
) {
    for ev in events.read() {
        journal.catches.push(CatchRecord {
            species: ev.species.clone(),
            value: ev.value,
        });
    }
}

fn journal_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("catch_journal.json")
}

pub fn handle_journal_export(
    input: Res<PlayerInput>,
    journal: Res<CatchJournal>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    if !input.export_journal {
        return;
    }

    let path = journal_path();
    match serde_json::to_string_pretty(&*journal) {
        Ok(json) => match fs::write(&path, json) {
            Ok(()) => {
                notifications.send(NotificationEvent::new(format!(
                    "Catch journal exported ({} catches).",
                    journal.catches.len()
                )));
                info!("[Fishing] Journal written to {:?}", path);
            }
            Err(error) => {
                warn!("[Fishing] Could not write journal: {}", error);
                notifications.send(NotificationEvent::new("Could not export the journal."));
            }
        },
        Err(error) => {
            warn!("[Fishing] Could not serialize journal: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_totals_catches() {
        let mut journal = CatchJournal::default();
        journal.catches.push(CatchRecord {
            species: "Bass".into(),
            value: 31,
        });
        journal.catches.push(CatchRecord {
            species: "Tuna".into(),
            value: 44,
        });
        assert_eq!(journal.total_value(), 75);
    }

    #[test]
    fn test_journal_round_trips_through_json() {
        let mut journal = CatchJournal::default();
        journal.catches.push(CatchRecord {
            species: "Salmon".into(),
            value: 27,
        });
        let json = serde_json::to_string(&journal).unwrap();
        let back: CatchJournal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.catches.len(), 1);
        assert_eq!(back.catches[0].species, "Salmon");
    }
}

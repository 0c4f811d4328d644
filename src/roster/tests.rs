use std::env;
use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;

use tinyrand::StdRand;

use crate::event::{CutResult, ShotType};
use crate::testing::random_roster;

use super::*;

fn roster_of(names: &[&str]) -> Roster {
    let mut roster = Roster::default();
    for name in names {
        roster.add_player(name).unwrap();
    }
    roster
}

fn scratch_path(name: &str) -> std::path::PathBuf {
    let dir = env::temp_dir().join(format!("courtside-roster-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join("roster.json")
}

#[test]
fn add_player() {
    let mut roster = Roster::default();
    let player = roster.add_player("  Ada ").unwrap();
    assert_eq!("Ada", player.name());
    assert_eq!(vec!["Ada"], roster.names().collect::<Vec<_>>());
    assert_eq!(1, roster.len());
}

#[test]
fn add_duplicate_player() {
    let mut roster = roster_of(&["Ada"]);
    roster.record("Ada", "assist").unwrap();
    assert_eq!(
        RosterError::DuplicateName("Ada".into()),
        roster.add_player("Ada").unwrap_err()
    );
    assert_eq!(1, roster.player("Ada").unwrap().assists());
}

#[test]
fn add_blank_player() {
    let mut roster = Roster::default();
    for name in ["", "   ", "\t"] {
        assert!(matches!(
            roster.add_player(name),
            Err(RosterError::InvalidInput(_))
        ));
    }
    assert!(roster.is_empty());
}

#[test]
fn remove_player() {
    let mut roster = roster_of(&["Ada", "Bea"]);
    let removed = roster.remove_player("Ada").unwrap();
    assert_eq!("Ada", removed.name());
    assert_eq!(vec!["Bea"], roster.names().collect::<Vec<_>>());
}

#[test]
fn remove_missing_player() {
    let mut roster = roster_of(&["Ada"]);
    roster.record("Ada", "rebound").unwrap();
    let before = roster.clone();
    assert_eq!(
        RosterError::NotFound("Cy".into()),
        roster.remove_player("Cy").unwrap_err()
    );
    assert_eq!(before, roster);
}

#[test]
fn rename_player_keeps_tallies() {
    let mut roster = roster_of(&["Ada"]);
    roster.record("Ada", "shot:3pt:made").unwrap();
    roster.rename_player("Ada", "Adaline").unwrap();

    assert_eq!(
        RosterError::NotFound("Ada".into()),
        roster.player("Ada").unwrap_err()
    );
    let renamed = roster.player("Adaline").unwrap();
    assert_eq!("Adaline", renamed.name());
    assert_eq!(3, renamed.points());
    assert_eq!(1, renamed.event_history().len());
}

#[test]
fn rename_errors() {
    let mut roster = roster_of(&["Ada", "Bea"]);
    assert_eq!(
        RosterError::NotFound("Cy".into()),
        roster.rename_player("Cy", "Dee").unwrap_err()
    );
    assert_eq!(
        RosterError::DuplicateName("Bea".into()),
        roster.rename_player("Ada", "Bea").unwrap_err()
    );
    assert!(matches!(
        roster.rename_player("Ada", " "),
        Err(RosterError::InvalidInput(_))
    ));
    assert_eq!(vec!["Ada", "Bea"], roster.names().collect::<Vec<_>>());
}

#[test]
fn rename_to_same_name() {
    let mut roster = roster_of(&["Ada"]);
    roster.rename_player("Ada", "Ada").unwrap();
    assert_eq!(vec!["Ada"], roster.names().collect::<Vec<_>>());
}

#[test]
fn record_event() {
    let mut roster = roster_of(&["Ada"]);
    roster
        .record_event(
            "Ada",
            Event::Cut {
                result: CutResult::Made,
            },
        )
        .unwrap();
    let event = roster.record("Ada", "shot:midrange:made:contested").unwrap();
    assert_eq!(
        Event::Shot {
            shot_type: ShotType::Midrange,
            made: true,
            contested: true
        },
        event
    );
    let ada = roster.player("Ada").unwrap();
    assert_eq!(4, ada.points());
    assert_eq!(1, ada.cuts().made_shot);
    assert_eq!(1, ada.shot(&ShotType::Midrange).contested_made);
}

#[test]
fn record_for_missing_player() {
    let mut roster = roster_of(&["Ada"]);
    assert_eq!(
        RosterError::NotFound("Bea".into()),
        roster.record("Bea", "assist").unwrap_err()
    );
    assert_eq!(
        RosterError::NotFound("Bea".into()),
        roster.record_event("Bea", Event::Assist).unwrap_err()
    );
}

#[test]
fn record_unrecognised_kind() {
    let mut roster = roster_of(&["Ada"]);
    let before = roster.clone();
    assert_eq!(
        RosterError::InvalidInput("unrecognised event kind 'steal'".into()),
        roster.record("Ada", "steal").unwrap_err()
    );
    assert_eq!(before, roster);
}

#[test]
fn undo_last() {
    let mut roster = roster_of(&["Ada"]);
    assert_eq!(None, roster.undo_last("Ada").unwrap());
    roster.record("Ada", "paint:made").unwrap();
    roster.record("Ada", "assist").unwrap();
    assert_eq!(Some(Event::Assist), roster.undo_last("Ada").unwrap());
    let ada = roster.player("Ada").unwrap();
    assert_eq!(0, ada.assists());
    assert_eq!(2, ada.points());
    assert_eq!(
        RosterError::NotFound("Bea".into()),
        roster.undo_last("Bea").unwrap_err()
    );
}

#[test]
fn edit_total() {
    let mut roster = roster_of(&["Ada"]);
    roster.edit_total("Ada", "rebounds", " 12 ").unwrap();
    roster.edit_total("Ada", "Turnovers", "3").unwrap();
    let ada = roster.player("Ada").unwrap();
    assert_eq!(12, ada.rebounds());
    assert_eq!(3, ada.turnovers());
}

#[test]
fn edit_total_rejects_bad_input() {
    let mut roster = roster_of(&["Ada"]);
    let before = roster.clone();
    for (stat, value) in [
        ("assists", "many"),
        ("assists", "-1"),
        ("assists", "2.5"),
        ("points", "10"),
        ("steals", "1"),
    ] {
        assert!(
            matches!(
                roster.edit_total("Ada", stat, value),
                Err(RosterError::InvalidInput(_))
            ),
            "{stat}={value}"
        );
    }
    assert_eq!(before, roster);
    assert_eq!(
        RosterError::NotFound("Bea".into()),
        roster.edit_total("Bea", "assists", "1").unwrap_err()
    );
}

#[test]
fn restore_replaces_wholesale() {
    let mut roster = roster_of(&["Ada", "Bea"]);
    let replacement = roster_of(&["Cy"]);
    roster.restore(replacement.clone());
    assert_eq!(replacement, roster);
}

#[test]
fn serde_round_trip() {
    let roster = random_roster(&mut StdRand::default(), 6, 120);
    let json = serde_json::to_string(&roster).unwrap();
    let restored: Roster = serde_json::from_str(&json).unwrap();
    assert_eq!(roster, restored);
}

#[test]
fn deserialise_keys_names() {
    let roster: Roster =
        serde_json::from_str(r#"{"Ada": {"name": "Bob", "assists": 1}, "Cy": {}}"#).unwrap();
    assert_eq!("Ada", roster.player("Ada").unwrap().name());
    assert_eq!(1, roster.player("Ada").unwrap().assists());
    assert_eq!("Cy", roster.player("Cy").unwrap().name());
    assert_eq!(0, roster.player("Cy").unwrap().total_shots());
}

#[test]
fn deserialise_legacy_document() {
    let roster: Roster = serde_json::from_str(
        r#"{
            "Ada": {
                "name": "Ada",
                "shots": {
                    "layup": {"made": 2, "missed": 0, "contested_made": 1, "contested_missed": 0},
                    "3pt": {"made": 0, "missed": 1}
                },
                "assists": 1,
                "turnovers": 1,
                "rebounds": 0,
                "points": 4,
                "strike_zone": {"balls": 2, "strikes": 0},
                "cuts": {"total": 1, "pass_to_cutter": 1},
                "defense": {"contested_missed": 3}
            }
        }"#,
    )
    .unwrap();
    let ada = roster.player("Ada").unwrap();
    assert_eq!(4, ada.points());
    assert_eq!(3, ada.total_shots());
    assert_eq!(0.667, ada.calc_ts());
    assert_eq!(2, ada.strike_zone().balls.total);
    assert_eq!(1, ada.cuts().pass_to_cutter);
    assert_eq!(0, ada.paint_touches().total);
    assert_eq!(3, ada.defense().contested_missed);
}

#[test]
fn deserialise_malformed_document() {
    assert!(serde_json::from_str::<Roster>(r#"{"Ada": {"assists": "lots"}}"#).is_err());
    assert!(serde_json::from_str::<Roster>("[1, 2]").is_err());
}

#[test]
fn deserialise_skips_blank_names() {
    let roster: Roster =
        serde_json::from_str(r#"{"": {"assists": 1}, "  ": {}, "Ada": {"rebounds": 2}}"#).unwrap();
    assert_eq!(vec!["Ada"], roster.names().collect::<Vec<_>>());
    assert_eq!(2, roster.player("Ada").unwrap().rebounds());
}

#[test]
fn huge_counters_saturate() {
    let roster: Roster = serde_json::from_str(
        r#"{
            "Ada": {"shots": {"layup": {"made": 3000000000, "missed": 3000000000}}, "points": 3000000000},
            "Bea": {"assists": 3000000000, "turnovers": 3000000000},
            "Cy": {"assists": 3000000000, "rebounds": 4294967295}
        }"#,
    )
    .unwrap();
    let ada = roster.player("Ada").unwrap();
    assert_eq!(u32::MAX, ada.total_shots());
    assert_eq!(u32::MAX, ada.possessions_used());
    assert_eq!(u32::MAX, roster.team_possessions());

    let totals = roster.aggregate_team_totals();
    assert_eq!(u32::MAX, totals.assists);
    assert_eq!(3_000_000_000, totals.shots_made);

    let pct = roster.team_percentage();
    assert!((0.0..=100.0).contains(&pct), "pct: {pct}");
    assert_eq!(roster.export().len(), 4);
}

#[test]
fn record_onto_maxed_total() {
    let mut roster = roster_of(&["Ada"]);
    roster.edit_total("Ada", "assists", "4294967295").unwrap();
    roster.record("Ada", "assist").unwrap();
    assert_eq!(u32::MAX, roster.player("Ada").unwrap().assists());
    let pct = roster.team_percentage();
    assert!((0.0..=100.0).contains(&pct), "pct: {pct}");
}

#[test]
fn save_and_load() {
    let path = scratch_path("save_and_load");
    let roster = random_roster(&mut StdRand::default(), 4, 50);
    roster.save(&path).unwrap();
    assert_eq!(roster, Roster::load(&path).unwrap());
    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn failed_save_leaves_roster_unchanged() {
    let roster = roster_of(&["Ada"]);
    let before = roster.clone();
    let path = env::temp_dir()
        .join(format!("courtside-absent-{}", std::process::id()))
        .join("nested")
        .join("roster.json");
    assert!(roster.save(&path).is_err());
    assert_eq!(before, roster);
}

#[test]
fn failed_load_keeps_current_roster() {
    let path = scratch_path("failed_load");
    fs::write(&path, "{\"Ada\": ").unwrap();
    let mut roster = roster_of(&["Bea"]);
    let before = roster.clone();
    if let Ok(loaded) = Roster::load(&path) {
        roster.restore(loaded);
    }
    assert_eq!(before, roster);
    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn shared_behind_mutex() {
    let roster = Arc::new(Mutex::new(roster_of(&["Ada"])));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let roster = Arc::clone(&roster);
            thread::spawn(move || {
                for _ in 0..25 {
                    roster.lock().unwrap().record("Ada", "assist").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let roster = roster.lock().unwrap();
    assert_eq!(100, roster.player("Ada").unwrap().assists());
    assert_eq!(100, roster.player("Ada").unwrap().event_history().len());
}

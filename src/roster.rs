//! The [Roster] owns every [PlayerRecord], keyed by a unique player name, and is the entry point
//! for front ends: adding, removing and renaming players, recording events, and persisting the lot.
//!
//! Mutations take `&mut self`, so a roster has a single writer at a time. Callers sharing a roster
//! across threads wrap it in a `Mutex`.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::error::RosterError;
use crate::event::Event;
use crate::file::{FromJsonFile, WriteJsonFile};
use crate::player::{PlayerRecord, TotalStat};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, PlayerRecord>")]
pub struct Roster {
    players: BTreeMap<String, PlayerRecord>,
}

impl From<BTreeMap<String, PlayerRecord>> for Roster {
    fn from(mut players: BTreeMap<String, PlayerRecord>) -> Self {
        players.retain(|name, _| {
            let valid = validate_name(name).is_ok();
            if !valid {
                warn!("skipping player with blank name '{name}'");
            }
            valid
        });
        for (name, player) in &mut players {
            if player.name != *name {
                player.name.clone_from(name);
            }
        }
        Self { players }
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.players.serialize(serializer)
    }
}

fn validate_name(name: &str) -> Result<&str, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        Err(RosterError::invalid_input("player name cannot be empty"))
    } else {
        Ok(name)
    }
}

impl Roster {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in name order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values()
    }

    /// Player names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    pub fn player(&self, name: &str) -> Result<&PlayerRecord, RosterError> {
        self.players
            .get(name)
            .ok_or_else(|| RosterError::NotFound(name.to_owned()))
    }

    fn player_mut(&mut self, name: &str) -> Result<&mut PlayerRecord, RosterError> {
        self.players
            .get_mut(name)
            .ok_or_else(|| RosterError::NotFound(name.to_owned()))
    }

    /// Adds an empty record. Surrounding whitespace is stripped from the name.
    pub fn add_player(&mut self, name: &str) -> Result<&mut PlayerRecord, RosterError> {
        let name = validate_name(name)?;
        if self.players.contains_key(name) {
            return Err(RosterError::DuplicateName(name.to_owned()));
        }
        debug!("adding player '{name}'");
        Ok(self
            .players
            .entry(name.to_owned())
            .or_insert_with(|| PlayerRecord::new(name)))
    }

    /// Removes a player, discarding their tallies.
    pub fn remove_player(&mut self, name: &str) -> Result<PlayerRecord, RosterError> {
        let removed = self
            .players
            .remove(name)
            .ok_or_else(|| RosterError::NotFound(name.to_owned()))?;
        debug!("removed player '{name}'");
        Ok(removed)
    }

    /// Renames a player, keeping their tallies. Renaming a player to their current name is a no-op.
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<(), RosterError> {
        let new = validate_name(new)?;
        if !self.players.contains_key(old) {
            return Err(RosterError::NotFound(old.to_owned()));
        }
        if old == new {
            return Ok(());
        }
        if self.players.contains_key(new) {
            return Err(RosterError::DuplicateName(new.to_owned()));
        }
        if let Some(mut player) = self.players.remove(old) {
            player.name = new.to_owned();
            self.players.insert(new.to_owned(), player);
        }
        debug!("renamed player '{old}' to '{new}'");
        Ok(())
    }

    pub fn record_event(&mut self, name: &str, event: Event) -> Result<(), RosterError> {
        let player = self.player_mut(name)?;
        debug!("recording {event} for '{name}'");
        player.apply(event);
        Ok(())
    }

    /// Parses an event in its textual notation (see [crate::event]) and records it.
    pub fn record(&mut self, name: &str, notation: &str) -> Result<Event, RosterError> {
        self.player(name)?;
        let event = Event::from_str(notation)?;
        self.record_event(name, event.clone())?;
        Ok(event)
    }

    /// Reverts the player's most recent event. `Ok(None)` if there is nothing to undo.
    pub fn undo_last(&mut self, name: &str) -> Result<Option<Event>, RosterError> {
        let undone = self.player_mut(name)?.undo_last();
        match &undone {
            Some(event) => debug!("undid {event} for '{name}'"),
            None => debug!("nothing to undo for '{name}'"),
        }
        Ok(undone)
    }

    /// Overwrites a directly editable total (`assists`, `turnovers` or `rebounds`) from text input.
    pub fn edit_total(&mut self, name: &str, stat: &str, value: &str) -> Result<(), RosterError> {
        let player = self.player_mut(name)?;
        let stat = TotalStat::from_str(stat.trim())
            .map_err(|_| RosterError::invalid_input(format!("'{stat}' is not an editable total")))?;
        let value = value
            .trim()
            .parse()
            .map_err(|_| RosterError::invalid_input(format!("malformed {stat} value '{value}'")))?;
        debug!("setting {stat} of '{name}' to {value}");
        player.set_total(stat, value);
        Ok(())
    }

    /// Replaces the entire roster.
    pub fn restore(&mut self, roster: Roster) {
        info!("restoring roster of {} players", roster.len());
        *self = roster;
    }

    /// Loads a roster from a JSON file. Absent fields default to zero.
    pub fn load(path: impl AsRef<Path>) -> Result<Roster, io::Error> {
        let path = path.as_ref();
        let roster = Roster::from_json_file(path)?;
        info!("loaded {} players from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Saves the roster as JSON. The previous file is left intact if the save fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), io::Error> {
        let path = path.as_ref();
        self.write_json_file(path)?;
        info!("saved {} players to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests;

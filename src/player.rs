//! A [PlayerRecord] holds one player's cumulative tallies. Tallies only change through the
//! recording operations, each of which is applied as a typed [Event] and appended to the player's
//! event history. `points` is maintained alongside the event that produced it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

use crate::event::{CutResult, Event, PaintResult, ShotType, StrikeKind};
use crate::metrics::{round_to, Metrics};
use crate::tally::{
    decrement, increment, saturating_sum, Cuts, Defense, PaintTouches, PassTally, ShotTally,
    StrikeZone,
};

/// Multiplier applied to the PER proxy.
const PER_SCALE: f64 = 15.0;

/// Multiplier applied to the BPM proxy.
const BPM_SCALE: f64 = 10.0;

/// Totals that may be overwritten directly, outside of event recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TotalStat {
    Assists,
    Turnovers,
    Rebounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default = "tracked_shots")]
    pub(crate) shots: BTreeMap<String, ShotTally>,
    #[serde(default)]
    pub(crate) assists: u32,
    #[serde(default)]
    pub(crate) turnovers: u32,
    #[serde(default)]
    pub(crate) rebounds: u32,
    #[serde(default)]
    pub(crate) points: u32,
    #[serde(default)]
    pub(crate) strike_zone: StrikeZone,
    #[serde(default)]
    pub(crate) cuts: Cuts,
    #[serde(default)]
    pub(crate) paint_touches: PaintTouches,
    #[serde(default)]
    pub(crate) defense: Defense,
    #[serde(default)]
    pub(crate) event_history: Vec<Event>,
}

fn tracked_shots() -> BTreeMap<String, ShotTally> {
    ShotType::TRACKED
        .iter()
        .map(|shot_type| (shot_type.label().to_owned(), ShotTally::default()))
        .collect()
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shots: tracked_shots(),
            assists: 0,
            turnovers: 0,
            rebounds: 0,
            points: 0,
            strike_zone: StrikeZone::default(),
            cuts: Cuts::default(),
            paint_touches: PaintTouches::default(),
            defense: Defense::default(),
            event_history: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shots(&self) -> &BTreeMap<String, ShotTally> {
        &self.shots
    }

    /// Tally for the given shot type; all zeros if nothing has been recorded against it.
    pub fn shot(&self, shot_type: &ShotType) -> ShotTally {
        self.shots
            .get(shot_type.label())
            .copied()
            .unwrap_or_default()
    }

    pub fn assists(&self) -> u32 {
        self.assists
    }

    pub fn turnovers(&self) -> u32 {
        self.turnovers
    }

    pub fn rebounds(&self) -> u32 {
        self.rebounds
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn strike_zone(&self) -> &StrikeZone {
        &self.strike_zone
    }

    pub fn cuts(&self) -> &Cuts {
        &self.cuts
    }

    pub fn paint_touches(&self) -> &PaintTouches {
        &self.paint_touches
    }

    pub fn defense(&self) -> &Defense {
        &self.defense
    }

    pub fn event_history(&self) -> &[Event] {
        &self.event_history
    }

    pub fn record_shot(&mut self, shot_type: ShotType, made: bool, contested: bool) {
        self.apply(Event::Shot {
            shot_type,
            made,
            contested,
        });
    }

    pub fn record_assist(&mut self) {
        self.apply(Event::Assist);
    }

    pub fn record_turnover(&mut self) {
        self.apply(Event::Turnover);
    }

    pub fn record_rebound(&mut self) {
        self.apply(Event::Rebound);
    }

    pub fn record_strike_pass(&mut self, kind: StrikeKind) {
        self.apply(Event::StrikePass { kind, made: None });
    }

    /// Records a strike-zone pass together with the outcome of the shot that followed it.
    pub fn record_strike_pass_result(&mut self, kind: StrikeKind, made: bool) {
        self.apply(Event::StrikePass {
            kind,
            made: Some(made),
        });
    }

    pub fn record_cut(&mut self, result: CutResult) {
        self.apply(Event::Cut { result });
    }

    pub fn record_paint_touch(&mut self, result: PaintResult) {
        self.apply(Event::PaintTouch { result });
    }

    pub fn record_defense(&mut self, contested: bool, made: bool) {
        self.apply(Event::Defense { contested, made });
    }

    /// Tallies the event and appends it to the history.
    pub fn apply(&mut self, event: Event) {
        self.tally(&event);
        self.event_history.push(event);
    }

    /// Reverts the most recent event, returning it. `None` if the history is empty.
    pub fn undo_last(&mut self) -> Option<Event> {
        let event = self.event_history.pop()?;
        self.untally(&event);
        Some(event)
    }

    /// Overwrites one of the directly editable totals.
    pub fn set_total(&mut self, stat: TotalStat, value: u32) {
        match stat {
            TotalStat::Assists => self.assists = value,
            TotalStat::Turnovers => self.turnovers = value,
            TotalStat::Rebounds => self.rebounds = value,
        }
    }

    fn strike_zone_mut(&mut self, kind: &StrikeKind) -> Option<&mut PassTally> {
        match kind {
            StrikeKind::Balls => Some(&mut self.strike_zone.balls),
            StrikeKind::Strikes => Some(&mut self.strike_zone.strikes),
            StrikeKind::Other(_) => None,
        }
    }

    fn tally(&mut self, event: &Event) {
        match event {
            Event::Shot {
                shot_type,
                made,
                contested,
            } => {
                self.shots
                    .entry(shot_type.label().to_owned())
                    .or_default()
                    .record(*made, *contested);
            }
            Event::Assist => increment(&mut self.assists),
            Event::Turnover => increment(&mut self.turnovers),
            Event::Rebound => increment(&mut self.rebounds),
            Event::StrikePass { kind, made } => match self.strike_zone_mut(kind) {
                Some(tally) => {
                    increment(&mut tally.total);
                    match made {
                        Some(true) => increment(&mut tally.made),
                        Some(false) => increment(&mut tally.missed),
                        None => {}
                    }
                }
                None => warn!("ignoring strike zone pass of unrecognised kind '{kind}'"),
            },
            Event::Cut { result } => {
                increment(&mut self.cuts.total);
                match result {
                    CutResult::Pass => increment(&mut self.cuts.pass_to_cutter),
                    CutResult::Made => increment(&mut self.cuts.made_shot),
                    CutResult::Missed => increment(&mut self.cuts.missed_shot),
                    CutResult::Other(_) => warn!("unrecognised cut result '{result}'"),
                }
            }
            Event::PaintTouch { result } => {
                increment(&mut self.paint_touches.total);
                match result {
                    PaintResult::Made => increment(&mut self.paint_touches.made_shot),
                    PaintResult::Missed => increment(&mut self.paint_touches.missed_shot),
                    PaintResult::Kick => increment(&mut self.paint_touches.kick_out),
                    PaintResult::Other(_) => warn!("unrecognised paint touch result '{result}'"),
                }
            }
            Event::Defense { contested, made } => {
                increment(self.defense.counter_mut(*contested, *made));
            }
        }
        self.points = self.points.saturating_add(event.points());
    }

    fn untally(&mut self, event: &Event) {
        match event {
            Event::Shot {
                shot_type,
                made,
                contested,
            } => {
                let label = shot_type.label();
                if let Some(tally) = self.shots.get_mut(label) {
                    tally.revert(*made, *contested);
                    let emptied = *tally == ShotTally::default();
                    // buckets outside the tracked set exist only while they hold attempts
                    if emptied && !ShotType::TRACKED.contains(shot_type) {
                        self.shots.remove(label);
                    }
                }
            }
            Event::Assist => decrement(&mut self.assists),
            Event::Turnover => decrement(&mut self.turnovers),
            Event::Rebound => decrement(&mut self.rebounds),
            Event::StrikePass { kind, made } => {
                if let Some(tally) = self.strike_zone_mut(kind) {
                    decrement(&mut tally.total);
                    match made {
                        Some(true) => decrement(&mut tally.made),
                        Some(false) => decrement(&mut tally.missed),
                        None => {}
                    }
                }
            }
            Event::Cut { result } => {
                decrement(&mut self.cuts.total);
                match result {
                    CutResult::Pass => decrement(&mut self.cuts.pass_to_cutter),
                    CutResult::Made => decrement(&mut self.cuts.made_shot),
                    CutResult::Missed => decrement(&mut self.cuts.missed_shot),
                    CutResult::Other(_) => {}
                }
            }
            Event::PaintTouch { result } => {
                decrement(&mut self.paint_touches.total);
                match result {
                    PaintResult::Made => decrement(&mut self.paint_touches.made_shot),
                    PaintResult::Missed => decrement(&mut self.paint_touches.missed_shot),
                    PaintResult::Kick => decrement(&mut self.paint_touches.kick_out),
                    PaintResult::Other(_) => {}
                }
            }
            Event::Defense { contested, made } => {
                decrement(self.defense.counter_mut(*contested, *made));
            }
        }
        self.points = self.points.saturating_sub(event.points());
    }

    pub fn shots_made(&self) -> u32 {
        saturating_sum(self.shots.values().map(|tally| tally.made))
    }

    pub fn shots_missed(&self) -> u32 {
        saturating_sum(self.shots.values().map(|tally| tally.missed))
    }

    pub fn total_shots(&self) -> u32 {
        saturating_sum(self.shots.values().map(ShotTally::attempts))
    }

    /// Share of shots made, as a percentage rounded to 1 decimal place.
    pub fn shooting_pct(&self) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        round_to(self.shots_made() as f64 / total as f64 * 100.0, 1)
    }

    /// Possessions this player used: shots, assists and turnovers.
    pub fn possessions_used(&self) -> u32 {
        saturating_sum([self.total_shots(), self.assists, self.turnovers])
    }

    pub fn calc_per(&self) -> f64 {
        let numerator = self.points as f64 + self.rebounds as f64 + self.assists as f64
            - self.turnovers as f64;
        let denominator = u32::max(1, self.total_shots().saturating_add(self.turnovers));
        round_to(numerator / denominator as f64 * PER_SCALE, 2)
    }

    pub fn calc_ts(&self) -> f64 {
        let attempts = self.total_shots();
        if attempts == 0 {
            return 0.0;
        }
        round_to(self.points as f64 / (2.0 * attempts as f64), 3)
    }

    pub fn calc_ast_to_tov(&self) -> f64 {
        if self.turnovers == 0 {
            return self.assists as f64;
        }
        round_to(self.assists as f64 / self.turnovers as f64, 2)
    }

    pub fn calc_usage(&self, team_possessions: u32) -> f64 {
        if team_possessions == 0 {
            return 0.0;
        }
        round_to(
            100.0 * self.possessions_used() as f64 / team_possessions as f64,
            2,
        )
    }

    pub fn calc_bpm(&self) -> f64 {
        let numerator = self.points as f64 + self.rebounds as f64 + self.assists as f64;
        let denominator = u32::max(1, self.total_shots().saturating_add(self.turnovers));
        round_to(numerator / denominator as f64 * BPM_SCALE, 2)
    }

    /// All derived metrics, with usage taken against the given team possessions.
    pub fn metrics(&self, team_possessions: u32) -> Metrics {
        Metrics {
            per: self.calc_per(),
            true_shooting: self.calc_ts(),
            ast_to_tov: self.calc_ast_to_tov(),
            usage: self.calc_usage(team_possessions),
            bpm: self.calc_bpm(),
        }
    }
}

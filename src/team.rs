//! Team-wide aggregation over a [Roster]: the shared possessions proxy, summed totals, and the
//! composite team percentage.
//!
//! The team percentage blends five per-player metrics, each capped and normalised onto `[0, 1]`
//! (see [NormalisedMetrics]), into an equal-weighted player score. The team percentage is the mean
//! player score scaled to `[0, 100]`. Caps keep a single outlying metric from dominating.

use serde::Serialize;

use crate::error::RosterError;
use crate::metrics::{round_to, Metrics, NormalisedMetrics};
use crate::player::PlayerRecord;
use crate::roster::Roster;
use crate::tally::saturating_sum;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    pub players: usize,
    pub shots_made: u32,
    pub shots_missed: u32,
    pub points: u32,
    pub assists: u32,
    pub turnovers: u32,
}

/// A player's tallies together with everything derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot<'a> {
    #[serde(flatten)]
    pub record: &'a PlayerRecord,
    pub shots_made: u32,
    pub shots_missed: u32,
    pub total_shots: u32,
    pub shooting_pct: f64,
    pub metrics: Metrics,
}
impl<'a> PlayerSnapshot<'a> {
    pub fn new(record: &'a PlayerRecord, team_possessions: u32) -> Self {
        Self {
            record,
            shots_made: record.shots_made(),
            shots_missed: record.shots_missed(),
            total_shots: record.total_shots(),
            shooting_pct: record.shooting_pct(),
            metrics: record.metrics(team_possessions),
        }
    }

    pub fn normalised(&self) -> NormalisedMetrics {
        NormalisedMetrics::from(&self.metrics)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamReport<'a> {
    pub players: Vec<PlayerSnapshot<'a>>,
    pub totals: TeamTotals,
    pub possessions: u32,
    pub team_percentage: f64,
}

fn mean_score_percentage(snapshots: &[PlayerSnapshot<'_>]) -> f64 {
    if snapshots.is_empty() {
        return 0.0;
    }
    let sum: f64 = snapshots
        .iter()
        .map(|snapshot| snapshot.normalised().score())
        .sum();
    round_to(sum / snapshots.len() as f64 * 100.0, 1)
}

impl Roster {
    /// Possessions used across the roster, floored at 1. This is the usage denominator shared by
    /// every player in a snapshot.
    pub fn team_possessions(&self) -> u32 {
        u32::max(
            1,
            saturating_sum(self.players().map(PlayerRecord::possessions_used)),
        )
    }

    pub fn aggregate_team_totals(&self) -> TeamTotals {
        self.players().fold(
            TeamTotals {
                players: self.len(),
                ..TeamTotals::default()
            },
            |mut totals, player| {
                totals.shots_made = totals.shots_made.saturating_add(player.shots_made());
                totals.shots_missed = totals.shots_missed.saturating_add(player.shots_missed());
                totals.points = totals.points.saturating_add(player.points());
                totals.assists = totals.assists.saturating_add(player.assists());
                totals.turnovers = totals.turnovers.saturating_add(player.turnovers());
                totals
            },
        )
    }

    /// Composite team score in `[0, 100]`, rounded to 1 decimal place; `0.0` for an empty roster.
    pub fn team_percentage(&self) -> f64 {
        mean_score_percentage(&self.snapshots())
    }

    /// Snapshots of every player in name order, sharing one possessions value.
    pub fn snapshots(&self) -> Vec<PlayerSnapshot<'_>> {
        let possessions = self.team_possessions();
        self.players()
            .map(|player| PlayerSnapshot::new(player, possessions))
            .collect()
    }

    pub fn snapshot(&self, name: &str) -> Result<PlayerSnapshot<'_>, RosterError> {
        Ok(PlayerSnapshot::new(self.player(name)?, self.team_possessions()))
    }

    pub fn report(&self) -> TeamReport<'_> {
        let players = self.snapshots();
        let team_percentage = mean_score_percentage(&players);
        TeamReport {
            players,
            totals: self.aggregate_team_totals(),
            possessions: self.team_possessions(),
            team_percentage,
        }
    }
}

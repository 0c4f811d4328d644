//! Raw counters kept per player. Every field defaults to zero when absent from persisted data, so
//! partially-populated documents load without complaint.

use serde::{Deserialize, Serialize};

pub(crate) fn increment(counter: &mut u32) {
    *counter = counter.saturating_add(1);
}

pub(crate) fn decrement(counter: &mut u32) {
    *counter = counter.saturating_sub(1);
}

/// Sums counters, saturating at `u32::MAX`.
pub(crate) fn saturating_sum(counters: impl IntoIterator<Item = u32>) -> u32 {
    counters.into_iter().fold(0, u32::saturating_add)
}

/// Attempts of a single shot type. The contested counters are a subset of `made`/`missed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotTally {
    pub made: u32,
    pub missed: u32,
    pub contested_made: u32,
    pub contested_missed: u32,
}
impl ShotTally {
    pub fn attempts(&self) -> u32 {
        self.made.saturating_add(self.missed)
    }

    pub fn contested(&self) -> u32 {
        self.contested_made.saturating_add(self.contested_missed)
    }

    pub(crate) fn record(&mut self, made: bool, contested: bool) {
        match (made, contested) {
            (true, true) => {
                increment(&mut self.made);
                increment(&mut self.contested_made);
            }
            (true, false) => increment(&mut self.made),
            (false, true) => {
                increment(&mut self.missed);
                increment(&mut self.contested_missed);
            }
            (false, false) => increment(&mut self.missed),
        }
    }

    pub(crate) fn revert(&mut self, made: bool, contested: bool) {
        match (made, contested) {
            (true, true) => {
                decrement(&mut self.made);
                decrement(&mut self.contested_made);
            }
            (true, false) => decrement(&mut self.made),
            (false, true) => {
                decrement(&mut self.missed);
                decrement(&mut self.contested_missed);
            }
            (false, false) => decrement(&mut self.missed),
        }
    }
}

/// Passes delivered into one region of the strike zone. `made`/`missed` are only populated when the
/// outcome of the resulting shot was recorded alongside the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PassTallyRepr")]
pub struct PassTally {
    pub total: u32,
    pub made: u32,
    pub missed: u32,
}

/// Older documents store each strike-zone kind as a bare count.
#[derive(Deserialize)]
#[serde(untagged)]
enum PassTallyRepr {
    Count(u32),
    Full {
        #[serde(default)]
        total: u32,
        #[serde(default)]
        made: u32,
        #[serde(default)]
        missed: u32,
    },
}

impl From<PassTallyRepr> for PassTally {
    fn from(repr: PassTallyRepr) -> Self {
        match repr {
            PassTallyRepr::Count(total) => Self {
                total,
                ..Self::default()
            },
            PassTallyRepr::Full {
                total,
                made,
                missed,
            } => Self {
                total,
                made,
                missed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikeZone {
    pub balls: PassTally,
    pub strikes: PassTally,
}
impl StrikeZone {
    pub fn total(&self) -> u32 {
        self.balls.total.saturating_add(self.strikes.total)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cuts {
    pub total: u32,
    pub pass_to_cutter: u32,
    pub made_shot: u32,
    pub missed_shot: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintTouches {
    pub total: u32,
    #[serde(alias = "made")]
    pub made_shot: u32,
    #[serde(alias = "missed")]
    pub missed_shot: u32,
    #[serde(alias = "kick")]
    pub kick_out: u32,
}

/// Outcomes of shots this player defended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defense {
    pub contested_made: u32,
    pub contested_missed: u32,
    pub uncontested_made: u32,
    pub uncontested_missed: u32,
}
impl Defense {
    pub(crate) fn counter_mut(&mut self, contested: bool, made: bool) -> &mut u32 {
        match (contested, made) {
            (true, true) => &mut self.contested_made,
            (true, false) => &mut self.contested_missed,
            (false, true) => &mut self.uncontested_made,
            (false, false) => &mut self.uncontested_missed,
        }
    }

    pub fn total(&self) -> u32 {
        saturating_sum([
            self.contested_made,
            self.contested_missed,
            self.uncontested_made,
            self.uncontested_missed,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_tally_record_and_revert() {
        let mut tally = ShotTally::default();
        tally.record(true, true);
        tally.record(false, false);
        assert_eq!(
            ShotTally {
                made: 1,
                missed: 1,
                contested_made: 1,
                contested_missed: 0
            },
            tally
        );
        assert_eq!(2, tally.attempts());
        assert_eq!(1, tally.contested());

        tally.revert(true, true);
        assert_eq!(0, tally.made);
        assert_eq!(0, tally.contested_made);
        assert_eq!(1, tally.missed);
    }

    #[test]
    fn revert_saturates_at_zero() {
        let mut tally = ShotTally::default();
        tally.revert(false, true);
        assert_eq!(ShotTally::default(), tally);
    }

    #[test]
    fn record_saturates_at_max() {
        let mut tally = ShotTally {
            made: u32::MAX,
            missed: u32::MAX,
            contested_made: u32::MAX,
            contested_missed: 0,
        };
        tally.record(true, true);
        assert_eq!(u32::MAX, tally.made);
        assert_eq!(u32::MAX, tally.contested_made);
        assert_eq!(u32::MAX, tally.attempts());
        assert_eq!(u32::MAX, tally.contested());
    }

    #[test]
    fn sums_saturate() {
        assert_eq!(0, saturating_sum([]));
        assert_eq!(7, saturating_sum([3, 4]));
        assert_eq!(u32::MAX, saturating_sum([u32::MAX - 1, 2, 5]));
    }

    #[test]
    fn pass_tally_from_bare_count() {
        let zone: StrikeZone = serde_json::from_str(r#"{"balls": 3, "strikes": 1}"#).unwrap();
        assert_eq!(3, zone.balls.total);
        assert_eq!(0, zone.balls.made);
        assert_eq!(1, zone.strikes.total);
        assert_eq!(4, zone.total());
    }

    #[test]
    fn pass_tally_from_partial_object() {
        let zone: StrikeZone =
            serde_json::from_str(r#"{"balls": {"total": 2, "made": 1}}"#).unwrap();
        assert_eq!(
            PassTally {
                total: 2,
                made: 1,
                missed: 0
            },
            zone.balls
        );
        assert_eq!(PassTally::default(), zone.strikes);
    }

    #[test]
    fn paint_touches_accept_short_keys() {
        let touches: PaintTouches =
            serde_json::from_str(r#"{"total": 3, "made": 1, "missed": 1, "kick": 1}"#).unwrap();
        assert_eq!(
            PaintTouches {
                total: 3,
                made_shot: 1,
                missed_shot: 1,
                kick_out: 1
            },
            touches
        );
    }

    #[test]
    fn defense_counter_selection() {
        let mut defense = Defense::default();
        *defense.counter_mut(true, false) += 1;
        *defense.counter_mut(false, true) += 1;
        assert_eq!(1, defense.contested_missed);
        assert_eq!(1, defense.uncontested_made);
        assert_eq!(2, defense.total());
    }
}

//! Testing helpers.

use tinyrand::Rand;

use crate::event::{CutResult, Event, PaintResult, ShotType, StrikeKind};
use crate::roster::Roster;

fn coin(rand: &mut impl Rand) -> bool {
    rand.next_u64() % 2 == 0
}

fn pick<T: Clone>(rand: &mut impl Rand, items: &[T]) -> T {
    items[(rand.next_u64() % items.len() as u64) as usize].clone()
}

/// Generates an arbitrary event, occasionally with an unrecognised sub-kind.
pub fn random_event(rand: &mut impl Rand) -> Event {
    match rand.next_u64() % 8 {
        0 => Event::Shot {
            shot_type: pick(
                rand,
                &[
                    ShotType::Layup,
                    ShotType::Midrange,
                    ShotType::ThreePoint,
                    ShotType::Other("hook".into()),
                ],
            ),
            made: coin(rand),
            contested: coin(rand),
        },
        1 => Event::Assist,
        2 => Event::Turnover,
        3 => Event::Rebound,
        4 => Event::StrikePass {
            kind: pick(
                rand,
                &[
                    StrikeKind::Balls,
                    StrikeKind::Strikes,
                    StrikeKind::Other("wild".into()),
                ],
            ),
            made: pick(rand, &[None, Some(true), Some(false)]),
        },
        5 => Event::Cut {
            result: pick(
                rand,
                &[
                    CutResult::Pass,
                    CutResult::Made,
                    CutResult::Missed,
                    CutResult::Other("flare".into()),
                ],
            ),
        },
        6 => Event::PaintTouch {
            result: pick(
                rand,
                &[
                    PaintResult::Made,
                    PaintResult::Missed,
                    PaintResult::Kick,
                    PaintResult::Other("foul".into()),
                ],
            ),
        },
        _ => Event::Defense {
            contested: coin(rand),
            made: coin(rand),
        },
    }
}

/// A roster of `players` players named `p0`, `p1`, ..., each with `events` arbitrary events.
pub fn random_roster(rand: &mut impl Rand, players: usize, events: usize) -> Roster {
    let mut roster = Roster::default();
    for player in 0..players {
        let name = format!("p{player}");
        roster.add_player(&name).unwrap();
        for _ in 0..events {
            roster.record_event(&name, random_event(rand)).unwrap();
        }
    }
    roster
}

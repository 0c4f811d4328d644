//! Typed game events and their compact textual notation.
//!
//! An event is written as colon-separated fragments, the first naming the kind:
//!
//! * `shot:<type>:<made|missed>[:contested|:uncontested]`, e.g. `shot:3pt:made:contested`
//! * `assist`, `turnover`, `rebound`
//! * `strike:<balls|strikes>[:made|:missed]`
//! * `cut:<pass|made|missed>`
//! * `paint:<made|missed|kick>`
//! * `defense:<contested|uncontested>:<made|missed>`
//!
//! Sub-kinds (shot type, strike kind, cut and paint results) are open: an unrecognised label parses
//! into the `Other` variant rather than failing. How an `Other` value is tallied is up to the
//! recording operation.

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::RosterError;

macro_rules! labelled {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(label) => label.as_str(),
                }
            }

            pub fn is_recognised(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                match label.trim().to_lowercase().as_str() {
                    $($label $(| $alias)* => $name::$variant,)+
                    _ => $name::Other(label.trim().to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::from(label.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_owned()
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

labelled!(
    /// Shot classification. Any label is accepted; only `3pt` is worth three points.
    ShotType {
        Layup => "layup",
        Midrange => "midrange" | "2pt",
        ThreePoint => "3pt",
    }
);

impl ShotType {
    /// Shot types every player is created with.
    pub const TRACKED: [ShotType; 3] = [ShotType::Layup, ShotType::Midrange, ShotType::ThreePoint];

    pub fn points(&self) -> u32 {
        match self {
            ShotType::ThreePoint => 3,
            _ => 2,
        }
    }
}

labelled!(
    /// Region of the strike zone a pass was delivered to.
    StrikeKind {
        Balls => "balls" | "ball",
        Strikes => "strikes" | "strike",
    }
);

labelled!(
    /// Outcome of a cut.
    CutResult {
        Pass => "pass",
        Made => "made",
        Missed => "missed",
    }
);

labelled!(
    /// Outcome of a paint touch.
    PaintResult {
        Made => "made",
        Missed => "missed",
        Kick => "kick" | "kick_out",
    }
);

/// Points credited for a made shot off a cut or a paint touch.
pub const INSIDE_SHOT_POINTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EventKind {
    Shot,
    Assist,
    Turnover,
    Rebound,
    #[strum(to_string = "strike")]
    StrikePass,
    Cut,
    #[strum(to_string = "paint")]
    PaintTouch,
    Defense,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Shot {
        shot_type: ShotType,
        made: bool,
        contested: bool,
    },
    Assist,
    Turnover,
    Rebound,
    StrikePass {
        kind: StrikeKind,
        #[serde(default)]
        made: Option<bool>,
    },
    Cut {
        result: CutResult,
    },
    PaintTouch {
        result: PaintResult,
    },
    Defense {
        contested: bool,
        made: bool,
    },
}
impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Shot { .. } => EventKind::Shot,
            Event::Assist => EventKind::Assist,
            Event::Turnover => EventKind::Turnover,
            Event::Rebound => EventKind::Rebound,
            Event::StrikePass { .. } => EventKind::StrikePass,
            Event::Cut { .. } => EventKind::Cut,
            Event::PaintTouch { .. } => EventKind::PaintTouch,
            Event::Defense { .. } => EventKind::Defense,
        }
    }

    /// Points this event credits to the player.
    pub fn points(&self) -> u32 {
        match self {
            Event::Shot {
                shot_type,
                made: true,
                ..
            } => shot_type.points(),
            Event::Cut {
                result: CutResult::Made,
            }
            | Event::PaintTouch {
                result: PaintResult::Made,
            } => INSIDE_SHOT_POINTS,
            _ => 0,
        }
    }

    /// The event split into `(event, detail, result)` columns for history exports.
    pub fn columns(&self) -> [String; 3] {
        let kind = self.kind().to_string();
        match self {
            Event::Shot {
                shot_type,
                made,
                contested,
            } => [
                kind,
                format!("{shot_type} {}", contest_label(*contested)),
                outcome_label(*made).to_owned(),
            ],
            Event::Assist | Event::Turnover | Event::Rebound => [kind, String::new(), String::new()],
            Event::StrikePass { kind: zone, made } => [
                kind,
                zone.to_string(),
                made.map(outcome_label).unwrap_or_default().to_owned(),
            ],
            Event::Cut { result } => [kind, String::new(), result.to_string()],
            Event::PaintTouch { result } => [kind, String::new(), result.to_string()],
            Event::Defense { contested, made } => [
                kind,
                contest_label(*contested).to_owned(),
                outcome_label(*made).to_owned(),
            ],
        }
    }
}

fn outcome_label(made: bool) -> &'static str {
    if made {
        "made"
    } else {
        "missed"
    }
}

fn contest_label(contested: bool) -> &'static str {
    if contested {
        "contested"
    } else {
        "uncontested"
    }
}

fn parse_outcome(frag: Option<&str>, what: &str) -> Result<bool, RosterError> {
    match frag.map(str::to_lowercase).as_deref() {
        Some("made" | "make" | "yes") => Ok(true),
        Some("missed" | "miss" | "no") => Ok(false),
        Some(other) => Err(RosterError::invalid_input(format!(
            "unrecognised {what} outcome '{other}'"
        ))),
        None => Err(RosterError::invalid_input(format!(
            "missing {what} outcome"
        ))),
    }
}

fn parse_contest(frag: Option<&str>, what: &str) -> Result<bool, RosterError> {
    match frag.map(str::to_lowercase).as_deref() {
        Some("contested") => Ok(true),
        Some("uncontested" | "open") => Ok(false),
        Some(other) => Err(RosterError::invalid_input(format!(
            "unrecognised {what} contest '{other}'"
        ))),
        None => Err(RosterError::invalid_input(format!(
            "missing {what} contest"
        ))),
    }
}

fn required<'a>(frag: Option<&'a str>, what: &str) -> Result<&'a str, RosterError> {
    match frag {
        Some(frag) if !frag.trim().is_empty() => Ok(frag),
        _ => Err(RosterError::invalid_input(format!("missing {what}"))),
    }
}

impl FromStr for Event {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut frags = s.trim().split(':');
        let kind = required(frags.next(), "event kind")?;
        let kind = EventKind::from_str(kind)
            .map_err(|_| RosterError::invalid_input(format!("unrecognised event kind '{kind}'")))?;

        let event = match kind {
            EventKind::Shot => {
                let shot_type = ShotType::from(required(frags.next(), "shot type")?);
                let made = parse_outcome(frags.next(), "shot")?;
                let contested = match frags.next() {
                    None => false,
                    frag => parse_contest(frag, "shot")?,
                };
                Event::Shot {
                    shot_type,
                    made,
                    contested,
                }
            }
            EventKind::Assist => Event::Assist,
            EventKind::Turnover => Event::Turnover,
            EventKind::Rebound => Event::Rebound,
            EventKind::StrikePass => {
                let kind = StrikeKind::from(required(frags.next(), "strike zone kind")?);
                let made = match frags.next() {
                    None => None,
                    frag => Some(parse_outcome(frag, "strike zone pass")?),
                };
                Event::StrikePass { kind, made }
            }
            EventKind::Cut => Event::Cut {
                result: CutResult::from(required(frags.next(), "cut result")?),
            },
            EventKind::PaintTouch => Event::PaintTouch {
                result: PaintResult::from(required(frags.next(), "paint touch result")?),
            },
            EventKind::Defense => {
                let contested = parse_contest(frags.next(), "defense")?;
                let made = parse_outcome(frags.next(), "defense")?;
                Event::Defense { contested, made }
            }
        };

        match frags.next() {
            None => Ok(event),
            Some(extra) => Err(RosterError::invalid_input(format!(
                "unexpected trailing '{extra}' in event '{s}'"
            ))),
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        match self {
            Event::Shot {
                shot_type,
                made,
                contested,
            } => {
                write!(f, "{kind}:{shot_type}:{}", outcome_label(*made))?;
                if *contested {
                    write!(f, ":contested")?;
                }
                Ok(())
            }
            Event::Assist | Event::Turnover | Event::Rebound => write!(f, "{kind}"),
            Event::StrikePass { kind: zone, made } => {
                write!(f, "{kind}:{zone}")?;
                if let Some(made) = made {
                    write!(f, ":{}", outcome_label(*made))?;
                }
                Ok(())
            }
            Event::Cut { result } => write!(f, "{kind}:{result}"),
            Event::PaintTouch { result } => write!(f, "{kind}:{result}"),
            Event::Defense { contested, made } => write!(
                f,
                "{kind}:{}:{}",
                contest_label(*contested),
                outcome_label(*made)
            ),
        }
    }
}

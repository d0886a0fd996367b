//! Discrete user intents dispatched to the [`crate::Storefront`] store.
//!
//! Intents have a compact text form used by the replay CLI:
//!
//! | Text | Intent |
//! |------|--------|
//! | `enter` / `home` | [`Intent::EnterFunnel`] / [`Intent::GoHome`] |
//! | `advance` / `next` | [`Intent::Advance`] |
//! | `retreat` / `back` | [`Intent::Retreat`] |
//! | `jump=2` | [`Intent::JumpTo`] |
//! | `adults=3`, `adults+`, `adults-` | adult counter |
//! | `kids=1`, `kids+`, `kids-` | kid counter |
//! | `zip=110001` (`zip=` clears) | [`Intent::SetZip`] |
//! | `toggle=VEG` | [`Intent::TogglePreference`] |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntentParseError;
use crate::preference::PreferenceTag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    EnterFunnel,
    GoHome,
    Advance,
    Retreat,
    JumpTo(usize),
    SetAdults(u32),
    IncrementAdults,
    DecrementAdults,
    SetKids(u32),
    IncrementKids,
    DecrementKids,
    SetZip(String),
    TogglePreference(PreferenceTag),
}

fn parse_number<T: FromStr>(verb: &str, value: &str) -> Result<T, IntentParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| IntentParseError::InvalidNumber {
            verb: verb.to_string(),
            value: value.to_string(),
        })
}

impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the verb is normalised; arguments such as a zip code are kept verbatim.
        let (verb, arg) = match s.split_once('=') {
            Some((verb, arg)) => (verb.trim().to_ascii_lowercase(), Some(arg)),
            None => (s.trim().to_ascii_lowercase(), None),
        };

        let no_arg = |intent: Intent| match arg {
            Some(_) => Err(IntentParseError::UnexpectedArgument { verb: verb.clone() }),
            None => Ok(intent),
        };
        let required = || {
            arg.ok_or_else(|| IntentParseError::MissingArgument { verb: verb.clone() })
        };

        match verb.as_str() {
            "enter" | "funnel" => no_arg(Intent::EnterFunnel),
            "home" => no_arg(Intent::GoHome),
            "advance" | "next" | "continue" => no_arg(Intent::Advance),
            "retreat" | "back" => no_arg(Intent::Retreat),
            "adults+" => no_arg(Intent::IncrementAdults),
            "adults-" => no_arg(Intent::DecrementAdults),
            "kids+" => no_arg(Intent::IncrementKids),
            "kids-" => no_arg(Intent::DecrementKids),
            "jump" => Ok(Intent::JumpTo(parse_number(&verb, required()?)?)),
            "adults" => Ok(Intent::SetAdults(parse_number(&verb, required()?)?)),
            "kids" => Ok(Intent::SetKids(parse_number(&verb, required()?)?)),
            "zip" => Ok(Intent::SetZip(required()?.to_string())),
            "toggle" => Ok(Intent::TogglePreference(PreferenceTag::new(required()?))),
            _ => Err(IntentParseError::UnknownVerb(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::EnterFunnel => write!(f, "enter"),
            Intent::GoHome => write!(f, "home"),
            Intent::Advance => write!(f, "advance"),
            Intent::Retreat => write!(f, "retreat"),
            Intent::JumpTo(step) => write!(f, "jump={}", step),
            Intent::SetAdults(n) => write!(f, "adults={}", n),
            Intent::IncrementAdults => write!(f, "adults+"),
            Intent::DecrementAdults => write!(f, "adults-"),
            Intent::SetKids(n) => write!(f, "kids={}", n),
            Intent::IncrementKids => write!(f, "kids+"),
            Intent::DecrementKids => write!(f, "kids-"),
            Intent::SetZip(zip) => write!(f, "zip={}", zip),
            Intent::TogglePreference(tag) => write!(f, "toggle={}", tag),
        }
    }
}

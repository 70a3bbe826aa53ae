//! Questionnaire answers: the closed option sets and the `Profile` record.
//!
//! Every field is an enum over the questionnaire's option list, so values
//! outside the offered choices cannot be represented. Labels double as the
//! serialized form.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label that matched none of a field's options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {field} (expected one of: {expected})")]
pub struct ParseOptionError {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

/// Declares a questionnaire option set.
///
/// Each variant carries its display label (also its serde name) and a short
/// slug accepted on the command line.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => ($label:literal, $slug:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All options, in questionnaire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Field name used in prompts and parse errors.
            pub const FIELD: &'static str = $field;

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn slug(self) -> &'static str {
                match self {
                    $($name::$variant => $slug,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|o| {
                        o.label().eq_ignore_ascii_case(wanted) || o.slug().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| ParseOptionError {
                        field: $field,
                        value: wanted.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|o| o.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

option_set! {
    /// Curl pattern.
    HairType, "hair type" {
        Straight => ("Straight", "straight"),
        Wavy => ("Wavy", "wavy"),
        Curly => ("Curly", "curly"),
        Coily => ("Coily/Kinky", "coily"),
    }
}

option_set! {
    /// Strand density.
    Density, "density" {
        Fine => ("Fine", "fine"),
        Medium => ("Medium", "medium"),
        Thick => ("Thick", "thick"),
    }
}

option_set! {
    Porosity, "porosity" {
        Low => ("Low", "low"),
        Medium => ("Medium", "medium"),
        High => ("High", "high"),
        NotSure => ("Not sure", "not-sure"),
    }
}

option_set! {
    ScalpCondition, "scalp condition" {
        Balanced => ("Balanced/Normal", "balanced"),
        DryFlaky => ("Dry/Flaky", "dry"),
        Oily => ("Oily", "oily"),
        Sensitive => ("Sensitive", "sensitive"),
        Dandruff => ("Dandruff/Seb Derm", "dandruff"),
    }
}

option_set! {
    /// Chemical services the hair has been through.
    ChemicalHistory, "chemical history" {
        None => ("None", "none"),
        ColorDark => ("Color-treated (dark)", "color"),
        BlondeLightened => ("Blonde/Lightened", "blonde"),
        Bleached => ("Bleached", "bleached"),
        KeratinSmoothing => ("Keratin/Smoothing", "keratin"),
        PermedRelaxed => ("Permed/Relaxed", "permed"),
    }
}

option_set! {
    /// Top concerns; a profile may select any subset.
    Concern, "concern" {
        Dryness => ("Dryness", "dryness"),
        Frizz => ("Frizz", "frizz"),
        BreakageDamage => ("Breakage/Damage", "breakage"),
        HairLossShedding => ("Hair loss/Shedding", "shedding"),
        LackOfVolume => ("Lack of volume", "volume"),
        ItchyFlakyScalp => ("Itchy/Flaky scalp", "itchy"),
        Oiliness => ("Oiliness", "oiliness"),
        HeatStylingOften => ("Heat styling often", "heat"),
        Swimmer => ("Swimmer (chlorine)", "swimmer"),
    }
}

option_set! {
    Climate, "climate" {
        Dry => ("Dry", "dry"),
        Humid => ("Humid", "humid"),
        Cold => ("Cold", "cold"),
        Hot => ("Hot", "hot"),
        Coastal => ("Coastal/Salt air", "coastal"),
    }
}

option_set! {
    /// How often heat tools are used.
    StylingFrequency, "styling frequency" {
        Rarely => ("Rarely", "rarely"),
        FewTimesWeek => ("Few times/week", "weekly"),
        Daily => ("Daily", "daily"),
    }
}

option_set! {
    AgeBracket, "age bracket" {
        Teen => ("Teen", "teen"),
        Adult => ("Adult", "adult"),
        Mature => ("Mature", "mature"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wash frequency must be between {min} and {max} per week, got {got}", min = WashFrequency::MIN, max = WashFrequency::MAX)]
pub struct WashFrequencyError {
    pub got: u8,
}

/// Washes per week, 1–7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WashFrequency(u8);

impl WashFrequency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(per_week: u8) -> Result<Self, WashFrequencyError> {
        if (Self::MIN..=Self::MAX).contains(&per_week) {
            Ok(Self(per_week))
        } else {
            Err(WashFrequencyError { got: per_week })
        }
    }

    pub fn per_week(self) -> u8 {
        self.0
    }
}

impl Default for WashFrequency {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for WashFrequency {
    type Error = WashFrequencyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WashFrequency> for u8 {
    fn from(value: WashFrequency) -> Self {
        value.0
    }
}

impl fmt::Display for WashFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WashFrequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid wash frequency '{s}': {e}"))?;
        Ok(Self::new(n)?)
    }
}

/// The full questionnaire answer set for one person.
///
/// `wash_frequency` and `age_bracket` are collected but no rule reads them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub hair_type: HairType,
    pub density: Density,
    pub porosity: Porosity,
    pub scalp: ScalpCondition,
    pub chemical_history: ChemicalHistory,
    #[serde(default)]
    pub concerns: BTreeSet<Concern>,
    pub climate: Climate,
    #[serde(default)]
    pub wash_frequency: WashFrequency,
    pub styling_frequency: StylingFrequency,
    pub age_bracket: AgeBracket,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            hair_type: HairType::Wavy,
            density: Density::Medium,
            porosity: Porosity::NotSure,
            scalp: ScalpCondition::Balanced,
            chemical_history: ChemicalHistory::None,
            concerns: BTreeSet::new(),
            climate: Climate::Dry,
            wash_frequency: WashFrequency::default(),
            styling_frequency: StylingFrequency::FewTimesWeek,
            age_bracket: AgeBracket::Adult,
        }
    }
}

impl Profile {
    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }

    pub fn with_concern(mut self, concern: Concern) -> Self {
        self.concerns.insert(concern);
        self
    }

    /// Flip a concern on or off, the way the questionnaire toggles do.
    pub fn toggle_concern(&mut self, concern: Concern) {
        if !self.concerns.remove(&concern) {
            self.concerns.insert(concern);
        }
    }
}

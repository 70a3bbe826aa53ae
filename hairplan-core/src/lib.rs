//! hairplan-core: questionnaire profile, routine rules and schedule builder

pub mod export;
pub mod plan;
pub mod products;
pub mod profile;
pub mod rules;

pub use export::{RoutineExport, DEFAULT_EXPORT_FILE};
pub use plan::{build_plan, Cadence, Schedule};
pub use profile::{
    AgeBracket, ChemicalHistory, Climate, Concern, Density, HairType, ParseOptionError, Porosity,
    Profile, ScalpCondition, StylingFrequency, WashFrequency, WashFrequencyError,
};
pub use rules::{evaluate, RecommendationBundle};

/// A profile together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub profile: Profile,
    pub recommendations: RecommendationBundle,
    pub schedule: Schedule,
}

impl Routine {
    /// Run the rules and the schedule builder for one profile.
    pub fn for_profile(profile: Profile) -> Self {
        let recommendations = evaluate(&profile);
        let schedule = build_plan(&recommendations, &profile);
        Self {
            profile,
            recommendations,
            schedule,
        }
    }
}

//! Schedule builder: recommendation bundle + profile → cadence buckets.

use serde::{Deserialize, Serialize};

use crate::profile::{Concern, Profile};
use crate::rules::RecommendationBundle;

/// The four cadence buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cadence {
    Daily,
    WashDay,
    Weekly,
    EveryTwoToFourWeeks,
}

impl Cadence {
    pub const ALL: [Cadence; 4] = [
        Cadence::Daily,
        Cadence::WashDay,
        Cadence::Weekly,
        Cadence::EveryTwoToFourWeeks,
    ];
}

/// When to do what. Serialized with the export file's bucket names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub daily: Vec<String>,
    #[serde(rename = "wash")]
    pub wash_day: Vec<String>,
    pub weekly: Vec<String>,
    #[serde(rename = "monthly")]
    pub every_two_to_four_weeks: Vec<String>,
}

impl Schedule {
    pub fn bucket(&self, cadence: Cadence) -> &[String] {
        match cadence {
            Cadence::Daily => &self.daily,
            Cadence::WashDay => &self.wash_day,
            Cadence::Weekly => &self.weekly,
            Cadence::EveryTwoToFourWeeks => &self.every_two_to_four_weeks,
        }
    }

    pub fn is_empty(&self) -> bool {
        Cadence::ALL.iter().all(|c| self.bucket(*c).is_empty())
    }
}

/// Derive the schedule from a bundle. Pure; buckets may come back empty.
pub fn build_plan(rec: &RecommendationBundle, profile: &Profile) -> Schedule {
    let mut plan = Schedule::default();

    plan.daily.push("AM/PM: Apply leave-in on ends as needed.".into());
    if rec.has_product(crate::products::SCALP_TONIC) {
        plan.daily.push("Daily: Scalp tonic to clean, dry scalp.".into());
    }
    if profile.has_concern(Concern::HeatStylingOften) {
        plan.daily.push("When styling: Use heat protectant before tools.".into());
    }

    plan.wash_day
        .push("Shampoo as recommended; condition mid-lengths to ends.".into());
    if rec.any_product_contains("Curl cream") {
        plan.wash_day.push("Style on damp hair with curl cream + gel.".into());
    }

    if rec.any_product_contains("Bond-building mask") {
        plan.weekly.push("1×: Bond-building/deep conditioning mask.".into());
    }
    if rec.any_product_contains("Purple toning shampoo") {
        plan.weekly.push("1×: Purple toning shampoo.".into());
    }
    if rec.any_product_contains("Pre-shampoo scalp exfoliant") {
        plan.weekly.push("1×: Scalp exfoliant before wash.".into());
    }

    if rec.any_product_contains("Clarifying shampoo") {
        plan.every_two_to_four_weeks
            .push("Every 2–4 weeks: Clarify to reset.".into());
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HairType, ScalpCondition};
    use crate::rules::evaluate;

    fn plan_for(profile: &Profile) -> Schedule {
        build_plan(&evaluate(profile), profile)
    }

    #[test]
    fn test_default_plan() {
        let plan = plan_for(&Profile::default());
        assert_eq!(plan.daily, vec!["AM/PM: Apply leave-in on ends as needed."]);
        assert_eq!(plan.wash_day, vec!["Shampoo as recommended; condition mid-lengths to ends."]);
        assert!(plan.weekly.is_empty());
        assert_eq!(plan.every_two_to_four_weeks, vec!["Every 2–4 weeks: Clarify to reset."]);
    }

    #[test]
    fn test_heat_and_tonic_daily_order() {
        let p = Profile::default()
            .with_concern(Concern::HeatStylingOften)
            .with_concern(Concern::HairLossShedding);
        let plan = plan_for(&p);
        assert_eq!(
            plan.daily,
            vec![
                "AM/PM: Apply leave-in on ends as needed.",
                "Daily: Scalp tonic to clean, dry scalp.",
                "When styling: Use heat protectant before tools.",
            ]
        );
    }

    #[test]
    fn test_curl_cream_wash_day() {
        let p = Profile {
            hair_type: HairType::Curly,
            ..Profile::default()
        };
        assert_eq!(plan_for(&p).wash_day.len(), 2);

        // Wavy gets "Light curl cream", which does not contain "Curl cream".
        assert_eq!(plan_for(&Profile::default()).wash_day.len(), 1);
    }

    #[test]
    fn test_oily_scalp_weekly_exfoliant() {
        let p = Profile {
            scalp: ScalpCondition::Oily,
            ..Profile::default()
        };
        let plan = plan_for(&p);
        assert_eq!(plan.weekly, vec!["1×: Scalp exfoliant before wash."]);
    }

    #[test]
    fn test_empty_bundle_still_has_base_reminders() {
        let plan = build_plan(&RecommendationBundle::default(), &Profile::default());
        assert_eq!(plan.daily.len(), 1);
        assert_eq!(plan.wash_day.len(), 1);
        assert!(plan.bucket(Cadence::Weekly).is_empty());
        assert!(plan.bucket(Cadence::EveryTwoToFourWeeks).is_empty());
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_serialized_bucket_names() {
        let json = serde_json::to_value(plan_for(&Profile::default())).unwrap();
        for key in ["daily", "wash", "weekly", "monthly"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}

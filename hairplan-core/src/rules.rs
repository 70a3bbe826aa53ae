//! Deterministic routine rules: profile → recommendation bundle.
//!
//! Each block below inspects a few profile fields and appends to the bundle.
//! Blocks run in a fixed order, which fixes the order of steps, notes and
//! cautions. Products form a set, so their order carries no meaning.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::products;
use crate::profile::{
    ChemicalHistory, Climate, Concern, Density, HairType, Porosity, Profile, ScalpCondition,
    StylingFrequency,
};

/// Output of [`evaluate`]. Built once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    steps: Vec<String>,
    products: BTreeSet<String>,
    notes: Vec<String>,
    cautions: Vec<String>,
}

impl RecommendationBundle {
    /// Routine steps in presentation order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn products(&self) -> &BTreeSet<String> {
        &self.products
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn cautions(&self) -> &[String] {
        &self.cautions
    }

    pub fn has_product(&self, label: &str) -> bool {
        self.products.contains(label)
    }

    /// True when any product label contains `fragment`.
    pub fn any_product_contains(&self, fragment: &str) -> bool {
        self.products.iter().any(|p| p.contains(fragment))
    }

    fn step(&mut self, s: &str) {
        self.steps.push(s.to_string());
    }

    fn product(&mut self, p: &str) {
        self.products.insert(p.to_string());
    }

    fn note(&mut self, n: &str) {
        self.notes.push(n.to_string());
    }

    fn caution(&mut self, c: &str) {
        self.cautions.push(c.to_string());
    }
}

/// Evaluate the routine rules for a profile. Total: every profile yields a bundle.
pub fn evaluate(profile: &Profile) -> RecommendationBundle {
    let mut rec = RecommendationBundle::default();

    // --- Cleansing (first match wins) ---
    if profile.scalp == ScalpCondition::Oily {
        rec.step("Wash 3–5×/week with a balancing shampoo.");
        rec.product(products::BALANCING_SHAMPOO);
    } else if profile.scalp == ScalpCondition::Dandruff {
        rec.step("Wash 3–4×/week; use anti-dandruff actives 2–3×/week.");
        rec.product(products::ANTI_DANDRUFF_SHAMPOO);
        rec.note("Leave active shampoo on scalp 3–5 min before rinsing.");
    } else if profile.scalp == ScalpCondition::DryFlaky || profile.hair_type != HairType::Straight {
        rec.step("Wash 2–3×/week with a gentle hydrating shampoo.");
        rec.product(products::HYDRATING_SHAMPOO);
    } else {
        rec.step("Wash 2–4×/week with a gentle daily shampoo.");
        rec.product(products::GENTLE_DAILY_SHAMPOO);
    }

    // --- Clarifying cadence ---
    if profile.styling_frequency == StylingFrequency::Daily || profile.scalp == ScalpCondition::Oily {
        rec.step("Clarify weekly to remove buildup.");
        rec.product(products::CLARIFYING_WEEKLY);
    } else {
        rec.step("Clarify every 2–4 weeks.");
        rec.product(products::CLARIFYING_EVERY_2_4_WEEKS);
    }

    // --- Porosity & conditioning ---
    let needs_rich_conditioner = profile.porosity == Porosity::High
        || profile.chemical_history != ChemicalHistory::None
        || profile.has_concern(Concern::BreakageDamage);
    if needs_rich_conditioner {
        rec.step("Use rich conditioner after every wash; detangle gently.");
        rec.product(products::REPAIR_CONDITIONER);
        rec.product(products::BOND_BUILDING_MASK);
    } else {
        rec.step("Use lightweight conditioner focused on mid-lengths to ends.");
        rec.product(products::LIGHTWEIGHT_CONDITIONER);
    }

    // --- Leave-in by density ---
    match profile.density {
        Density::Fine => {
            rec.product(products::VOLUMIZING_LEAVE_IN);
            rec.note("Focus products from mid-lengths down to avoid scalp weight.");
        }
        Density::Thick => rec.product(products::CREAM_LEAVE_IN_OIL),
        Density::Medium => rec.product(products::LIGHT_CREAM_LEAVE_IN),
    }

    // --- Type-specific stylers ---
    match profile.hair_type {
        HairType::Wavy => rec.product(products::LIGHT_CURL_STYLER),
        HairType::Curly | HairType::Coily => {
            rec.product(products::CURL_CREAM_GEL);
            rec.note("Style on soaking-wet or very damp hair for better definition.");
        }
        HairType::Straight => {}
    }

    // --- Heat styling ---
    if profile.has_concern(Concern::HeatStylingOften) {
        rec.step("Always apply heat protectant before blow-dry/irons.");
        rec.product(products::HEAT_PROTECTANT);
    }

    // --- Color-specific ---
    if profile.chemical_history == ChemicalHistory::BlondeLightened {
        rec.product(products::PURPLE_TONING_SHAMPOO);
        rec.caution("Avoid over-toning; follow with deep conditioner.");
    }
    if profile.chemical_history == ChemicalHistory::KeratinSmoothing {
        rec.caution("Use sulfate- and sodium-chloride–free cleansers.");
    }

    // --- Scalp treatments (both may apply) ---
    if profile.scalp == ScalpCondition::DryFlaky || profile.has_concern(Concern::ItchyFlakyScalp) {
        rec.product(products::SOOTHING_SCALP_SERUM);
    }
    if profile.scalp == ScalpCondition::Oily {
        rec.product(products::SCALP_EXFOLIANT);
    }

    // --- Damage / shedding ---
    if profile.has_concern(Concern::BreakageDamage) {
        rec.step("Use bond-builder weekly; limit high heat; protect from UV/chlorine.");
    }
    if profile.has_concern(Concern::HairLossShedding) {
        rec.product(products::SCALP_TONIC);
        rec.note("Consider medical consult for persistent shedding.");
    }

    // --- Climate ---
    if profile.climate == Climate::Humid {
        rec.product(products::ANTI_HUMIDITY_FINISH);
        rec.step("Seal with serum after styling to reduce frizz.");
    }
    if profile.climate == Climate::Dry || profile.has_concern(Concern::Dryness) {
        rec.step("Add overnight oiling 1–2×/week; use humidifier if possible.");
    }

    debug!(
        steps = rec.steps.len(),
        products = rec.products.len(),
        notes = rec.notes.len(),
        cautions = rec.cautions.len(),
        "evaluated routine rules"
    );

    rec
}

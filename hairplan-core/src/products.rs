//! Generic product categories the rules can recommend.
//!
//! These labels are user-facing and are also the keys of the catalog's
//! generic → item table, so they must not drift.

pub const BALANCING_SHAMPOO: &str = "Balancing shampoo (sulfate-free)";
pub const ANTI_DANDRUFF_SHAMPOO: &str =
    "Anti-dandruff shampoo (zinc pyrithione, ketoconazole, selenium)";
pub const HYDRATING_SHAMPOO: &str = "Hydrating shampoo (sulfate-free)";
pub const GENTLE_DAILY_SHAMPOO: &str = "Gentle daily shampoo (sulfate-free)";

pub const CLARIFYING_WEEKLY: &str = "Clarifying shampoo (1×/week)";
pub const CLARIFYING_EVERY_2_4_WEEKS: &str = "Clarifying shampoo (every 2–4 weeks)";

pub const REPAIR_CONDITIONER: &str = "Repair/strength conditioner (with proteins + lipids)";
pub const BOND_BUILDING_MASK: &str = "Bond-building mask (1×/week)";
pub const LIGHTWEIGHT_CONDITIONER: &str = "Lightweight conditioner";

pub const VOLUMIZING_LEAVE_IN: &str = "Volumizing leave-in spray/mousse";
pub const CREAM_LEAVE_IN_OIL: &str = "Cream leave-in + sealing oil/serum";
pub const LIGHT_CREAM_LEAVE_IN: &str = "Light cream or milk leave-in";

pub const LIGHT_CURL_STYLER: &str = "Light curl cream or sea-salt-friendly gel";
pub const CURL_CREAM_GEL: &str = "Curl cream + gel (cast, then scrunch out)";

pub const HEAT_PROTECTANT: &str = "Heat protectant (up to 450°F)";
pub const PURPLE_TONING_SHAMPOO: &str = "Purple toning shampoo (1×/week)";

pub const SOOTHING_SCALP_SERUM: &str = "Soothing scalp serum (pH-balanced, with zinc/tea tree)";
pub const SCALP_EXFOLIANT: &str = "Pre-shampoo scalp exfoliant (1×/week)";
pub const SCALP_TONIC: &str = "Caffeine/peptide scalp tonic (daily)";

pub const ANTI_HUMIDITY_FINISH: &str = "Anti-humidity finishing spray/serum";

/// Every category `evaluate` can emit.
pub const ALL: &[&str] = &[
    BALANCING_SHAMPOO,
    ANTI_DANDRUFF_SHAMPOO,
    HYDRATING_SHAMPOO,
    GENTLE_DAILY_SHAMPOO,
    CLARIFYING_WEEKLY,
    CLARIFYING_EVERY_2_4_WEEKS,
    REPAIR_CONDITIONER,
    BOND_BUILDING_MASK,
    LIGHTWEIGHT_CONDITIONER,
    VOLUMIZING_LEAVE_IN,
    CREAM_LEAVE_IN_OIL,
    LIGHT_CREAM_LEAVE_IN,
    LIGHT_CURL_STYLER,
    CURL_CREAM_GEL,
    HEAT_PROTECTANT,
    PURPLE_TONING_SHAMPOO,
    SOOTHING_SCALP_SERUM,
    SCALP_EXFOLIANT,
    SCALP_TONIC,
    ANTI_HUMIDITY_FINISH,
];

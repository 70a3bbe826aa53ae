use hairplan_catalog::{catalog_key, entries, map_products, mapped_generics, resolve, CatalogOverrides};
use hairplan_core::{
    evaluate, products, ChemicalHistory, Climate, Concern, Density, HairType, Porosity, Profile,
    ScalpCondition, StylingFrequency,
};
use std::collections::BTreeSet;

/// Collect every category any profile can produce.
fn reachable_products() -> BTreeSet<String> {
    let all_concerns: BTreeSet<Concern> = Concern::ALL.iter().copied().collect();
    let mut out = BTreeSet::new();
    for &hair_type in HairType::ALL {
        for &density in Density::ALL {
            for &scalp in ScalpCondition::ALL {
                for &chemical_history in ChemicalHistory::ALL {
                    for &climate in Climate::ALL {
                        for &styling_frequency in StylingFrequency::ALL {
                            for concerns in [BTreeSet::new(), all_concerns.clone()] {
                                let p = Profile {
                                    hair_type,
                                    density,
                                    porosity: Porosity::NotSure,
                                    scalp,
                                    chemical_history,
                                    concerns,
                                    climate,
                                    styling_frequency,
                                    ..Profile::default()
                                };
                                out.extend(evaluate(&p).products().iter().cloned());
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_every_category_is_reachable() {
    let reachable = reachable_products();
    for label in products::ALL {
        assert!(reachable.contains(*label), "{label} is never recommended");
    }
}

#[test]
fn test_reachable_mapped_categories_resolve() {
    for generic in reachable_products() {
        match catalog_key(&generic) {
            Some(_) => {
                let e = resolve(&generic).unwrap_or_else(|| panic!("{generic} did not resolve"));
                assert!(!e.name.is_empty());
                assert!(e.url.starts_with("https://"));
            }
            None => assert!(resolve(&generic).is_none()),
        }
    }
}

#[test]
fn test_mapped_generics_are_real_categories() {
    for generic in mapped_generics() {
        assert!(products::ALL.contains(&generic), "{generic} is not a rule output");
    }
}

#[test]
fn test_scenario_bond_mask() {
    let e = resolve("Bond-building mask (1×/week)").unwrap();
    assert_eq!(e.name, "BLONDIS™ Luxurious Reparative Hair Mask");
    let (key, listed) = entries().find(|(_, e)| e.name == "BLONDIS™ Luxurious Reparative Hair Mask").unwrap();
    assert_eq!(key, "Reparative Hair Mask");
    assert_eq!(listed, e);
}

#[test]
fn test_scenario_not_found() {
    assert!(resolve("nonexistent-category").is_none());
}

#[test]
fn test_mapping_rows_follow_bundle() {
    let p = Profile {
        chemical_history: ChemicalHistory::BlondeLightened,
        ..Profile::default()
    };
    let rec = evaluate(&p);
    let rows = map_products(&rec, &CatalogOverrides::default());
    let mask = rows
        .iter()
        .find(|r| r.generic == products::BOND_BUILDING_MASK)
        .unwrap();
    assert_eq!(mask.display_name(), Some("Blondis NY Reparative Hair Mask"));
    let purple = rows
        .iter()
        .find(|r| r.generic == products::PURPLE_TONING_SHAMPOO)
        .unwrap();
    assert_eq!(purple.display_name(), Some("Blond Resolution Purple Shampoo"));
}

//! Markdown report for a routine: the printable view.

use hairplan_catalog::{map_products, CatalogOverrides, NOT_SET};
use hairplan_core::{Cadence, Routine};
use std::fmt::Write;

use crate::i18n::{Language, Text};

pub struct ReportOptions {
    pub lang: Language,
    pub show_catalog_links: bool,
}

fn cadence_heading(c: Cadence) -> Text {
    match c {
        Cadence::Daily => Text::Daily,
        Cadence::WashDay => Text::WashDay,
        Cadence::Weekly => Text::Weekly,
        Cadence::EveryTwoToFourWeeks => Text::EveryTwoToFourWeeks,
    }
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}

pub fn render_report(routine: &Routine, overrides: &CatalogOverrides, opts: &ReportOptions) -> String {
    let lang = opts.lang;
    let rec = &routine.recommendations;
    let mut s = String::new();

    let _ = writeln!(s, "# {}\n", Text::Title.in_lang(lang));

    let _ = writeln!(s, "## {}\n", Text::Routine.in_lang(lang));
    bullets(&mut s, rec.steps());

    let _ = writeln!(s, "## {}\n", Text::RecommendedProducts.in_lang(lang));
    for p in rec.products() {
        let _ = writeln!(s, "- {p}");
    }
    s.push('\n');

    let _ = writeln!(s, "### {}\n", Text::CatalogMapper.in_lang(lang));
    for row in map_products(rec, overrides) {
        let name = row.display_name().unwrap_or(NOT_SET);
        match (opts.show_catalog_links, row.catalog) {
            (true, Some(entry)) if row.manual.is_none() => {
                let _ = writeln!(
                    s,
                    "- {} → [{}]({}) _{}_",
                    row.generic,
                    name,
                    entry.url,
                    entry.tags.join(", ")
                );
            }
            _ => {
                let _ = writeln!(s, "- {} → {}", row.generic, name);
            }
        }
    }
    s.push('\n');

    if !rec.notes().is_empty() {
        let _ = writeln!(s, "### {}\n", Text::Notes.in_lang(lang));
        bullets(&mut s, rec.notes());
    }
    if !rec.cautions().is_empty() {
        let _ = writeln!(s, "### {}\n", Text::Cautions.in_lang(lang));
        bullets(&mut s, rec.cautions());
    }

    let _ = writeln!(s, "## {}\n", Text::Schedule.in_lang(lang));
    for cadence in Cadence::ALL {
        let _ = writeln!(s, "### {}\n", cadence_heading(cadence).in_lang(lang));
        bullets(&mut s, routine.schedule.bucket(cadence));
    }

    let _ = writeln!(s, "## {}\n", Text::WhyThesePicks.in_lang(lang));
    let _ = writeln!(s, "{}", Text::WhyBody.in_lang(lang));

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use hairplan_core::{ChemicalHistory, Profile};

    fn opts(lang: Language) -> ReportOptions {
        ReportOptions {
            lang,
            show_catalog_links: true,
        }
    }

    #[test]
    fn test_report_sections() {
        let routine = Routine::for_profile(Profile {
            chemical_history: ChemicalHistory::BlondeLightened,
            ..Profile::default()
        });
        let md = render_report(&routine, &CatalogOverrides::default(), &opts(Language::En));
        assert!(md.starts_with("# Blondis NY Hair Routine Advisor"));
        assert!(md.contains("### Cautions"));
        assert!(md.contains("- Avoid over-toning; follow with deep conditioner."));
        assert!(md.contains("- 1×: Purple toning shampoo."));
        assert!(md.contains(
            "- Bond-building mask (1×/week) → Blondis NY Reparative Hair Mask"
        ));
        assert!(md.contains("[Blond Resolution Purple Shampoo](https://looliacloset.com/collections/blondis-new-york)"));
    }

    #[test]
    fn test_empty_notes_are_skipped() {
        let routine = Routine::for_profile(Profile::default());
        let md = render_report(&routine, &CatalogOverrides::empty(), &opts(Language::En));
        assert!(!md.contains("### Notes"));
        assert!(!md.contains("### Cautions"));
    }

    #[test]
    fn test_unmapped_rows_show_not_set() {
        let routine = Routine::for_profile(
            Profile::default().with_concern(hairplan_core::Concern::HeatStylingOften),
        );
        let md = render_report(&routine, &CatalogOverrides::empty(), &opts(Language::En));
        assert!(md.contains("- Heat protectant (up to 450°F) → (not set)"));
    }

    #[test]
    fn test_arabic_headings() {
        let routine = Routine::for_profile(Profile::default());
        let md = render_report(&routine, &CatalogOverrides::empty(), &opts(Language::Ar));
        assert!(md.contains("## المنتجات الموصى بها"));
        assert!(md.contains("### كل 2–4 أسابيع"));
    }
}

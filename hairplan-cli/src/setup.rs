use anyhow::{bail, Context, Result};
use hairplan_core::{
    AgeBracket, ChemicalHistory, Climate, Concern, Density, HairType, Porosity, Profile,
    ScalpCondition, StylingFrequency, WashFrequency,
};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use crate::i18n::{Language, Text};
use crate::state::{write_profile, SavedProfile, StateDir};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Accept a 1-based option number, a label or a slug; blank keeps `default`.
pub fn parse_choice<T>(input: &str, options: &[T], default: T) -> Result<T>
where
    T: Copy + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    if let Ok(n) = input.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| options.get(i)) {
            Some(o) => Ok(*o),
            None => bail!("choose a number between 1 and {}", options.len()),
        };
    }
    Ok(input.parse::<T>()?)
}

/// Comma-separated concern numbers or labels; blank means none.
pub fn parse_concerns(input: &str) -> Result<BTreeSet<Concern>> {
    let mut out = BTreeSet::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let c = parse_choice(part, Concern::ALL, Concern::Dryness)
            .with_context(|| format!("concern '{part}'"))?;
        out.insert(c);
    }
    Ok(out)
}

fn ask<T>(label: &str, options: &[T], default: T) -> Result<T>
where
    T: Copy + FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    println!("\n{label}");
    for (i, o) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, o);
    }
    loop {
        let answer = prompt(&format!("[{default}]"))?;
        match parse_choice(&answer, options, default) {
            Ok(v) => return Ok(v),
            Err(e) => println!("  {e}"),
        }
    }
}

fn ask_concerns(label: &str) -> Result<BTreeSet<Concern>> {
    println!("\n{label} (comma-separated numbers; blank for none)");
    for (i, c) in Concern::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, c);
    }
    loop {
        match parse_concerns(&prompt(">")?) {
            Ok(v) => return Ok(v),
            Err(e) => println!("  {e:#}"),
        }
    }
}

fn ask_wash_frequency(label: &str, default: WashFrequency) -> Result<WashFrequency> {
    loop {
        let answer = prompt(&format!("\n{label} [{default}]"))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<WashFrequency>() {
            Ok(v) => return Ok(v),
            Err(e) => println!("  {e}"),
        }
    }
}

/// Walk through the questionnaire and save the answers.
pub fn run_setup(dir: &StateDir, lang: Language) -> Result<()> {
    println!("{}\n", Text::Title.in_lang(lang));
    println!("{}", Text::Intro.in_lang(lang));

    let d = Profile::default();
    let answers = Profile {
        hair_type: ask(Text::HairType.in_lang(lang), HairType::ALL, d.hair_type)?,
        density: ask(Text::Density.in_lang(lang), Density::ALL, d.density)?,
        porosity: ask(Text::Porosity.in_lang(lang), Porosity::ALL, d.porosity)?,
        scalp: ask(Text::Scalp.in_lang(lang), ScalpCondition::ALL, d.scalp)?,
        chemical_history: ask(
            Text::ChemicalHistory.in_lang(lang),
            ChemicalHistory::ALL,
            d.chemical_history,
        )?,
        concerns: ask_concerns(Text::Concerns.in_lang(lang))?,
        climate: ask(Text::Climate.in_lang(lang), Climate::ALL, d.climate)?,
        wash_frequency: ask_wash_frequency(Text::WashFrequency.in_lang(lang), d.wash_frequency)?,
        styling_frequency: ask(
            Text::StylingFrequency.in_lang(lang),
            StylingFrequency::ALL,
            d.styling_frequency,
        )?,
        age_bracket: ask(AgeBracket::FIELD, AgeBracket::ALL, d.age_bracket)?,
    };

    let saved = SavedProfile {
        created_at_utc: Some(chrono::Utc::now().to_rfc3339()),
        answers,
    };
    write_profile(dir, &saved)?;

    println!("\nWrote:");
    println!("- {}", dir.profile_path().display());

    println!("\nNext recommended steps:");
    println!("- hairplan advise                 (print your routine)");
    println!("- hairplan map set <category> <product>");
    println!("- hairplan export --out hair-routine.json");

    Ok(())
}

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hairplan_catalog::{entries, map_products, resolve, NOT_SET};
use hairplan_core::{
    products, AgeBracket, ChemicalHistory, Climate, Concern, Density, HairType, Porosity, Profile,
    Routine, RoutineExport, ScalpCondition, StylingFrequency, WashFrequency,
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

mod config;
mod i18n;
mod render;
mod setup;
mod state;

use crate::i18n::Language;
use crate::render::{render_report, ReportOptions};
use crate::state::StateDir;

#[derive(Parser, Debug)]
#[command(
    name = "hairplan",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("HAIRPLAN_BUILD_SHA"), ")"),
    about = "Personalized hair & scalp routine advisor"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive questionnaire: writes ~/.hairplan/profile.json
    Setup {
        #[arg(long, value_enum)]
        lang: Option<Language>,
    },

    /// Print the routine for the saved profile (flags override single answers)
    Advise {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_enum)]
        lang: Option<Language>,

        /// Write the report to a file instead of stdout (print / save)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write profile, recommendations, schedule and mapping as JSON
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output file (default from config: hair-routine.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Map generic categories to your own product names
    Map {
        #[command(subcommand)]
        command: MapCommand,
    },

    /// Browse the built-in product catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MapCommand {
    /// Show the mapping for every category recommended to the saved profile
    Show,
    /// Set the product name for a category
    Set { generic: String, product: String },
    /// Remove a category's product name
    Unset { generic: String },
    /// Print the "<category> → <product>" line for copying
    Copy { generic: String },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List all catalog entries
    List,
    /// Resolve a generic category to its catalog entry
    Resolve { label: String },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.hairplan/config.toml with defaults
    Init,
}

/// Per-answer overrides applied on top of the saved profile.
#[derive(Args, Debug, Default)]
struct ProfileArgs {
    #[arg(long)]
    hair_type: Option<HairType>,
    #[arg(long)]
    density: Option<Density>,
    #[arg(long)]
    porosity: Option<Porosity>,
    #[arg(long)]
    scalp: Option<ScalpCondition>,
    #[arg(long)]
    chemical_history: Option<ChemicalHistory>,
    /// Add a concern (repeatable)
    #[arg(long = "concern")]
    concerns: Vec<Concern>,
    /// Drop the saved concerns before adding --concern values
    #[arg(long)]
    clear_concerns: bool,
    #[arg(long)]
    climate: Option<Climate>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    wash_frequency: Option<u8>,
    #[arg(long)]
    styling_frequency: Option<StylingFrequency>,
    #[arg(long)]
    age_bracket: Option<AgeBracket>,
}

impl ProfileArgs {
    fn apply(self, mut p: Profile) -> Result<Profile> {
        if let Some(v) = self.hair_type {
            p.hair_type = v;
        }
        if let Some(v) = self.density {
            p.density = v;
        }
        if let Some(v) = self.porosity {
            p.porosity = v;
        }
        if let Some(v) = self.scalp {
            p.scalp = v;
        }
        if let Some(v) = self.chemical_history {
            p.chemical_history = v;
        }
        if self.clear_concerns {
            p.concerns.clear();
        }
        p.concerns.extend(self.concerns);
        if let Some(v) = self.climate {
            p.climate = v;
        }
        if let Some(v) = self.wash_frequency {
            p.wash_frequency = WashFrequency::new(v)?;
        }
        if let Some(v) = self.styling_frequency {
            p.styling_frequency = v;
        }
        if let Some(v) = self.age_bracket {
            p.age_bracket = v;
        }
        Ok(p)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("hairplan started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let dir = StateDir::from_env()?;
    let cfg = config::load_config(&dir)?;

    match cli.command {
        Command::Setup { lang } => {
            setup::run_setup(&dir, lang.unwrap_or(cfg.report.language))?;
        }

        Command::Advise { profile, lang, out } => {
            let routine = load_routine(&dir, profile)?;
            let overrides = state::read_overrides(&dir)?;
            let opts = ReportOptions {
                lang: lang.unwrap_or(cfg.report.language),
                show_catalog_links: cfg.report.show_catalog_links,
            };
            let md = render_report(&routine, &overrides, &opts);
            match out {
                Some(path) => {
                    fs::write(&path, md).with_context(|| format!("write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{md}"),
            }
        }

        Command::Export { profile, out } => {
            let routine = load_routine(&dir, profile)?;
            let overrides = state::read_overrides(&dir)?;
            let mut export = RoutineExport::new(
                &routine.profile,
                &routine.recommendations,
                &routine.schedule,
                overrides.into_map(),
            );
            if cfg.export.include_timestamp {
                export = export.stamped(chrono::Utc::now());
            }
            let path = out.unwrap_or_else(|| cfg.export_path());
            fs::write(&path, export.to_json_pretty()?)
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), products = export.recommendations.len(), "exported routine");
            println!("Wrote {}", path.display());
        }

        Command::Map { command } => run_map(&dir, command)?,

        Command::Catalog { command } => match command {
            CatalogCommand::List => {
                for (key, e) in entries() {
                    println!("{key}: {} | {} | {}", e.name, e.url, e.tags.join(", "));
                }
            }
            CatalogCommand::Resolve { label } => match resolve(&label) {
                Some(e) => println!("{} | {} | {}", e.name, e.url, e.tags.join(", ")),
                None => bail!("no catalog mapping for '{label}' (set one with: hairplan map set)"),
            },
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(&dir)?,
        },
    }

    Ok(())
}

fn load_routine(dir: &StateDir, args: ProfileArgs) -> Result<Routine> {
    let profile = args.apply(state::read_profile(dir)?)?;
    debug!(?profile, "evaluating profile");
    Ok(Routine::for_profile(profile))
}

fn run_map(dir: &StateDir, command: MapCommand) -> Result<()> {
    let mut overrides = state::read_overrides(dir)?;

    match command {
        MapCommand::Show => {
            let routine = load_routine(dir, ProfileArgs::default())?;
            for row in map_products(&routine.recommendations, &overrides) {
                let catalog = row.catalog.map(|e| e.name).unwrap_or("-");
                println!(
                    "{}\n    manual:  {}\n    catalog: {}",
                    row.generic,
                    row.manual.as_deref().unwrap_or(NOT_SET),
                    catalog
                );
            }
        }
        MapCommand::Set { generic, product } => {
            warn_if_unknown(&generic);
            overrides.set(generic.clone(), product);
            state::write_overrides(dir, &overrides)?;
            println!("{}", overrides.mapping_line(&generic));
        }
        MapCommand::Unset { generic } => {
            if overrides.remove(&generic).is_none() {
                bail!("no mapping set for '{generic}'");
            }
            state::write_overrides(dir, &overrides)?;
            println!("{}", overrides.mapping_line(&generic));
        }
        MapCommand::Copy { generic } => {
            warn_if_unknown(&generic);
            println!("{}", overrides.mapping_line(&generic));
        }
    }

    Ok(())
}

fn warn_if_unknown(generic: &str) {
    if !products::ALL.contains(&generic) {
        warn!(generic, "not a category the routine rules recommend");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_profile_flags() {
        let cli = Cli::try_parse_from([
            "hairplan",
            "advise",
            "--hair-type",
            "coily",
            "--scalp",
            "Oily",
            "--concern",
            "heat",
            "--concern",
            "Breakage/Damage",
            "--wash-frequency",
            "5",
        ])
        .unwrap();
        let Command::Advise { profile, .. } = cli.command else {
            panic!("expected advise");
        };
        let p = profile.apply(Profile::default()).unwrap();
        assert_eq!(p.hair_type, HairType::Coily);
        assert_eq!(p.scalp, ScalpCondition::Oily);
        assert!(p.has_concern(Concern::HeatStylingOften));
        assert!(p.has_concern(Concern::BreakageDamage));
        assert_eq!(p.wash_frequency.per_week(), 5);
    }

    #[test]
    fn test_cli_rejects_out_of_range_wash_frequency() {
        assert!(Cli::try_parse_from(["hairplan", "export", "--wash-frequency", "9"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_option() {
        assert!(Cli::try_parse_from(["hairplan", "advise", "--climate", "Arctic"]).is_err());
    }

    #[test]
    fn test_clear_concerns() {
        let args = ProfileArgs {
            clear_concerns: true,
            concerns: vec![Concern::Frizz],
            ..ProfileArgs::default()
        };
        let p = args
            .apply(Profile::default().with_concern(Concern::Dryness))
            .unwrap();
        assert_eq!(p.concerns.len(), 1);
        assert!(p.has_concern(Concern::Frizz));
    }
}

//! Rutez CLI - query the RuThes thesaurus from the command line

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use rutez::config::{self, RutezConfig};
use rutez::query::{LemmaReport, QueryEngine, TraversalMode};
use rutez::storage::ThesaurusStore;
use rutez::ui::{self, Icons};
use rutez::{RelationKind, SinsetId};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "rutez")]
#[command(version)]
#[command(about = "Query the RuThes thesaurus: sinsets, synonyms and semantic relations")]
#[command(long_about = r#"
Rutez reads a pre-populated thesaurus database and answers:
  • which concepts (sinsets) a word belongs to
  • the synonyms of a concept
  • direct hyperonyms, hyponyms, holonyms, meronyms and associations
  • the full transitive hyperonym chain of a concept or word

Example usage:
  rutez show "постоянная сущность"
  rutez concepts человек
  rutez closure --lemma явление
  rutez related 106944 --kind hyponym
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the thesaurus database (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Report how long the command took
    #[arg(long, global = true)]
    timing: bool,

    /// Suppress banners and info lines
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print everything known about a lemma
    Show {
        /// Lemma to look up (defaults to the configured lemma)
        lemma: Option<String>,
    },

    /// List the sinsets a lemma belongs to
    Concepts {
        lemma: String,
    },

    /// List the words of a sinset
    Synonyms {
        id: SinsetId,
    },

    /// Direct relations of one kind
    Related {
        id: SinsetId,

        /// hyperonym, hyponym, holonym, meronym or association
        #[arg(short, long, default_value = "hyperonym")]
        kind: RelationKind,
    },

    /// All outgoing relations of a sinset
    Relations {
        id: SinsetId,
    },

    /// Transitive closure of one relation kind
    Closure {
        /// Start from a sinset id
        #[arg(long, conflicts_with = "lemma", required_unless_present = "lemma")]
        id: Option<SinsetId>,

        /// Start from every sinset of a lemma
        #[arg(short, long)]
        lemma: Option<String>,

        #[arg(short, long, default_value = "hyperonym")]
        kind: RelationKind,

        /// Load the relation into memory once instead of querying per sinset
        #[arg(long)]
        bulk: bool,
    },

    /// Show statistics about the thesaurus
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ui::init_quiet(cli.quiet);

    // Initialize logging; stdout is reserved for listings
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    let database = config.database_path(cli.database.as_deref());

    let started = Instant::now();
    let store = ThesaurusStore::open(&database)?;
    run(cli, &config, &store)?;
    store.close()?;

    if cli.timing {
        ui::timing(&format!("{:.2} ms", started.elapsed().as_secs_f64() * 1000.0));
    }

    Ok(())
}

fn run(cli: &Cli, config: &RutezConfig, store: &ThesaurusStore) -> anyhow::Result<()> {
    let engine = QueryEngine::new(store);

    match &cli.command {
        Commands::Show { lemma } => {
            let lemma = config.lemma(lemma.as_deref());
            let report = engine.describe(lemma)?;
            emit(cli.format, &report, || print_report(&report))?;
        }

        Commands::Concepts { lemma } => {
            let concepts = engine.concepts(lemma)?;
            emit(cli.format, &concepts, || {
                ui::header(&format!("{} Concepts for '{}'", Icons::SEARCH, lemma));
                if concepts.is_empty() {
                    ui::warn(&format!("No sinsets contain '{}'", lemma));
                }
                for sinset in &concepts {
                    ui::sinset_line(0, sinset);
                }
            })?;
        }

        Commands::Synonyms { id } => {
            let synonyms = engine.synonyms(*id)?;
            emit(cli.format, &synonyms, || {
                ui::header(&format!("Synonyms of {}", id));
                if synonyms.is_empty() {
                    ui::empty(2);
                }
                for word in &synonyms {
                    println!("  {}", word.name);
                }
            })?;
        }

        Commands::Related { id, kind } => {
            let related = store.related(*id, *kind)?;
            emit(cli.format, &related, || {
                ui::header(&format!("{} {} of {}", Icons::LINK, kind, id));
                ui::listing(0, &format!("{}s ({})", kind, kind.label()), &related);
            })?;
        }

        Commands::Relations { id } => {
            let relations = engine.relations(*id)?;
            emit(cli.format, &relations, || {
                ui::header(&format!("{} Relations of {}", Icons::LINK, id));
                if relations.is_empty() {
                    ui::empty(2);
                }
                for relation in &relations {
                    ui::relation_line(2, relation);
                }
            })?;
        }

        Commands::Closure { id, lemma, kind, bulk } => {
            if !kind.is_hierarchical() {
                ui::warn(&format!("{} is not hierarchical; the closure may span most of the thesaurus", kind));
            }
            let mode = if *bulk { TraversalMode::Bulk } else { TraversalMode::Incremental };
            let engine = QueryEngine::new(store).with_mode(mode);
            let (start, closure) = match (id, lemma) {
                (Some(id), _) => (id.to_string(), engine.closure_by_id(*id, *kind)?),
                (None, Some(lemma)) => (format!("'{}'", lemma), engine.closure_by_lemma(lemma, *kind)?),
                (None, None) => anyhow::bail!("either --id or --lemma is required"),
            };
            emit(cli.format, &closure, || {
                ui::header(&format!("{} All {}s of {}", Icons::UP, kind, start));
                ui::listing(0, &format!("{} sinsets in {} rounds", closure.len(), closure.rounds), &closure.members);
            })?;
        }

        Commands::Stats => {
            let stats = store.stats()?;
            emit(cli.format, &stats, || {
                ui::header(&format!("{} Thesaurus Statistics", Icons::STATS));
                ui::info(&format!("{} Database", Icons::DATABASE), &config.database_path(cli.database.as_deref()).display().to_string());
                println!("{}", ui::stats_table(&stats));
            })?;
        }
    }

    Ok(())
}

/// Print `value` as JSON, or run the human renderer
fn emit<T: Serialize>(format: OutputFormat, value: &T, human: impl FnOnce()) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => human(),
    }
    Ok(())
}

fn print_report(report: &LemmaReport) {
    ui::header(&format!("{} Concepts for '{}'", Icons::SEARCH, report.lemma));
    if report.is_empty() {
        ui::warn(&format!("No sinsets contain '{}'", report.lemma));
        return;
    }

    for concept in &report.concepts {
        ui::concept(&concept.sinset);
        let synonyms: Vec<&str> = concept.synonyms.iter().map(|w| w.name.as_str()).collect();
        println!("  synonyms: {}", synonyms.join(", "));
        ui::listing(2, "hyperonyms", &concept.hyperonyms);
        ui::listing(2, "all hyperonyms", &concept.all_hyperonyms.members);
        ui::listing(2, "hyponyms", &concept.hyponyms);
        ui::listing(2, "holonyms", &concept.holonyms);
        ui::listing(2, "meronyms", &concept.meronyms);
        ui::listing(2, "associations", &concept.associations);
    }

    println!();
    ui::listing(0, "all hyperonyms by name", &report.all_hyperonyms.members);
}

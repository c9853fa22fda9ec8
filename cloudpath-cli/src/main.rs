//! Cloudpath CLI — inspect and exercise the walkthrough catalog.
//!
//! Commands:
//! - `catalog` — list use cases and their steps with display attributes
//! - `show` — print one step in full
//! - `validate` — check catalog integrity
//! - `walk` — replay navigation operations and print the resulting state

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cloudpath_core::{
    lookup_step_display, Catalog, DisplayAttributes, NavError, NavigationState, Navigator, Step,
    UseCase,
};

#[derive(Parser)]
#[command(
    name = "cloudpath",
    about = "Cloudpath CLI — local-to-cloud backend walkthrough catalog"
)]
struct Cli {
    /// Log filter for stderr diagnostics (e.g. "debug").
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List use cases and their steps.
    Catalog {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one step with its display attributes.
    Show {
        /// Step id, e.g. reg-email.
        step_id: String,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check that every step and use case reference each other consistently.
    Validate,
    /// Replay navigation from the initial state and print the final state as JSON.
    ///
    /// Operations: next, prev, jump:N, use-case:N|ID, next-use-case,
    /// prev-use-case, toggle:STEP_ID, flat:N.
    Walk {
        /// Start from this JSON state instead of the initial one.
        #[arg(long)]
        from: Option<String>,

        #[arg(required = true)]
        ops: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log level {:?}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::global();
    match cli.command {
        Commands::Catalog { json } => run_catalog(catalog, json),
        Commands::Show { step_id, json } => run_show(catalog, &step_id, json),
        Commands::Validate => run_validate(catalog),
        Commands::Walk { from, ops } => run_walk(catalog, from.as_deref(), &ops),
    }
}

#[derive(Serialize)]
struct StepView<'a> {
    #[serde(flatten)]
    step: &'a Step,
    display: DisplayAttributes,
}

#[derive(Serialize)]
struct UseCaseView<'a> {
    #[serde(flatten)]
    use_case: &'a UseCase,
    steps: Vec<StepView<'a>>,
}

fn catalog_view(catalog: &Catalog) -> Vec<UseCaseView<'_>> {
    catalog
        .use_cases()
        .iter()
        .enumerate()
        .map(|(i, use_case)| UseCaseView {
            use_case,
            steps: catalog
                .steps_of(i)
                .into_iter()
                .map(|step| StepView {
                    step,
                    display: DisplayAttributes::for_step(step),
                })
                .collect(),
        })
        .collect()
}

fn run_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    let view = catalog_view(catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    for use_case in &view {
        println!(
            "{} — {} [{}]",
            use_case.use_case.id,
            use_case.use_case.title,
            use_case.use_case.color_tag.label()
        );
        for (i, s) in use_case.steps.iter().enumerate() {
            println!(
                "  {}. {:<16} {:<24} {:<9} {:<16} {}",
                i + 1,
                s.step.id,
                s.step.title,
                s.display.icon.label(),
                s.display.location_bucket.label(),
                s.step.location,
            );
        }
        println!();
    }
    println!(
        "{} use cases, {} steps",
        catalog.use_cases().len(),
        catalog.total_steps()
    );
    Ok(())
}

fn run_show(catalog: &Catalog, step_id: &str, json: bool) -> Result<()> {
    let display = lookup_step_display(catalog, step_id)?;
    let step = catalog
        .step(step_id)
        .ok_or_else(|| anyhow!("unknown step: {step_id}"))?;

    if json {
        let view = StepView { step, display };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{} {}", display.icon.glyph(), step.title);
    println!("  id:        {}", step.id);
    println!("  use case:  {}", step.use_case_id);
    println!("  location:  {} ({})", display.badge_label, display.location_bucket.label());
    println!("  color:     {}", display.color_tag.label());
    println!();
    println!("What happens here:");
    println!("  {}", step.description);
    println!();
    println!("AI Prompt to use:");
    println!("  \"{}\"", step.prompt);
    Ok(())
}

fn run_validate(catalog: &Catalog) -> Result<()> {
    catalog.validate().context("catalog integrity check failed")?;
    println!(
        "catalog ok: {} use cases, {} steps",
        catalog.use_cases().len(),
        catalog.total_steps()
    );
    Ok(())
}

/// One navigation operation in a `walk` script.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WalkOp {
    Next,
    Prev,
    Jump(usize),
    UseCase(usize),
    NextUseCase,
    PrevUseCase,
    Toggle(String),
    Flat(usize),
}

impl FromStr for WalkOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let index = |arg: Option<&str>| -> Result<usize> {
            let arg = arg.ok_or_else(|| anyhow!("{name} needs an index, e.g. {name}:0"))?;
            arg.parse::<usize>()
                .with_context(|| format!("invalid index {arg:?} in {s:?}"))
        };
        Ok(match name {
            "next" => WalkOp::Next,
            "prev" => WalkOp::Prev,
            "next-use-case" => WalkOp::NextUseCase,
            "prev-use-case" => WalkOp::PrevUseCase,
            "jump" => WalkOp::Jump(index(arg)?),
            "use-case" => match arg {
                Some(id) if !id.is_empty() && !id.bytes().all(|b| b.is_ascii_digit()) => {
                    let i = Catalog::global()
                        .use_case_index(id)
                        .ok_or_else(|| anyhow!("unknown use case: {id}"))?;
                    WalkOp::UseCase(i)
                }
                _ => WalkOp::UseCase(index(arg)?),
            },
            "flat" => WalkOp::Flat(index(arg)?),
            "toggle" => match arg {
                Some(id) if !id.is_empty() => WalkOp::Toggle(id.to_string()),
                _ => bail!("toggle needs a step id, e.g. toggle:reg-email"),
            },
            other => bail!("unknown operation: {other}"),
        })
    }
}

fn apply(
    nav: &Navigator<'_>,
    state: &NavigationState,
    op: &WalkOp,
) -> Result<NavigationState, NavError> {
    match op {
        WalkOp::Next => Ok(nav.go_to_next_step(state)),
        WalkOp::Prev => Ok(nav.go_to_previous_step(state)),
        WalkOp::Jump(i) => nav.jump_to_step(state, *i),
        WalkOp::UseCase(i) => nav.select_use_case(state, *i),
        WalkOp::NextUseCase => Ok(nav.go_to_next_use_case(state)),
        WalkOp::PrevUseCase => Ok(nav.go_to_previous_use_case(state)),
        WalkOp::Toggle(id) => nav.toggle_step_detail(state, id),
        WalkOp::Flat(i) => nav.jump_to_flat(state, *i),
    }
}

/// Apply every op in order from `start`; rejected ops are reported and skipped.
fn walk(
    catalog: &Catalog,
    start: NavigationState,
    ops: &[WalkOp],
) -> (NavigationState, Vec<(WalkOp, NavError)>) {
    let nav = Navigator::new(catalog);
    let mut state = start;
    let mut rejected = Vec::new();
    for op in ops {
        match apply(&nav, &state, op) {
            Ok(next) => state = next,
            Err(err) => {
                warn!(?op, error = %err, "operation rejected");
                rejected.push((op.clone(), err));
            }
        }
    }
    (state, rejected)
}

/// Parse a JSON state and check it against the catalog.
fn start_state(catalog: &Catalog, json: Option<&str>) -> Result<NavigationState> {
    let Some(json) = json else {
        return Ok(NavigationState::initial());
    };
    let raw: NavigationState =
        serde_json::from_str(json).context("--from is not a navigation state")?;
    Navigator::new(catalog)
        .restore(raw)
        .context("--from does not fit the catalog")
}

fn run_walk(catalog: &Catalog, from: Option<&str>, raw: &[String]) -> Result<()> {
    let start = start_state(catalog, from)?;
    let ops = raw
        .iter()
        .map(|s| s.parse::<WalkOp>())
        .collect::<Result<Vec<_>>>()?;

    let (state, rejected) = walk(catalog, start, &ops);
    for (op, err) in &rejected {
        eprintln!("skipped {op:?}: {err}");
    }
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

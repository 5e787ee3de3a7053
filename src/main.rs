use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use prepost_form::{
    Action, FormMachine, FormVariant, Settings, load_settings,
    core::{
        FileStore, MemoryStore, StateRepository, Submission, Trigger, alert_text, validate,
    },
};

#[derive(Parser)]
#[command(name = "prepost-form")]
#[command(about = "Early entry and late checkout registration form")]
struct Cli {
    /// Path to a TOML settings file (defaults to ./prepost-form.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Form edition, e.g. ingreso-anticipado or late-checkout-proveedores
    #[arg(long)]
    variant: Option<FormVariant>,

    /// Directory holding saved drafts
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Keep the draft in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the form window (default)
    Gui,
    /// Print the saved draft and what the form would show
    Show,
    /// List group capacities
    Capacity {
        #[arg(long)]
        area: Option<String>,
    },
    /// Apply one action given as JSON, e.g. '{"type":"SET_AREA","area":"Camps"}'
    Dispatch {
        #[arg(value_name = "ACTION_JSON")]
        action: String,
    },
    /// Print the submission payload for the current draft
    Export,
    /// Discard the saved draft
    Reset,
}

type HeadlessMachine = FormMachine<Box<dyn StateRepository>>;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut settings = load_settings(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(variant) = args.variant {
        settings.variant = variant;
    }
    if let Some(state_dir) = args.state_dir {
        settings.state_dir = state_dir;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { settings.log_filter.as_str() })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match args.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(settings, args.ephemeral),
        Command::Show => {
            let machine = open_machine(&settings, args.ephemeral);
            println!("{}", serde_json::to_string_pretty(machine.state())?);
            print_summary(&machine);
            Ok(())
        }
        Command::Capacity { area } => {
            print_capacities(&settings, area.as_deref());
            Ok(())
        }
        Command::Dispatch { action } => {
            let action: Action =
                serde_json::from_str(&action).context("Failed to parse action JSON")?;
            let mut machine = open_machine(&settings, args.ephemeral);

            let trigger = match action {
                Action::AddMember => Some(Trigger::AddMember),
                Action::SubmitForm => Some(Trigger::Submit),
                _ => None,
            };
            if let Some(trigger) = trigger {
                let report = validate(machine.state(), settings.variant);
                if !report.is_valid() {
                    bail!("{}", alert_text(settings.variant, trigger, &report));
                }
            }

            machine
                .dispatch(action)
                .context("Failed to save form state")?;
            print_summary(&machine);
            Ok(())
        }
        Command::Export => {
            let machine = open_machine(&settings, args.ephemeral);
            let submission = Submission::from_state(
                settings.variant,
                machine.state(),
                settings.form_url(),
                OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
            )?;
            println!("{}", serde_json::to_string_pretty(&submission)?);
            Ok(())
        }
        Command::Reset => {
            let mut machine = open_machine(&settings, args.ephemeral);
            machine.reset().context("Failed to clear saved draft")?;
            println!("Draft for {} cleared.", settings.variant);
            Ok(())
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(settings: Settings, ephemeral: bool) -> anyhow::Result<()> {
    prepost_form::gui::run(settings, ephemeral)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_settings: Settings, _ephemeral: bool) -> anyhow::Result<()> {
    bail!("built without the `gui` feature; use a subcommand such as `show` or `dispatch`")
}

fn open_machine(settings: &Settings, ephemeral: bool) -> HeadlessMachine {
    let repo: Box<dyn StateRepository> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&settings.state_dir))
    };
    FormMachine::new(settings.layout(), repo)
}

fn print_summary(machine: &HeadlessMachine) {
    let view = machine.view();
    let state = machine.state();

    println!("\n=== {} ===", view.variant.title());
    println!(
        "Area: {}{}",
        display_or_dash(&view.area.value),
        if view.area.locked { " (locked)" } else { "" }
    );
    if let Some(selector) = view.visible_group_selector() {
        println!(
            "Grupo: {}{}",
            display_or_dash(&selector.value),
            if selector.locked { " (locked)" } else { "" }
        );
    }

    match &view.roster {
        None => println!("Members: choose a group first"),
        Some(roster) => {
            println!(
                "Members: {}/{} ({} remaining)",
                roster.members.len(),
                roster.capacity,
                roster.remaining
            );
            for (card, member) in roster.members.iter().zip(&state.members) {
                let values: Vec<String> = member
                    .fields
                    .iter()
                    .map(|(field, value)| format!("{field}={value}"))
                    .collect();
                println!(
                    "  {}. [{}] {}",
                    card.index + 1,
                    if card.disabled { "submitted" } else { "open" },
                    values.join(", ")
                );
            }
            if let Some(control) = view.trailing_add_control() {
                println!("Next control: {}", control.label);
            }
        }
    }

    if view.thank_you_visible {
        println!("Thank you panel shown; submit controls hidden.");
    }
}

fn print_capacities(settings: &Settings, area: Option<&str>) {
    let table = prepost_form::CapacityTable::for_variant(settings.variant);
    let areas: Vec<&str> = match area {
        Some(area) => vec![area],
        None => table.areas().collect(),
    };

    for area in areas {
        println!("{area}:");
        for (group, capacity) in table.groups(area) {
            println!("  {group:<32} {capacity}");
        }
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

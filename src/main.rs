mod app;
mod color;
mod config;
mod input;
mod tui;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use tui::theme::{parse_project_color, project_color, Palette, Priority, Role, Theme};

#[derive(Debug, Parser)]
#[command(name = "taskhue", version, about = "Task manager color theme: inspect, override, preview")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List palette roles and colors (default).
    Show {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print one role's color, e.g. `taskHighPriority`.
    Get { name: String },
    /// Show the badge colors for a task priority level (1 = low, 2 = medium, 3 = high).
    Priority { level: i32 },
    /// Resolve a project color string (default color when omitted).
    Project { color: Option<String> },
    /// Interactive palette preview.
    Preview,
    /// Validate theme overrides in the config file.
    Check,
    /// Config file management.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config file path.
    Path,
    /// Overwrite the config file with defaults.
    Reset,
}

#[derive(Debug, Serialize)]
struct PaletteEntry {
    role: &'static str,
    hex: String,
    argb: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Show { json: false });

    // Commands that must work without (or despite) a readable config file.
    match command {
        Command::Config { cmd } => {
            match cmd {
                ConfigCommand::Path => {
                    let path = match cli.config {
                        Some(p) => p,
                        None => config::default_config_path().context("default config path")?,
                    };
                    println!("{}", path.display());
                }
                ConfigCommand::Reset => {
                    config::save(&config::defaults::defaults(), cli.config.as_deref())
                        .context("save config")?;
                    println!("Config reset to defaults.");
                }
            }
            return Ok(());
        }
        Command::Project { color } => {
            if let Err(e) = parse_project_color(color.as_deref()) {
                tracing::warn!("invalid project color, using default: {e}");
            }
            println!("{}", project_color(color.as_deref()));
            return Ok(());
        }
        _ => {}
    }

    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match command {
        Command::Show { json } => {
            let theme = Theme::from_config(&cfg);
            if json {
                let entries: Vec<PaletteEntry> = theme
                    .palette
                    .entries()
                    .map(|(role, color)| PaletteEntry {
                        role: role.name(),
                        hex: color.to_string(),
                        argb: color.to_u32(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_palette(&theme.palette);
            }
        }
        Command::Get { name } => {
            let theme = Theme::from_config(&cfg);
            let Some(color) = theme.palette.get_by_name(&name) else {
                let known: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
                bail!("unknown role '{name}' (expected one of: {})", known.join(", "));
            };
            println!("{color}");
        }
        Command::Priority { level } => {
            let theme = Theme::from_config(&cfg);
            let p = Priority::from_level(level);
            println!(
                "{} ({})  badge={}  text={}",
                p.label(),
                p.level(),
                theme.palette.priority_color(p),
                p.badge_text_color()
            );
        }
        Command::Preview => {
            let theme = Theme::from_config(&cfg);
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(&cfg, &theme);
            app.run(terminal.terminal_mut())?;
        }
        Command::Check => {
            let issues = Theme::validate(&cfg);
            if !issues.is_empty() {
                for issue in &issues {
                    eprintln!("{issue}");
                }
                bail!("{} invalid theme setting(s)", issues.len());
            }
            println!("Theme settings OK.");
        }
        Command::Config { .. } | Command::Project { .. } => unreachable!("handled before config load"),
    }

    Ok(())
}

fn print_palette(palette: &Palette) {
    for (role, color) in palette.entries() {
        println!("{:<20} {}", role.name(), color);
    }
}

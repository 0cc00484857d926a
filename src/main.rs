use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;

use theme_toggle::{
    logging, set_theme_detector, AppConfig, ColorMode, FileStorage, Page, ThemePreference,
};

#[derive(Parser, Debug)]
#[command(name = "theme-toggle", version, about = "Render and toggle a themed greeting page")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file the theme preference is persisted into
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Pretend the system prefers this color mode instead of asking the OS
    #[arg(long, global = true, value_parser = parse_color_mode)]
    system: Option<ColorMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page as HTML
    Render {
        /// Render after hydration, with the toggle button visible
        #[arg(long)]
        hydrated: bool,
    },
    /// Flip between light and dark and persist the result
    Toggle,
    /// Persist a specific preference
    Set {
        #[arg(value_parser = parse_preference)]
        theme: ThemePreference,
    },
    /// Show the stored preference and the resolved theme
    Status,
}

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    s.parse().map_err(|e: theme_toggle::Error| e.to_string())
}

fn parse_preference(s: &str) -> Result<ThemePreference, String> {
    s.parse().map_err(|e: theme_toggle::Error| e.to_string())
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.system {
        Some(ColorMode::Dark) => set_theme_detector(|| ColorMode::Dark),
        Some(ColorMode::Light) => set_theme_detector(|| ColorMode::Light),
        None => {}
    }

    let store_path = cli.store.clone().unwrap_or_else(|| config.storage_path());
    tracing::debug!(store = %store_path.display(), "using theme store");
    let mut page = Page::from_config(&config, FileStorage::new(store_path))?;

    match cli.command {
        Command::Render { hydrated } => {
            if hydrated {
                page.hydrate();
            }
            write!(out, "{}", page.render()?)?;
        }
        Command::Toggle => {
            page.hydrate();
            if let Some(resolved) = page.click() {
                writeln!(out, "{}", paint(resolved).apply_to(resolved))?;
            }
        }
        Command::Set { theme } => {
            let handle = page.theme();
            handle.set_theme(theme);
            if handle.theme() != theme {
                anyhow::bail!("theme '{}' is disabled by configuration", theme);
            }
            writeln!(out, "{}", paint(handle.resolved_theme()).apply_to(theme))?;
        }
        Command::Status => {
            let snapshot = page.theme().snapshot();
            let label = Style::new().dim();
            writeln!(out, "{} {}", label.apply_to("theme:   "), snapshot.theme)?;
            writeln!(
                out,
                "{} {}",
                label.apply_to("resolved:"),
                paint(snapshot.resolved_theme).apply_to(snapshot.resolved_theme)
            )?;
            writeln!(out, "{} {}", label.apply_to("system:  "), snapshot.system_theme)?;
            if let Some(forced) = snapshot.forced_theme {
                writeln!(out, "{} {}", label.apply_to("forced:  "), forced)?;
            }
        }
    }

    Ok(())
}

fn paint(mode: ColorMode) -> Style {
    match mode {
        ColorMode::Dark => Style::new().yellow().bold(),
        ColorMode::Light => Style::new().blue().bold(),
    }
}

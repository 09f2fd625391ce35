//! Command-line front end for the icon pipeline.
//!
//! Usage: icony render fa-flask --color 3B82F6 --size 256 --out exports/
//!
//! Set `RUST_LOG=icony_renderer=debug` to trace rendering and export steps.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use icony_renderer::categorize::{self, Categorizer};
use icony_renderer::{
    CatalogError, CategoryFilter, Configurable, CustomizationProfile, CustomizeError,
    DirectorySink, ExportFormat, FileStore, HexColor, IconCatalog, IconCustomizer, IconQuery,
    LibraryFilter, LibraryKind, SavedPalette, ShareParams, SortOrder, StorageError, UsageContext,
    display_category,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Browse, customize and export vector icons.", long_about = None)]
struct Cli {
    /// JSON icon catalog to use instead of the built-in one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Where favorites, recents and palettes are kept.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Customization profile (JSON) applied before the command's own options.
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct StyleArgs {
    /// Hex color such as `3B82F6` or `#3b82f6`.
    #[arg(long)]
    color: Option<HexColor>,

    /// Icon size in pixels (16-512).
    #[arg(long)]
    size: Option<u32>,

    /// Stroke weight for stroke-based libraries (0.5-4).
    #[arg(long)]
    stroke: Option<f32>,
}

#[derive(Subcommand)]
enum Command {
    /// Export an icon as a PNG or SVG file.
    Render {
        icon: String,
        #[command(flatten)]
        style: StyleArgs,
        #[arg(long, value_enum, default_value = "png")]
        format: ExportFormat,
        /// Output directory.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Copy an icon to the clipboard as an image.
    Copy {
        icon: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Search the catalog.
    Search {
        #[arg(default_value = "")]
        query: String,
        /// `all`, `favorites`, `recent` or a category name.
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, value_enum)]
        library: Option<LibraryKind>,
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List categories with their icon counts.
    Categories,
    /// Toggle an icon's favorite status, or list favorites.
    Favorite { icon: Option<String> },
    /// Show recently used icons and colors.
    Recent,
    /// Manage saved color palettes.
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
    /// Print a share link for an icon.
    Share {
        icon: String,
        #[command(flatten)]
        style: StyleArgs,
        #[arg(long, default_value = "https://icony.app")]
        base: String,
    },
    /// Export the selection encoded in a share link.
    Open {
        link: String,
        #[arg(long, value_enum, default_value = "png")]
        format: ExportFormat,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Generate a categorized dataset from a list of FontAwesome symbols.
    Categorize {
        /// Text file with one symbol (e.g. `faArrowRight`) per line.
        input: PathBuf,
        /// Write JSON here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum PaletteAction {
    Save {
        name: String,
        #[arg(required = true)]
        colors: Vec<HexColor>,
    },
    Delete {
        name: String,
    },
    List,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{}", .0.notice())]
    Customize(#[from] CustomizeError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid profile {path}: {source}")]
    Profile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode dataset: {0}")]
    Encode(serde_json::Error),

    #[error("no data directory; pass --data-dir")]
    NoDataDir,
}

type Customizer = IconCustomizer<FileStore>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Categorize { input, output } = &cli.command {
        return categorize_symbols(input, output.as_deref());
    }

    let catalog = match &cli.catalog {
        Some(path) => IconCatalog::load(path)?,
        None => IconCatalog::builtin()?,
    };
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir().ok_or(CliError::NoDataDir)?.join("icony"),
    };
    let mut customizer = IconCustomizer::new(Arc::new(catalog), FileStore::new(data_dir));
    if let Some(path) = &cli.profile {
        customizer.apply_profile(&read_profile(path)?);
    }

    match cli.command {
        Command::Render {
            icon,
            style,
            format,
            out,
        } => {
            prepare(&mut customizer, &icon, &style)?;
            let receipt = customizer.download(format, &mut DirectorySink::new(out))?;
            println!("{}", receipt.location.display());
        }
        Command::Copy { icon, style } => {
            prepare(&mut customizer, &icon, &style)?;
            #[cfg(feature = "clipboard")]
            let mut clipboard = icony_renderer::SystemClipboard::new();
            #[cfg(not(feature = "clipboard"))]
            let mut clipboard = icony_renderer::NoClipboard;
            customizer.copy_to_clipboard(&mut clipboard)?;
            println!("Copied to clipboard!");
        }
        Command::Search {
            query,
            category,
            library,
            sort,
            limit,
        } => {
            let favorites = customizer.preferences().favorites()?;
            let recent = customizer.preferences().recent_icons()?.into_vec();
            let usage = UsageContext {
                favorites: &favorites,
                recent: &recent,
            };
            let mut request = IconQuery::new(query)
                .with_category(CategoryFilter::parse(&category))
                .with_library(LibraryFilter::from(library));
            if let Some(sort) = sort {
                request = request.with_sort(sort);
            }

            let results = request.run(customizer.catalog().as_slice(), &usage);
            for icon in results.iter().take(limit.unwrap_or(usize::MAX)) {
                let marker = if usage.is_favorite(&icon.id) { "*" } else { " " };
                println!(
                    "{marker} {:<28} {:<24} {:<12} {}",
                    icon.id,
                    icon.name,
                    icon.library().display_name(),
                    display_category(&icon.category)
                );
            }
            tracing::info!(matches = results.len(), "search finished");
        }
        Command::Categories => {
            for (category, count) in icony_renderer::category_counts(customizer.catalog().as_slice())
            {
                println!("{count:>6}  {}", display_category(&category));
            }
        }
        Command::Favorite { icon: Some(icon) } => {
            let now_favorite = customizer.toggle_favorite(&icon)?;
            let verb = if now_favorite { "Added to" } else { "Removed from" };
            println!("{verb} favorites: {icon}");
        }
        Command::Favorite { icon: None } => {
            for id in customizer.preferences().favorites()? {
                println!("{id}");
            }
        }
        Command::Recent => {
            println!("Icons:");
            for id in customizer.preferences().recent_icons()?.as_slice() {
                println!("  {id}");
            }
            println!("Colors:");
            for color in customizer.preferences().recent_colors()?.as_slice() {
                println!("  {color}");
            }
        }
        Command::Palette { action } => manage_palettes(&mut customizer, action)?,
        Command::Share { icon, style, base } => {
            prepare(&mut customizer, &icon, &style)?;
            println!("{}", customizer.share_link()?.to_url(&base));
        }
        Command::Open { link, format, out } => {
            customizer.apply_share_params(&ShareParams::parse(&link));
            let receipt = customizer.download(format, &mut DirectorySink::new(out))?;
            println!("{}", receipt.location.display());
        }
        // handled before the catalog is loaded
        Command::Categorize { .. } => {}
    }
    Ok(())
}

/// Selects `icon` and applies style overrides.
fn prepare(customizer: &mut Customizer, icon: &str, style: &StyleArgs) -> Result<(), CliError> {
    customizer.select_icon(icon)?;
    if let Some(color) = style.color {
        customizer.set_color(color);
    }
    if let Some(size) = style.size {
        customizer.set_size(size);
    }
    if let Some(stroke) = style.stroke {
        customizer.set_stroke_weight(stroke);
    }
    Ok(())
}

fn manage_palettes(customizer: &mut Customizer, action: PaletteAction) -> Result<(), CliError> {
    let preferences = customizer.preferences_mut();
    match action {
        PaletteAction::Save { name, colors } => {
            preferences.save_palette(SavedPalette::new(name.clone(), colors))?;
            println!("Saved palette {name}");
        }
        PaletteAction::Delete { name } => {
            if preferences.delete_palette(&name)? {
                println!("Deleted palette {name}");
            } else {
                println!("No palette named {name}");
            }
        }
        PaletteAction::List => {
            for palette in preferences.palettes()? {
                let colors: Vec<String> = palette.colors.iter().map(HexColor::to_string).collect();
                println!("{}: {}", palette.name, colors.join(" "));
            }
        }
    }
    Ok(())
}

fn read_profile(path: &Path) -> Result<CustomizationProfile, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CustomizationProfile::from_json(&json).map_err(|source| CliError::Profile {
        path: path.to_path_buf(),
        source,
    })
}

fn categorize_symbols(input: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let symbols = fs::read_to_string(input).map_err(|source| CliError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let dataset = categorize::generate(symbols.lines(), &Categorizer::default());

    for (category, count) in dataset.category_stats() {
        eprintln!("{count:>6}  {category}");
    }

    let json = dataset.to_json_pretty().map_err(CliError::Encode)?;
    match output {
        Some(path) => fs::write(path, json).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => println!("{json}"),
    }
    tracing::info!(icons = dataset.len(), "generated dataset");
    Ok(())
}

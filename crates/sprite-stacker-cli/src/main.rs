use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use globset::{Glob, GlobSetBuilder};
use image::{DynamicImage, ImageReader};
use serde::Deserialize;
use sprite_stacker_core::config::SortOrder;
use sprite_stacker_core::{InputImage, StackerConfig, build_sheet, layout_sheet};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-stacker",
    about = "Stack sliced sprites into a tiled spritesheet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --no-progress or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stack every sprite in a directory and pack them into a sheet
    Pack(PackArgs),
    /// Layout-only export (no PNG): compute cell placements and export JSON
    Layout(PackArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Input directory of sliced sprite PNGs (non-recursive)
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Sheet base name (files will be name.png/.json)
    #[arg(short, long, default_value = "sheet", help_heading = "Input/Output")]
    name: String,
    /// YAML config file path (overrides stacking options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Layout
    /// Slice height cut from each source image
    #[arg(long, default_value_t = 16, help_heading = "Layout")]
    tile_size: u32,
    /// Sprites per sheet row
    #[arg(long, default_value_t = 12, help_heading = "Layout")]
    sheet_width: u32,
    /// Sort order: name_asc|none
    #[arg(long, default_value = "name_asc", help_heading = "Layout")]
    sort_order: String,

    // Export
    /// Metadata format: none | json-array | json (alias) | json-hash
    #[arg(long, default_value = "none", help_heading = "Export")]
    metadata: String,
    /// Layout-only: compute cell placements and export metadata (no PNG)
    #[arg(long, default_value_t = false, help_heading = "Export")]
    layout_only: bool,
    /// Export sheet stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Dry run: compute the sheet and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args, cli.progress && !cli.quiet),
        Commands::Layout(args) => {
            let mut a = args.clone();
            a.layout_only = true;
            run_pack(&a, false)
        }
    }
}

fn run_pack(cli: &PackArgs, show_progress: bool) -> anyhow::Result<()> {
    let mut cli = cli.clone();
    if cli.layout_only && cli.metadata == "none" {
        cli.metadata = "json-array".into();
    }
    let cli = &cli;
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;

    // Load config file if provided; config file overrides flag values en bloc
    let base = StackerConfig {
        tile_size: cli.tile_size,
        sheet_width: cli.sheet_width,
        sort_order: parse_sort_order(&cli.sort_order)?,
        ..Default::default()
    };
    let cfg = if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        y.into_stacker_config(base)
    } else {
        base
    };

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let paths = gather_paths(&cli.input, &cli.include, &cli.exclude)?;

    // layout-only branch: header dimensions are enough, skip full decode
    if cli.layout_only {
        let mut items: Vec<(String, u32, u32)> = Vec::with_capacity(paths.len());
        for p in &paths {
            let (w, h) = ImageReader::open(p)
                .and_then(|r| r.with_guessed_format())
                .with_context(|| format!("open {}", p.display()))?
                .into_dimensions()
                .with_context(|| format!("read dimensions of {}", p.display()))?;
            items.push((key_for(p), w, h));
        }
        info!(count = items.len(), "collected sprite sources");
        let layout = layout_sheet(items, cfg)?;
        write_metadata_value(cli, &layout)?;
        if let Some(stats_path) = &cli.export_stats {
            write_stats(stats_path, &layout.stats(), cli.dry_run)?;
        }
        return Ok(());
    }

    let inputs = load_images_with_progress(&paths, show_progress)?;
    info!(count = inputs.len(), "loaded sprite sources");
    if inputs.is_empty() {
        warn!(input = %cli.input.display(), "no png sources found; sheet will be empty");
    }

    let out = build_sheet(inputs, cfg)?;

    if !cli.dry_run {
        let png_path = cli.out_dir.join(format!("{}.png", cli.name));
        out.rgba
            .save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!(?png_path, width = out.layout.width, height = out.layout.height, "wrote sheet");
    }

    let stats = out.stats();
    info!(
        sprites = stats.num_sprites,
        rows = stats.rows,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "stats"
    );

    if cli.metadata != "none" {
        write_metadata_value(cli, &out.layout)?;
    }

    if let Some(stats_path) = &cli.export_stats {
        write_stats(stats_path, &stats, cli.dry_run)?;
    }
    Ok(())
}

fn write_metadata_value(
    cli: &PackArgs,
    layout: &sprite_stacker_core::SheetLayout,
) -> anyhow::Result<()> {
    let json_value = match cli.metadata.as_str() {
        // Accept "json" as an alias of "json-array"
        "json-array" | "json" => sprite_stacker_core::to_json_array(layout),
        "json-hash" => sprite_stacker_core::to_json_hash(layout),
        other => anyhow::bail!("unknown metadata format: {}", other),
    };
    if !cli.dry_run {
        let json_path = cli.out_dir.join(format!("{}.json", cli.name));
        let json = serde_json::to_string_pretty(&json_value)?;
        fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
        info!(?json_path, cells = layout.cells.len(), "metadata written");
    }
    Ok(())
}

fn write_stats(
    stats_path: &Path,
    stats: &sprite_stacker_core::SheetStats,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        println!("{}", stats.summary());
        return Ok(());
    }
    fs::write(stats_path, serde_json::to_string_pretty(stats)?)
        .with_context(|| format!("write {}", stats_path.display()))?;
    info!(?stats_path, "stats exported");
    Ok(())
}

fn gather_paths(
    path: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    // Build glob matchers
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    let mut list: Vec<PathBuf> = Vec::new();
    if path.is_file() {
        if !should_skip(path, inc_set.as_ref(), exc_set.as_ref()) && is_png(path) {
            list.push(path.to_path_buf());
        }
    } else {
        // Sprite-slice sources are expected directly in the input directory.
        for entry in WalkDir::new(path)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let p = entry.path();
            if p.is_file() && !should_skip(p, inc_set.as_ref(), exc_set.as_ref()) && is_png(p) {
                list.push(p.to_path_buf());
            }
        }
    }
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn is_png(p: &Path) -> bool {
    matches!(p.extension().and_then(|e| e.to_str()), Some("png"))
}

fn key_for(p: &Path) -> String {
    p.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.to_string_lossy().replace('\\', "/"))
}

fn load_images_with_progress(paths: &[PathBuf], progress: bool) -> anyhow::Result<Vec<InputImage>> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )
            .unwrap(),
        );
        Some(b)
    } else {
        None
    };
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        let msg = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(b) = &bar {
            b.set_message(msg.to_string());
        }
        // A single unreadable source aborts the whole run.
        let img = load_image(p).with_context(|| format!("decode {}", p.display()))?;
        list.push(InputImage {
            key: key_for(p),
            image: img,
        });
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(list)
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    tile_size: Option<u32>,
    stack_height: Option<u32>,
    cell_width: Option<u32>,
    cell_height: Option<u32>,
    sheet_width: Option<u32>,
    sort_order: Option<String>,
}

impl YamlConfig {
    fn into_stacker_config(self, mut cfg: StackerConfig) -> StackerConfig {
        if let Some(v) = self.tile_size {
            cfg.tile_size = v;
        }
        if let Some(v) = self.stack_height {
            cfg.stack_height = v;
        }
        if let Some(v) = self.cell_width {
            cfg.cell_width = v;
        }
        if let Some(v) = self.cell_height {
            cfg.cell_height = v;
        }
        if let Some(v) = self.sheet_width {
            cfg.sheet_width = v;
        }
        if let Some(v) = self.sort_order {
            cfg.sort_order = v.parse().unwrap_or(cfg.sort_order);
        }
        cfg
    }
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    Ok(match s.to_ascii_lowercase().as_str() {
        "name_asc" => SortOrder::NameAsc,
        "none" => SortOrder::None,
        other => anyhow::bail!("unknown sort order: {}", other),
    })
}

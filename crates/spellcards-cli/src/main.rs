mod logger;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use spellcards_layout::constants::mm_to_pt;
use spellcards_layout::{LayoutOptions, PaginationStats, Spell};
use spellcards_pdf::{PaperSize, SheetOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "spellcards", about = "Spell card layout and printing", version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split spells into cards and write them as JSON
    Split {
        /// Input spells (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Paginate spells on the blocking thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Split spells and render the cards to a printable PDF
    Render {
        /// Input spells (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Show how many cards and sheets the spells need
    Stats {
        /// Input spells (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Write the default layout configuration
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Layout configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Card width in mm, overriding the configuration
    #[arg(long)]
    card_width_mm: Option<f32>,

    /// Card height in mm, overriding the configuration
    #[arg(long)]
    card_height_mm: Option<f32>,
}

impl LayoutArgs {
    async fn resolve(&self) -> Result<LayoutOptions> {
        let mut options = match &self.config {
            Some(path) => LayoutOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => LayoutOptions::default(),
        };

        if let Some(width) = self.card_width_mm {
            options.geometry.width = mm_to_pt(width);
        }
        if let Some(height) = self.card_height_mm {
            options.geometry.height = mm_to_pt(height);
        }

        options.validate()?;
        Ok(options)
    }
}

#[derive(Args)]
struct SheetArgs {
    /// Output paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Paper width in mm for `--paper custom`
    #[arg(long)]
    paper_width_mm: Option<f32>,

    /// Paper height in mm for `--paper custom`
    #[arg(long)]
    paper_height_mm: Option<f32>,

    /// Card rows per sheet
    #[arg(long, default_value = "3")]
    rows: usize,

    /// Card columns per sheet
    #[arg(long, default_value = "3")]
    columns: usize,

    /// Page margin in mm
    #[arg(long, default_value = "5.0")]
    margin_mm: f32,

    /// Gap between cards in mm
    #[arg(long, default_value = "0.0")]
    gap_mm: f32,
}

impl SheetArgs {
    fn paper(&self) -> Result<PaperSize> {
        let paper = match self.paper {
            PaperArg::A4 => PaperSize::A4,
            PaperArg::A5 => PaperSize::A5,
            PaperArg::Letter => PaperSize::Letter,
            PaperArg::Legal => PaperSize::Legal,
            PaperArg::Custom => match (self.paper_width_mm, self.paper_height_mm) {
                (Some(width_mm), Some(height_mm)) => PaperSize::Custom {
                    width_mm,
                    height_mm,
                },
                _ => bail!("--paper custom needs --paper-width-mm and --paper-height-mm"),
            },
        };

        if self.paper != PaperArg::Custom
            && (self.paper_width_mm.is_some() || self.paper_height_mm.is_some())
        {
            log::warn!("Paper dimensions are only used with --paper custom");
        }

        Ok(paper)
    }

    fn options(&self) -> Result<SheetOptions> {
        Ok(SheetOptions {
            paper: self.paper()?,
            rows: self.rows,
            columns: self.columns,
            margin_mm: self.margin_mm,
            gap_mm: self.gap_mm,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
    Legal,
    Custom,
}

async fn load_input(path: &Path) -> Result<Vec<Spell>> {
    let spells = spellcards_layout::load_spells(path)
        .await
        .with_context(|| format!("Failed to load spells from {}", path.display()))?;
    log::info!("Loaded {} spells from {}", spells.len(), path.display());
    Ok(spells)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(CliLogger::level_for(cli.verbose, cli.quiet)).init()?;

    match cli.command {
        Commands::Split {
            input,
            output,
            layout,
            parallel,
        } => {
            let options = layout.resolve().await?;
            let spells = load_input(&input).await?;
            let paginator = options.paginator().await?;

            let cards = if parallel {
                spellcards_layout::paginate_parallel(Arc::new(paginator), spells).await?
            } else {
                paginator.paginate_all(&spells)?
            };

            spellcards_layout::save_spells(&cards, &output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Split into {} cards → {}", cards.len(), output.display());
        }

        Commands::Render {
            input,
            output,
            layout,
            sheet,
        } => {
            let options = layout.resolve().await?;
            let sheet = sheet.options()?;
            let spells = load_input(&input).await?;

            let cards = options.paginator().await?.paginate_all(&spells)?;
            spellcards_pdf::generate_pdf(&cards, &options, &sheet, &output).await?;

            let stats = spellcards_pdf::sheet_stats(cards.len(), &sheet);
            println!(
                "Rendered {} cards on {} sheets → {}",
                stats.cards,
                stats.sheets,
                output.display()
            );
        }

        Commands::Stats {
            input,
            layout,
            sheet,
        } => {
            let options = layout.resolve().await?;
            let sheet = sheet.options()?;
            let spells = load_input(&input).await?;

            let groups = options.paginator().await?.paginate_grouped(&spells)?;
            let stats = PaginationStats::from_groups(&groups);
            let sheets = spellcards_pdf::sheet_stats(stats.cards, &sheet);

            println!("Pagination Statistics:");
            println!("  Spells: {}", stats.spells);
            println!("  Cards: {}", stats.cards);
            println!("  Split spells: {}", stats.split_spells);
            println!("  Most parts: {}", stats.max_parts);
            println!("  Sheets ({}x{}): {}", sheet.columns, sheet.rows, sheets.sheets);
            println!("  Empty slots: {}", sheets.empty_slots);

            for group in groups.iter().filter(|g| g.len() > 1) {
                println!("  {} → {} cards", group[0].name, group.len());
            }
        }

        Commands::InitConfig { output } => {
            LayoutOptions::default()
                .save(&output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote default layout → {}", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_options(args: &[&str]) -> Result<SheetOptions> {
        let cli = Cli::try_parse_from(["spellcards", "stats", "-i", "spells.json"].iter().chain(args))?;
        match cli.command {
            Commands::Stats { sheet, .. } => sheet.options(),
            _ => panic!("Expected the stats command"),
        }
    }

    #[test]
    fn default_sheet_is_a4() {
        let options = sheet_options(&[]).unwrap();
        assert_eq!(options, SheetOptions::default());
    }

    #[test]
    fn custom_paper_takes_dimensions() {
        let options = sheet_options(&[
            "--paper",
            "custom",
            "--paper-width-mm",
            "200",
            "--paper-height-mm",
            "280",
            "--rows",
            "2",
        ])
        .unwrap();
        assert_eq!(
            options.paper,
            PaperSize::Custom {
                width_mm: 200.0,
                height_mm: 280.0
            }
        );
        assert_eq!(options.rows, 2);
    }

    #[test]
    fn custom_paper_without_dimensions_is_an_error() {
        let result = sheet_options(&["--paper", "custom", "--paper-width-mm", "200"]);
        match result {
            Err(err) => assert!(err.to_string().contains("--paper-height-mm")),
            Ok(options) => panic!("Expected an error, got {:?}", options),
        }
    }

    #[test]
    fn named_paper_ignores_dimensions() {
        let options = sheet_options(&["--paper", "letter", "--paper-width-mm", "10"]).unwrap();
        assert_eq!(options.paper, PaperSize::Letter);
    }
}

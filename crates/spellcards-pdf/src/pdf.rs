use crate::card::{BORDER_WIDTH, CardPainter, Mark};
use crate::options::SheetOptions;
use crate::sheet::{SheetGrid, sheet_stats};
use crate::theme::RgbColor;
use crate::types::{RenderError, Result};
use log::info;
use printpdf::*;
use spellcards_layout::{CardMeasurer, GlyphMeasure, LayoutOptions, Spell, Typeface, WrappingOracle};
use std::path::Path;

/// Render paginated cards onto sheets and write the PDF.
///
/// `cards` should already be paginated; each is drawn as-is on one card.
pub async fn generate_pdf(
    cards: &[Spell],
    layout: &LayoutOptions,
    sheet: &SheetOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let paginator = layout.paginator().await?;
    let cards = cards.to_vec();
    let sheet = *sheet;
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        generate_pdf_bytes(&cards, paginator.measurer(), &sheet)
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Build the PDF document in memory
pub fn generate_pdf_bytes<G: GlyphMeasure>(
    cards: &[Spell],
    measurer: &CardMeasurer<WrappingOracle<G>>,
    sheet: &SheetOptions,
) -> Result<Vec<u8>> {
    if cards.is_empty() {
        return Err(RenderError::Config("No cards to render".to_string()));
    }

    let geometry = measurer.geometry();
    let (card_width_mm, card_height_mm) = geometry.dimensions_mm();
    let grid = SheetGrid::new(sheet, card_width_mm, card_height_mm)?;
    let painter = CardPainter::new(measurer);

    let mut doc = PdfDocument::new("Spell Cards");
    let mut pages = Vec::new();

    for chunk in cards.chunks(grid.cards_per_sheet()) {
        let mut ops = Vec::new();

        for (slot, card) in chunk.iter().enumerate() {
            let (x_mm, y_mm) = grid.cell_origin(slot);
            let origin = CardOrigin {
                left: Mm(x_mm).into_pt().0,
                top: Mm(y_mm).into_pt().0 + geometry.height,
            };

            ops.push(Op::SaveGraphicsState);
            for mark in painter.paint(card) {
                push_mark(&mut ops, &origin, mark);
            }
            ops.push(Op::RestoreGraphicsState);
        }

        pages.push(PdfPage::new(
            Mm(grid.page_width_mm),
            Mm(grid.page_height_mm),
            ops,
        ));
    }

    let stats = sheet_stats(cards.len(), sheet);
    info!(
        "Rendered {} cards on {} sheets ({} empty slots)",
        stats.cards, stats.sheets, stats.empty_slots
    );

    doc.pages = pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Card top-left corner on the page, in points from the page's bottom-left
struct CardOrigin {
    left: f32,
    top: f32,
}

impl CardOrigin {
    fn point(&self, x: f32, y: f32) -> Point {
        Point {
            x: Pt(self.left + x),
            y: Pt(self.top - y),
        }
    }
}

fn push_mark(ops: &mut Vec<Op>, origin: &CardOrigin, mark: Mark) {
    match mark {
        Mark::Text {
            text,
            metric,
            x,
            baseline,
            color,
        } => {
            ops.push(Op::SetFillColor { col: pdf_color(color) });
            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: origin.point(x, baseline),
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                font: builtin_font(metric.typeface),
                size: Pt(metric.size),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text)],
                font: builtin_font(metric.typeface),
            });
            ops.push(Op::EndTextSection);
        }
        Mark::Rule {
            x,
            y,
            width,
            thickness,
            color,
        } => {
            ops.push(Op::SetOutlineColor { col: pdf_color(color) });
            ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
            ops.push(Op::DrawLine {
                line: Line {
                    points: vec![
                        line_point(origin.point(x, y)),
                        line_point(origin.point(x + width, y)),
                    ],
                    is_closed: false,
                },
            });
        }
        Mark::Rect {
            x,
            y,
            width,
            height,
            color,
            filled,
        } => {
            let points = vec![
                line_point(origin.point(x, y)),
                line_point(origin.point(x + width, y)),
                line_point(origin.point(x + width, y + height)),
                line_point(origin.point(x, y + height)),
            ];
            let mode = if filled {
                ops.push(Op::SetFillColor { col: pdf_color(color) });
                PaintMode::Fill
            } else {
                ops.push(Op::SetOutlineColor { col: pdf_color(color) });
                ops.push(Op::SetOutlineThickness {
                    pt: Pt(BORDER_WIDTH),
                });
                PaintMode::Stroke
            };
            ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![PolygonRing { points }],
                    mode,
                    winding_order: WindingOrder::NonZero,
                },
            });
        }
    }
}

fn line_point(p: Point) -> LinePoint {
    LinePoint { p, bezier: false }
}

fn pdf_color(color: RgbColor) -> Color {
    Color::Rgb(Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
        icc_profile: None,
    })
}

/// Standard PDF font for a measured typeface
fn builtin_font(typeface: Typeface) -> BuiltinFont {
    match typeface {
        Typeface::Helvetica => BuiltinFont::Helvetica,
        Typeface::HelveticaBold => BuiltinFont::HelveticaBold,
        Typeface::TimesRoman => BuiltinFont::TimesRoman,
        Typeface::TimesBold => BuiltinFont::TimesBold,
    }
}

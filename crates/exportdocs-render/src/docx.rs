//! DOCX serialization of a finished [`Document`].

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, PageMargin, RunFonts, SpecialIndentType, Style,
    StyleType, VAlignType,
};

use crate::document::{Alignment, Block, Document, Paragraph, ParagraphKind, Run, Table};
use crate::error::{ExportError, ExportResult};

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

fn style_id(kind: ParagraphKind) -> Option<&'static str> {
    match kind {
        ParagraphKind::Body => None,
        ParagraphKind::Title => Some(TITLE_STYLE),
        ParagraphKind::Heading => Some(HEADING_STYLE),
    }
}

fn convert_run(run: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new();
    if run.break_before {
        out = out.add_break(BreakType::TextWrapping);
    }
    out = out.add_text(run.text.as_str());

    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if let Some(ref font) = run.font {
        let font = font.as_str();
        out = out.fonts(RunFonts::new().ascii(font).hi_ansi(font).east_asia(font).cs(font));
    }
    if let Some(size) = run.size {
        out = out.size(size);
    }
    if let Some(ref color) = run.color {
        out = out.color(color.as_str());
    }
    out
}

fn convert_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut out = docx_rs::Paragraph::new().align(match paragraph.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    });

    if let Some(style) = style_id(paragraph.kind) {
        out = out.style(style);
    }
    if let Some(indent) = paragraph.first_line_indent {
        out = out.indent(
            None,
            Some(SpecialIndentType::FirstLine(i32::from(indent))),
            None,
            None,
        );
    }
    if let Some(spacing) = paragraph.line_spacing {
        out = out.line_spacing(LineSpacing::new().line(i32::from(spacing)));
    }

    for run in &paragraph.runs {
        out = out.add_run(convert_run(run));
    }
    out
}

fn convert_table(table: &Table) -> docx_rs::Table {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    let mut out = docx_rs::TableCell::new();
                    for paragraph in &cell.paragraphs {
                        out = out.add_paragraph(convert_paragraph(paragraph));
                    }
                    if cell.vertically_centered {
                        out = out.vertical_align(VAlignType::Center);
                    }
                    out
                })
                .collect();
            docx_rs::TableRow::new(cells)
        })
        .collect();

    docx_rs::Table::new(rows)
}

/// Builds the docx-rs document tree.
pub fn to_docx(doc: &Document) -> Docx {
    let margins = doc.margins;
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .left(i32::from(margins.left))
                .right(i32::from(margins.right))
                .top(i32::from(margins.top))
                .bottom(i32::from(margins.bottom)),
        )
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .bold(),
        );

    for block in &doc.blocks {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(convert_paragraph(p)),
            Block::Table(t) => docx.add_table(convert_table(t)),
        };
    }
    docx
}

/// Packs the document into DOCX bytes.
///
/// Either the complete package is returned or an error; never a partial
/// buffer.
pub fn to_bytes(doc: &Document) -> ExportResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    to_docx(doc)
        .build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    Ok(buf.into_inner())
}

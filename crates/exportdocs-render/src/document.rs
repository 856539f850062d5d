//! In-memory document model.
//!
//! Renderers write [`Block`]s into a [`Document`]; the style profile then
//! rewrites formatting in place and [`crate::docx`] turns the result into a
//! DOCX package. Keeping an intermediate model lets tests inspect exactly
//! what a report contains without unzipping XML.

use crate::style::{Margins, StyleProfile};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Paragraph role, mapped to a Word paragraph style on export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParagraphKind {
    #[default]
    Body,
    /// Document title (`Title` style).
    Title,
    /// Section heading (`Heading1` style).
    Heading,
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Emit a line break before the text.
    pub break_before: bool,
    pub font: Option<String>,
    /// Font size in half-points.
    pub size: Option<usize>,
    /// Hex RGB color, e.g. `000000`.
    pub color: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Starts the run on a new line inside the same paragraph.
    #[must_use]
    pub fn on_new_line(mut self) -> Self {
        self.break_before = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub alignment: Alignment,
    /// First-line indent in twips.
    pub first_line_indent: Option<u16>,
    /// Line spacing in 240ths of a line (360 = 1.5 lines).
    pub line_spacing: Option<u16>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// An empty body paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// A body paragraph with a single plain run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().add_run(Run::new(text))
    }

    /// A heading paragraph with a single run.
    pub fn heading(kind: ParagraphKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            ..Self::text(text)
        }
    }

    #[must_use]
    pub fn add_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn first_line_indent(mut self, twips: u16) -> Self {
        self.first_line_indent = Some(twips);
        self
    }

    /// Concatenated run text; line breaks become `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            if run.break_before {
                out.push('\n');
            }
            out.push_str(&run.text);
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    pub vertically_centered: bool,
}

impl TableCell {
    /// A cell holding one paragraph.
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            vertically_centered: false,
        }
    }

    #[must_use]
    pub fn centered_vertically(mut self) -> Self {
        self.vertically_centered = true;
        self
    }

    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A bordered grid table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A report under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub margins: Margins,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document with the profile's page margins.
    pub fn new(profile: &StyleProfile) -> Self {
        Self {
            margins: profile.margins,
            blocks: Vec::new(),
        }
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Adds an empty spacer paragraph.
    pub fn add_blank(&mut self) {
        self.add_paragraph(Paragraph::new());
    }

    pub fn add_heading(
        &mut self,
        kind: ParagraphKind,
        text: impl Into<String>,
        alignment: Alignment,
    ) {
        self.add_paragraph(Paragraph::heading(kind, text).align(alignment));
    }

    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Top-level paragraphs, skipping tables.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    /// Visits every paragraph, including those inside table cells.
    pub fn for_each_paragraph_mut(&mut self, mut f: impl FnMut(&mut Paragraph)) {
        for block in &mut self.blocks {
            match block {
                Block::Paragraph(p) => f(p),
                Block::Table(table) => {
                    for cell in table.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
                        cell.paragraphs.iter_mut().for_each(&mut f);
                    }
                }
            }
        }
    }

    /// Renders the document as plain text, one line per paragraph and one
    /// ` | `-separated line per table row (trailing whitespace trimmed).
    pub fn to_plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(p) => lines.push(p.plain_text()),
                Block::Table(table) => {
                    for row in &table.rows {
                        let cells: Vec<_> = row.cells.iter().map(TableCell::plain_text).collect();
                        lines.push(cells.join(" | ").trim_end().to_string());
                    }
                }
            }
        }
        lines.join("\n")
    }
}

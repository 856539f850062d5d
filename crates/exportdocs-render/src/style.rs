//! Document-wide typography.
//!
//! Page margins are fixed when a [`Document`] is created. Everything else is
//! applied by [`StyleProfile::finalize`] after all content is written: it
//! overwrites font, size, color and line spacing on every run and paragraph,
//! including table cells, regardless of who produced them.

use crate::document::Document;

const TWIPS_PER_INCH: f64 = 1440.0;

/// Converts inches to twips (1/20 pt), rounding to the nearest unit.
pub fn inches_to_twips(inches: f64) -> u16 {
    (inches * TWIPS_PER_INCH).round() as u16
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Margins {
    pub fn from_inches(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left: inches_to_twips(left),
            right: inches_to_twips(right),
            top: inches_to_twips(top),
            bottom: inches_to_twips(bottom),
        }
    }
}

impl Default for Margins {
    /// 2 cm on the left, top and bottom; 1 cm on the right.
    fn default() -> Self {
        Self::from_inches(0.79, 0.39, 0.79, 0.79)
    }
}

/// Font, color, spacing and margins shared by every report.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub font_family: String,
    /// Font size in points.
    pub font_size: u16,
    /// Hex RGB text color.
    pub color: String,
    /// Line spacing as a multiple of single spacing.
    pub line_spacing: f64,
    pub margins: Margins,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size: 14,
            color: "000000".to_string(),
            line_spacing: 1.5,
            margins: Margins::default(),
        }
    }
}

impl StyleProfile {
    /// Font size in half-points, the unit used by WordprocessingML.
    pub fn font_size_half_points(&self) -> usize {
        usize::from(self.font_size) * 2
    }

    /// Line spacing in 240ths of a line.
    pub fn line_spacing_units(&self) -> u16 {
        (self.line_spacing * 240.0).round() as u16
    }

    /// Overwrites typography on every paragraph and run of `doc`.
    ///
    /// Must run after all content is written. Running it twice changes
    /// nothing.
    pub fn finalize(&self, doc: &mut Document) {
        let size = self.font_size_half_points();
        let spacing = self.line_spacing_units();

        doc.for_each_paragraph_mut(|paragraph| {
            paragraph.line_spacing = Some(spacing);
            for run in &mut paragraph.runs {
                run.font = Some(self.font_family.clone());
                run.size = Some(size);
                run.color = Some(self.color.clone());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Paragraph, Run, Table, TableCell, TableRow};

    fn sample() -> Document {
        let mut doc = Document::new(&StyleProfile::default());
        let mut colored = Run::new("red").bold();
        colored.color = Some("FF0000".to_string());
        colored.font = Some("Arial".to_string());
        doc.add_paragraph(Paragraph::new().add_run(colored));

        let mut table = Table::new();
        table.push_row(TableRow::new(vec![TableCell::new(Paragraph::text("cell"))]));
        doc.add_table(table);
        doc
    }

    #[test]
    fn default_margins_are_asymmetric() {
        let margins = Margins::default();
        assert_eq!(margins.left, 1138);
        assert_eq!(margins.top, 1138);
        assert_eq!(margins.bottom, 1138);
        assert_eq!(margins.right, 562);
        assert!(margins.right < margins.left);
    }

    #[test]
    fn unit_conversions() {
        let profile = StyleProfile::default();
        assert_eq!(profile.font_size_half_points(), 28);
        assert_eq!(profile.line_spacing_units(), 360);
        assert_eq!(inches_to_twips(1.0), 1440);
    }

    #[test]
    fn finalize_overwrites_every_run() {
        let profile = StyleProfile::default();
        let mut doc = sample();
        profile.finalize(&mut doc);

        let mut seen = 0;
        doc.for_each_paragraph_mut(|p| {
            assert_eq!(p.line_spacing, Some(360));
            for run in &p.runs {
                assert_eq!(run.font.as_deref(), Some("Times New Roman"));
                assert_eq!(run.size, Some(28));
                assert_eq!(run.color.as_deref(), Some("000000"));
                seen += 1;
            }
        });
        assert_eq!(seen, 2);
    }

    #[test]
    fn finalize_keeps_emphasis() {
        let mut doc = sample();
        StyleProfile::default().finalize(&mut doc);
        let first = doc.paragraphs().next().unwrap();
        assert!(first.runs[0].bold);
    }

    #[test]
    fn finalize_is_idempotent() {
        let profile = StyleProfile::default();
        let mut once = sample();
        profile.finalize(&mut once);
        let mut twice = once.clone();
        profile.finalize(&mut twice);
        assert_eq!(once, twice);
    }
}

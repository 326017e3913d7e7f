//! # Weekly Report Rendering
//!
//! Converts one logbook record into a paginated A4 PDF: a header of student
//! and report metadata, the weekly summary prose, a table of the embedded
//! daily log entries, the supervisor's comments, and the signature line.
//!
//! Layout decisions live in [`ReportLayout`], which is pure data and easy to
//! test; [`render_pdf`] only paints a layout onto pages.

use eyre::{Result, eyre};
use logtrack_db::models::DbLogbook;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use serde::Deserialize;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 6.0;
const ROW_LINE_HEIGHT: f32 = 4.5;

// Table column x positions and wrap widths (characters).
const COL_DAY: f32 = MARGIN;
const COL_DATE: f32 = 45.0;
const COL_SKILLS: f32 = 80.0;
const COL_DESCRIPTION: f32 = 138.0;
const SKILLS_WRAP: usize = 30;
const DESCRIPTION_WRAP: usize = 36;

/// One row of the daily-log table, deserialized from the logbook's embedded
/// snapshot. Every field is defaulted so a sparse snapshot still renders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyLogEntry {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub skills_learnt: String,
    #[serde(default)]
    pub description_of_work: String,
}

/// Everything the painter needs, with placeholders already resolved.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub student_id: String,
    pub student_name: String,
    pub week_number: i32,
    pub department: String,
    pub school: String,
    pub submission_date: String,
    pub weekly_summary: String,
    pub entries: Vec<DailyLogEntry>,
    pub supervisor_comments: String,
    pub signed_by: String,
}

impl ReportLayout {
    pub fn from_logbook(logbook: &DbLogbook) -> Self {
        let supervisor_comments = logbook
            .supervisor_comments
            .as_deref()
            .filter(|comments| !comments.trim().is_empty())
            .unwrap_or("No comments yet.")
            .to_string();

        let signed_by = logbook
            .signed_by
            .as_deref()
            .filter(|signed| !signed.trim().is_empty())
            .unwrap_or("Not signed yet.")
            .to_string();

        let entries: Vec<DailyLogEntry> =
            serde_json::from_value(logbook.daily_logs.clone()).unwrap_or_default();

        Self {
            student_id: logbook.student_id.to_string(),
            student_name: logbook.student_name.clone(),
            week_number: logbook.week_number,
            department: capitalize_first_letter(&logbook.department),
            school: logbook.school.clone(),
            submission_date: logbook.created_at.format("%a %b %d %Y").to_string(),
            weekly_summary: logbook.weekly_summary.clone(),
            entries,
            supervisor_comments,
            signed_by,
        }
    }
}

fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Greedy word wrap to at most `max_chars` characters per line. Words longer
/// than a line are hard-broken.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() && word_len <= max_chars {
            current.push_str(word);
        } else if !current.is_empty() && current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word_len > max_chars {
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_chars) {
                    lines.push(chunk.iter().collect());
                }
                // Keep the last hard-broken chunk open for following words
                if let Some(last) = lines.pop() {
                    current = last;
                }
            } else {
                current.push_str(word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Paints lines onto pages, breaking to a fresh page when the cursor would
/// run into the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn break_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN {
            self.break_page();
        }
    }

    fn text_at(&self, text: &str, size: f32, bold: bool, x: f32, y: f32) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        self.ensure_space(LINE_HEIGHT);
        self.text_at(text, size, bold, MARGIN, self.y);
        self.y -= LINE_HEIGHT;
    }

    fn labeled(&mut self, label: &str, value: &str) {
        self.ensure_space(LINE_HEIGHT);
        self.text_at(label, 12.0, true, MARGIN, self.y);
        self.text_at(value, 12.0, false, MARGIN + 45.0, self.y);
        self.y -= LINE_HEIGHT;
    }

    fn heading(&mut self, text: &str) {
        self.spacer(2.0);
        self.line(text, 14.0, true);
    }

    fn paragraph(&mut self, text: &str, max_chars: usize) {
        for wrapped in wrap_text(text, max_chars) {
            self.ensure_space(5.0);
            self.text_at(&wrapped, 11.0, false, MARGIN, self.y);
            self.y -= 5.0;
        }
    }

    fn table_row(&mut self, cells: [&str; 4], size: f32, bold: bool) {
        let day_lines = wrap_text(cells[0], 14);
        let date_lines = wrap_text(cells[1], 16);
        let skills_lines = wrap_text(cells[2], SKILLS_WRAP);
        let description_lines = wrap_text(cells[3], DESCRIPTION_WRAP);

        let height = day_lines
            .len()
            .max(date_lines.len())
            .max(skills_lines.len())
            .max(description_lines.len()) as f32
            * ROW_LINE_HEIGHT;
        self.ensure_space(height + 2.0);

        let columns = [
            (COL_DAY, &day_lines),
            (COL_DATE, &date_lines),
            (COL_SKILLS, &skills_lines),
            (COL_DESCRIPTION, &description_lines),
        ];
        for (x, lines) in columns {
            for (i, text) in lines.iter().enumerate() {
                self.text_at(text, size, bold, x, self.y - i as f32 * ROW_LINE_HEIGHT);
            }
        }

        self.y -= height + 2.0;
    }

    fn spacer(&mut self, mm: f32) {
        self.y -= mm;
    }
}

/// Renders a report layout into PDF bytes.
pub fn render_pdf(layout: &ReportLayout) -> Result<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new("Weekly Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| eyre!("Failed to load builtin font: {}", e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| eyre!("Failed to load builtin font: {}", e))?;

    {
        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN - 5.0,
        };

        // Title
        writer.text_at("Weekly Report", 20.0, true, 78.0, writer.y);
        writer.spacer(12.0);

        // Student information
        writer.labeled("Student ID:", &layout.student_id);
        writer.labeled("Name:", &layout.student_name);
        writer.labeled("Week Number:", &layout.week_number.to_string());
        writer.labeled("Department:", &layout.department);
        writer.labeled("School:", &layout.school);
        writer.labeled("Submission Date:", &layout.submission_date);

        writer.heading("Weekly Summary:");
        writer.paragraph(&layout.weekly_summary, 88);

        writer.heading("Daily Logs:");
        writer.table_row(
            ["Day", "Date", "Skills Learnt", "Description of Work"],
            11.0,
            true,
        );
        for entry in &layout.entries {
            writer.table_row(
                [
                    entry.day.as_str(),
                    entry.date.as_str(),
                    entry.skills_learnt.as_str(),
                    entry.description_of_work.as_str(),
                ],
                9.0,
                false,
            );
        }

        writer.heading("Supervisor Comments:");
        writer.paragraph(&layout.supervisor_comments, 88);

        writer.heading("Signed By:");
        writer.paragraph(&layout.signed_by, 88);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| eyre!("Failed to serialize PDF: {}", e))?;

    Ok(bytes)
}

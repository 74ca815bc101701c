//! Report export
//!
//! Renders the stored state as a paginated document: one section per
//! category in display order, then the timetable.

mod canvas;

pub use canvas::{Align, PlacedText, ReportCanvas, TextDocument, wrap_text};

use crate::storage::Storage;
use crate::tracker::{AppState, Category};
use anyhow::Result;
use log::info;
use std::path::Path;

pub const REPORT_TITLE: &str = "Goal Tracker Pro Report";
pub const TIMETABLE_TITLE: &str = "Academic Timetable";
pub const NO_GOALS_PLACEHOLDER: &str = "No goals added.";
pub const NO_TIMETABLE_PLACEHOLDER: &str = "No timetable entries.";

const TITLE_FONT_SIZE: f32 = 20.0;
const SECTION_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 12.0;
const NOTES_FONT_SIZE: f32 = 10.0;

const SECTION_COLOR: &str = "#34495e";
const PLACEHOLDER_COLOR: &str = "#7f8c8d";
const NOTES_COLOR: &str = "#555";
const BODY_COLOR: &str = "#000";

const PAGE_CENTER_X: f32 = 105.0;
const TITLE_Y: f32 = 15.0;
const MARGIN_X: f32 = 14.0;
const NOTES_X: f32 = 16.0;
const NOTES_WRAP_WIDTH: f32 = 180.0;

const START_Y: f32 = 30.0;
const NEW_PAGE_Y: f32 = 20.0;
/// Cursor position past which a line moves to a new page
const LINE_BREAK_Y: f32 = 270.0;
/// Cursor position past which the timetable section starts on a new page
const SECTION_BREAK_Y: f32 = 260.0;

const SECTION_ADVANCE: f32 = 8.0;
const PLACEHOLDER_ADVANCE: f32 = 10.0;
const LINE_ADVANCE: f32 = 7.0;
const NOTES_LINE_ADVANCE: f32 = 6.0;
const SECTION_GAP: f32 = 5.0;

/// Summary of an exported report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub goals: usize,
    pub timetable_entries: usize,
    pub pages: usize,
}

/// Lay out `state` on `canvas`
pub fn render_report(state: &AppState, canvas: &mut impl ReportCanvas) {
    canvas.set_font_size(TITLE_FONT_SIZE);
    canvas.text(&[REPORT_TITLE.to_string()], PAGE_CENTER_X, TITLE_Y, Align::Center);

    let mut y = START_Y;
    for category in Category::ALL {
        section_title(canvas, category.title(), y);
        y += SECTION_ADVANCE;

        let goals = state.goals(category);
        if goals.is_empty() {
            placeholder(canvas, NO_GOALS_PLACEHOLDER, y);
            y += PLACEHOLDER_ADVANCE;
            continue;
        }

        for goal in goals {
            y = break_page_after(canvas, y, LINE_BREAK_Y);
            canvas.set_font_size(BODY_FONT_SIZE);
            canvas.set_text_color(BODY_COLOR);
            canvas.text(&[format!("{}{}", goal.marker(), goal.text)], MARGIN_X, y, Align::Left);
            y += LINE_ADVANCE;

            if goal.has_notes() {
                let notes = canvas.split_text_to_size(&format!("Notes: {}", goal.notes), NOTES_WRAP_WIDTH);
                canvas.set_font_size(NOTES_FONT_SIZE);
                canvas.set_text_color(NOTES_COLOR);
                canvas.text(&notes, NOTES_X, y, Align::Left);
                y += notes.len() as f32 * NOTES_LINE_ADVANCE;
                canvas.set_text_color(BODY_COLOR);
            }
        }
        y += SECTION_GAP;
    }

    y = break_page_after(canvas, y, SECTION_BREAK_Y);
    section_title(canvas, TIMETABLE_TITLE, y);
    y += SECTION_ADVANCE;

    if state.timetable().is_empty() {
        placeholder(canvas, NO_TIMETABLE_PLACEHOLDER, y);
        return;
    }

    canvas.set_font_size(BODY_FONT_SIZE);
    canvas.set_text_color(BODY_COLOR);
    for entry in state.timetable() {
        y = break_page_after(canvas, y, LINE_BREAK_Y);
        canvas.text(&[entry.line()], MARGIN_X, y, Align::Left);
        y += LINE_ADVANCE;
    }
}

/// Reload the stored state and write it as a report to `path`
///
/// The report reflects what is persisted, not any in-memory copy.
pub fn export_report(storage: &Storage, path: &Path) -> Result<ReportSummary> {
    let state = storage.load();
    let mut document = TextDocument::new();
    render_report(&state, &mut document);
    document.save(path)?;

    let summary = ReportSummary {
        goals: state.goal_count(),
        timetable_entries: state.timetable().len(),
        pages: document.page_count(),
    };
    info!(
        "event=report_export status=ok path={} goals={} timetable={} pages={}",
        path.display(),
        summary.goals,
        summary.timetable_entries,
        summary.pages
    );
    Ok(summary)
}

fn section_title(canvas: &mut impl ReportCanvas, title: &str, y: f32) {
    canvas.set_font_size(SECTION_FONT_SIZE);
    canvas.set_text_color(SECTION_COLOR);
    canvas.text(&[title.to_string()], MARGIN_X, y, Align::Left);
}

fn placeholder(canvas: &mut impl ReportCanvas, text: &str, y: f32) {
    canvas.set_font_size(BODY_FONT_SIZE);
    canvas.set_text_color(PLACEHOLDER_COLOR);
    canvas.text(&[text.to_string()], MARGIN_X, y, Align::Left);
}

/// Start a new page when the cursor has passed `limit`; returns the cursor to use
fn break_page_after(canvas: &mut impl ReportCanvas, y: f32, limit: f32) -> f32 {
    if y > limit {
        canvas.add_page();
        NEW_PAGE_Y
    } else {
        y
    }
}

//! Team workspace of tracked tenders

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::workspace::{
    StatusFilter, SuccessResponse, WorkspaceEntry, WorkspaceStatus, WorkspaceUpdate,
};

#[derive(Debug, Default)]
pub struct WorkspacePanel {
    pub filter: StatusFilter,
    pub entries: Vec<WorkspaceEntry>,
    pub loaded: bool,
    /// Notes being edited, keyed by entry id
    pub note_drafts: HashMap<i64, String>,
    pub pending_list: Pending<Result<Vec<WorkspaceEntry>, ClientError>>,
    pub pending_mutation: Pending<Result<SuccessResponse, ClientError>>,
    pub pending_export: Pending<Result<(ExportKind, PathBuf), ClientError>>,
}

/// Files the Pro plan can export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    WorkspaceCsv,
    ReadinessScores,
}

impl ExportKind {
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::WorkspaceCsv => "Export CSV",
            ExportKind::ReadinessScores => "Export readiness scores",
        }
    }

    /// `tenderdesk-<kind>-YYYYMMDD-HHMMSS.<ext>`
    pub fn file_name(self, now: NaiveDateTime) -> String {
        let (stem, extension) = match self {
            ExportKind::WorkspaceCsv => ("workspace", "csv"),
            ExportKind::ReadinessScores => ("readiness", "json"),
        };
        format!(
            "tenderdesk-{}-{}.{}",
            stem,
            now.format("%Y%m%d-%H%M%S"),
            extension
        )
    }

    pub fn done_message(self, path: &Path) -> String {
        match self {
            ExportKind::WorkspaceCsv => format!("Workspace exported to {}", path.display()),
            ExportKind::ReadinessScores => {
                format!("Readiness scores exported to {}", path.display())
            }
        }
    }
}

impl WorkspacePanel {
    pub fn is_loading(&self) -> bool {
        self.pending_list.is_busy() || self.pending_mutation.is_busy()
    }

    pub fn apply_entries(&mut self, entries: Vec<WorkspaceEntry>) {
        self.note_drafts = entries
            .iter()
            .map(|entry| (entry.id, entry.notes.clone().unwrap_or_default()))
            .collect();
        self.entries = entries;
        self.loaded = true;
    }

    /// Entries matching the current filter
    pub fn visible(&self) -> impl Iterator<Item = &WorkspaceEntry> {
        let filter = self.filter;
        self.entries
            .iter()
            .filter(move |entry| filter.matches(entry.status))
    }

    pub fn summary_label(&self) -> String {
        let shown = self.visible().count();
        match self.filter {
            StatusFilter::All => format!("{} tracked tenders", shown),
            StatusFilter::Only(status) => format!("{} {} tenders", shown, status.label().to_lowercase()),
        }
    }

    pub fn notes_changed(&self, entry: &WorkspaceEntry) -> bool {
        let saved = entry.notes.as_deref().unwrap_or_default();
        self.note_drafts
            .get(&entry.id)
            .is_some_and(|draft| draft.trim() != saved.trim())
    }

    /// Update carrying the edited notes of an entry
    pub fn notes_update(&self, entry_id: i64) -> WorkspaceUpdate {
        let notes = self
            .note_drafts
            .get(&entry_id)
            .map(|draft| draft.trim().to_string())
            .unwrap_or_default();
        WorkspaceUpdate {
            status: None,
            notes: Some(notes),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn status_update(status: WorkspaceStatus) -> WorkspaceUpdate {
    WorkspaceUpdate {
        status: Some(status),
        notes: None,
    }
}

/// Directory exports are written to: downloads, else home, else the working directory
pub fn export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write an export and return where it landed
pub fn write_export(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, ClientError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, content)?;
    Ok(path)
}

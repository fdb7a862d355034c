// src/ports/text.rs
use crate::application::RefreshOutcome;
use crate::domain::{Draft, Note};
use crate::util::text::first_line;

const PREVIEW_CHARS: usize = 60;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Plain-text rendering for the terminal
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One line per note: pin marker, id, title, tag
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes found.".to_string();
        }
        notes
            .iter()
            .map(|n| self.render_line(n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_line(&self, note: &Note) -> String {
        let marker = if note.is_pinned() { "*" } else { " " };
        let tag = match note.tag.as_deref() {
            Some(tag) if !tag.is_empty() => format!(" [{tag}]"),
            _ => String::new(),
        };
        format!(
            "{marker} {}\t{}{tag}\t{}",
            note.id,
            note.title,
            first_line(&note.content, PREVIEW_CHARS)
        )
    }

    pub fn render(&self, note: &Note) -> String {
        let mut lines = vec![
            format!("{} ({})", note.title, note.id),
            String::new(),
            note.content.clone(),
            String::new(),
        ];
        if let Some(tag) = note.tag.as_deref().filter(|t| !t.is_empty()) {
            lines.push(format!("Tag:      {tag}"));
        }
        if let Some(reminder) = note.reminder {
            lines.push(format!("Reminder: {}", reminder.format(TIMESTAMP_FORMAT)));
        }
        if let Some(image) = note.image.as_deref() {
            lines.push(format!("Image:    {image}"));
        }
        lines.push(format!("Color:    {}", note.display_color()));
        if note.is_pinned() {
            lines.push("Pinned:   yes".to_string());
        }
        if let Some(created_at) = note.created_at {
            lines.push(format!("Created:  {}", created_at.format(TIMESTAMP_FORMAT)));
        }
        lines.join("\n")
    }

    /// Banner for degraded mode; `None` when the list is fresh
    pub fn render_status(&self, outcome: &RefreshOutcome) -> Option<String> {
        match outcome {
            RefreshOutcome::Loaded { .. } => None,
            RefreshOutcome::Degraded {
                from_cache: true,
                reason,
            } => Some(format!("Offline: showing cached notes ({reason})")),
            RefreshOutcome::Degraded {
                from_cache: false,
                reason,
            } => Some(format!("Offline: no cached notes available ({reason})")),
        }
    }

    pub fn render_draft(&self, draft: Option<&Draft>) -> String {
        match draft {
            Some(d) if !d.is_empty() => format!("Title:   {}\nContent: {}", d.title, d.content),
            _ => "No draft saved.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_note;

    #[test]
    fn given_no_notes_when_rendering_list_then_says_so() {
        let presenter = TextPresenter::new();

        assert_eq!(presenter.render_list(&[]), "No notes found.");
    }

    #[test]
    fn given_pinned_tagged_note_when_rendering_line_then_marks_pin_and_tag() {
        let presenter = TextPresenter::new();
        let mut note = sample_note("a1", "Work plan");
        note.pinned = Some(true);
        note.tag = Some("Work".to_string());

        let line = presenter.render_line(&note);

        assert!(line.starts_with("* a1"));
        assert!(line.contains("Work plan [Work]"));
    }

    #[test]
    fn given_note_without_color_when_rendering_then_shows_default_color() {
        let presenter = TextPresenter::new();

        let text = presenter.render(&sample_note("a1", "Groceries"));

        assert!(text.contains("Color:    #ffffff"));
        assert!(text.contains("Created:  2025-01-01 08:00"));
    }

    #[test]
    fn given_degraded_outcome_when_rendering_status_then_returns_banner() {
        let presenter = TextPresenter::new();
        let outcome = RefreshOutcome::Degraded {
            from_cache: true,
            reason: "connection refused".to_string(),
        };

        let banner = presenter.render_status(&outcome).unwrap();

        assert!(banner.contains("cached notes"));
        assert!(presenter
            .render_status(&RefreshOutcome::Loaded { count: 2 })
            .is_none());
    }
}

mod helpers;

use anyhow::Result;
use helpers::backend_note;
use notesync::domain::{Note, NoteInput};
use pretty_assertions::assert_eq;

#[test]
fn given_backend_document_when_deserializing_then_maps_wire_fields() -> Result<()> {
    // Arrange
    let json = backend_note("65f0c0ffee", "Work plan", "2025-03-01T10:00:00.000Z");

    // Act
    let note: Note = serde_json::from_value(json)?;

    // Assert
    assert_eq!(note.id.as_str(), "65f0c0ffee");
    assert_eq!(note.title, "Work plan");
    assert_eq!(note.tag.as_deref(), Some(""));
    assert_eq!(note.reminder, None);
    assert!(!note.is_pinned());
    assert_eq!(
        note.created_at.map(|t| t.to_rfc3339()),
        Some("2025-03-01T10:00:00+00:00".to_string())
    );
    Ok(())
}

#[test]
fn given_document_with_both_id_fields_when_listing_then_decodes_and_prefers_underscore_id(
) -> Result<()> {
    // Arrange: Mongoose `toJSON({ virtuals: true })` emits `_id` and `id`
    let json = r#"[
        {"_id":"abc","id":"abc","title":"T","content":"C"},
        {"id":"virtual","_id":"real","title":"U","content":"D"}
    ]"#;

    // Act
    let notes: Vec<Note> = serde_json::from_str(json)?;

    // Assert
    assert_eq!(notes[0].id.as_str(), "abc");
    assert_eq!(notes[1].id.as_str(), "real");
    Ok(())
}

#[test]
fn given_document_with_only_plain_id_when_deserializing_then_uses_it() -> Result<()> {
    let note: Note = serde_json::from_str(r#"{"id":"plain","title":"T","content":"C"}"#)?;

    assert_eq!(note.id.as_str(), "plain");
    Ok(())
}

#[test]
fn given_note_when_serializing_then_uses_camel_case_and_underscore_id() -> Result<()> {
    // Arrange
    let note: Note = serde_json::from_value(backend_note("x1", "T", "2025-03-01T10:00:00Z"))?;

    // Act
    let json = serde_json::to_string(&note)?;

    // Assert
    assert!(json.contains(r#""_id":"x1""#));
    assert!(json.contains(r#""createdAt""#));
    assert!(!json.contains(r#""created_at""#));
    Ok(())
}

#[test]
fn given_snapshot_when_serialized_and_read_back_then_is_identical() -> Result<()> {
    // Arrange
    let mut note: Note = serde_json::from_value(backend_note("x1", "T", "2025-03-01T10:00:00Z"))?;
    note.pinned = Some(true);
    note.reminder = notesync::domain::note::reminder_format::parse("2025-04-02T18:45");

    // Act
    let json = serde_json::to_string(&vec![note.clone()])?;
    let restored: Vec<Note> = serde_json::from_str(&json)?;

    // Assert
    assert_eq!(restored, vec![note]);
    assert!(json.contains(r#""reminder":"2025-04-02T18:45""#));
    Ok(())
}

#[test]
fn given_input_when_serializing_then_matches_request_body_shape() -> Result<()> {
    // Arrange
    let mut input = NoteInput::new("Groceries", "Milk");
    input.tag = Some("Personal".to_string());

    // Act
    let json = serde_json::to_value(&input)?;

    // Assert
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Groceries",
            "content": "Milk",
            "tag": "Personal",
            "color": "#ffffff"
        })
    );
    Ok(())
}

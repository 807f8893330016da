//! Database operations for the notes table

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::{Database, DbError};
use crate::models::Note;

/// Create the notes table if it does not exist.
///
/// AUTOINCREMENT keeps ids monotonic so a deleted id is never handed out again.
pub fn init_tables(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT DEFAULT 'new'
        )",
        [],
    )?;
    Ok(())
}

fn note_from_row(row: &Row<'_>) -> Result<Note, rusqlite::Error> {
    Ok(Note {
        id: row.get(0)?,
        // text is nullable at the storage layer
        text: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
    })
}

impl Database {
    /// Insert a note. `None` stores the column default ("new").
    pub fn create_note(&self, text: Option<&str>) -> Result<Note, DbError> {
        let conn = self.conn()?;
        let note = match text {
            Some(text) => conn.query_row(
                "INSERT INTO notes (text) VALUES (?1) RETURNING id, text",
                params![text],
                note_from_row,
            )?,
            None => conn.query_row(
                "INSERT INTO notes DEFAULT VALUES RETURNING id, text",
                [],
                note_from_row,
            )?,
        };
        Ok(note)
    }

    /// Get a note by ID
    pub fn get_note(&self, id: i64) -> Result<Option<Note>, DbError> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                "SELECT id, text FROM notes WHERE id = ?1",
                params![id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// List notes in insertion order, skipping `offset` rows and returning at most `limit`.
    pub fn list_notes(&self, offset: u32, limit: u32) -> Result<Vec<Note>, DbError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, text FROM notes
             ORDER BY id ASC
             LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt.query_map(params![i64::from(limit), i64::from(offset)], note_from_row)?;
        let notes = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    /// Replace the text of an existing note. Returns `None` (and writes nothing) if the note doesn't exist.
    pub fn update_note(&self, id: i64, text: &str) -> Result<Option<Note>, DbError> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                "UPDATE notes SET text = ?1 WHERE id = ?2 RETURNING id, text",
                params![text, id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// Delete a note. Returns whether a row was removed.
    pub fn delete_note(&self, id: i64) -> Result<bool, DbError> {
        let conn = self.conn()?;
        let count = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }

    pub fn count_notes(&self) -> Result<i64, DbError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::{tempdir, TempDir};

    fn test_db() -> (TempDir, Database) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::new(db_path.to_str().unwrap(), 2).expect("Failed to create database");
        (dir, db)
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let (_dir, db) = test_db();

        let mut seen = HashSet::new();
        for i in 0..10 {
            let note = db.create_note(Some(&format!("note {}", i))).unwrap();
            assert!(seen.insert(note.id), "id {} handed out twice", note.id);
        }
    }

    #[test]
    fn test_create_without_text_uses_default() {
        let (_dir, db) = test_db();

        let note = db.create_note(None).unwrap();
        assert_eq!(note.text, "new");
        assert_eq!(db.get_note(note.id).unwrap(), Some(note));
    }

    #[test]
    fn test_get_round_trip() {
        let (_dir, db) = test_db();

        let created = db.create_note(Some("buy milk")).unwrap();
        assert_eq!(created.id, 1);

        let fetched = db.get_note(created.id).unwrap().expect("note should exist");
        assert_eq!(fetched.text, "buy milk");
    }

    #[test]
    fn test_get_missing_is_none() {
        let (_dir, db) = test_db();
        assert_eq!(db.get_note(42).unwrap(), None);
    }

    #[test]
    fn test_null_text_reads_as_empty() {
        let (_dir, db) = test_db();

        let conn = db.conn().unwrap();
        conn.execute("INSERT INTO notes (text) VALUES (NULL)", []).unwrap();
        let id = conn.last_insert_rowid();
        drop(conn);

        let note = db.get_note(id).unwrap().unwrap();
        assert_eq!(note.text, "");
    }

    #[test]
    fn test_delete_then_get() {
        let (_dir, db) = test_db();

        let note = db.create_note(Some("temporary")).unwrap();
        assert!(db.delete_note(note.id).unwrap());
        assert_eq!(db.get_note(note.id).unwrap(), None);

        // second delete is a no-op
        assert!(!db.delete_note(note.id).unwrap());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (_dir, db) = test_db();

        let first = db.create_note(Some("a")).unwrap();
        let second = db.create_note(Some("b")).unwrap();
        db.delete_note(second.id).unwrap();

        let third = db.create_note(Some("c")).unwrap();
        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }

    #[test]
    fn test_update_existing() {
        let (_dir, db) = test_db();

        let note = db.create_note(Some("draft")).unwrap();
        let updated = db.update_note(note.id, "final").unwrap().expect("note should exist");
        assert_eq!(updated, Note { id: note.id, text: "final".to_string() });
        assert_eq!(db.get_note(note.id).unwrap().unwrap().text, "final");
    }

    #[test]
    fn test_update_missing_does_not_create() {
        let (_dir, db) = test_db();

        assert_eq!(db.update_note(999, "ghost").unwrap(), None);
        assert_eq!(db.count_notes().unwrap(), 0);
        assert_eq!(db.get_note(999).unwrap(), None);
    }

    #[test]
    fn test_list_range() {
        let (_dir, db) = test_db();

        for i in 0..5 {
            db.create_note(Some(&format!("note {}", i))).unwrap();
        }

        let all = db.list_notes(0, 100).unwrap();
        assert_eq!(all.len(), 5);
        let texts: Vec<_> = all.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["note 0", "note 1", "note 2", "note 3", "note 4"]);

        let page = db.list_notes(1, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].text, "note 1");
        assert_eq!(page[1].text, "note 2");

        // fewer than limit remain
        assert_eq!(db.list_notes(3, 10).unwrap().len(), 2);

        // past the end
        assert!(db.list_notes(5, 10).unwrap().is_empty());
        assert!(db.list_notes(1000, 10).unwrap().is_empty());

        assert!(db.list_notes(0, 0).unwrap().is_empty());
    }
}

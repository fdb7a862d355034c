use notesync::application::{LocalCache, NoteRepository, RemoteStore};
use notesync::domain::{Note, NoteId};
use notesync::infrastructure::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary on-disk cache directory that outlives repository instances
#[allow(dead_code)]
pub struct TestCache {
    _temp_dir: TempDir,
    pub directory: PathBuf,
}

#[allow(dead_code)]
impl TestCache {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let directory = temp_dir.path().join("cache");
        Self {
            _temp_dir: temp_dir,
            directory,
        }
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.directory)
    }

    /// A fresh repository over this directory, as after a process restart
    pub fn open_repository<R: RemoteStore>(&self, remote: R) -> NoteRepository<R, FileStore> {
        NoteRepository::new(remote, LocalCache::new(self.store()))
    }
}

/// Note as the backend would hand it out
#[allow(dead_code)]
pub fn backend_note(id: &str, title: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": title,
        "content": format!("{title} content"),
        "tag": "",
        "color": "#ffffff",
        "reminder": "",
        "createdAt": created_at,
        "__v": 0
    })
}

#[allow(dead_code)]
pub fn ids(notes: &[Note]) -> Vec<NoteId> {
    notes.iter().map(|n| n.id.clone()).collect()
}

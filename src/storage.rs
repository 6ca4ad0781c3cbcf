use crate::error::{Error, Result};
use crate::models::Conversation;
use directories::ProjectDirs;
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LIMIT: usize = 500;

fn db_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "example", "ChatlistGTK")?;
    Some(proj.data_dir().join("cache.sqlite"))
}

/// Conversations cached locally so the sidebar can be filled without a backend.
pub struct Cache {
    conn: Connection,
}

impl Cache {
    pub fn open() -> Result<Self> {
        let path = db_path().ok_or(Error::NoDataDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        log::debug!("opened conversation cache at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS conversations (
                id TEXT PRIMARY KEY,
                activity_at REAL NOT NULL,
                raw_json TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self { conn })
    }

    pub fn upsert_conversations(&mut self, items: &[Conversation]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for conv in items {
            let raw = serde_json::to_string(conv)?;
            tx.execute(
                r#"
                INSERT INTO conversations (id, activity_at, raw_json)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(id) DO UPDATE SET
                    activity_at=excluded.activity_at,
                    raw_json=excluded.raw_json
                "#,
                params![conv.id, conv.last_activity(), raw],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Most recently active first. Rows that no longer decode are skipped.
    pub fn conversations(&self, limit: Option<usize>) -> Result<Vec<Conversation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, raw_json FROM conversations ORDER BY activity_at DESC, id ASC LIMIT ?1",
        )?;
        let lim = limit.unwrap_or(DEFAULT_LIMIT) as i64;
        let rows = stmt.query_map(params![lim], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        let mut out = Vec::new();
        for r in rows {
            let (id, raw) = r?;
            match serde_json::from_str::<Conversation>(&raw) {
                Ok(conv) => out.push(conv),
                Err(e) => log::warn!("skipping cached conversation {id}: {e}"),
            }
        }
        Ok(out)
    }
}

/// Cached conversations plus whatever went wrong importing new ones.
pub struct Loaded {
    pub items: Vec<Conversation>,
    pub import_error: Option<Error>,
}

/// Imports `import_path` into the cache when given, then lists the cache.
/// A failed import is reported alongside the listing rather than hiding it.
pub fn import_and_list(
    cache: &mut Cache,
    import_path: Option<&Path>,
    limit: usize,
) -> Result<Loaded> {
    let mut import_error = None;
    if let Some(path) = import_path {
        match read_conversations_file(path) {
            Ok(items) => {
                log::info!("importing {} conversations from {}", items.len(), path.display());
                cache.upsert_conversations(&items)?;
            }
            Err(e) => {
                log::warn!("import from {} failed: {e}", path.display());
                import_error = Some(e);
            }
        }
    }
    Ok(Loaded {
        items: cache.conversations(Some(limit))?,
        import_error,
    })
}

/// Reads a JSON array of conversations, as exported by the chat backend.
/// Entries that do not decode are skipped so one bad record keeps the rest.
pub fn read_conversations_file(path: &Path) -> Result<Vec<Conversation>> {
    let bytes = fs::read(path)?;
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&bytes)?;
    let mut out = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Conversation>(entry) {
            Ok(conv) => out.push(conv),
            Err(e) => log::warn!("skipping entry {idx} of {}: {e}", path.display()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(id: &str, created: f64) -> Conversation {
        Conversation {
            id: id.into(),
            group_name: None,
            group_image: None,
            last_message: None,
            is_online: false,
            is_group: false,
            creation_time: created,
        }
    }

    #[test]
    fn lists_by_activity_with_limit() {
        let mut cache = Cache::open_in_memory().unwrap();
        cache
            .upsert_conversations(&[conv("a", 1.0), conv("b", 3.0), conv("c", 2.0)])
            .unwrap();
        let ids: Vec<String> = cache
            .conversations(Some(2))
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn upsert_replaces_existing_row() {
        let mut cache = Cache::open_in_memory().unwrap();
        cache.upsert_conversations(&[conv("a", 1.0)]).unwrap();
        let mut renamed = conv("a", 1.0);
        renamed.group_name = Some("Renamed".into());
        cache.upsert_conversations(&[renamed]).unwrap();
        let all = cache.conversations(None).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].group_name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn undecodable_rows_are_skipped() {
        let mut cache = Cache::open_in_memory().unwrap();
        cache.upsert_conversations(&[conv("good", 1.0)]).unwrap();
        cache
            .conn
            .execute(
                "INSERT INTO conversations (id, activity_at, raw_json) VALUES ('bad', 9, 'not json')",
                [],
            )
            .unwrap();
        let all = cache.conversations(None).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "good");
    }

    #[test]
    fn reads_exported_file() {
        let path = std::env::temp_dir().join(format!("chatlist-import-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"_id":"x","_creationTime":1,"isGroup":true,"groupName":"Team"}]"#,
        )
        .unwrap();
        let items = read_conversations_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(items.len(), 1);
        assert!(items[0].is_group);
    }

    #[test]
    fn sub_millisecond_activity_keeps_order() {
        let mut cache = Cache::open_in_memory().unwrap();
        cache
            .upsert_conversations(&[conv("a", 1000.25), conv("b", 1000.75)])
            .unwrap();
        let first = cache.conversations(Some(1)).unwrap();
        assert_eq!(first[0].id, "b");
    }

    #[test]
    fn import_skips_undecodable_entries() {
        let path = std::env::temp_dir().join(format!("chatlist-partial-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[
                {"_id":"ok","_creationTime":1},
                {"_id":"tagless","_creationTime":2,
                 "lastMessage":{"sender":"u","_creationTime":3,"messageType":null}},
                {"groupName":"no id or time"}
            ]"#,
        )
        .unwrap();
        let items = read_conversations_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        let ids: Vec<&str> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ok", "tagless"]);
    }

    #[test]
    fn non_array_file_is_a_json_error() {
        let path = std::env::temp_dir().join(format!("chatlist-object-{}.json", std::process::id()));
        fs::write(&path, r#"{"_id":"x"}"#).unwrap();
        let err = read_conversations_file(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn failed_import_still_lists_cache() {
        let mut cache = Cache::open_in_memory().unwrap();
        cache.upsert_conversations(&[conv("cached", 1.0)]).unwrap();
        let loaded =
            import_and_list(&mut cache, Some(Path::new("/nonexistent/chatlist.json")), 10).unwrap();
        assert!(matches!(loaded.import_error, Some(Error::Io(_))));
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].id, "cached");
    }

    #[test]
    fn successful_import_lands_in_listing() {
        let path = std::env::temp_dir().join(format!("chatlist-load-{}.json", std::process::id()));
        fs::write(&path, r#"[{"_id":"fresh","_creationTime":5}]"#).unwrap();
        let mut cache = Cache::open_in_memory().unwrap();
        cache.upsert_conversations(&[conv("cached", 1.0)]).unwrap();
        let loaded = import_and_list(&mut cache, Some(&path), 10).unwrap();
        let _ = fs::remove_file(&path);
        assert!(loaded.import_error.is_none());
        let ids: Vec<&str> = loaded.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["fresh", "cached"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_conversations_file(Path::new("/nonexistent/chatlist.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

use crate::db::Database;
use crate::error::Result;
use crate::models::{ThemeMode, THEME_SETTING_KEY};
use rusqlite::params;
use tracing::warn;

// Settings Queries

impl Database {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
        })
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO settings (key, value, updated_at)
                VALUES (?1, ?2, datetime('now'))
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value],
            )?;
            Ok(())
        })
    }

    /// Stored theme, or light when unset or unreadable.
    pub fn get_theme(&self) -> Result<ThemeMode> {
        let stored = self.get_setting(THEME_SETTING_KEY)?;
        Ok(match stored {
            Some(value) => ThemeMode::from_str(&value).unwrap_or_else(|| {
                warn!("Unknown theme '{}' in settings, using light", value);
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        })
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Result<()> {
        self.set_setting(THEME_SETTING_KEY, theme.as_str())
    }
}

trait OptionalExt<T> {
    fn optional(self) -> rusqlite::Result<Option<T>>;
}

impl<T> OptionalExt<T> for rusqlite::Result<T> {
    fn optional(self) -> rusqlite::Result<Option<T>> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_setting_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_setting("nope").unwrap(), None);
    }

    #[test]
    fn set_setting_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.set_setting("k", "one").unwrap();
        db.set_setting("k", "two").unwrap();
        assert_eq!(db.get_setting("k").unwrap(), Some("two".to_string()));
    }

    #[test]
    fn theme_defaults_to_light() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_theme().unwrap(), ThemeMode::Light);
    }

    #[test]
    fn theme_round_trips() {
        let db = Database::open_in_memory().unwrap();
        db.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(db.get_theme().unwrap(), ThemeMode::Dark);
        assert_eq!(db.get_setting(THEME_SETTING_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_theme_reads_as_light() {
        let db = Database::open_in_memory().unwrap();
        db.set_setting(THEME_SETTING_KEY, "neon").unwrap();
        assert_eq!(db.get_theme().unwrap(), ThemeMode::Light);
    }
}

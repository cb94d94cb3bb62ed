use shared::models::{Settings, SettingsUpdate};
use uuid::Uuid;

use super::error::{SeatingError, SeatingResult};
use crate::utils::validation::validate_settings;

/// Venue configuration (at most one record)
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: Option<Settings>,
}

impl SettingsStore {
    pub fn restore(settings: Option<Settings>) -> Self {
        Self { current: settings }
    }

    pub fn get(&self) -> SeatingResult<&Settings> {
        self.current.as_ref().ok_or(SeatingError::NotConfigured)
    }

    pub fn current(&self) -> Option<&Settings> {
        self.current.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.current.is_some()
    }

    /// Validate and replace the settings record
    ///
    /// An existing record keeps its id; a request naming a different id is
    /// rejected. The first record takes the supplied id or a fresh UUID.
    pub fn update(&mut self, update: &SettingsUpdate) -> SeatingResult<Settings> {
        let (tables, chairs_per_table) = validate_settings(update.tables, update.chairs_per_table)?;
        let requested = update.id.as_deref().filter(|id| !id.trim().is_empty());

        let id = match (&self.current, requested) {
            (Some(current), Some(id)) if id != current.id => {
                return Err(SeatingError::SettingsNotFound(id.to_string()));
            }
            (Some(current), _) => current.id.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => Uuid::new_v4().to_string(),
        };

        let settings = Settings {
            id,
            tables,
            chairs_per_table,
        };
        self.current = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(id: Option<&str>, tables: i64, chairs: i64) -> SettingsUpdate {
        SettingsUpdate {
            id: id.map(str::to_string),
            tables,
            chairs_per_table: chairs,
        }
    }

    #[test]
    fn test_unconfigured_get_fails() {
        let store = SettingsStore::default();
        assert!(matches!(store.get(), Err(SeatingError::NotConfigured)));
        assert!(!store.is_configured());
    }

    #[test]
    fn test_first_update_generates_id() {
        let mut store = SettingsStore::default();
        let settings = store.update(&update(None, 3, 4)).unwrap();
        assert!(Uuid::parse_str(&settings.id).is_ok());
        assert_eq!(settings.tables, 3);
        assert_eq!(store.get().unwrap(), &settings);
    }

    #[test]
    fn test_first_update_keeps_supplied_id() {
        let mut store = SettingsStore::default();
        let settings = store.update(&update(Some("venue"), 2, 2)).unwrap();
        assert_eq!(settings.id, "venue");
    }

    #[test]
    fn test_update_keeps_existing_id() {
        let mut store = SettingsStore::default();
        let first = store.update(&update(Some("venue"), 2, 2)).unwrap();
        let second = store.update(&update(None, 5, 6)).unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.chairs_per_table, 6);

        let third = store.update(&update(Some(""), 1, 1)).unwrap();
        assert_eq!(third.id, "venue");
    }

    #[test]
    fn test_update_with_foreign_id_rejected() {
        let mut store = SettingsStore::default();
        store.update(&update(Some("venue"), 2, 2)).unwrap();
        let err = store.update(&update(Some("other"), 4, 4)).unwrap_err();
        assert!(matches!(err, SeatingError::SettingsNotFound(id) if id == "other"));
        assert_eq!(store.get().unwrap().tables, 2);
    }

    #[test]
    fn test_invalid_update_leaves_record() {
        let mut store = SettingsStore::default();
        store.update(&update(None, 2, 2)).unwrap();
        assert!(matches!(
            store.update(&update(None, 0, 2)),
            Err(SeatingError::InvalidSettings)
        ));
        assert_eq!(store.get().unwrap().tables, 2);
    }
}

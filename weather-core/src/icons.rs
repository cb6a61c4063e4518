//! Static condition-code → icon/color table.
//!
//! The table is loaded once at startup and only read afterwards. A table that
//! fails to load is not fatal: callers get `None` and render without icons.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

use crate::error::LoadError;

const BUNDLED_MAPPING: &str = include_str!("../assets/Weather-Icon_Mapping.json");

/// One row of `Weather-Icon_Mapping.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconColorMapping {
    pub code: i64,
    pub day: String,
    pub night: String,
    pub icon_day: String,
    pub icon_night: String,
    pub color_day: String,
    pub color_night: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconColorTable {
    entries: Vec<IconColorMapping>,
}

impl IconColorTable {
    pub fn new(entries: Vec<IconColorMapping>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(entries.len());
        if let Some(dup) = entries.iter().find(|m| !seen.insert(m.code)) {
            return Err(LoadError::DuplicateCode(dup.code));
        }

        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let entries: Vec<IconColorMapping> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The mapping shipped with the crate.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(BUNDLED_MAPPING)
    }

    /// Loads `path` (or the bundled table when `None`), logging and
    /// swallowing any failure.
    pub fn load_or_degrade(path: Option<&Path>) -> Option<Self> {
        let result = match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        };

        match result {
            Ok(table) => {
                tracing::debug!(entries = table.len(), "Loaded icon mapping");
                Some(table)
            }
            Err(e) => {
                tracing::warn!("Icon mapping unavailable, icons and colors disabled: {e}");
                None
            }
        }
    }

    /// First entry with a matching code. A miss is not an error.
    pub fn lookup(&self, code: i64) -> Option<&IconColorMapping> {
        self.entries.iter().find(|m| m.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconColorMapping> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::SystemColor;
    use std::io::Write;

    fn mapping(code: i64, icon_day: &str) -> IconColorMapping {
        IconColorMapping {
            code,
            day: "Sunny".into(),
            night: "Clear".into(),
            icon_day: icon_day.into(),
            icon_night: "moon.stars".into(),
            color_day: "orange".into(),
            color_night: "blue".into(),
        }
    }

    #[test]
    fn bundled_table_covers_every_condition_code() {
        let table = IconColorTable::bundled().expect("bundled mapping must parse");
        assert_eq!(table.len(), 48);

        let sunny = table.lookup(1000).expect("code 1000 present");
        assert_eq!(sunny.icon_day, "sun.max");
        assert_eq!(sunny.color_day, "orange");
    }

    #[test]
    fn bundled_colors_are_all_known() {
        let table = IconColorTable::bundled().unwrap();
        for m in table.iter() {
            assert!(m.color_day.parse::<SystemColor>().is_ok(), "{}", m.color_day);
            assert!(m.color_night.parse::<SystemColor>().is_ok(), "{}", m.color_night);
        }
    }

    #[test]
    fn lookup_miss_is_none() {
        let table = IconColorTable::new(vec![mapping(1000, "sun.max")]).unwrap();
        assert!(table.lookup(9999).is_none());
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let err = IconColorTable::new(vec![mapping(1000, "a"), mapping(1000, "b")]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateCode(1000)));
    }

    #[test]
    fn from_json_reads_camel_case_keys() {
        let json = r#"[{"code": 1183, "day": "Light rain", "night": "Light rain",
                        "iconDay": "cloud.rain", "iconNight": "cloud.rain",
                        "colorDay": "teal", "colorNight": "blue"}]"#;

        let table = IconColorTable::from_json(json).unwrap();
        assert_eq!(table.lookup(1183).unwrap().icon_night, "cloud.rain");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = IconColorTable::from_json("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&vec![mapping(1003, "cloud.sun")]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = IconColorTable::load(file.path()).unwrap();
        assert_eq!(table.lookup(1003).unwrap().icon_day, "cloud.sun");
    }

    #[test]
    fn load_or_degrade_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Weather-Icon_Mapping.json");

        assert!(IconColorTable::load_or_degrade(Some(&missing)).is_none());
        assert!(IconColorTable::load_or_degrade(None).is_some());
    }
}

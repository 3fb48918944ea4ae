use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A single train departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    #[serde(rename = "punkt_nazn", default)]
    pub destination: String,

    #[serde(rename = "nomer", default)]
    pub number: Option<i64>,

    #[serde(default)]
    pub time: String,
}

impl From<Vec<Train>> for TrainStore {
    fn from(value: Vec<Train>) -> Self {
        TrainStore { trains: value }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainStore {
    trains: Vec<Train>,
}

impl TrainStore {
    pub fn new() -> TrainStore {
        TrainStore { trains: Vec::new() }
    }

    /// Reads the store from `path`. A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("{path:?} does not exist, starting with an empty store");
            return Ok(TrainStore::new());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {path:?}"))?;
        let store: TrainStore = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse data file {path:?}"))?;

        if store.is_empty() {
            log::debug!("{path:?} holds no trains");
        } else {
            log::debug!("Loaded {} trains from {path:?}", store.len());
        }
        Ok(store)
    }

    /// Writes the store to `path` as an indented JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write data file {path:?}"))?;

        log::debug!("Saved {} trains to {path:?}", self.len());
        Ok(())
    }

    /// JSON bytes with four space indentation. Non-ASCII text is kept as is.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn add_train(&mut self, train: Train) {
        self.trains.push(train);
    }

    /// All trains with the given number, in store order.
    pub fn select(&self, number: i64) -> Vec<Train> {
        self.trains
            .iter()
            .filter(|train| train.number == Some(number))
            .cloned()
            .collect()
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

#[cfg(test)]
mod test {
    use tempdir::TempDir;

    use super::*;

    fn train(destination: &str, number: Option<i64>, time: &str) -> Train {
        Train {
            destination: destination.to_string(),
            number,
            time: time.to_string(),
        }
    }

    fn mock_store() -> TrainStore {
        TrainStore::from(vec![
            train("Moscow", Some(101), "08:00"),
            train("Kazan", Some(202), "09:15"),
            train("Sochi", None, "12:00"),
            train("Moscow", Some(101), "21:40"),
        ])
    }

    #[test]
    /// Loading a path that does not exist gives an empty store and creates nothing.
    fn load_missing_file() {
        let dir = TempDir::new("load_missing_file").unwrap();
        let path = dir.path().join("trains.json");

        let store = TrainStore::load(&path).unwrap();

        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    /// Keys may be missing from the file. Strings default to empty, the number to `None`.
    fn load_partial_records() {
        let dir = TempDir::new("load_partial_records").unwrap();
        let path = dir.path().join("trains.json");
        std::fs::write(
            &path,
            r#"[{"punkt_nazn": "Omsk"}, {"nomer": 7, "time": "10:00"}, {"punkt_nazn": "Tver", "nomer": null, "time": "11:00"}]"#,
        )
        .unwrap();

        let store = TrainStore::load(&path).unwrap();

        assert_eq!(
            store.trains(),
            &[
                train("Omsk", None, ""),
                train("", Some(7), "10:00"),
                train("Tver", None, "11:00"),
            ]
        );
    }

    #[test]
    fn load_empty_array() {
        let dir = TempDir::new("load_empty_array").unwrap();
        let path = dir.path().join("trains.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(TrainStore::load(&path).unwrap().is_empty());
    }

    #[test]
    /// Missing keys come back as explicit defaults once the store is saved again.
    fn resave_fills_missing_keys() {
        let dir = TempDir::new("resave_fills_missing_keys").unwrap();
        let path = dir.path().join("trains.json");
        std::fs::write(&path, r#"[{"punkt_nazn": "Omsk"}]"#).unwrap();

        TrainStore::load(&path).unwrap().save(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"punkt_nazn": "Omsk", "nomer": null, "time": ""}])
        );
    }

    #[test]
    fn load_malformed_json() {
        let dir = TempDir::new("load_malformed_json").unwrap();
        let path = dir.path().join("trains.json");
        std::fs::write(&path, "[{\"punkt_nazn\": ").unwrap();

        let err = TrainStore::load(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse data file"));
    }

    #[test]
    /// What we save is what we load back, in the same order.
    fn save_then_load() {
        let dir = TempDir::new("save_then_load").unwrap();
        let path = dir.path().join("trains.json");
        let store = mock_store();

        store.save(&path).unwrap();

        assert_eq!(TrainStore::load(&path).unwrap(), store);
    }

    #[test]
    fn json_layout() {
        let mut store = TrainStore::new();
        store.add_train(train("Москва", Some(101), "08:00"));
        store.add_train(train("Сочи", None, "12:00"));

        let json = String::from_utf8(store.to_json().unwrap()).unwrap();

        let expected = r#"[
    {
        "punkt_nazn": "Москва",
        "nomer": 101,
        "time": "08:00"
    },
    {
        "punkt_nazn": "Сочи",
        "nomer": null,
        "time": "12:00"
    }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn add_appends_to_end() {
        let mut store = mock_store();
        let before = store.len();

        store.add_train(train("Perm", Some(5), "06:30"));

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.trains().last(), Some(&train("Perm", Some(5), "06:30")));
    }

    #[test]
    fn select_keeps_order() {
        let store = mock_store();

        assert_eq!(
            store.select(101),
            vec![
                train("Moscow", Some(101), "08:00"),
                train("Moscow", Some(101), "21:40"),
            ]
        );
        assert_eq!(store.select(202), vec![train("Kazan", Some(202), "09:15")]);
        assert!(store.select(999).is_empty());
    }
}

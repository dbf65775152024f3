use chrono::{DateTime, Utc};
use layover::prelude::*;
use std::{io, path::PathBuf, sync::Arc};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug)]
pub struct Snapshot {
    pub repository: Repository,
    pub loaded_at: DateTime<Utc>,
}

pub struct AppState {
    pub data_path: PathBuf,
    pub dataset: Arc<Mutex<Dataset>>,
    pub snapshot: RwLock<Arc<Snapshot>>,
}

impl AppState {
    pub fn load(data_path: PathBuf) -> Result<Self, dataset::Error> {
        let dataset = Dataset::new().from_file(data_path.clone());
        let repository = Repository::new().load_dataset(&dataset)?;
        Ok(Self {
            data_path,
            dataset: Arc::new(Mutex::new(dataset)),
            snapshot: RwLock::new(Arc::new(Snapshot {
                repository,
                loaded_at: Utc::now(),
            })),
        })
    }

    pub async fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.read().await.clone()
    }

    /// Re-reads the dataset file. The current snapshot stays in place if the
    /// new one fails to build.
    pub async fn reload(&self) -> Result<Arc<Snapshot>, dataset::Error> {
        let handle = self.dataset.clone();
        let repository = tokio::task::spawn_blocking(move || {
            let mut dataset = handle.blocking_lock();
            dataset.invalidate();
            Repository::new().load_dataset(&dataset)
        })
        .await
        .map_err(|err| dataset::Error::Io(io::Error::other(err)))??;

        let snapshot = Arc::new(Snapshot {
            repository,
            loaded_at: Utc::now(),
        });
        *self.snapshot.write().await = snapshot.clone();
        Ok(snapshot)
    }
}

#[cfg(test)]
fn scratch_copy(name: &str) -> PathBuf {
    let source = format!("{}/../../data/airports.json", env!("CARGO_MANIFEST_DIR"));
    let path = std::env::temp_dir().join(format!("layover-{}-{name}.json", std::process::id()));
    std::fs::copy(source, &path).unwrap();
    path
}

#[tokio::test]
async fn reload_keeps_snapshot_on_failure_test() {
    let path = scratch_copy("broken");
    let state = AppState::load(path.clone()).unwrap();
    let before = state.snapshot().await;
    assert_eq!(before.repository.airports.len(), 10);

    std::fs::write(&path, "{ not json").unwrap();
    let err = state.reload().await.unwrap_err();
    assert!(err.is_data_load());

    let after = state.snapshot().await;
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.repository.airports.len(), 10);
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn reload_picks_up_new_file_test() {
    let path = scratch_copy("smaller");
    let state = AppState::load(path.clone()).unwrap();
    let before = state.snapshot().await;

    std::fs::write(
        &path,
        r#"{"airports": [{
            "name": "X", "city": "Y", "distance_km": 10,
            "city_coords": {"lat": 50.0, "lon": 10.0},
            "transit_options": [{"mode": "cab", "transit_type": "taxi", "travel_time_minutes": 10, "frequency": "often", "fare_euros": 30}]
        }]}"#,
    )
    .unwrap();
    let reloaded = state.reload().await.unwrap();

    assert!(!Arc::ptr_eq(&before, &reloaded));
    assert!(Arc::ptr_eq(&reloaded, &state.snapshot().await));
    assert_eq!(reloaded.repository.airports.len(), 1);
    assert_eq!(reloaded.repository.taxi_price[0].price_per_km, 3.0);
    let _ = std::fs::remove_file(path);
}

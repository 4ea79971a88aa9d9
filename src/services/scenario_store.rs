use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scenario::{Scenario, ScenarioId};

/// Upper bound on the number of scenarios returned by [`ScenarioStore::list`].
pub const MAX_LISTED_SCENARIOS: usize = 100;

const SCENARIO_DIR: &str = "scenarios";
const REPORT_REQUESTS_FILE: &str = "report_requests.jsonl";

#[derive(Error, Debug)]
pub enum ScenarioStoreError {
    #[error("scenario not found: {0}")]
    NotFound(ScenarioId),
    #[error("failed to access scenario store {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("invalid report request log entry: {0}")]
    RequestLog(#[from] serde_json::Error),
}

/// Persistence for saved scenarios.
pub trait ScenarioStore {
    fn save(&self, scenario: &Scenario) -> Result<(), ScenarioStoreError>;
    fn get(&self, id: &ScenarioId) -> Result<Scenario, ScenarioStoreError>;
    /// Newest first, at most [`MAX_LISTED_SCENARIOS`] entries.
    fn list(&self) -> Result<Vec<Scenario>, ScenarioStoreError>;
    fn delete(&self, id: &ScenarioId) -> Result<(), ScenarioStoreError>;
}

/// The email capture recorded whenever a report is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub email: String,
    pub scenario_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Stores every scenario as `<data_dir>/scenarios/<id>.yaml` and appends
/// report requests to `<data_dir>/report_requests.jsonl`.
pub struct YamlScenarioStore {
    data_dir: PathBuf,
}

impl YamlScenarioStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn scenario_dir(&self) -> PathBuf {
        self.data_dir.join(SCENARIO_DIR)
    }

    fn scenario_path(&self, id: &ScenarioId) -> PathBuf {
        self.scenario_dir().join(format!("{id}.yaml"))
    }

    pub fn record_report_request(&self, request: &ReportRequest) -> Result<(), ScenarioStoreError> {
        let path = self.data_dir.join(REPORT_REQUESTS_FILE);
        let io_error = |source| ScenarioStoreError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.data_dir).map_err(io_error)?;

        let mut line = serde_json::to_string(request)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_error)?;
        file.write_all(line.as_bytes()).map_err(io_error)?;
        debug!("recorded report request for {}", request.scenario_name);
        Ok(())
    }

    pub fn report_requests(&self) -> Result<Vec<ReportRequest>, ScenarioStoreError> {
        let path = self.data_dir.join(REPORT_REQUESTS_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(ScenarioStoreError::Io { path, source }),
        };
        let mut requests = Vec::new();
        for line in contents.lines().filter(|line| !line.trim().is_empty()) {
            requests.push(serde_json::from_str(line)?);
        }
        Ok(requests)
    }

    fn read_scenario(path: &Path) -> Result<Scenario, ScenarioStoreError> {
        let contents = fs::read_to_string(path).map_err(|source| ScenarioStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ScenarioStoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ScenarioStore for YamlScenarioStore {
    fn save(&self, scenario: &Scenario) -> Result<(), ScenarioStoreError> {
        let dir = self.scenario_dir();
        fs::create_dir_all(&dir).map_err(|source| ScenarioStoreError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = self.scenario_path(&scenario.id);
        let yaml = serde_yaml::to_string(scenario)?;
        fs::write(&path, yaml).map_err(|source| ScenarioStoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("saved scenario {} to {}", scenario.id, path.display());
        Ok(())
    }

    fn get(&self, id: &ScenarioId) -> Result<Scenario, ScenarioStoreError> {
        let path = self.scenario_path(id);
        if !path.is_file() {
            return Err(ScenarioStoreError::NotFound(*id));
        }
        Self::read_scenario(&path)
    }

    fn list(&self) -> Result<Vec<Scenario>, ScenarioStoreError> {
        let dir = self.scenario_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let read_dir = fs::read_dir(&dir).map_err(|source| ScenarioStoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut scenarios = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| ScenarioStoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("yaml") {
                scenarios.push(Self::read_scenario(&path)?);
            }
        }
        scenarios.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        scenarios.truncate(MAX_LISTED_SCENARIOS);
        Ok(scenarios)
    }

    fn delete(&self, id: &ScenarioId) -> Result<(), ScenarioStoreError> {
        let path = self.scenario_path(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("deleted scenario {id}");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ScenarioStoreError::NotFound(*id))
            }
            Err(source) => Err(ScenarioStoreError::Io { path, source }),
        }
    }
}

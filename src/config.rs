use crate::error::{Result, RosterError};
use crate::model::User;
use crate::storage::default_seed;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".roster.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Users present at startup
    #[serde(default = "default_seed")]
    pub seed: Vec<User>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl RosterConfig {
    /// Load `.roster.yml`, searching upward from `start_path`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_file(&config_path)
    }

    /// Load a specific config file.
    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: RosterConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| RosterError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Like [`RosterConfig::load`], falling back to defaults rooted at
    /// `start_path` when no config file exists.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::load(start_path) {
            Err(RosterError::NotInitialized) => Ok((Self::default(), start_path.to_path_buf())),
            other => other,
        }
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(RosterError::NotInitialized);
            }
        }
    }

    /// Seeded ids must be unique and leave room for the next assigned id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for user in &self.store.seed {
            if user.numeric_id() == Some(u64::MAX) {
                return Err(RosterError::Config(format!(
                    "Seed user id {} leaves no id to assign",
                    user.id
                )));
            }
            if !seen.insert(user.id.as_str()) {
                return Err(RosterError::Config(format!(
                    "Duplicate seed user id: {}",
                    user.id
                )));
            }
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::default();
        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:4000");
        assert!(config.server.graphiql);
        assert_eq!(config.store.seed.len(), 2);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: RosterConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, default_host());
        assert_eq!(config.store.seed, default_seed());
    }

    #[test]
    fn test_empty_seed() {
        let config: RosterConfig = serde_yaml::from_str("store:\n  seed: []\n").unwrap();
        assert!(config.store.seed.is_empty());
    }

    #[test]
    fn test_save_and_load_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.server.port = 5000;
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (loaded, root) = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = RosterConfig::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "store:\n  seed:\n    - {id: '1', name: a, email: a}\n    - {id: '1', name: b, email: b}\n",
        )
        .unwrap();

        assert!(matches!(
            RosterConfig::load_file(&path),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_max_seed_id_rejected() {
        let mut config = RosterConfig::default();
        config
            .store
            .seed
            .push(User::new(u64::MAX.to_string(), "max", "max@x"));

        assert!(matches!(config.validate(), Err(RosterError::Config(_))));
    }

    #[test]
    fn test_seed_just_below_max_accepted() {
        let mut config = RosterConfig::default();
        config
            .store
            .seed
            .push(User::new((u64::MAX - 1).to_string(), "almost", "almost@x"));

        assert!(config.validate().is_ok());
    }
}

use std::fs;

use anyhow::{anyhow, Result};
use log::{debug, error, info};
use serde::Deserialize;

const BLOCK_SIZE_DEFAULT: usize = 1024;
const PEER_COUNT_DEFAULT: usize = 10;
const BLOCKS_DIRECTORY_DEFAULT: &str = "files/blocks";

#[derive(Clone, Deserialize)]
pub struct Config {
    /// File to distribute across the swarm.
    pub source: String,

    /// Command used to start one peer process.
    pub peer_command: String,

    #[serde(default = "block_size_default")]
    pub block_size: usize,

    #[serde(default = "peer_count_default")]
    pub peer_count: usize,

    #[serde(default = "blocks_directory_default")]
    pub blocks_directory: String,

    /// Seed for the per-peer serving order shuffle. Unset means entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(config_path: &str) -> Result<Self> {
        info!("Using configuration file {config_path}. ");

        let config = fs::read_to_string(config_path)?;
        let config = config.trim();
        let config: Self = serde_yaml::from_str(config)?;

        if config.peer_count == 0 {
            error!("config.peer_count must be at least 1. ");
            return Err(anyhow!("invalid configuration"));
        }

        if config.block_size == 0 {
            error!("config.block_size must be at least 1 byte. ");
            return Err(anyhow!("invalid configuration"));
        }

        Ok(config)
    }
}

fn block_size_default() -> usize {
    debug!("Defaulting config.block_size to {BLOCK_SIZE_DEFAULT}. ");
    BLOCK_SIZE_DEFAULT
}

fn peer_count_default() -> usize {
    debug!("Defaulting config.peer_count to {PEER_COUNT_DEFAULT}. ");
    PEER_COUNT_DEFAULT
}

fn blocks_directory_default() -> String {
    debug!("Defaulting config.blocks_directory to {BLOCKS_DIRECTORY_DEFAULT}. ");
    String::from(BLOCKS_DIRECTORY_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let yaml = "source: files/original/archive.bin\npeer_command: ./peer";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.source, "files/original/archive.bin");
        assert_eq!(config.peer_command, "./peer");
        assert_eq!(config.block_size, BLOCK_SIZE_DEFAULT);
        assert_eq!(config.peer_count, PEER_COUNT_DEFAULT);
        assert_eq!(config.blocks_directory, BLOCKS_DIRECTORY_DEFAULT);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parses_explicit_fields() {
        let yaml = concat!(
            "source: data.iso\n",
            "peer_command: target/release/peer\n",
            "block_size: 65536\n",
            "peer_count: 4\n",
            "blocks_directory: /tmp/blocks\n",
            "seed: 42\n",
        );
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.block_size, 65536);
        assert_eq!(config.peer_count, 4);
        assert_eq!(config.blocks_directory, "/tmp/blocks");
        assert_eq!(config.seed, Some(42));
    }
}

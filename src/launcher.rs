use anyhow::{anyhow, Result};
use futures::future::join_all;
use log::{debug, error, info};
use tokio::process::Command;

use crate::scheduler::PeerManifest;

/// Starts one peer process per manifest and waits for the whole swarm.
pub struct PeerLauncher {
    peer_command: String,
}

impl PeerLauncher {
    pub fn new(peer_command: String) -> Self {
        Self { peer_command }
    }

    /// Launch the swarm and block until every peer has terminated.
    ///
    /// A peer that fails to spawn is reported and stays absent for the
    /// whole run; its blocks are not reassigned. The run succeeds only if
    /// every peer started and exited successfully.
    pub async fn launch(&self, manifests: Vec<PeerManifest>) -> Result<()> {
        let mut children = vec![];
        let mut failed_peers = 0;

        for manifest in manifests {
            debug!("{}. ", manifest.describe());

            let child = Command::new(&self.peer_command)
                .args(manifest.to_args())
                .spawn();

            match child {
                Ok(child) => {
                    info!("Started peer {} with {} blocks. ", manifest.peer_id, manifest.blocks.len());
                    children.push((manifest.peer_id, child));
                },
                Err(e) => {
                    error!("Failed to start peer {}: {e}. ", manifest.peer_id);
                    failed_peers += 1;
                },
            }
        }

        let waits = children.into_iter().map(|(peer_id, mut child)| async move {
            let status = child.wait().await;
            (peer_id, status)
        });

        for (peer_id, status) in join_all(waits).await {
            match status {
                Ok(status) if status.success() => {
                    info!("Peer {peer_id} finished. ");
                },
                Ok(status) => {
                    error!("Peer {peer_id} exited with {status}. ");
                    failed_peers += 1;
                },
                Err(e) => {
                    error!("Failed to wait for peer {peer_id}: {e}. ");
                    failed_peers += 1;
                },
            }
        }

        if failed_peers != 0 {
            return Err(anyhow!("{failed_peers} peer(s) failed"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifests(peer_count: usize) -> Vec<PeerManifest> {
        (0..peer_count)
            .map(|peer_id| PeerManifest {
                peer_id,
                total_blocks: peer_count,
                blocks: vec![peer_id],
            })
            .collect()
    }

    #[tokio::test]
    async fn run_succeeds_when_every_peer_succeeds() {
        let launcher = PeerLauncher::new(String::from("true"));
        assert!(launcher.launch(manifests(4)).await.is_ok());
    }

    #[tokio::test]
    async fn failing_peer_fails_the_run() {
        let launcher = PeerLauncher::new(String::from("false"));
        assert!(launcher.launch(manifests(3)).await.is_err());
    }

    #[tokio::test]
    async fn unspawnable_peer_command_fails_the_run() {
        let launcher = PeerLauncher::new(String::from("/nonexistent/peer-binary"));
        assert!(launcher.launch(manifests(2)).await.is_err());
    }

    #[tokio::test]
    async fn empty_swarm_completes_immediately() {
        let launcher = PeerLauncher::new(String::from("true"));
        assert!(launcher.launch(vec![]).await.is_ok());
    }
}

use anyhow::Result;
use log::info;

use crate::{
    config::Config,
    launcher::PeerLauncher,
    partition,
    scheduler::Assignment,
};

pub struct App {
    source: String,
    blocks_directory: String,
    block_size: usize,
    peer_count: usize,
    seed: Option<u64>,
    launcher: PeerLauncher,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            source: config.source,
            blocks_directory: config.blocks_directory,
            block_size: config.block_size,
            peer_count: config.peer_count,
            seed: config.seed,
            launcher: PeerLauncher::new(config.peer_command),
        }
    }

    /// One swarm run, in strict sequence: partition the source, compute
    /// the assignment, then launch all peers and wait for them.
    pub async fn start(self) -> Result<()> {
        let total_blocks =
            partition::partition_file(&self.source, &self.blocks_directory, self.block_size).await?;

        info!(
            "Partitioned {} into {total_blocks} blocks of up to {} bytes. ",
            self.source, self.block_size,
        );

        let mut assignment = Assignment::base(total_blocks, self.peer_count)?;
        assignment.randomize_order(self.seed);

        let manifests = assignment.into_manifests();

        info!("Launching {} peers. ", manifests.len());

        self.launcher.launch(manifests).await?;

        info!("All peers finished. ");

        Ok(())
    }
}

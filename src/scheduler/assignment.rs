use anyhow::{anyhow, Result};
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

use crate::scheduler::manifest::PeerManifest;

/// Mapping from peer id to the ordered list of blocks that peer starts with.
///
/// The union of all peers' block lists always covers every index in
/// `0..total_blocks` exactly once. A block owned by nobody could never be
/// served, so the swarm would silently lose data; the constructor is the
/// only place membership is decided and it is a pure round-robin.
pub struct Assignment {
    total_blocks: usize,
    peers: Vec<Vec<usize>>,
}

impl Assignment {
    /// Round-robin base assignment: block `b` goes to peer `b % peer_count`.
    ///
    /// Peer loads differ by at most one; peers below
    /// `total_blocks % peer_count` hold the extra block. `total_blocks == 0`
    /// is valid and leaves every peer empty.
    pub fn base(total_blocks: usize, peer_count: usize) -> Result<Self> {
        if peer_count == 0 {
            return Err(anyhow!("invalid configuration"));
        }

        let mut peers = vec![vec![]; peer_count];
        for block in 0..total_blocks {
            peers[block % peer_count].push(block);
        }

        debug!("Assigned {total_blocks} blocks across {peer_count} peers. ");

        Ok(Self { total_blocks, peers })
    }

    /// Shuffle each peer's serving order independently.
    ///
    /// Membership never changes, only order. Without this every peer would
    /// walk the index space in lock-step and the same small prefix of
    /// blocks would be hot while the tail starves. Each peer gets its own
    /// rng derived from the master so one peer's permutation does not
    /// depend on how much entropy another consumed.
    pub fn randomize_order(&mut self, seed: Option<u64>) {
        let mut master = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for blocks in &mut self.peers {
            let mut rng = StdRng::seed_from_u64(master.next_u64());
            blocks.shuffle(&mut rng);
        }
    }

    pub fn total_blocks(&self) -> usize {
        self.total_blocks
    }

    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    pub fn blocks(&self, peer_id: usize) -> &[usize] {
        &self.peers[peer_id]
    }

    /// Reshape into the launcher's input contract, one manifest per peer.
    pub fn into_manifests(self) -> Vec<PeerManifest> {
        let total_blocks = self.total_blocks;

        self.peers
            .into_iter()
            .enumerate()
            .map(|(peer_id, blocks)| PeerManifest {
                peer_id,
                total_blocks,
                blocks,
            })
            .collect()
    }
}

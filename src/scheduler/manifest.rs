use itertools::Itertools;

/// Everything one peer needs to join the swarm: its identity, the global
/// block count, and its starting blocks in preferred serving order.
#[derive(Clone, Debug)]
pub struct PeerManifest {
    pub peer_id: usize,
    pub total_blocks: usize,
    pub blocks: Vec<usize>,
}

impl PeerManifest {
    /// Argument vector for the peer process:
    /// `<peer_id> <total_blocks> <block>...`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.blocks.len() + 2);
        args.push(self.peer_id.to_string());
        args.push(self.total_blocks.to_string());
        args.extend(self.blocks.iter().map(|block| block.to_string()));
        args
    }

    pub fn describe(&self) -> String {
        format!(
            "peer {} holds {} of {} blocks: [{}]",
            self.peer_id,
            self.blocks.len(),
            self.total_blocks,
            self.blocks.iter().join(", "),
        )
    }
}

mod assignment;
mod manifest;

pub use assignment::Assignment;
pub use manifest::PeerManifest;

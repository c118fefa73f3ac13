pub mod sampling;
pub mod swarm;

/// Target value of the classic game
pub const DEFAULT_TARGET: f64 = 24.0;

/// Permutations generated and searched per batch
pub const PERMUTATION_CHUNK_SIZE: usize = 256;

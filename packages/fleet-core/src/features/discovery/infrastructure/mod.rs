pub mod classifier;
pub mod dfs_scanner;

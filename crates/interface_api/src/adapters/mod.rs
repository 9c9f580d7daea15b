//! Snapshot port adapters

pub mod file;

pub use file::FileSnapshotAdapter;

pub mod changelog;
pub mod config;
pub mod fs_ops;
pub mod latex;
pub mod metadata;
pub mod pipeline;
pub mod version;

pub mod testing;

pub mod checksum;
pub mod defaults;
pub mod format;
pub mod scene;

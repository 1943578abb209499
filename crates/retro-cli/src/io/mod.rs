pub mod rtr;
pub mod scene_file;

//! Pulsecage library - Audio-reactive raymarched sphere cage

pub mod audio;
pub mod cli;
pub mod params;
pub mod rendering;
pub mod scene;
pub mod server;

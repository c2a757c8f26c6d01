pub mod player;
pub mod tone;

pub use player::{find_audio_device, list_audio_devices, play_tone};
pub use tone::render_tone;

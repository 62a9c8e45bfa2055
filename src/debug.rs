/*
 * Debug Information Module
 *
 * Frame metrics shown in the controls panel and the optional overlay.
 */

use std::time::Duration;

use crate::backdrop::FrameStats;

#[derive(Debug, Default, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particle_count: usize,
    pub particle_links: usize,
    pub pointer_links: usize,
    pub frames: u64,
}

impl DebugInfo {
    pub fn record(&mut self, stats: FrameStats, particle_count: usize, frames: u64) {
        self.particle_links = stats.particle_links;
        self.pointer_links = stats.pointer_links;
        self.particle_count = particle_count;
        self.frames = frames;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_copies_frame_stats() {
        let mut info = DebugInfo::default();
        info.frame_time = Duration::from_micros(16_500);
        info.record(
            FrameStats {
                particle_links: 12,
                pointer_links: 3,
            },
            80,
            7,
        );

        assert_eq!(info.particle_links, 12);
        assert_eq!(info.pointer_links, 3);
        assert_eq!(info.particle_count, 80);
        assert_eq!(info.frames, 7);
        assert!((info.frame_time_ms() - 16.5).abs() < 1e-9);
    }
}

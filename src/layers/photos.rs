use rand::Rng;
use tracing::debug;

use crate::animation::{Easing, Mode, MorphProfile, Progress, Transform};
use crate::data::{PhotoAlbum, PhotoConfig};
use crate::layout::{Element, LayoutGenerator, Spiral};

/// A single photo hung on the tree
#[derive(Debug, Clone)]
pub struct PhotoFrame {
    pub photo_id: String,
    /// Slot on the spiral, fixed when the frame is created
    pub index: usize,
    pub element: Element,
    progress: Progress,
}

impl PhotoFrame {
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }
}

/// Photo frames, each with its own progress.
///
/// Frames are placed on a spiral sized for the album's full capacity, so
/// adding photos later never moves the ones already hanging.
pub struct PhotoFrames {
    layout: LayoutGenerator,
    spiral: Spiral,
    slots: usize,
    smoothing: f32,
    easing: Easing,
    profile: MorphProfile,
    frames: Vec<PhotoFrame>,
}

impl PhotoFrames {
    pub fn new(config: &PhotoConfig) -> Self {
        Self {
            layout: config.layout(),
            spiral: config.spiral,
            slots: config.capacity,
            smoothing: config.smoothing,
            easing: config.easing,
            profile: config.profile(),
            frames: Vec::with_capacity(config.capacity),
        }
    }

    /// Create frames for album entries that do not have one yet.
    ///
    /// Returns the number of frames created.
    pub fn sync(&mut self, album: &PhotoAlbum, rng: &mut impl Rng) -> usize {
        let before = self.frames.len();
        for (index, photo_id) in album.iter().enumerate().skip(before) {
            if index >= self.slots {
                break;
            }
            let element = self.layout.spiral_element(index, self.slots, &self.spiral, rng);
            self.frames.push(PhotoFrame {
                photo_id: photo_id.to_string(),
                index,
                element,
                progress: Progress::new(self.smoothing),
            });
        }

        let created = self.frames.len() - before;
        if created > 0 {
            debug!(created, total = self.frames.len(), "photo frames created");
        }
        created
    }

    /// Advance every frame's own progress
    pub fn update(&mut self, mode: Mode) {
        for frame in &mut self.frames {
            frame.progress.update(mode);
        }
    }

    pub fn count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[PhotoFrame] {
        &self.frames
    }

    pub fn photo_id(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(|f| f.photo_id.as_str())
    }

    pub fn transform(&self, index: usize, time: f32) -> Option<Transform> {
        let frame = self.frames.get(index)?;
        Some(self.frame_transform(frame, time))
    }

    pub fn transforms(&self, time: f32) -> impl Iterator<Item = Transform> + '_ {
        self.frames.iter().map(move |f| self.frame_transform(f, time))
    }

    /// Write the instance matrix buffer (16 floats per frame)
    pub fn write_instances(&self, time: f32, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.frames.len() * 16);
        for transform in self.transforms(time) {
            transform.write_to(out);
        }
    }

    pub fn is_settled(&self, mode: Mode) -> bool {
        self.frames.iter().all(|f| f.progress.is_settled(mode, 1e-3))
    }

    fn frame_transform(&self, frame: &PhotoFrame, time: f32) -> Transform {
        self.profile
            .transform(&frame.element, frame.progress.eased(self.easing), time)
    }
}

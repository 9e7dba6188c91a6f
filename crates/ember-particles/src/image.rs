//! Particle images: configured display specs and resolved bitmap handles

use ember_core::ImageId;
use serde::Deserialize;
use std::collections::HashMap;

/// One entry of an emitter's image set
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageSpec {
    pub id: ImageId,
    /// Display width in density-independent units
    pub size: u32,
    /// Optional host tag to identify the image type on hit-test
    #[serde(default)]
    pub tag: Option<String>,
    /// Display height divided by display width
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f32,
}

fn default_aspect_ratio() -> f32 {
    1.0
}

impl ImageSpec {
    pub fn new(id: ImageId, size: u32) -> Self {
        Self {
            id,
            size,
            tag: None,
            aspect_ratio: default_aspect_ratio(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// On-screen (width, height) in pixels at the given display density
    pub fn display_size(&self, density: f32) -> (f32, f32) {
        let width = self.size as f32 * density;
        (width, width * self.aspect_ratio)
    }
}

/// A loaded bitmap as seen by the engine: its id and pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: ImageId,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    pub fn new(id: ImageId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}

/// Looks up loaded bitmaps by id.
///
/// `None` means the image is still loading; the particle is simply not drawn
/// this frame.
pub trait ImageProvider {
    fn resolve(&self, id: ImageId) -> Option<&ImageHandle>;
}

/// In-memory image provider filled by the host as bitmaps finish loading
#[derive(Debug, Default)]
pub struct ImageCache {
    images: HashMap<ImageId, ImageHandle>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, handle: ImageHandle) {
        self.images.insert(handle.id, handle);
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageHandle> {
        self.images.get(&id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}

impl ImageProvider for ImageCache {
    fn resolve(&self, id: ImageId) -> Option<&ImageHandle> {
        self.get(id)
    }
}

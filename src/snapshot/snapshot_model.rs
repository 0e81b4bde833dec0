use image::GenericImageView;

use crate::geometry::rect::Size;
use crate::tree::builder::{BuildConfig, TreeError, build_tree, trim_dump};
use crate::tree::node_model::LayoutNode;

/// A screenshot's encoded bytes plus its decoded pixel dimensions.
#[derive(Debug, Clone)]
pub struct ScreenImage {
    pub width: u32,
    pub height: u32,
    /// Original encoded bytes, kept for saving the snapshot pair back out.
    pub data: Vec<u8>,
}

impl ScreenImage {
    /// Decode dimensions from encoded image bytes. The pixels themselves
    /// are never needed by the core, only the native size.
    pub fn decode(data: Vec<u8>) -> Result<ScreenImage, image::ImageError> {
        let decoded = image::load_from_memory(&data)?;
        let (width, height) = decoded.dimensions();
        Ok(ScreenImage { width, height, data })
    }

    /// An image with known dimensions and no backing bytes. Used by tests
    /// and by callers that already decoded elsewhere.
    pub fn with_dimensions(width: u32, height: u32) -> ScreenImage {
        ScreenImage {
            width,
            height,
            data: Vec::new(),
        }
    }
}

/// One captured (layout tree, screenshot) pair, treated as an immutable
/// unit: a new capture or load replaces the whole snapshot, never patches
/// it in place.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tree: LayoutNode,
    /// Raw markup the tree was built from, kept for round-tripping to disk.
    pub markup: String,
    pub image: ScreenImage,
}

impl Snapshot {
    /// Build a snapshot from a raw dump payload and a screenshot. The dump
    /// is trimmed at the closing hierarchy tag before parsing.
    pub fn build(raw_dump: &str, image: ScreenImage, config: &BuildConfig) -> Result<Snapshot, TreeError> {
        let markup = trim_dump(raw_dump);
        let tree = build_tree(markup, config)?;
        Ok(Snapshot {
            tree,
            markup: markup.to_string(),
            image,
        })
    }

    /// Derived, never stored: the raw screenshot is wider than tall.
    /// Recomputed from the image so it can never drift out of sync.
    pub fn is_landscape(&self) -> bool {
        self.image.width > self.image.height
    }

    pub fn native_size(&self) -> Size {
        Size {
            width: self.image.width as i32,
            height: self.image.height as i32,
        }
    }
}

use layout_inspector::snapshot::snapshot_model::{ScreenImage, Snapshot};
use layout_inspector::tree::builder::{BuildConfig, build_tree};
use layout_inspector::tree::node_model::LayoutNode;

/// The two-widget hierarchy used by the click-resolution scenarios:
/// `b` nested inside `a`, both with portrait-space bounds.
pub const NESTED_DUMP: &str =
    r#"<hierarchy rotation="0"><a bounds="[0,0][100,200]"><b bounds="[10,10][50,50]"/></a></hierarchy>"#;

pub fn tree_of(markup: &str) -> LayoutNode {
    build_tree(markup, &BuildConfig::default()).expect("fixture markup should parse")
}

pub fn snapshot_of(markup: &str, width: u32, height: u32) -> Snapshot {
    Snapshot::build(
        markup,
        ScreenImage::with_dimensions(width, height),
        &BuildConfig::default(),
    )
    .expect("fixture markup should parse")
}

/// Encode a blank PNG of the given size for store round-trip tests.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    buf.into_inner()
}

/// A scratch directory unique to the calling test, cleaned up by the caller.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("layout-inspector-test-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

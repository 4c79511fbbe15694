/// Measured offset size of an element, in pixels.
///
/// The document has no layout engine; the embedder reports sizes after the
/// browser (or a test) has laid the page out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

/// A rendered page instance
///
/// Instances live as long as their page is on screen or about to be, so a
/// view may keep state between frames.
pub trait PageView {
    fn render(&mut self, area: Rect, buf: &mut Buffer);
}

impl PageView for Paragraph<'_> {
    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        Widget::render(&*self, area, buf);
    }
}

/// Builds page views from page descriptors
pub trait PageDelegate<P> {
    type View: PageView;

    /// Create the view for the page at `index`
    fn instantiate(&mut self, index: usize, page: &P) -> Self::View;

    /// Called when the view for `index` scrolled out of range or the model was replaced
    fn release(&mut self, _index: usize, _view: Self::View) {}
}

/// Delegate backed by a closure
pub struct FnDelegate<F> {
    build: F,
}

impl<F> FnDelegate<F> {
    pub fn new(build: F) -> Self {
        Self { build }
    }
}

impl<P, V, F> PageDelegate<P> for FnDelegate<F>
where
    F: FnMut(usize, &P) -> V,
    V: PageView,
{
    type View = V;

    fn instantiate(&mut self, index: usize, page: &P) -> V {
        (self.build)(index, page)
    }
}

impl<F> std::fmt::Debug for FnDelegate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDelegate").finish_non_exhaustive()
    }
}

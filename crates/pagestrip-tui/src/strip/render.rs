use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
    Frame,
};

use super::{PageDelegate, PageView, PagedTabStrip};

impl<P, D: PageDelegate<P>> PagedTabStrip<P, D> {
    /// Render into a frame; `area` becomes the viewport
    pub fn render_frame(&mut self, frame: &mut Frame, area: Rect) {
        self.render(area, frame.buffer_mut());
    }

    /// Render the pages overlapping the viewport, clipped to `area`
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.set_viewport(area.width, area.height);

        let window = self.live_window();
        let delegate = &mut self.delegate;
        self.pool
            .retain(&window, |index, view| delegate.release(index, view));

        if self.pages.is_empty() {
            if let Some(text) = &self.placeholder {
                let placeholder = Paragraph::new(Line::from(text.as_str()).centered());
                Widget::render(placeholder, area, buf);
            }
            return;
        }
        if area.is_empty() {
            return;
        }

        for &index in &window {
            let page = &self.pages[index];
            self.pool
                .get_or_create(index, || delegate.instantiate(index, page));
        }

        let width = i64::from(area.width);
        let offset = i64::from(self.visual_offset());
        let page_area = Rect::new(0, 0, area.width, area.height);

        for &index in &window {
            let left = index as i64 * width - offset;
            let start = left.max(0);
            let end = (left + width).min(width);
            if start >= end {
                continue;
            }
            let Some(view) = self.pool.get_mut(index) else {
                continue;
            };

            let mut scratch = Buffer::empty(page_area);
            view.render(page_area, &mut scratch);
            blit_columns(&scratch, buf, area, start, end, left);
        }
    }
}

/// Copy viewport columns `start..end` from a page rendered at `left` into `buf`
fn blit_columns(page: &Buffer, buf: &mut Buffer, area: Rect, start: i64, end: i64, left: i64) {
    for column in start..end {
        let source_x = (column - left) as u16;
        let target_x = area.x + column as u16;
        for row in 0..area.height {
            let Some(cell) = page.cell((source_x, row)) else {
                continue;
            };
            if let Some(target) = buf.cell_mut((target_x, area.y + row)) {
                *target = cell.clone();
            }
        }
    }
}

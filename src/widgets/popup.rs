use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, same x and width
///
/// `y_offset` rows are left between the anchor and the popup. The height is
/// clamped so the popup never extends past `bounds`.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16, y_offset: u16) -> Rect {
    let popup_y = anchor.bottom().saturating_add(y_offset).min(bounds.bottom());
    let available = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

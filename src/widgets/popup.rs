use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a drop-down directly below `anchor`, clipped to `bounds`
///
/// The drop-down is indented by `x_offset` on both sides of the anchor and
/// never extends past the bottom of `bounds`.
pub fn dropdown_below_anchor(
    anchor: Rect,
    bounds: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let dropdown_x = anchor.x + x_offset;
    let dropdown_y = anchor.bottom().max(bounds.y);

    Rect {
        x: dropdown_x,
        y: dropdown_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(bounds.bottom().saturating_sub(dropdown_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

pub mod handler;

use std::time::Duration;

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn get_active_track_icon(is_playing: bool, clock: Duration) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u128 = 100;

        let step = (clock.as_millis() / FRAME_STEP_MS) as usize % 6;
        match step {
            1 | 4 => "•",
            2 | 3 => "●",
            _ => "·",
        }
    } else {
        "•"
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cuts `text` to at most `width` terminal columns, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

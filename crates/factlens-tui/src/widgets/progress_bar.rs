//! Smooth Unicode percentage bar.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

const BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Bar string of exactly `width` cells for `percent` (clamped to 0..=100).
pub fn bar_string(percent: f64, width: usize) -> String {
    // 8 eighths per cell
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let eighths = (fraction * width as f64 * 8.0) as usize;
    let full_blocks = eighths / 8;
    let partial = eighths % 8;

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..full_blocks {
        bar.push('█');
    }
    if full_blocks < width {
        bar.push(BLOCKS[partial]);
        for _ in (full_blocks + 1)..width {
            bar.push(' ');
        }
    }
    bar
}

/// Bar span plus a track background so the empty part stays visible.
pub fn bar_span(percent: f64, width: usize, fill: Color, track: Color) -> Span<'static> {
    Span::styled(bar_string(percent, width), Style::default().fg(fill).bg(track))
}

use crate::Album;

/// Pixel margins around the plot area, in the usual top/right/bottom/
/// left order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// One laid-out chart rectangle, in surface coordinates (origin top
/// left, y growing downward).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fill color used when the bars are rendered.
pub const BAR_FILL: &str = "steelblue";

/// Fraction of one band step left blank between bars and at both edges
/// of the plot area.
pub const BAND_PADDING: f64 = 0.1;

/// Lays out one bar per album on a `width` by `height` surface: a
/// padded band scale positions the bars by catalog order, and a linear
/// scale maps price to bar height, with the tallest bar spanning the
/// full plot height.
pub fn price_bars(albums: &[Album], width: f64, height: f64, margin: Margin) -> Vec<Bar> {
    if albums.is_empty() {
        return Vec::new();
    }

    let span = width - margin.left - margin.right;
    let count = albums.len() as f64;
    // Each band owns one step; padding carves a gap out of every step
    // and centers the leftover space at the edges.
    let step = span / (count + BAND_PADDING);
    let bandwidth = step * (1.0 - BAND_PADDING);
    let origin = margin.left + step * BAND_PADDING;

    let baseline = height - margin.bottom;
    let plot_height = baseline - margin.top;
    let max_price = albums
        .iter()
        .fold(0.0_f64, |max, album| max.max(album.price));

    albums
        .iter()
        .enumerate()
        .map(|(index, album)| {
            let scaled = if max_price > 0.0 {
                album.price / max_price * plot_height
            } else {
                0.0
            };
            Bar {
                label: album.title.clone(),
                x: origin + step * index as f64,
                y: baseline - scaled,
                width: bandwidth,
                height: scaled,
            }
        })
        .collect()
}

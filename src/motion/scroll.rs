use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

/// Edge of an element or of the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// "Element edge meets viewport edge": one end of a scroll window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub element: Edge,
    pub viewport: Edge,
}

/// The observation window a tracked container scrolls through. Progress is 0
/// at `start`, 1 at `end`, clamped outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollWindow {
    /// Container top reaches viewport top, through container bottom reaching
    /// viewport bottom. The window used by tall sticky stages.
    pub const COVER: Self = Self {
        start: Anchor {
            element: Edge::Start,
            viewport: Edge::Start,
        },
        end: Anchor {
            element: Edge::End,
            viewport: Edge::End,
        },
    };

    /// Container top reaches viewport center, through container bottom
    /// reaching viewport center.
    pub const THROUGH_CENTER: Self = Self {
        start: Anchor {
            element: Edge::Start,
            viewport: Edge::Center,
        },
        end: Anchor {
            element: Edge::End,
            viewport: Edge::Center,
        },
    };

    /// The viewport-relative `top` coordinate at which an anchor condition
    /// holds: `element_top + element_frac * height == viewport_frac * vh`.
    fn anchor_top(anchor: Anchor, element_height: f64, viewport_height: f64) -> f64 {
        anchor.viewport.fraction() * viewport_height - anchor.element.fraction() * element_height
    }

    /// Normalized progress for a container whose bounding top is `top`.
    /// Missing targets (zero height), unmeasured viewports and degenerate
    /// windows all yield the inert sample 0.
    pub fn resolve(&self, element_height: f64, viewport_height: f64, top: f64) -> f64 {
        if element_height <= 0.0 || !viewport_height.is_finite() || viewport_height <= 0.0 {
            return 0.0;
        }
        let start_top = Self::anchor_top(self.start, element_height, viewport_height);
        let end_top = Self::anchor_top(self.end, element_height, viewport_height);
        let span = start_top - end_top;
        if span <= 0.0 {
            return 0.0;
        }
        ((start_top - top) / span).clamp(0.0, 1.0)
    }
}

/// Tracks how far `target` has scrolled through `window`, as a signal in
/// [0,1]. Recomputed on scroll and resize; detached when the owning
/// component unmounts.
pub fn use_scroll_progress(target: NodeRef<html::Div>, window: ScrollWindow) -> Signal<f64> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();
    let progress = Memo::new(move |_| {
        window.resolve(height.get(), viewport_height.get(), top.get())
    });
    progress.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_window_spans_the_scrollable_distance() {
        // 3000px container in a 1000px viewport: starts when top hits 0,
        // ends when top hits -(3000 - 1000).
        let w = ScrollWindow::COVER;
        assert_eq!(w.resolve(3000.0, 1000.0, 0.0), 0.0);
        assert_eq!(w.resolve(3000.0, 1000.0, -1000.0), 0.5);
        assert_eq!(w.resolve(3000.0, 1000.0, -2000.0), 1.0);
    }

    #[test]
    fn clamps_outside_the_window() {
        let w = ScrollWindow::COVER;
        assert_eq!(w.resolve(3000.0, 1000.0, 500.0), 0.0);
        assert_eq!(w.resolve(3000.0, 1000.0, -2500.0), 1.0);
    }

    #[test]
    fn center_anchors_offset_the_window() {
        // 'start center' -> top == vh/2; 'end center' -> top == vh/2 - h.
        let w = ScrollWindow::THROUGH_CENTER;
        assert_eq!(w.resolve(2000.0, 1000.0, 500.0), 0.0);
        assert_eq!(w.resolve(2000.0, 1000.0, -500.0), 0.5);
        assert_eq!(w.resolve(2000.0, 1000.0, -1500.0), 1.0);
    }

    #[test]
    fn missing_target_is_inert() {
        assert_eq!(ScrollWindow::COVER.resolve(0.0, 1000.0, 0.0), 0.0);
        assert_eq!(ScrollWindow::COVER.resolve(-5.0, 1000.0, 0.0), 0.0);
        assert_eq!(ScrollWindow::COVER.resolve(3000.0, f64::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn degenerate_window_is_inert() {
        // Start and end anchors coincide when the container exactly fills
        // the viewport under COVER.
        assert_eq!(ScrollWindow::COVER.resolve(1000.0, 1000.0, -200.0), 0.0);
        let inverted = ScrollWindow {
            start: Anchor {
                element: Edge::End,
                viewport: Edge::End,
            },
            end: Anchor {
                element: Edge::Start,
                viewport: Edge::Start,
            },
        };
        assert_eq!(inverted.resolve(3000.0, 1000.0, -1000.0), 0.0);
    }
}

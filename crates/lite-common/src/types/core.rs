use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in logical pixels, relative to the window's content origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Inner window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a physical inner size to logical pixels.
    ///
    /// A non-positive scale factor is treated as 1.0.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: width as f64 / scale,
            height: height as f64 / scale,
        }
    }
}

/// Stable tab identifier. Allocated as `max existing + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl TabId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 260.0,
            y: 36.0,
            width: 940.0,
            height: 764.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"x":260.0,"y":36.0,"width":940.0,"height":764.0}"#);
    }

    #[test]
    fn window_size_from_physical_divides_by_scale() {
        let size = WindowSize::from_physical(2400, 1600, 2.0);
        assert_eq!(size, WindowSize::new(1200.0, 800.0));
    }

    #[test]
    fn window_size_from_physical_bad_scale_is_identity() {
        let size = WindowSize::from_physical(1200, 800, 0.0);
        assert_eq!(size, WindowSize::new(1200.0, 800.0));
    }

    #[test]
    fn tab_id_display() {
        assert_eq!(TabId(42).to_string(), "tab-42");
    }

    #[test]
    fn tab_id_next_and_order() {
        assert_eq!(TabId(1).next(), TabId(2));
        assert!(TabId(2) > TabId(1));
    }

    #[test]
    fn tab_id_serializes_as_number() {
        let json = serde_json::to_string(&TabId(7)).unwrap();
        assert_eq!(json, "7");
        let back: TabId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TabId(7));
    }
}

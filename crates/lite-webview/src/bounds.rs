//! Conversion from session geometry to wry bounds.

use lite_common::Rect;

/// Convert a logical-pixel `Rect` to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_rect_converts_to_logical_wry_rect() {
        let rect = Rect {
            x: 260.0,
            y: 36.0,
            width: 940.0,
            height: 764.0,
        };
        let wry_rect = rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 260.0).abs() < f64::EPSILON);
                assert!((pos.y - 36.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 940.0).abs() < f64::EPSILON);
                assert!((size.height - 764.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn collapsed_rect_keeps_zero_height() {
        let rect = Rect {
            x: 0.0,
            y: 36.0,
            width: 100.0,
            height: 0.0,
        };
        match rect_to_wry(&rect).size {
            wry::dpi::Size::Logical(size) => assert_eq!(size.height, 0.0),
            _ => panic!("Expected logical size"),
        }
    }
}

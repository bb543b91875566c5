use serde::Serialize;

use super::DrawCommand;
use crate::layout::Canvas;

/// Font sizing for rectangle labels.
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle {
    pub font_size: f64,
    /// Approximate advance of one character, as a fraction of the font size
    pub char_width: f64,
}

impl LabelStyle {
    /// Labels scale with the canvas: 1.3% of its height.
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            font_size: (canvas.height * 0.013).max(1.0),
            char_width: 0.58,
        }
    }

    fn approx_char_w(&self) -> f64 {
        (self.font_size * self.char_width).max(1.0)
    }
}

/// A text label positioned at the center of its rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Top-left corner of the text box
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Center the command's name inside its rectangle, truncating with `...` when
/// it does not fit. Rectangles too small for any text get no label.
pub fn place_label(cmd: &DrawCommand, style: &LabelStyle) -> Option<Label> {
    let rect = cmd.rect;
    if rect.h < style.font_size {
        return None;
    }

    let text = truncate_label(&cmd.name, rect.w, style);
    if text.is_empty() {
        return None;
    }

    let width = text.chars().count() as f64 * style.approx_char_w();
    let height = style.font_size;
    Some(Label {
        x: rect.x + (rect.w - width) / 2.0,
        y: rect.y + (rect.h - height) / 2.0,
        width,
        height,
        text,
    })
}

fn truncate_label(name: &str, max_width: f64, style: &LabelStyle) -> String {
    let max_chars = (max_width / style.approx_char_w()) as usize;
    if max_chars < 3 {
        return String::new();
    }
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let keep = max_chars - 3;
    let truncated: String = name.chars().take(keep).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::render::colors::Color;

    fn cmd(name: &str, rect: Rect) -> DrawCommand {
        DrawCommand {
            name: name.into(),
            rect,
            color: Color::WHITE,
        }
    }

    #[test]
    fn style_follows_canvas_height() {
        let style = LabelStyle::for_canvas(Canvas::new(960.0, 1000.0));
        assert!((style.font_size - 13.0).abs() < 1e-9);
        assert_eq!(LabelStyle::for_canvas(Canvas::new(10.0, 10.0)).font_size, 1.0);
    }

    #[test]
    fn short_name_is_centered() {
        let style = LabelStyle {
            font_size: 10.0,
            char_width: 0.5,
        };
        let label = place_label(&cmd("main", Rect::new(0.0, 0.0, 100.0, 50.0)), &style).unwrap();
        assert_eq!(label.text, "main");
        assert!((label.width - 20.0).abs() < 1e-9);
        assert!((label.x - 40.0).abs() < 1e-9);
        assert!((label.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn long_name_is_truncated() {
        let style = LabelStyle {
            font_size: 10.0,
            char_width: 0.5,
        };
        // 40px fits 8 chars of 5px
        let label = place_label(
            &cmd("parse_arguments on line 12 in cli.py", Rect::new(0.0, 0.0, 40.0, 40.0)),
            &style,
        )
        .unwrap();
        assert_eq!(label.text, "parse...");
    }

    #[test]
    fn tiny_rect_gets_no_label() {
        let style = LabelStyle {
            font_size: 10.0,
            char_width: 0.5,
        };
        assert!(place_label(&cmd("f", Rect::new(0.0, 0.0, 12.0, 40.0)), &style).is_none());
        assert!(place_label(&cmd("f", Rect::new(0.0, 0.0, 100.0, 5.0)), &style).is_none());
        assert!(place_label(&cmd("f", Rect::empty_at(3.0, 3.0)), &style).is_none());
    }
}

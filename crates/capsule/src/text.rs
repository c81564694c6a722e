//! Text rendering capability for button labels.

use capsule_style::css_var;
use capsule_style::types::ButtonSize;

/// Style inputs for one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    pub content: String,
    pub color: String,
    /// Index into the host's `--font-weight-N` scale.
    pub font_weight: u8,
    pub size: ButtonSize,
    pub antialiased: bool,
}

/// Renders inline label text.
pub trait TextRenderer {
    type Output;

    fn render_text(&self, request: &TextRequest) -> Self::Output;
}

impl<F, O> TextRenderer for F
where
    F: Fn(&TextRequest) -> O,
{
    type Output = O;

    fn render_text(&self, request: &TextRequest) -> O {
        self(request)
    }
}

/// A styled run of text with scale references resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub content: String,
    pub color: String,
    pub font_weight: String,
    pub font_size: String,
    pub line_height: String,
    /// `Some("antialiased")` when font smoothing is requested.
    pub font_smoothing: Option<&'static str>,
}

/// Default text renderer producing [`TextRun`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextRenderer for PlainText {
    type Output = TextRun;

    fn render_text(&self, request: &TextRequest) -> TextRun {
        let size = i64::from(request.size.index());
        TextRun {
            content: request.content.clone(),
            color: request.color.clone(),
            font_weight: css_var("font-weight", request.font_weight.into(), None),
            font_size: css_var("font-size", size, None),
            line_height: css_var("cell-height", size, None),
            font_smoothing: request.antialiased.then_some("antialiased"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(antialiased: bool) -> TextRequest {
        TextRequest {
            content: "Save".into(),
            color: "#fff".into(),
            font_weight: 3,
            size: ButtonSize::Two,
            antialiased,
        }
    }

    #[test]
    fn plain_text_resolves_scale() {
        let run = PlainText.render_text(&request(false));

        assert_eq!(run.content, "Save");
        assert_eq!(run.font_weight, "var(--font-weight-3)");
        assert_eq!(run.font_size, "var(--font-size-2)");
        assert_eq!(run.line_height, "var(--cell-height-2)");
        assert_eq!(run.font_smoothing, None);
    }

    #[test]
    fn antialiasing_is_forwarded() {
        let run = PlainText.render_text(&request(true));
        assert_eq!(run.font_smoothing, Some("antialiased"));
    }
}

//! Certificate drawing: a pure function from a [`CertificateData`] record to
//! a PNG-encoded 800x600 raster. Coordinates and colors live here as named
//! constants so the layout can be asserted on without decoding pixels.

use crate::errors::{AppError, AppResult};
use crate::models::domain::CertificateData;
use crate::render::canvas::{Canvas, Color};
use crate::render::font;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
const CENTER_X: i64 = CANVAS_WIDTH as i64 / 2;

const GRADIENT_TOP: Color = [0xFE, 0xF3, 0xC7];
const GRADIENT_MID: Color = [0xFD, 0xE6, 0x8A];
const GRADIENT_BOTTOM: Color = [0xFB, 0xBF, 0x24];

const BORDER_OUTER_COLOR: Color = [0xF5, 0x9E, 0x0B];
const BORDER_OUTER_WIDTH: u32 = 8;
const BORDER_OUTER_INSET: i64 = 20;
const BORDER_INNER_COLOR: Color = [0xD9, 0x77, 0x06];
const BORDER_INNER_WIDTH: u32 = 2;
const BORDER_INNER_INSET: i64 = 40;

const TITLE_COLOR: Color = [0x1F, 0x29, 0x37];
const SUBTITLE_COLOR: Color = [0x37, 0x41, 0x51];
const TIER_COLOR: Color = [0x7C, 0x3A, 0xED];
const BODY_COLOR: Color = [0x4B, 0x55, 0x63];
const SCORE_COLOR: Color = [0xDC, 0x26, 0x26];
const PERCENT_COLOR: Color = [0xEA, 0x58, 0x0C];
const MESSAGE_COLOR: Color = [0x05, 0x96, 0x69];
const DATE_COLOR: Color = [0x6B, 0x72, 0x80];
const FOOTER_COLOR: Color = [0x9C, 0xA3, 0xAF];

const SEAL_COLOR: Color = [0xF5, 0x9E, 0x0B];
const SEAL_CENTER: (i64, i64) = (CENTER_X, 500);
const SEAL_RADIUS: i64 = 20;

/// One centred line of certificate text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub baseline_y: i64,
    pub size_px: u32,
    pub color: Color,
}

pub fn score_message(percentage: u8) -> &'static str {
    if percentage >= 90 {
        "Privacy Master! Outstanding!"
    } else if percentage >= 80 {
        "Excellent! You are Privacy Grounded!"
    } else if percentage >= 70 {
        "Great job! You are Privacy Oriented!"
    } else if percentage >= 60 {
        "Good effort! Room for Improvement!"
    } else {
        "Congratulations! You are Privacy Centered!"
    }
}

/// The full text layout for a certificate, top to bottom.
pub fn layout(data: &CertificateData) -> Vec<TextLine> {
    vec![
        TextLine {
            text: "CERTIFICATE OF COMPLETION".to_string(),
            baseline_y: 120,
            size_px: 48,
            color: TITLE_COLOR,
        },
        TextLine {
            text: "Privacy Academy Quiz".to_string(),
            baseline_y: 170,
            size_px: 32,
            color: SUBTITLE_COLOR,
        },
        TextLine {
            text: format!("{} Level", data.tier.title_case()),
            baseline_y: 205,
            size_px: 28,
            color: TIER_COLOR,
        },
        TextLine {
            text: "This certifies that you have successfully completed".to_string(),
            baseline_y: 240,
            size_px: 24,
            color: BODY_COLOR,
        },
        TextLine {
            text: "the Privacy Academy quiz with a score of".to_string(),
            baseline_y: 270,
            size_px: 24,
            color: BODY_COLOR,
        },
        TextLine {
            text: format!("{}/{}", data.score, data.total_questions),
            baseline_y: 340,
            size_px: 64,
            color: SCORE_COLOR,
        },
        TextLine {
            text: format!("({}%)", data.percentage),
            baseline_y: 380,
            size_px: 36,
            color: PERCENT_COLOR,
        },
        TextLine {
            text: score_message(data.percentage).to_string(),
            baseline_y: 440,
            size_px: 20,
            color: MESSAGE_COLOR,
        },
        TextLine {
            text: format!("Completed on {}", data.completion_date),
            baseline_y: 480,
            size_px: 18,
            color: DATE_COLOR,
        },
        TextLine {
            text: "Powered by Privacy Academy".to_string(),
            baseline_y: 520,
            size_px: 16,
            color: FOOTER_COLOR,
        },
    ]
}

/// Draw the certificate and encode it as PNG bytes.
pub fn render(data: &CertificateData) -> AppResult<Vec<u8>> {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    canvas.fill_diagonal_gradient(&[
        (0.0, GRADIENT_TOP),
        (0.5, GRADIENT_MID),
        (1.0, GRADIENT_BOTTOM),
    ]);

    canvas.stroke_rect(
        BORDER_OUTER_INSET,
        BORDER_OUTER_INSET,
        CANVAS_WIDTH - 2 * BORDER_OUTER_INSET as u32,
        CANVAS_HEIGHT - 2 * BORDER_OUTER_INSET as u32,
        BORDER_OUTER_WIDTH,
        BORDER_OUTER_COLOR,
    );
    canvas.stroke_rect(
        BORDER_INNER_INSET,
        BORDER_INNER_INSET,
        CANVAS_WIDTH - 2 * BORDER_INNER_INSET as u32,
        CANVAS_HEIGHT - 2 * BORDER_INNER_INSET as u32,
        BORDER_INNER_WIDTH,
        BORDER_INNER_COLOR,
    );

    for line in layout(data) {
        font::draw_text_centered(
            &mut canvas,
            &line.text,
            CENTER_X,
            line.baseline_y,
            line.size_px,
            line.color,
        );
    }

    canvas.fill_circle(SEAL_CENTER.0, SEAL_CENTER.1, SEAL_RADIUS, SEAL_COLOR);

    encode_png(&canvas)
}

fn encode_png(canvas: &Canvas) -> AppResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|err| AppError::RenderUnavailable(err.to_string()))?;
        writer
            .write_image_data(canvas.data())
            .map_err(|err| AppError::RenderUnavailable(err.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Tier;

    fn sample_data(percentage: u8) -> CertificateData {
        CertificateData {
            score: (percentage as usize) / 5,
            total_questions: 20,
            percentage,
            completion_date: "2026-08-30".to_string(),
            tier: Tier::Intermediate,
        }
    }

    #[test]
    fn message_brackets_match_percentages() {
        assert_eq!(score_message(95), "Privacy Master! Outstanding!");
        assert_eq!(score_message(90), "Privacy Master! Outstanding!");
        assert_eq!(score_message(80), "Excellent! You are Privacy Grounded!");
        assert_eq!(score_message(70), "Great job! You are Privacy Oriented!");
        assert_eq!(score_message(60), "Good effort! Room for Improvement!");
        assert_eq!(
            score_message(59),
            "Congratulations! You are Privacy Centered!"
        );
    }

    #[test]
    fn layout_lines_are_ordered_and_inside_the_canvas() {
        let lines = layout(&sample_data(85));

        assert_eq!(lines.len(), 10);
        for pair in lines.windows(2) {
            assert!(pair[0].baseline_y < pair[1].baseline_y);
        }
        for line in &lines {
            assert!(line.baseline_y < CANVAS_HEIGHT as i64);
        }
    }

    #[test]
    fn layout_embeds_score_and_tier() {
        let lines = layout(&sample_data(85));

        assert!(lines.iter().any(|l| l.text == "17/20"));
        assert!(lines.iter().any(|l| l.text == "(85%)"));
        assert!(lines.iter().any(|l| l.text == "Intermediate Level"));
        assert!(lines.iter().any(|l| l.text.contains("2026-08-30")));
    }

    #[test]
    fn render_produces_a_png_signature() {
        let bytes = render(&sample_data(85)).expect("render should succeed");

        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        assert!(bytes.len() > 1000);
    }
}

//! `rustybuzz`-backed shaper over caller-supplied font bytes.

use super::monospace::emit_monospace;
use super::{ShapedGlyph, Shaper, ShapingRun};

/// Shaper that runs real OpenType shaping through `rustybuzz`.
///
/// Owns the font bytes and builds a transient `Face` per shape call, so the
/// struct stays free of self-referential borrows. After `unload_fonts` it
/// degrades to monospace emission.
pub struct HarfBuzzShaper {
    font_data: Option<Vec<u8>>,
    features: Vec<rustybuzz::Feature>,
    font_size: f32,
    cell_width: f32,
}

impl HarfBuzzShaper {
    /// Create a shaper over raw font bytes.
    ///
    /// `font_size` and `cell_width` are in pixels; advances are converted
    /// through them into column spans. Returns `None` when the bytes do not
    /// parse as a font face.
    pub fn new(font_data: Vec<u8>, font_size: f32, cell_width: f32) -> Option<Self> {
        rustybuzz::Face::from_slice(&font_data, 0)?;
        Some(Self {
            font_data: Some(font_data),
            features: Vec::new(),
            font_size,
            cell_width,
        })
    }

    /// Set the OpenType features applied to every shape call.
    pub fn with_features(mut self, strings: &[String]) -> Self {
        self.features = parse_features(strings);
        self
    }
}

impl Shaper for HarfBuzzShaper {
    fn shape_run(&mut self, run: &ShapingRun, output: &mut Vec<ShapedGlyph>) {
        let face = self
            .font_data
            .as_deref()
            .and_then(|data| rustybuzz::Face::from_slice(data, 0));
        let Some(face) = face else {
            emit_monospace(run, output);
            return;
        };

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(&run.text);
        buffer.set_direction(rustybuzz::Direction::LeftToRight);

        let glyph_buffer = rustybuzz::shape(&face, &self.features, buffer);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        let scale = self.font_size / face.units_per_em() as f32;

        for (info, pos) in infos.iter().zip(positions.iter()) {
            let cluster = info.cluster as usize;
            // Cluster values are byte offsets into the run text.
            let col = run
                .byte_to_col
                .get(cluster)
                .copied()
                .unwrap_or(run.col_start);

            let advance = pos.x_advance as f32 * scale;
            let col_span = (advance / self.cell_width).round().max(1.0) as usize;

            output.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                col_start: col,
                col_span,
                x_offset: pos.x_offset as f32 * scale,
                y_offset: pos.y_offset as f32 * scale,
            });
        }
    }

    fn unload_fonts(&mut self) {
        self.font_data = None;
    }
}

/// Parse feature strings into rustybuzz features.
///
/// Each string is a 4-char OpenType tag, optionally prefixed with `-` to
/// disable. Examples: `"calt"` (enable), `"-dlig"` (disable). Malformed
/// tags are logged and skipped.
pub fn parse_features(strings: &[String]) -> Vec<rustybuzz::Feature> {
    strings
        .iter()
        .filter_map(|s| {
            let (tag_str, value) = match s.strip_prefix('-') {
                Some(rest) => (rest, 0),
                None => (s.as_str(), 1),
            };
            let Ok(bytes) = <[u8; 4]>::try_from(tag_str.as_bytes()) else {
                log::warn!("ignoring invalid font feature tag: {s}");
                return None;
            };
            let tag = rustybuzz::ttf_parser::Tag::from_bytes(&bytes);
            Some(rustybuzz::Feature::new(tag, value, ..))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{HarfBuzzShaper, parse_features};

    #[test]
    fn invalid_font_bytes_fail_construction() {
        assert!(HarfBuzzShaper::new(vec![0, 1, 2, 3], 14.0, 8.0).is_none());
        assert!(HarfBuzzShaper::new(Vec::new(), 14.0, 8.0).is_none());
    }

    #[test]
    fn parse_features_enable_and_disable() {
        let strings = vec!["calt".to_owned(), "-dlig".to_owned()];
        let features = parse_features(&strings);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].value, 1);
        assert_eq!(features[1].value, 0);
    }

    #[test]
    fn parse_features_skips_malformed_tags() {
        let strings = vec![
            "liga".to_owned(),
            "toolong".to_owned(),
            "ab".to_owned(),
            String::new(),
        ];
        assert_eq!(parse_features(&strings).len(), 1);
    }
}

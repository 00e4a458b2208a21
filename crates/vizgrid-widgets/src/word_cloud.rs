#![forbid(unsafe_code)]

//! Word cloud.

use vizgrid_core::color::sentiment_color;
use vizgrid_core::{PxPoint, PxRect};
use vizgrid_scene::{DrawCommand, Scene, TextAnchor};

const MIN_FONT_SIZE: f64 = 10.0;
const MAX_FONT_SIZE: f64 = 42.0;

/// One word with its weight and average sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub text: String,
    pub size: f64,
    pub average_sentiment: String,
}

impl CloudWord {
    pub fn new(text: impl Into<String>, size: f64, average_sentiment: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size,
            average_sentiment: average_sentiment.into(),
        }
    }
}

/// Word cloud laid out on a simple row grid, heaviest words first.
///
/// Words are font-scaled between the observed weight extremes; sentiment
/// picks the color. A spiral layout is deliberately not attempted: rows are
/// stable under resize, which matters more here than packing density.
#[derive(Debug, Clone)]
pub struct WordCloud<'a> {
    words: &'a [CloudWord],
}

impl<'a> WordCloud<'a> {
    pub fn new(words: &'a [CloudWord]) -> Self {
        Self { words }
    }

    fn font_size(&self, size: f64) -> f64 {
        let (min, max) = self.words.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), w| {
                if w.size.is_finite() {
                    (lo.min(w.size), hi.max(w.size))
                } else {
                    (lo, hi)
                }
            },
        );
        if !min.is_finite() || max <= min {
            return (MIN_FONT_SIZE + MAX_FONT_SIZE) / 2.0;
        }
        let size = if size.is_finite() { size.clamp(min, max) } else { min };
        MIN_FONT_SIZE + (size - min) / (max - min) * (MAX_FONT_SIZE - MIN_FONT_SIZE)
    }
}

impl crate::Widget for WordCloud<'_> {
    fn render(&self, area: PxRect, scene: &mut Scene) {
        if self.words.is_empty() || area.is_empty() {
            return;
        }

        let mut ordered: Vec<&CloudWord> = self.words.iter().collect();
        ordered.sort_by(|a, b| b.size.total_cmp(&a.size));

        let mut x = area.x;
        let mut y = area.y + MAX_FONT_SIZE;
        for word in ordered {
            let font_size = self.font_size(word.size);
            // Rough advance estimate; hosts with real text metrics re-wrap.
            let advance = font_size * 0.6 * word.text.chars().count() as f64 + 12.0;
            if x + advance > area.right() && x > area.x {
                x = area.x;
                y += MAX_FONT_SIZE;
            }
            if y > area.bottom() {
                break;
            }
            scene.push(DrawCommand::colored_text(
                PxPoint::new(x, y),
                word.text.clone(),
                TextAnchor::Start,
                font_size,
                sentiment_color(&word.average_sentiment.to_lowercase()),
            ));
            x += advance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Widget;

    fn words() -> Vec<CloudWord> {
        vec![
            CloudWord::new("refund", 30.0, "negative"),
            CloudWord::new("helpful", 80.0, "positive"),
            CloudWord::new("wait", 55.0, "neutral"),
        ]
    }

    #[test]
    fn heaviest_word_drawn_first_and_largest() {
        let words = words();
        let mut scene = Scene::new();
        WordCloud::new(&words).render(PxRect::from_size(600.0, 300.0), &mut scene);
        let sizes: Vec<(String, f64)> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    content, font_size, ..
                } => Some((content.clone(), *font_size)),
                _ => None,
            })
            .collect();
        assert_eq!(sizes[0].0, "helpful");
        assert_eq!(sizes[0].1, MAX_FONT_SIZE);
        assert_eq!(sizes[2].0, "refund");
        assert_eq!(sizes[2].1, MIN_FONT_SIZE);
    }

    #[test]
    fn uniform_weights_use_middle_size() {
        let words = vec![
            CloudWord::new("a", 5.0, "neutral"),
            CloudWord::new("b", 5.0, "neutral"),
        ];
        let mut scene = Scene::new();
        WordCloud::new(&words).render(PxRect::from_size(600.0, 300.0), &mut scene);
        for cmd in scene.commands() {
            if let DrawCommand::Text { font_size, .. } = cmd {
                assert_eq!(*font_size, (MIN_FONT_SIZE + MAX_FONT_SIZE) / 2.0);
            }
        }
    }
}

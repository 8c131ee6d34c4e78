use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use rust_embed::Embed;

use crate::ui::theme::Theme;

#[derive(Embed)]
#[folder = "assets/sprite/"]
struct SpriteAssets;

const SPRITE_FILE: &str = "paladin.txt";
const FRAME_SEPARATOR: &str = "---";
const FRAME_INTERVAL: Duration = Duration::from_millis(600);

/// The character art: a sequence of equally-sized text frames.
pub struct SpriteSheet {
    frames: Vec<Vec<String>>,
}

impl SpriteSheet {
    pub fn load() -> Self {
        let frames = SpriteAssets::get(SPRITE_FILE)
            .and_then(|file| String::from_utf8(file.data.into_owned()).ok())
            .map(|content| parse_frames(&content))
            .unwrap_or_default();
        Self { frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> &[String] {
        if self.frames.is_empty() {
            return &[];
        }
        &self.frames[index % self.frames.len()]
    }

    pub fn natural_size(&self) -> (u16, u16) {
        let height = self.frames.first().map(|f| f.len()).unwrap_or(0) as u16;
        let width = self
            .frames
            .iter()
            .flatten()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16;
        (width, height)
    }

    pub fn scaled_size(&self, scale: f64) -> (u16, u16) {
        let (w, h) = self.natural_size();
        (scale_len(w, scale), h)
    }
}

fn parse_frames(content: &str) -> Vec<Vec<String>> {
    content
        .split(FRAME_SEPARATOR)
        .map(|frame| {
            frame
                .lines()
                .skip_while(|l| l.trim().is_empty())
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
        })
        .filter(|lines: &Vec<String>| lines.iter().any(|l| !l.trim().is_empty()))
        .collect()
}

fn scale_len(len: u16, scale: f64) -> u16 {
    ((f64::from(len) * scale).round() as u16).max(1)
}

/// Horizontally resample a line to `scale` times its width. Vertical size is
/// left alone; cell aspect already doubles height visually.
pub fn scale_line(line: &str, scale: f64) -> String {
    if (scale - 1.0).abs() < f64::EPSILON {
        return line.to_string();
    }
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let target = usize::from(scale_len(chars.len() as u16, scale));
    (0..target)
        .map(|i| {
            let src = (i as f64 / scale) as usize;
            chars[src.min(chars.len() - 1)]
        })
        .collect()
}

/// Frame cycling on a fixed cadence, driven from the app tick.
pub struct SpriteAnimation {
    pub frame: usize,
    next_frame_at: Instant,
}

impl SpriteAnimation {
    pub fn new(now: Instant) -> Self {
        Self {
            frame: 0,
            next_frame_at: now + FRAME_INTERVAL,
        }
    }

    pub fn tick(&mut self, now: Instant, frame_count: usize) {
        if frame_count == 0 {
            return;
        }
        if now >= self.next_frame_at {
            self.frame = (self.frame + 1) % frame_count;
            self.next_frame_at = now + FRAME_INTERVAL;
        }
    }
}

pub struct SpriteView<'a> {
    sheet: &'a SpriteSheet,
    frame: usize,
    scale: f64,
    theme: &'a Theme,
}

impl<'a> SpriteView<'a> {
    pub fn new(sheet: &'a SpriteSheet, frame: usize, scale: f64, theme: &'a Theme) -> Self {
        Self {
            sheet,
            frame,
            scale,
            theme,
        }
    }
}

impl Widget for SpriteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(self.theme.colors.accent());
        for (row, line) in self.sheet.frame(self.frame).iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let scaled = scale_line(line, self.scale);
            let clipped: String = scaled.chars().take(area.width as usize).collect();
            buf.set_string(area.x, area.y + row as u16, &clipped, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sheet_has_two_frames_of_equal_height() {
        let sheet = SpriteSheet::load();
        assert_eq!(sheet.frame_count(), 2);
        let h0 = sheet.frame(0).len();
        let h1 = sheet.frame(1).len();
        assert_eq!(h0, h1);
        let (w, h) = sheet.natural_size();
        assert!(w > 0 && h > 0);
    }

    #[test]
    fn scale_line_identity_double_and_half() {
        assert_eq!(scale_line("abcd", 1.0), "abcd");
        assert_eq!(scale_line("ab", 2.0), "aabb");
        assert_eq!(scale_line("aabb", 0.5), "ab");
        assert_eq!(scale_line("", 2.0), "");
    }

    #[test]
    fn scaled_size_tracks_scale() {
        let sheet = SpriteSheet::load();
        let (w, h) = sheet.natural_size();
        let (w2, h2) = sheet.scaled_size(2.0);
        assert_eq!(w2, w * 2);
        assert_eq!(h2, h);
    }

    #[test]
    fn animation_cycles_frames() {
        let now = Instant::now();
        let mut anim = SpriteAnimation::new(now);
        assert_eq!(anim.frame, 0);

        anim.tick(now + FRAME_INTERVAL, 2);
        assert_eq!(anim.frame, 1);
        anim.tick(now + FRAME_INTERVAL * 2, 2);
        assert_eq!(anim.frame, 0);

        // No frames: stays put instead of dividing by zero
        anim.tick(now + FRAME_INTERVAL * 3, 0);
        assert_eq!(anim.frame, 0);
    }
}

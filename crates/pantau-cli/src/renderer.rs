//! Terminal output for the markdown produced by `pantau-core`.
//!
//! Prose goes through a termimad skin. Fenced blocks hold the timeline
//! grid, whose columns only line up when printed as-is, so they bypass the
//! skin and lose their fence lines.

use anyhow::Result;
use termimad::{crossterm::style::Color, Alignment, MadSkin};

const FENCE: &str = "```";

/// A run of output lines that share one rendering mode.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Markdown(Vec<&'a str>),
    Verbatim(Vec<&'a str>),
}

/// Split `markdown` at fence lines, dropping the fences.
fn segments(markdown: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        if line.trim_start().starts_with(FENCE) {
            let lines = std::mem::take(&mut current);
            if !lines.is_empty() {
                segments.push(if in_fence {
                    Segment::Verbatim(lines)
                } else {
                    Segment::Markdown(lines)
                });
            }
            in_fence = !in_fence;
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        segments.push(if in_fence {
            Segment::Verbatim(current)
        } else {
            Segment::Markdown(current)
        });
    }
    segments
}

/// Renders markdown either styled or exactly as given
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        for header in &mut skin.headers {
            header.align = Alignment::Left;
        }
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for segment in segments(markdown) {
            match segment {
                Segment::Markdown(lines) => self.skin.print_text(&lines.join("\n")),
                Segment::Verbatim(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_keep_grid_verbatim() {
        let markdown = "# Program\n\n```text\n  M1  M2\n ░░░ ███ \n```\n\n░ planning\n";

        assert_eq!(
            segments(markdown),
            vec![
                Segment::Markdown(vec!["# Program", ""]),
                Segment::Verbatim(vec!["  M1  M2", " ░░░ ███ "]),
                Segment::Markdown(vec!["", "░ planning"]),
            ]
        );
    }

    #[test]
    fn test_segments_without_fences() {
        assert_eq!(
            segments("## Status\n- Stages: 3\n"),
            vec![Segment::Markdown(vec!["## Status", "- Stages: 3"])]
        );
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_unclosed_fence_stays_verbatim() {
        assert_eq!(
            segments("```text\n a  b\n"),
            vec![Segment::Verbatim(vec![" a  b"])]
        );
    }

    #[test]
    fn test_skin_headers_are_blue_and_left_aligned() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
        for header in &renderer.skin.headers {
            assert_eq!(header.align, Alignment::Left);
            assert_eq!(
                header.compound_style.object_style.foreground_color,
                Some(Color::Blue)
            );
        }
        assert!(!TerminalRenderer::new(false).rich_enabled);
    }
}

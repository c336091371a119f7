//! Terminal output helpers: the welcome banner and sanitising of server-supplied text
//!
//! Message text comes straight from the API and is echoed in progress lines, so it passes
//! through [`sanitize_for_terminal`] first. Escape sequences in a chat message could
//! otherwise clear the screen, retitle the window, or hide earlier output.

const DEFAULT_WIDTH: usize = 80;
const MIN_WIDTH: usize = 40;

/// Removes ANSI CSI/OSC escape sequences and control characters
///
/// Tab and newline are kept. A bare carriage return is dropped so a message cannot
/// overwrite the timestamp prefix of its own progress line.
///
/// # Examples
///
/// ```
/// use b4nd_archiver::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mRed\x1b[0m"), "Red");
/// assert_eq!(sanitize_for_terminal("\x1b]0;title\x07text"), "text");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek() {
                // CSI: ESC [ params final-letter
                Some('[') => {
                    chars.next();
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... terminated by BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next_ch) = chars.next() {
                        if next_ch == '\x07' {
                            break;
                        }
                        if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Current terminal width in columns, or 80 when stdout is not a terminal
pub fn terminal_width() -> usize {
    crossterm::terminal::size().map(|(cols, _)| cols as usize).unwrap_or(DEFAULT_WIDTH)
}

/// Renders the boxed welcome banner at the given width
pub fn render_banner(width: usize, lines: &[&str]) -> String {
    let width = width.max(MIN_WIDTH);
    let inner = width - 2;

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(inner)));
    out.push_str(&format!("│{}│\n", " ".repeat(inner)));
    for line in lines {
        out.push_str(&centered(line, inner));
        out.push('\n');
    }
    out.push_str(&format!("│{}│\n", " ".repeat(inner)));
    out.push_str(&format!("└{}┘", "─".repeat(inner)));
    out
}

fn centered(text: &str, inner: usize) -> String {
    let len = text.chars().count().min(inner);
    let text: String = text.chars().take(len).collect();
    let left = (inner - len) / 2;
    let right = inner - len - left;
    format!("│{}{}{}│", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_color_codes() {
        let text = "\x1b[31mRed text\x1b[0m normal";
        assert_eq!(sanitize_for_terminal(text), "Red text normal");
    }

    #[test]
    fn test_sanitize_cursor_movement() {
        let text = "\x1b[2J\x1b[H Cleared screen";
        assert_eq!(sanitize_for_terminal(text), " Cleared screen");
    }

    #[test]
    fn test_sanitize_osc_title() {
        assert_eq!(sanitize_for_terminal("a\x1b]2;pwned\x1b\\b"), "ab");
        assert_eq!(sanitize_for_terminal("a\x1b]2;pwned\x07b"), "ab");
    }

    #[test]
    fn test_sanitize_keeps_newlines_drops_carriage_return() {
        let text = "Line 1\nLine 2\rLine 3\tTabbed";
        assert_eq!(sanitize_for_terminal(text), "Line 1\nLine 2Line 3\tTabbed");
    }

    #[test]
    fn test_sanitize_unicode() {
        let text = "おはよう 👋 \x1b[31m世界\x1b[0m";
        assert_eq!(sanitize_for_terminal(text), "おはよう 👋 世界");
    }

    #[test]
    fn test_sanitize_bell_and_backspace() {
        assert_eq!(sanitize_for_terminal("Alert!\x07 Test\x08"), "Alert! Test");
    }

    #[test]
    fn test_banner_width_and_centering() {
        let banner = render_banner(40, &["Version 1.4.0"]);
        let lines: Vec<&str> = banner.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 40));
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[4].starts_with('└') && lines[4].ends_with('┘'));
        assert_eq!(lines[2], format!("│{}Version 1.4.0{}│", " ".repeat(12), " ".repeat(13)));
    }

    #[test]
    fn test_banner_clamps_narrow_terminal() {
        let banner = render_banner(10, &["x"]);
        assert!(banner.lines().all(|l| l.chars().count() == MIN_WIDTH));
    }

    #[test]
    fn test_banner_truncates_long_line() {
        let long = "y".repeat(100);
        let banner = render_banner(40, &[&long]);
        assert!(banner.lines().all(|l| l.chars().count() == 40));
    }
}

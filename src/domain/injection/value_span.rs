//! Bounds the literal that follows a `"key": ` prefix.
//!
//! Only enough of the script's lexical structure is understood to find the
//! comma that terminates an entry: quoted strings, bracket nesting and line
//! comments. Commas inside a string or a nested array/object belong to the
//! value.

/// Return the byte offset (into `text`) of the comma terminating the value that
/// starts at `start`.
///
/// Returns `None` when no comma-terminated value exists there: the value is
/// empty, a newline or `//` comment is reached at the top level, a closing
/// bracket is unbalanced, or the text ends.
pub fn value_end(text: &str, start: usize) -> Option<usize> {
    let rest = text.get(start..)?;
    let mut chars = rest.char_indices().peekable();
    let mut depth = 0usize;

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\'' | '"' | '`' => {
                skip_string(&mut chars, ch)?;
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                if depth == 0 {
                    return None;
                }
                skip_line(&mut chars);
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                skip_block_comment(&mut chars)?;
            }
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => {
                depth = depth.checked_sub(1)?;
            }
            '\n' if depth == 0 => return None,
            ',' if depth == 0 => {
                if rest[..offset].trim().is_empty() {
                    return None;
                }
                return Some(start + offset);
            }
            _ => {}
        }
    }

    None
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn skip_string(chars: &mut Chars<'_>, quote: char) -> Option<()> {
    let mut escaped = false;
    for (_, ch) in chars.by_ref() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Some(());
        } else if ch == '\n' && quote != '`' {
            return None;
        }
    }
    None
}

fn skip_line(chars: &mut Chars<'_>) {
    for (_, ch) in chars.by_ref() {
        if ch == '\n' {
            break;
        }
    }
}

fn skip_block_comment(chars: &mut Chars<'_>) -> Option<()> {
    while let Some((_, ch)) = chars.next() {
        if ch == '*' && matches!(chars.peek(), Some((_, '/'))) {
            chars.next();
            return Some(());
        }
    }
    None
}

//! Bracket balance checking for `()`, `[]` and `{}`.

fn opener_for(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn is_opener(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Byte offset of the first bracket that breaks nesting.
///
/// A closer with no matching opener reports its own offset; unclosed openers
/// report `input.len()`. Non-bracket characters are ignored.
pub fn first_mismatch(input: &str) -> Option<usize> {
    let mut stack = Vec::new();
    for (offset, c) in input.char_indices() {
        if is_opener(c) {
            stack.push(c);
            continue;
        }
        let Some(expected) = opener_for(c) else {
            continue;
        };
        if stack.last() == Some(&expected) {
            stack.pop();
        } else {
            return Some(offset);
        }
    }
    if stack.is_empty() {
        None
    } else {
        Some(input.len())
    }
}

/// True if every bracket in `input` is closed in the right order.
pub fn is_balanced(input: &str) -> bool {
    first_mismatch(input).is_none()
}

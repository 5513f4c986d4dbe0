//! Greeting template rendering.

use crate::errors::{GreetingError, GreetingResult};

/// Renders a greeting template with the given name.
///
/// The template language is the subset of Python's `str.format` the original
/// utility exposes: `{name}` substitutes the runtime name (any number of
/// occurrences, including none), and `{{` / `}}` escape literal braces.
/// A template without any placeholder passes through unchanged.
///
/// # Errors
///
/// * `UnknownPlaceholder` if the template names any field other than `name`.
/// * `UnbalancedBrace` if a `{` is never closed or a `}` is never opened.
pub fn render(template: &str, name: &str) -> GreetingResult<String> {
    let mut out = String::with_capacity(template.len() + name.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => field.push(ch),
                        None => return Err(GreetingError::UnbalancedBrace('{')),
                    }
                }
                if field == "name" {
                    out.push_str(name);
                } else {
                    return Err(GreetingError::UnknownPlaceholder(field));
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(GreetingError::UnbalancedBrace('}'));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

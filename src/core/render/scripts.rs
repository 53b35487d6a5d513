//! Superscripts and subscripts
//!
//! `^` or `_` followed by a single digit or a balanced `{...}` group. Anything
//! else after the marker (a letter, a space) is left as it is, which keeps
//! identifiers like `snake_case` intact.

use super::utils::extract_balanced;

/// Convert `^2`, `^{...}`, `_1` and `_{...}` into `<sup>`/`<sub>` elements.
pub fn convert_scripts(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let tag = match bytes[i] {
            b'^' => "sup",
            b'_' => "sub",
            _ => {
                i += 1;
                continue;
            }
        };

        let arg_start = i + 1;
        let script = match bytes.get(arg_start).copied() {
            Some(b) if b.is_ascii_digit() => {
                Some((&input[arg_start..arg_start + 1], arg_start + 1))
            }
            Some(b'{') => extract_balanced(input, arg_start, b'{', b'}'),
            _ => None,
        };

        match script {
            Some((content, end)) => {
                out.push_str(&input[copied..i]);
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&convert_scripts(content));
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                i = end;
                copied = end;
            }
            None => i += 1,
        }
    }

    out.push_str(&input[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_scripts() {
        assert_eq!(convert_scripts("mc^2"), "mc<sup>2</sup>");
        assert_eq!(convert_scripts("x_1"), "x<sub>1</sub>");
        assert_eq!(convert_scripts("x^23"), "x<sup>2</sup>3");
    }

    #[test]
    fn test_group_scripts() {
        assert_eq!(convert_scripts("e^{i π}"), "e<sup>i π</sup>");
        assert_eq!(convert_scripts("a_{n+1}^{2}"), "a<sub>n+1</sub><sup>2</sup>");
    }

    #[test]
    fn test_nested_scripts() {
        assert_eq!(convert_scripts("e^{x^2}"), "e<sup>x<sup>2</sup></sup>");
    }

    #[test]
    fn test_letters_and_unbalanced_left_alone() {
        assert_eq!(convert_scripts("snake_case"), "snake_case");
        assert_eq!(convert_scripts("x^{2"), "x^{2");
        assert_eq!(convert_scripts("trailing^"), "trailing^");
    }
}

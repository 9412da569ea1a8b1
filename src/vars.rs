//! Variable substitution.
//!
//! Substitution is textual pre-processing: each binding is replaced by its
//! value's canonical decimal text before the expression reaches the lexer.
//! Bindings apply one at a time, in caller-supplied order. Names that are
//! substrings of other names (or of operator characters) are the caller's
//! problem - order the bindings so the longer name replaces first.

use crate::display::format_number;

/// Replace every occurrence of each variable with its numeric text.
pub fn substitute(expression: &str, vars: &[(&str, f64)]) -> String {
    let mut text = expression.to_string();
    for (name, value) in vars {
        text = text.replace(name, &format_number(*value));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_single_variable() {
        assert_eq!(substitute("x+1", &[("x", 3.0)]), "3+1");
    }

    #[test]
    fn substitute_every_occurrence() {
        assert_eq!(substitute("x+x", &[("x", 3.0)]), "3+3");
    }

    #[test]
    fn substitute_uses_canonical_number_text() {
        // Integral values drop the trailing .0
        assert_eq!(substitute("x*2", &[("x", 10.0)]), "10*2");
        assert_eq!(substitute("x*2", &[("x", 2.5)]), "2.5*2");
        assert_eq!(substitute("x*2", &[("x", -4.0)]), "-4*2");
    }

    #[test]
    fn substitute_in_caller_order() {
        // The first binding wins on overlapping names
        assert_eq!(substitute("ab", &[("ab", 12.0), ("a", 3.0)]), "12");
        assert_eq!(substitute("ab", &[("a", 3.0), ("ab", 12.0)]), "3b");
    }

    #[test]
    fn substitute_without_bindings() {
        assert_eq!(substitute("2+3", &[]), "2+3");
    }
}

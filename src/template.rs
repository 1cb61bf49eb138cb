//! Literal-token template substitution.
//!
//! This is not a templating engine. Placeholders like `{{big_image}}` are
//! replaced as literal strings; anything the caller doesn't supply a value
//! for stays in the output verbatim. Tokens are disjoint (none is a prefix
//! of another's replacement site), so the replacement order among distinct
//! tokens cannot change the result.

/// Replace each `(token, value)` pair in `template`, in order.
///
/// Every occurrence of a token is replaced. Unknown tokens in the template
/// are left untouched.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in replacements {
        out = out.replace(token, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_single_token() {
        let out = substitute("<p>{{name}}</p>", &[("{{name}}", "dawn")]);
        assert_eq!(out, "<p>dawn</p>");
    }

    #[test]
    fn replaces_all_occurrences() {
        let out = substitute(
            "{{cls}} and {{cls}} again",
            &[("{{cls}}", "gallery-item")],
        );
        assert_eq!(out, "gallery-item and gallery-item again");
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let out = substitute("{{known}} {{unknown}}", &[("{{known}}", "x")]);
        assert_eq!(out, "x {{unknown}}");
    }

    #[test]
    fn empty_template_stays_empty() {
        assert_eq!(substitute("", &[("{{a}}", "b")]), "");
    }

    #[test]
    fn no_replacements_is_identity() {
        assert_eq!(substitute("as-is {{t}}", &[]), "as-is {{t}}");
    }
}

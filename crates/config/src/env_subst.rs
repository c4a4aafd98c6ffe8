/// Replace `${ENV_VAR}` placeholders in config text.
///
/// Placeholders that name an unset variable are left untouched, so a
/// later reader can tell what was expected.
pub fn substitute_env(input: &str) -> String {
    substitute_env_with(input, |name| std::env::var(name).ok())
}

/// Placeholder substitution with an injected lookup, so tests never have
/// to mutate the process environment.
fn substitute_env_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find('}') {
            Some(end) if end > 0 => {
                let name = &after_open[..end];
                match lookup(name) {
                    Some(val) => out.push_str(&val),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    },
                }
                rest = &after_open[end + 1..];
            },
            _ => {
                // Unclosed or empty placeholder: emit literally.
                out.push_str("${");
                rest = after_open;
            },
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_var() {
        let lookup = |name: &str| (name == "TERN_TEST_TOKEN").then(|| "s3cret".to_string());
        assert_eq!(
            substitute_env_with("token = \"${TERN_TEST_TOKEN}\"", lookup),
            "token = \"s3cret\""
        );
    }

    #[test]
    fn leaves_unknown_var_as_placeholder() {
        let lookup = |_: &str| None;
        assert_eq!(
            substitute_env_with("${TERN_NOT_SET_ANYWHERE}", lookup),
            "${TERN_NOT_SET_ANYWHERE}"
        );
    }

    #[test]
    fn handles_multiple_placeholders() {
        let lookup = |name: &str| match name {
            "A" => Some("1".to_string()),
            "B" => Some("2".to_string()),
            _ => None,
        };
        assert_eq!(substitute_env_with("${A}-${MISSING}-${B}", lookup), "1-${MISSING}-2");
    }

    #[test]
    fn unclosed_placeholder_is_literal() {
        let lookup = |_: &str| Some("nope".to_string());
        assert_eq!(substitute_env_with("oops ${TRUNCATED", lookup), "oops ${TRUNCATED");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(substitute_env("no placeholders here"), "no placeholders here");
    }
}

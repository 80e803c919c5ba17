//! `%VAR%` expansion with Windows semantics

/// Expands `%NAME%` references in `template`.
///
/// `%%` collapses to a single `%`, an unterminated `%` is kept as written and
/// references `lookup` cannot resolve are left verbatim.
pub fn expand_windows_vars<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(tail) = after.strip_prefix('%') {
            out.push('%');
            rest = tail;
            continue;
        }

        match after.find('%') {
            Some(end) => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('%');
                        out.push_str(name);
                        out.push('%');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                out.push_str(after);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Option<String> {
        (name.eq_ignore_ascii_case("userprofile")).then(|| r"C:\Users\ada".to_string())
    }

    #[test]
    fn test_expands_known_variable() {
        assert_eq!(
            expand_windows_vars(r"%userprofile%\AppData", profile),
            r"C:\Users\ada\AppData"
        );
    }

    #[test]
    fn test_unknown_variable_left_verbatim() {
        assert_eq!(expand_windows_vars(r"%NOPE%\x", profile), r"%NOPE%\x");
    }

    #[test]
    fn test_double_percent_and_unterminated() {
        assert_eq!(expand_windows_vars("100%% sure", profile), "100% sure");
        assert_eq!(expand_windows_vars("50% off", profile), "50% off");
    }

    #[test]
    fn test_no_references() {
        assert_eq!(expand_windows_vars("plain", profile), "plain");
    }
}

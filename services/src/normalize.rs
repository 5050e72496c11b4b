/// Which canonical form [`normalize`] should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Matricula,
}

/// Canonicalizes a text field. Pure and idempotent: normalizing an already
/// normalized value returns it unchanged.
///
/// * `Matricula`: surrounding whitespace trimmed, remainder uppercased.
/// * `Name`: whitespace runs collapsed to single spaces, every word
///   title-cased.
pub fn normalize(value: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::Matricula => value.trim().to_uppercase(),
        FieldKind::Name => value
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_collapsed_and_title_cased() {
        assert_eq!(normalize(" ana  silva ", FieldKind::Name), "Ana Silva");
        assert_eq!(normalize("ANA SILVA", FieldKind::Name), "Ana Silva");
        assert_eq!(normalize("joão\tda silva", FieldKind::Name), "João Da Silva");
    }

    #[test]
    fn matricula_is_trimmed_and_uppercased() {
        assert_eq!(normalize(" 20231bsi012 ", FieldKind::Matricula), "20231BSI012");
        assert_eq!(normalize("20231BSI012", FieldKind::Matricula), "20231BSI012");
    }

    #[test]
    fn normalize_is_idempotent() {
        for (value, kind) in [
            (" ana  silva ", FieldKind::Name),
            ("JOÃO DA SILVA", FieldKind::Name),
            (" 20231bsi012 ", FieldKind::Matricula),
            ("", FieldKind::Name),
            ("   ", FieldKind::Matricula),
        ] {
            let once = normalize(value, kind);
            assert_eq!(normalize(&once, kind), once);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("", FieldKind::Name), "");
        assert_eq!(normalize("   ", FieldKind::Name), "");
        assert_eq!(normalize("", FieldKind::Matricula), "");
    }
}

//! Singular case forms for nouns and proper names.
//!
//! Only the regular first, second and third declension endings are covered.
//! Irregular words belong in an explicit lexicon entry.

const HUSHING: [char; 5] = ['ж', 'ш', 'щ', 'ч', 'ц'];
const VELAR: [char; 3] = ['г', 'к', 'х'];

/// Returns the lemma followed by its singular case forms, lowercased and
/// without duplicates.
#[must_use]
pub fn noun_forms(lemma: &str) -> Vec<String> {
    let lemma = lemma.to_lowercase();
    let endings = endings_for(&lemma);
    let stem = lemma
        .strip_suffix(endings.0)
        .unwrap_or(lemma.as_str())
        .to_string();

    let mut forms = vec![lemma.clone()];
    for ending in endings.1 {
        let form = format!("{stem}{ending}");
        if !forms.contains(&form) {
            forms.push(form);
        }
    }
    forms
}

/// Returns the lemma ending to strip and the endings to append to the stem.
fn endings_for(lemma: &str) -> (&'static str, &'static [&'static str]) {
    let mut chars = lemma.chars().rev();
    let last = chars.next();
    let before = chars.next();

    match (last, before) {
        // Россия, Мария
        (Some('я'), Some('и')) => ("я", &["я", "и", "ю", "ей", "ею"]),
        (Some('я'), _) => ("я", &["я", "и", "е", "ю", "ей", "ею"]),
        (Some('а'), Some(c)) if VELAR.contains(&c) || HUSHING.contains(&c) => {
            ("а", &["а", "и", "е", "у", "ой", "ей"])
        }
        (Some('а'), _) => ("а", &["а", "ы", "е", "у", "ой", "ою"]),
        // Казань (fem) and Игорь (masc) share a table
        (Some('ь'), _) => ("ь", &["ь", "и", "ью", "я", "ю", "ем", "е"]),
        (Some('й'), _) => ("й", &["й", "я", "ю", "ем", "е"]),
        // Сочи, Токио, Гёте
        (Some('о' | 'е' | 'и' | 'у' | 'ю' | 'ы' | 'э'), _) => ("", &[]),
        (Some(c), _) if HUSHING.contains(&c) => ("", &["а", "у", "ем", "ом", "е"]),
        (Some(c), _) if is_cyrillic(c) => ("", &["а", "у", "ом", "е"]),
        _ => ("", &[]),
    }
}

const fn is_cyrillic(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declension() {
        let forms = noun_forms("Москва");
        assert_eq!(forms[0], "москва");
        assert!(forms.contains(&"москве".to_string()));
        assert!(forms.contains(&"москвы".to_string()));
        assert!(forms.contains(&"москвой".to_string()));
    }

    #[test]
    fn velar_stem_takes_i() {
        let forms = noun_forms("Ольга");
        assert!(forms.contains(&"ольги".to_string()));
        assert!(!forms.contains(&"ольгы".to_string()));
    }

    #[test]
    fn second_declension() {
        let forms = noun_forms("Иван");
        assert_eq!(forms, vec!["иван", "ивана", "ивану", "иваном", "иване"]);
    }

    #[test]
    fn soft_stems() {
        assert!(noun_forms("Сергей").contains(&"сергея".to_string()));
        assert!(noun_forms("Казань").contains(&"казани".to_string()));
        assert!(noun_forms("май").contains(&"мая".to_string()));
        assert!(noun_forms("Россия").contains(&"россии".to_string()));
    }

    #[test]
    fn indeclinable() {
        assert_eq!(noun_forms("Сочи"), vec!["сочи"]);
        assert_eq!(noun_forms("Токио"), vec!["токио"]);
    }
}

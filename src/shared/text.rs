/// Lowercases and strips the Spanish diacritics so "Peaje Túnel" and
/// "peaje tunel" compare equal.
pub(crate) fn normalize(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[test]
fn normalize_plain() {
    assert_eq!(normalize("Peaje"), "peaje");
}

#[test]
fn normalize_accents() {
    assert_eq!(normalize("Túnel de Occidente"), "tunel de occidente");
}

#[test]
fn normalize_enie() {
    assert_eq!(normalize("PEÑALISA"), "penalisa");
}

#[test]
fn normalize_empty() {
    assert_eq!(normalize(""), "");
}

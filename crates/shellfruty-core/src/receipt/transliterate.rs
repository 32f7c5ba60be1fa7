//! ASCII folding for the printer's 8-bit code page.
//!
//! The thermal printer renders CP437, not UTF-8. Accented vowels, `ñ`,
//! inverted punctuation and typographic quotes are folded to their closest
//! 7-bit equivalent before they reach the ticket.

/// What to do with characters the table does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCharPolicy {
    /// Leave them as they are.
    #[default]
    PassThrough,
    /// Replace every remaining non-ASCII character with this one.
    Replace(char),
}

/// ASCII replacement for `c`, if the table covers it.
pub fn ascii_equivalent(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'A',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        '¡' => '!',
        '¿' => '?',
        '°' => '#',
        '«' | '»' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' => '"',
        '\u{2013}' | '\u{2014}' => '-',
        _ => return None,
    };
    Some(folded)
}

/// Folds the characters in the table; everything else passes through.
///
/// ```rust
/// use shellfruty_core::receipt::transliterate;
///
/// assert_eq!(transliterate("Limón ñoño ¡Olé!"), "Limon nono !Ole!");
/// ```
pub fn transliterate(text: &str) -> String {
    transliterate_with(text, UnknownCharPolicy::PassThrough)
}

/// Like [`transliterate`], applying `policy` to characters outside the table.
pub fn transliterate_with(text: &str, policy: UnknownCharPolicy) -> String {
    text.chars()
        .map(|c| match ascii_equivalent(c) {
            Some(folded) => folded,
            None => match policy {
                UnknownCharPolicy::Replace(replacement) if !c.is_ascii() => replacement,
                _ => c,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_sample() {
        let folded = transliterate("Limón ñoño ¡Olé!");
        assert_eq!(folded, "Limon nono !Ole!");
        assert!(folded.is_ascii());
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(transliterate("ÁÉÍÓÚ áéíóú Ñ"), "AEIOU aeiou N");
        assert_eq!(transliterate("PIÑA Ü ã õ"), "PINA U a o");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(transliterate("¿Qué?"), "?Que?");
        assert_eq!(transliterate("Nº 5 a 4°C"), "Nº 5 a 4#C");
        assert_eq!(transliterate("«hola» “x” ‘y’"), "\"hola\" \"x\" \"y\"");
        assert_eq!(transliterate("fresa – mango — kiwi"), "fresa - mango - kiwi");
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(transliterate("Açaí 🍓"), "Açai 🍓");
    }

    #[test]
    fn test_replace_policy() {
        let folded = transliterate_with("Açaí 🍓", UnknownCharPolicy::Replace('?'));
        assert_eq!(folded, "A?ai ?");
        assert!(folded.is_ascii());
    }

    #[test]
    fn test_plain_ascii_untouched() {
        let text = "Jugo de Naranja 500ml x2 (sin azucar)";
        assert_eq!(transliterate(text), text);
    }
}

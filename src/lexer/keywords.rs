//! The bilingual keyword table. Every keyword exists in a Greek and an
//! English spelling and both resolve to the same token kind; lookup is
//! case- and accent-insensitive and folds hyphens to underscores so the
//! `END-IF` spelling matches.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::TokenKind;
use crate::util::keyword_canonical;

macro_rules! keyword {
    ($map:ident, $kind:ident, $($spelling:expr),+) => {
        $( $map.insert($spelling, TokenKind::$kind); )+
    };
}

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();

    keyword!(m, Algorithm, "ALGORITHM", "ΑΛΓΟΡΙΘΜΟΣ");
    keyword!(m, Constants, "CONSTANTS", "ΣΤΑΘΕΡΕΣ");
    keyword!(m, Data, "DATA", "ΔΕΔΟΜΕΝΑ");
    keyword!(m, Begin, "BEGIN", "ΑΡΧΗ");
    keyword!(m, End, "END", "ΤΕΛΟΣ");
    keyword!(m, Procedure, "PROCEDURE", "ΔΙΑΔΙΚΑΣΙΑ");
    keyword!(m, Function, "FUNCTION", "ΣΥΝΑΡΤΗΣΗ");
    keyword!(m, Interface, "INTERFACE", "ΔΙΕΠΑΦΗ");
    keyword!(m, Input, "INPUT", "ΕΙΣΟΔΟΣ");
    keyword!(m, Output, "OUTPUT", "ΕΞΟΔΟΣ");
    keyword!(m, EndFunction, "END_FUNCTION", "ΤΕΛΟΣ_ΣΥΝΑΡΤΗΣΗΣ");
    keyword!(m, EndProcedure, "END_PROCEDURE", "ΤΕΛΟΣ_ΔΙΑΔΙΚΑΣΙΑΣ");
    keyword!(m, If, "IF", "ΑΝ");
    keyword!(m, Then, "THEN", "ΤΟΤΕ");
    keyword!(m, Else, "ELSE", "ΑΛΛΙΩΣ");
    keyword!(m, EndIf, "END_IF", "ΤΕΛΟΣ_ΑΝ");
    keyword!(m, For, "FOR", "ΓΙΑ");
    keyword!(m, To, "TO", "ΕΩΣ");
    keyword!(m, Step, "STEP", "ΒΗΜΑ", "ΜΕ_ΒΗΜΑ");
    keyword!(m, Repeat, "REPEAT", "ΕΠΑΝΑΛΑΒΕ");
    // The single Greek terminator closes both loop forms; the parser
    // accepts END_FOR and END_WHILE interchangeably.
    keyword!(m, EndFor, "END_FOR", "ΤΕΛΟΣ_ΕΠΑΝΑΛΗΨΗΣ");
    keyword!(m, While, "WHILE", "ΟΣΟ");
    keyword!(m, EndWhile, "END_WHILE");
    keyword!(m, Until, "UNTIL", "ΜΕΧΡΙΣ_ΟΤΟΥ");
    keyword!(m, Print, "PRINT", "ΓΡΑΨΕ", "ΕΜΦΑΝΙΣΕ");
    keyword!(m, Read, "READ", "ΔΙΑΒΑΣΕ");
    keyword!(m, Calculate, "CALCULATE", "ΥΠΟΛΟΓΙΣΕ", "ΚΑΛΕΣΕ");
    keyword!(m, IntegerType, "INTEGER", "ΑΚΕΡΑΙΟΣ", "ΑΚΕΡΑΙΕΣ", "ΑΚΕΡΑΙΟΙ");
    keyword!(m, RealType, "REAL", "ΠΡΑΓΜΑΤΙΚΟΣ", "ΠΡΑΓΜΑΤΙΚΕΣ", "ΠΡΑΓΜΑΤΙΚΟΙ");
    keyword!(m, BooleanType, "BOOLEAN", "ΛΟΓΙΚΟΣ", "ΛΟΓΙΚΕΣ", "ΛΟΓΙΚΟΙ");
    keyword!(m, CharType, "CHAR", "CHARACTER", "ΧΑΡΑΚΤΗΡΑΣ", "ΧΑΡΑΚΤΗΡΕΣ");
    keyword!(m, StringType, "STRING", "ΣΥΜΒΟΛΟΣΕΙΡΑ", "ΣΥΜΒΟΛΟΣΕΙΡΕΣ");
    keyword!(m, Array, "ARRAY", "ΠΙΝΑΚΑΣ");
    keyword!(m, Of, "OF", "ΑΠΟ");
    keyword!(m, And, "AND", "ΚΑΙ");
    keyword!(m, Or, "OR", "Η");
    keyword!(m, Not, "NOT", "ΟΧΙ");
    keyword!(m, Div, "DIV");
    keyword!(m, Mod, "MOD");
    keyword!(m, BooleanLiteral, "TRUE", "FALSE", "ΑΛΗΘΗΣ", "ΑΛΗΘΕΣ", "ΨΕΥΔΗΣ", "ΨΕΥΔΕΣ");

    m
});

/// Canonical spellings of the true-valued boolean literals. Everything
/// else that lexes as a boolean literal is false.
pub const TRUE_SPELLINGS: [&str; 3] = ["TRUE", "ΑΛΗΘΗΣ", "ΑΛΗΘΕΣ"];

/// Look a word up in the keyword table; `None` means identifier.
pub fn lookup(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(keyword_canonical(word).as_str()).copied()
}

/// Whether a boolean-literal lexeme spells the true value.
pub fn is_true_literal(word: &str) -> bool {
    TRUE_SPELLINGS.contains(&keyword_canonical(word).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_spellings_resolve() {
        assert_eq!(lookup("ALGORITHM"), Some(TokenKind::Algorithm));
        assert_eq!(lookup("ΑΛΓΟΡΙΘΜΟΣ"), Some(TokenKind::Algorithm));
        assert_eq!(lookup("Αλγόριθμος"), Some(TokenKind::Algorithm));
    }

    #[test]
    fn test_hyphenated_compound_keywords() {
        assert_eq!(lookup("END-IF"), Some(TokenKind::EndIf));
        assert_eq!(lookup("end_if"), Some(TokenKind::EndIf));
        assert_eq!(lookup("ΤΕΛΟΣ-ΑΝ"), Some(TokenKind::EndIf));
    }

    #[test]
    fn test_unknown_word_is_identifier() {
        assert_eq!(lookup("counter"), None);
        assert_eq!(lookup("ΜΕΤΡΗΤΗΣ"), None);
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(lookup("true"), Some(TokenKind::BooleanLiteral));
        assert_eq!(lookup("ΨΕΥΔΗΣ"), Some(TokenKind::BooleanLiteral));
        assert!(is_true_literal("Αληθής"));
        assert!(!is_true_literal("ψευδής"));
    }
}

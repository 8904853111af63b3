//! Helpers shared by the evaluator and the transpiler: identifier
//! canonicalization and constant folding for array bounds.

use std::collections::HashMap;

use crate::parser::ast::{BinaryVerb, Expression, LiteralValue, UnaryVerb};

/// Canonical form of an identifier: upper-cased with Greek diacritics
/// stripped. Environment inserts and lookups both go through this, which
/// is what makes the language case-insensitive.
pub fn canonical(name: &str) -> String {
    name.chars()
        .flat_map(char::to_uppercase)
        .map(strip_accent)
        .collect()
}

/// Canonical form used for keyword lookup only: like [`canonical`], but
/// embedded hyphens fold to underscores so `END-IF` matches `END_IF`.
pub fn keyword_canonical(name: &str) -> String {
    canonical(name).replace('-', "_")
}

fn strip_accent(c: char) -> char {
    match c {
        'Ά' => 'Α',
        'Έ' => 'Ε',
        'Ή' => 'Η',
        'Ί' | 'Ϊ' => 'Ι',
        'Ό' => 'Ο',
        'Ύ' | 'Ϋ' => 'Υ',
        'Ώ' => 'Ω',
        other => other,
    }
}

/// Fold an array-bound expression against a constants-only table.
///
/// Declared bounds use only integer literals and named constants, so
/// literals, constant references, unary minus, and integer arithmetic are
/// all a bound is allowed to contain. Returns `None` for anything else.
pub fn fold_bound(expr: &Expression, constants: &HashMap<String, i64>) -> Option<i64> {
    match expr {
        Expression::Literal(literal) => match literal.value {
            LiteralValue::Int(value) => Some(value),
            LiteralValue::Real(value) => Some(value as i64),
            _ => None,
        },
        Expression::Ident(ident) => constants.get(&canonical(&ident.name)).copied(),
        Expression::Unary(unary) => {
            let operand = fold_bound(&unary.operand, constants)?;
            match unary.verb {
                UnaryVerb::Neg => Some(-operand),
                UnaryVerb::Not => None,
            }
        }
        Expression::Binary(binary) => {
            let lhs = fold_bound(&binary.lhs, constants)?;
            let rhs = fold_bound(&binary.rhs, constants)?;
            match binary.verb {
                BinaryVerb::Add => Some(lhs + rhs),
                BinaryVerb::Sub => Some(lhs - rhs),
                BinaryVerb::Mul => Some(lhs * rhs),
                BinaryVerb::IntDiv if rhs != 0 => Some(lhs / rhs),
                BinaryVerb::Mod if rhs != 0 => Some(lhs % rhs),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_folds_case_and_accents() {
        assert_eq!(canonical("Αλγόριθμος"), "ΑΛΓΟΡΙΘΜΟΣ");
        assert_eq!(canonical("τέλος_αν"), "ΤΕΛΟΣ_ΑΝ");
        assert_eq!(canonical("counter"), "COUNTER");
    }

    #[test]
    fn test_keyword_canonical_folds_hyphens() {
        assert_eq!(keyword_canonical("End-If"), "END_IF");
        assert_eq!(keyword_canonical("ΤΕΛΟΣ-ΑΝ"), "ΤΕΛΟΣ_ΑΝ");
    }

    #[test]
    fn test_final_sigma_uppercases_to_sigma() {
        assert_eq!(canonical("τέλος"), "ΤΕΛΟΣ");
    }
}

/*
 * ==========================================================================
 * BISAYA++ - Sugod na!
 * ==========================================================================
 * 
 * License:
 * This file is part of the Bisaya++ programming language project.
 * 
 * Bisaya++ is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::lexer::token::TokenKind;

/// Looks a scanned word up in the **static keyword table**.
///
/// Returns the keyword's kind on a hit and `None` when the word is an
/// ordinary identifier. Multi-word keywords are stored with a single space
/// between their words; the lexer normalises the gap before lookup.
///
/// # Examples
/// ```text
/// MUGNA      -> Some(Declare)
/// KUNG WALA  -> Some(Else)
/// edad       -> None
/// ```
pub fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "SUGOD" => TokenKind::Start,
        "KATAPUSAN" => TokenKind::End,
        "MUGNA" => TokenKind::Declare,
        "NUMERO" => TokenKind::Numero,
        "TIPIK" => TokenKind::Tipik,
        "LETRA" => TokenKind::Letra,
        "TINUOD" => TokenKind::Tinuod,
        "IPAKITA" => TokenKind::Print,
        "DAWAT" => TokenKind::Input,
        "KUNG" => TokenKind::If,
        "KUNG WALA" => TokenKind::Else,
        "KUNG DILI" => TokenKind::ElseIf,
        "PUNDOK" => TokenKind::Block,
        "ALANG SA" => TokenKind::For,
        "OO" => TokenKind::True,
        "DILI" => TokenKind::False,
        "UG" => TokenKind::And,
        "O" => TokenKind::Or,
        _ => return None,
    };

    Some(kind)
}

/// Whether `word` is the first word of a multi-word keyword.
pub fn starts_multi_word(word: &str) -> bool {
    matches!(word, "KUNG" | "ALANG")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_keywords_resolve() {
        assert_eq!(keyword("SUGOD"), Some(TokenKind::Start));
        assert_eq!(keyword("DAWAT"), Some(TokenKind::Input));
        assert_eq!(keyword("O"), Some(TokenKind::Or));
    }

    #[test]
    fn multi_word_keywords_resolve() {
        assert_eq!(keyword("KUNG DILI"), Some(TokenKind::ElseIf));
        assert_eq!(keyword("ALANG SA"), Some(TokenKind::For));
        assert!(starts_multi_word("ALANG"));
        assert!(!starts_multi_word("SA"));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(keyword("sugod"), None);
        assert_eq!(keyword("ALANG"), None);
    }
}

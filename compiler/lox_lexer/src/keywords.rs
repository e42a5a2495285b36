//! Reserved words.
//!
//! Consulted once an identifier has been consumed in full, so `orchid` is an
//! identifier and never `or` followed by `chid`.

use lox_ir::TokenKind;

/// Keyword kind for an identifier's text, if it is reserved.
pub fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_resolves() {
        for word in [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ] {
            let kind = lookup(word);
            assert!(kind.is_some_and(TokenKind::is_keyword), "{word}");
        }
    }

    #[test]
    fn exact_match_only() {
        assert_eq!(lookup("orchid"), None);
        assert_eq!(lookup("Print"), None);
        assert_eq!(lookup("whiles"), None);
        assert_eq!(lookup(""), None);
    }
}

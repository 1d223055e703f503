use bisaya::{tokenize, TokenKind, Value};

use TokenKind::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .expect("source should lex")
        .iter()
        .map(|token| token.kind)
        .collect()
}

// lex, join the lexemes back together and lex again
fn relex_kinds(source: &str) -> Vec<TokenKind> {
    let tokens = tokenize(source).expect("source should lex");
    let joined = tokens
        .iter()
        .filter(|token| token.kind != Eof)
        .map(|token| token.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    kinds(&joined)
}

#[test]
fn declaration_and_print_program() {
    assert_eq!(
        kinds("SUGOD MUGNA NUMERO x = 10 IPAKITA: x KATAPUSAN"),
        vec![Start, Declare, Numero, Identifier, Assign, Number, Print, Colon, Identifier, End, Eof]
    );
}

#[test]
fn relexing_lexemes_reproduces_kinds() {
    let programs = [
        "SUGOD MUGNA NUMERO x = 10 IPAKITA: x KATAPUSAN",
        "SUGOD\n\
         -- comment line\n\
         MUGNA TIPIK a, b = 2.5\n\
         MUGNA LETRA c = '\\n'\n\
         MUGNA TINUOD t = \"OO\"\n\
         KUNG (a <> b UG a <= 3 O DILI(t)) PUNDOK { IPAKITA: a & [#] $ \"hi there\" }\n\
         KUNG DILI (a >= 1) PUNDOK { a = a % 2 }\n\
         KUNG  WALA PUNDOK { a = -a * (b / 2) }\n\
         ALANG SA (MUGNA NUMERO i = 0, i < 3, i++) PUNDOK { DAWAT: a, b }\n\
         KATAPUSAN",
    ];

    for program in programs {
        assert_eq!(kinds(program), relex_kinds(program), "program: {program}");
    }
}

#[test]
fn multi_word_keywords_join_across_spaces_only() {
    assert_eq!(kinds("KUNG WALA"), vec![Else, Eof]);
    assert_eq!(kinds("KUNG \t DILI"), vec![ElseIf, Eof]);
    assert_eq!(kinds("ALANG SA"), vec![For, Eof]);
    assert_eq!(kinds("KUNG\nWALA"), vec![If, Identifier, Eof]);
    assert_eq!(kinds("ALANG"), vec![Identifier, Eof]);
    assert_eq!(kinds("KUNG (x)"), vec![If, LeftParen, Identifier, RightParen, Eof]);
}

#[test]
fn greedy_operators() {
    assert_eq!(
        kinds("= == < <= <> > >="),
        vec![Assign, EqualEqual, Less, LessEqual, NotEqual, Greater, GreaterEqual, Eof]
    );
    assert_eq!(kinds("x++"), vec![Identifier, Plus, Plus, Eof]);
}

#[test]
fn comments_run_to_end_of_line() {
    let tokens = tokenize("-- wala ni\nSUGOD -- ni pud\nKATAPUSAN").unwrap();

    assert_eq!(tokens[0].kind, Start);
    assert_eq!(tokens[0].line(), 2);
    assert_eq!(tokens[1].kind, End);
    assert_eq!(tokens[1].line(), 3);
}

#[test]
fn literal_values_are_decoded() {
    let tokens = tokenize("42 3.75 \"kumusta\" 'x' '\\t' [&] \"OO\" \"DILI\"").unwrap();
    let literals: Vec<_> = tokens.iter().map(|token| token.literal.clone()).collect();

    assert_eq!(
        literals,
        vec![
            Some(Value::Number(42.0)),
            Some(Value::Number(3.75)),
            Some(Value::String("kumusta".into())),
            Some(Value::Char('x')),
            Some(Value::Char('\t')),
            Some(Value::Char('&')),
            Some(Value::Bool(true)),
            Some(Value::Bool(false)),
            None,
        ]
    );
    assert_eq!(tokens[6].kind, True);
    assert_eq!(tokens[7].kind, False);
}

#[test]
fn spans_track_line_and_column() {
    let tokens = tokenize("SUGOD\n  MUGNA \"a\nb\" x").unwrap();

    assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 2));
    assert_eq!(tokens[2].span.line, 2);
    // the string spans a newline, so `x` sits on line 3
    assert_eq!(tokens[3].span.line, 3);
}

#[test]
fn every_lexical_error_is_reported() {
    let errors = tokenize("SUGOD @ ''\nMUGNA LETRA c = 'ab'\n# \"open").unwrap_err();
    let reports: Vec<_> = errors
        .iter()
        .map(|error| (error.line(), error.message.as_str()))
        .collect();

    assert_eq!(
        reports,
        vec![
            (1, "Unexpected character '@'."),
            (1, "Empty character literal."),
            (2, "Unterminated or invalid character literal."),
            (3, "Unexpected character '#'."),
            (3, "Unterminated string."),
        ]
    );
    assert!(errors.iter().all(|error| error.code == "E_LEX"));

    let errors = tokenize("SUGOD\nMUGNA LETRA c = '").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].line(), errors[0].message.as_str()), (2, "Unterminated character literal."));
}

use bisaya::{parse_source, BisayaError, Expr, RunError, Stmt, TokenKind, Value};

fn program(source: &str) -> Vec<Stmt> {
    match parse_source(source) {
        Ok(Stmt::Program(statements)) => statements,
        other => panic!("expected a program, got {other:?}"),
    }
}

fn diagnostics(source: &str) -> Vec<BisayaError> {
    match parse_source(source) {
        Err(RunError::Diagnostics(errors)) => errors,
        other => panic!("expected diagnostics, got {other:?}"),
    }
}

fn number(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal(Value::Number(n)) => *n,
        other => panic!("expected a number literal, got {other:?}"),
    }
}

#[test]
fn factor_binds_tighter_than_term() {
    let statements = program("SUGOD IPAKITA: 2 + 3 * 4 KATAPUSAN");

    let Stmt::Print { value: Expr::Binary { left, operator, right }, .. } = &statements[0] else {
        panic!("expected a print of a binary expression");
    };
    assert_eq!(number(left), 2.0);
    assert_eq!(operator.kind, TokenKind::Plus);

    let Expr::Binary { left, operator, right } = right.as_ref() else {
        panic!("expected 3 * 4 on the right");
    };
    assert_eq!(operator.kind, TokenKind::Star);
    assert_eq!((number(left), number(right)), (3.0, 4.0));
}

#[test]
fn term_operators_fold_left() {
    let statements = program("SUGOD IPAKITA: 1 - 2 - 3 KATAPUSAN");

    let Stmt::Print { value: Expr::Binary { left, right, .. }, .. } = &statements[0] else {
        panic!("expected a print of a binary expression");
    };
    assert!(matches!(left.as_ref(), Expr::Binary { .. }));
    assert_eq!(number(right), 3.0);
}

#[test]
fn logical_or_is_looser_than_and() {
    let statements = program("SUGOD IPAKITA: OO O DILI UG OO KATAPUSAN");

    let Stmt::Print { value: Expr::Logical { operator, right, .. }, .. } = &statements[0] else {
        panic!("expected a logical expression");
    };
    assert_eq!(operator.kind, TokenKind::Or);
    assert!(matches!(right.as_ref(), Expr::Logical { operator, .. } if operator.kind == TokenKind::And));
}

#[test]
fn dili_before_paren_is_negation() {
    let statements = program("SUGOD IPAKITA: DILI(OO) IPAKITA: DILI KATAPUSAN");

    assert!(matches!(
        &statements[0],
        Stmt::Print { value: Expr::Unary { operator, .. }, .. } if operator.kind == TokenKind::False
    ));
    assert!(matches!(
        &statements[1],
        Stmt::Print { keyword, value: Expr::Literal(Value::Bool(false)) } if keyword.lexeme == "IPAKITA"
    ));
}

#[test]
fn declaration_list_shares_one_type() {
    let statements = program("SUGOD MUGNA TIPIK a, b = 2.5 KATAPUSAN");

    let Stmt::VarDeclarationList(vars) = &statements[0] else {
        panic!("expected a declaration list");
    };
    assert_eq!(vars.len(), 2);
    assert_eq!(vars[0].name.lexeme, "a");
    assert!(vars[0].initializer.is_none());
    assert_eq!(vars[1].initializer, Some(Expr::Literal(Value::Number(2.5))));
    assert!(vars.iter().all(|var| var.declared_type == bisaya::DeclaredType::Tipik));
}

#[test]
fn else_if_chains_nest() {
    let statements = program(
        "SUGOD\n\
         KUNG (OO) PUNDOK { IPAKITA: 1 }\n\
         KUNG DILI (DILI) PUNDOK { IPAKITA: 2 }\n\
         KUNG WALA PUNDOK { IPAKITA: 3 }\n\
         KATAPUSAN",
    );

    assert_eq!(statements.len(), 1);
    let Stmt::If { else_branch: Some(else_if), .. } = &statements[0] else {
        panic!("expected an if with an else branch");
    };
    let Stmt::If { else_branch: Some(last), .. } = else_if.as_ref() else {
        panic!("expected KUNG DILI to become a nested if");
    };
    assert!(matches!(last.as_ref(), Stmt::Block(body) if body.len() == 1));
}

#[test]
fn for_loop_lowers_to_scoped_while() {
    let statements =
        program("SUGOD ALANG SA (MUGNA NUMERO i = 0, i < 3, i++) PUNDOK { IPAKITA: i } KATAPUSAN");

    let Stmt::Block(outer) = &statements[0] else {
        panic!("expected the loop to be wrapped in a block");
    };
    assert!(matches!(&outer[0], Stmt::Var(var) if var.name.lexeme == "i"));

    let Stmt::While { condition, body } = &outer[1] else {
        panic!("expected a while loop");
    };
    assert!(matches!(condition, Expr::Binary { operator, .. } if operator.kind == TokenKind::Less));

    let Stmt::Block(body) = body.as_ref() else {
        panic!("expected the loop body to be a block");
    };
    assert!(matches!(&body[0], Stmt::Block(_)));
    assert!(matches!(&body[1], Stmt::Expression(Expr::Increment { name }) if name.lexeme == "i"));
}

#[test]
fn for_loop_clauses_are_optional() {
    let statements = program("SUGOD ALANG SA (, ,) PUNDOK { IPAKITA: 1 } KATAPUSAN");

    let Stmt::Block(outer) = &statements[0] else {
        panic!("expected a block");
    };
    assert_eq!(outer.len(), 1);
    assert!(matches!(
        &outer[0],
        Stmt::While { condition: Expr::Literal(Value::Bool(true)), .. }
    ));
}

#[test]
fn recovers_and_reports_each_bad_statement() {
    let errors = diagnostics(
        "SUGOD\n\
         MUGNA NUMERO = 5\n\
         IPAKITA: )\n\
         IPAKITA: 1\n\
         KATAPUSAN",
    );

    let reports: Vec<_> = errors
        .iter()
        .map(|error| (error.line(), error.message.as_str(), error.location.as_str()))
        .collect();

    assert_eq!(
        reports,
        vec![
            (2, "Expect variable name.", " at '='"),
            (3, "Expect expression.", " at ')'"),
        ]
    );
    assert!(errors.iter().all(|error| error.code == "E_SYNTAX"));
}

#[test]
fn dollar_ends_a_bad_statement() {
    // `1 = 2` after the `$` is only reported if parsing resumes there
    let errors = diagnostics("SUGOD\nIPAKITA: ) $ 1 = 2\nKATAPUSAN");

    let reports: Vec<_> = errors
        .iter()
        .map(|error| (error.line(), error.message.as_str(), error.location.as_str()))
        .collect();

    assert_eq!(
        reports,
        vec![
            (2, "Expect expression.", " at ')'"),
            (2, "Invalid assignment target.", " at '='"),
        ]
    );
}

#[test]
fn statement_after_dollar_parses_cleanly() {
    let errors = diagnostics("SUGOD\nIPAKITA: ) $ 1\nIPAKITA: 2\nKATAPUSAN");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expect expression.");
    assert_eq!(errors[0].line(), 2);
}

#[test]
fn error_before_katapusan_still_reaches_the_end() {
    let errors = diagnostics("SUGOD IPAKITA: KATAPUSAN");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expect expression.");
}

#[test]
fn missing_sugod_is_fatal() {
    let errors = diagnostics("MUGNA NUMERO x\nKATAPUSAN");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expect 'SUGOD' at the start of the program.");
    assert_eq!(errors[0].location, " at 'MUGNA'");
}

#[test]
fn missing_katapusan_is_reported_at_end() {
    let errors = diagnostics("SUGOD\nIPAKITA: 1");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expect 'KATAPUSAN' at the end of the program.");
    assert_eq!(errors[0].location, " at end");
}

#[test]
fn invalid_assignment_target() {
    let errors = diagnostics("SUGOD 1 = 2 KATAPUSAN");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid assignment target.");
    assert_eq!(errors[0].location, " at '='");
}

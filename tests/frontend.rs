use briar::ast::{AstPrinter, Expr, RpnPrinter};
use briar::diagnostics::Reporter;
use briar::lexer::{tokenize, Token, TokenKind, TokenLiteral};
use briar::parse_source;

fn scan(source: &str) -> (Vec<Token>, Reporter) {
    let mut reporter = Reporter::new();
    let tokens = tokenize(source, &mut reporter);
    (tokens, reporter)
}

fn parse(source: &str) -> (Option<Expr>, Reporter) {
    let mut reporter = Reporter::new();
    let expr = parse_source(source, &mut reporter);
    (expr, reporter)
}

fn printed(source: &str) -> String {
    let (expr, reporter) = parse(source);
    let expr = expr.unwrap_or_else(|| {
        panic!("'{}' failed to parse: {:?}", source, reporter.diagnostics())
    });
    assert!(
        !reporter.had_error(),
        "'{}' reported diagnostics: {:?}",
        source,
        reporter.diagnostics()
    );
    AstPrinter::new().print(&expr)
}

fn messages(reporter: &Reporter) -> Vec<String> {
    reporter.diagnostics().iter().map(|d| d.to_string()).collect()
}

#[test]
fn every_scan_ends_with_exactly_one_eof() {
    for source in ["", "1 + 2", "\"abc", "@#$%", "/* open", "fortune and 3", "\n\n\n"] {
        let (tokens, _) = scan(source);
        assert_eq!(
            tokens.last().map(|t| t.kind),
            Some(TokenKind::Eof),
            "'{}' must end with Eof",
            source
        );
        let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eof_count, 1, "'{}' must contain a single Eof", source);
    }
}

#[test]
fn pretty_printing_round_trips_structure() {
    assert_eq!(printed("-123 * (45.67)"), "(* (- 123) (group 45.67))");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(printed("8 - 4 - 2"), "(- (- 8 4) 2)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(printed("1 + 2 * 3"), "(+ 1 (* 2 3))");
}

#[test]
fn comparison_chains_fold_left() {
    assert_eq!(printed("1 < 2 < 3"), "(< (< 1 2) 3)");
    assert_eq!(printed("1 == 2 != 3"), "(!= (== 1 2) 3)");
}

#[test]
fn logical_operators_allow_unbounded_chains() {
    assert_eq!(printed("true and false or nil"), "(or (and true false) nil)");
    assert_eq!(printed("1 and 2 and 3"), "(and (and 1 2) 3)");
}

#[test]
fn conditional_nests_to_the_right() {
    assert_eq!(printed("1 ? 2 : 3"), "(? 1 (: 2 3))");
    assert_eq!(printed("1 ? 2 : 3 ? 4 : 5"), "(? 1 (: 2 (? 3 (: 4 5))))");
}

#[test]
fn conditional_requires_a_colon() {
    let (expr, reporter) = parse("1 ? 2");
    assert!(expr.is_none());
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error at end: Expect ':' after expression"]
    );
}

#[test]
fn unary_operators_chain_to_the_right() {
    assert_eq!(printed("--1"), "(- (- 1))");
    assert_eq!(printed("!!true"), "(! (! true))");
}

#[test]
fn literals_print_their_decoded_values() {
    assert_eq!(printed("nil"), "nil");
    assert_eq!(printed("true"), "true");
    assert_eq!(printed("\"paws\""), "paws");
}

#[test]
fn missing_left_operand_recovers_softly() {
    let (expr, reporter) = parse("* 5");
    assert!(expr.is_some(), "soft recovery still yields a placeholder tree");
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error at '*': Missing left-hand operand"]
    );
}

#[test]
fn unterminated_string_reports_but_still_scans() {
    let (tokens, reporter) = scan("\"abc");
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error: Unterminated string"]
    );
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn unterminated_block_comment_reports_but_still_scans() {
    let (tokens, reporter) = scan("1 /* nope");
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error: Unexpected end of comment"]
    );
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn block_comments_track_embedded_newlines() {
    let (tokens, reporter) = scan("/* a\nb */ 2");
    assert!(!reporter.had_error());
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].span.line, 2);
}

#[test]
fn line_comments_run_to_end_of_line() {
    let (tokens, reporter) = scan("1 // two 2\n3");
    assert!(!reporter.had_error());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(tokens[1].span.line, 2);
}

#[test]
fn missing_close_paren_is_a_hard_error() {
    let (expr, reporter) = parse("(1 + 2");
    assert!(expr.is_none());
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error at end: Expect ')' after expression"]
    );
}

#[test]
fn empty_input_expects_an_expression() {
    let (expr, reporter) = parse("");
    assert!(expr.is_none());
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error at end: Expect expression"]
    );
}

#[test]
fn blank_lines_report_instead_of_crashing() {
    for source in ["\n", "   ", "\t\r\n", "// just a comment\n", "/* only this */"] {
        let (expr, reporter) = parse(source);
        assert!(expr.is_none(), "'{}' must yield an absent result", source.escape_debug());
        assert_eq!(reporter.diagnostics().len(), 1);
        assert_eq!(reporter.diagnostics()[0].message, "Expect expression");
        assert_eq!(reporter.diagnostics()[0].location, " at end");
    }
}

#[test]
fn unexpected_character_is_reported_with_its_line() {
    let (tokens, reporter) = scan("1\n@ 2");
    assert_eq!(messages(&reporter), vec!["[line 2] Error: Unexpected character"]);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn identifiers_use_longest_match() {
    let (tokens, reporter) = scan("fortune");
    assert!(!reporter.had_error());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "fortune");
}

#[test]
fn or_flows_through_the_keyword_table() {
    let (tokens, _) = scan("or orchid");
    assert_eq!(tokens[0].kind, TokenKind::Or);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "orchid");
}

#[test]
fn identifier_characters_are_ascii_only() {
    let (tokens, reporter) = scan("abé");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "ab");
    assert_eq!(messages(&reporter), vec!["[line 1] Error: Unexpected character"]);
}

#[test]
fn numbers_decode_as_int_or_float() {
    let (tokens, _) = scan("7 2.5");
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Int(7)));
    assert_eq!(tokens[1].literal, Some(TokenLiteral::Float(2.5)));
}

#[test]
fn oversized_integer_literals_are_reported() {
    let (tokens, reporter) = scan("99999999999999999999");
    assert_eq!(
        messages(&reporter),
        vec!["[line 1] Error: Number literal out of range"]
    );
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn trailing_dot_stays_out_of_the_number() {
    let (tokens, _) = scan("1.");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Int(1)));
    assert_eq!(tokens[1].kind, TokenKind::Dot);
}

#[test]
fn multi_line_strings_are_attributed_to_their_first_line() {
    let (tokens, reporter) = scan("\"a\nb\" 1");
    assert!(!reporter.had_error());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Str("a\nb".to_string())));
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[1].span.line, 2);
}

#[test]
fn two_character_operators_win_over_single() {
    let (tokens, _) = scan("<= < == = != !");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LessEqual,
            TokenKind::Less,
            TokenKind::EqualEqual,
            TokenKind::Equal,
            TokenKind::BangEqual,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn rpn_rendering_marks_unary_minus() {
    let (expr, reporter) = parse("-123 * 45.67");
    assert!(!reporter.had_error());
    let rendered = RpnPrinter::new().print(&expr.expect("parse failed"));
    assert_eq!(rendered, "123 ~ 45.67 *");
}

#[test]
fn reset_clears_the_flag_but_keeps_diagnostics() {
    let mut reporter = Reporter::new();
    tokenize("@", &mut reporter);
    assert!(reporter.had_error());

    reporter.reset();
    assert!(!reporter.had_error());
    assert_eq!(reporter.diagnostics().len(), 1);
}

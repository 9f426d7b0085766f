use super::Lexer;
use crate::token::TokenKind::{self, *};

fn kinds_and_texts(input: &str) -> Vec<(TokenKind, &str)> {
    Lexer::new(input)
        .map(|token| (token.kind, token.text))
        .collect()
}

#[test]
fn fischer_spassky_tokens() {
    let input = r#"
  [Event "F/S Return Match"]
  [Site "Belgrade, Serbia JUG"]
  [Result "1/2-1/2"]

  1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 Nf6 5. O-O Be7 6. Re1 b5 7. Bb3 d6 8. c3
  O-O 9. h3 Nb8 10. d4 Nbd7 11. c4 c6 12. cxb5 axb5 13. Nc3 Bb7 14. Bg5 b4 15.
  Nb1 h6 16. Bh4 c5 17. dxe5 Nxe4 18. Bxe7 Qxe7 19. exd6 Qf6 20. Nbd2 Nxd6 21.
  Nc4 Nxc4 22. Bxc4 Nb6 23. Ne5 Rae8 24. Bxf7+ Rxf7 25. Nxf7 Rxe1+ 26. Qxe1 Kxf7
  27. Qe3 Qg5 28. Qxg5 hxg5 29. b3 Ke6 30. a3 Kd6 31. axb4 cxb4 32. Ra5 Nd5 33.
  f3 Bc8 34. Kf2 Bf5 35. Ra7 g6 36. Ra6+ Kc5 37. Ke1 Nf4 38. g3 Nxh3 39. Kd2 Kb5
  40. Rd6 Kc5 41. Ra6 Nf2 42. g4 Bd3 43. Re6 1/2-1/2
  "#;

    let tokens = kinds_and_texts(input);

    let expected_head = [
        (LBracket, "["),
        (Symbol, "Event"),
        (String, "F/S Return Match"),
        (RBracket, "]"),
        (LBracket, "["),
        (Symbol, "Site"),
        (String, "Belgrade, Serbia JUG"),
        (RBracket, "]"),
        (LBracket, "["),
        (Symbol, "Result"),
        (String, "1/2-1/2"),
        (RBracket, "]"),
        (Integer, "1"),
        (Period, "."),
        (Symbol, "e4"),
        (Symbol, "e5"),
        (Integer, "2"),
        (Period, "."),
        (Symbol, "Nf3"),
        (Symbol, "Nc6"),
    ];
    assert_eq!(&tokens[..expected_head.len()], &expected_head);

    let expected_tail = [
        (Integer, "43"),
        (Period, "."),
        (Symbol, "Re6"),
        (Symbol, "1/2-1/2"),
        (EndOfInput, ""),
    ];
    assert_eq!(&tokens[tokens.len() - expected_tail.len()..], &expected_tail);

    // 43 numbered moves, each followed by one period
    let integers = tokens.iter().filter(|(kind, _)| *kind == Integer).count();
    let periods = tokens.iter().filter(|(kind, _)| *kind == Period).count();
    assert_eq!(integers, 43);
    assert_eq!(periods, 43);
    assert!(tokens.iter().all(|(kind, _)| *kind != Illegal));
}

#[test]
fn move_number_is_split_from_periods() {
    assert_eq!(
        kinds_and_texts("12...Nf6"),
        vec![
            (Integer, "12"),
            (Period, "."),
            (Period, "."),
            (Period, "."),
            (Symbol, "Nf6"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn move_is_split_from_following_marker_and_nag() {
    assert_eq!(
        kinds_and_texts("e4$1 e5*"),
        vec![
            (Symbol, "e4"),
            (Nag, "1"),
            (Symbol, "e5"),
            (Asterisk, "*"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn results_are_symbols() {
    assert_eq!(
        kinds_and_texts("1-0 0-1 1/2-1/2 *"),
        vec![
            (Symbol, "1-0"),
            (Symbol, "0-1"),
            (Symbol, "1/2-1/2"),
            (Asterisk, "*"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn special_characters_in_moves() {
    assert_eq!(
        kinds_and_texts("exd8=Q+ O-O-O# R1a3 a_b:c"),
        vec![
            (Symbol, "exd8=Q+"),
            (Symbol, "O-O-O#"),
            (Symbol, "R1a3"),
            (Symbol, "a_b:c"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn nag_text_excludes_dollar() {
    assert_eq!(
        kinds_and_texts("$14 $ $3"),
        vec![(Nag, "14"), (Nag, ""), (Nag, "3"), (EndOfInput, "")]
    );
}

#[test]
fn punctuation_tokens() {
    assert_eq!(
        kinds_and_texts("[]()<>%.*"),
        vec![
            (LBracket, "["),
            (RBracket, "]"),
            (LParen, "("),
            (RParen, ")"),
            (LAngle, "<"),
            (RAngle, ">"),
            (Percent, "%"),
            (Period, "."),
            (Asterisk, "*"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(
        kinds_and_texts("[Event \"Never closed"),
        vec![
            (LBracket, "["),
            (Symbol, "Event"),
            (String, "Never closed"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn empty_string() {
    assert_eq!(
        kinds_and_texts("\"\" x"),
        vec![(String, ""), (Symbol, "x"), (EndOfInput, "")]
    );
}

#[test]
fn illegal_characters_do_not_stop_tokenization() {
    assert_eq!(
        kinds_and_texts("e4 {good} ; é e5"),
        vec![
            (Symbol, "e4"),
            (Illegal, "{"),
            (Symbol, "good"),
            (Illegal, "}"),
            (Illegal, ";"),
            (Illegal, "é"),
            (Symbol, "e5"),
            (EndOfInput, ""),
        ]
    );
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        kinds_and_texts(" \t\r\n1.\r\n\te4 \n"),
        vec![(Integer, "1"), (Period, "."), (Symbol, "e4"), (EndOfInput, "")]
    );
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("e4");
    assert_eq!(lexer.next_token().text, "e4");
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, EndOfInput);
        assert_eq!(token.text, "");
    }
}

#[test]
fn empty_input() {
    assert_eq!(kinds_and_texts(""), vec![(EndOfInput, "")]);
    assert_eq!(kinds_and_texts("  \n "), vec![(EndOfInput, "")]);
}

#[test]
fn iterator_stops_after_end_of_input() {
    let mut lexer = Lexer::new("*");
    assert_eq!(lexer.next().map(|token| token.kind), Some(Asterisk));
    assert_eq!(lexer.next().map(|token| token.kind), Some(EndOfInput));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

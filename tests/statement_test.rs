mod common;
use common::*;

#[test]
fn test_end_to_end_hex_then_quit() {
    let mut r = runtime("10 A=5 / A=A*2 ??=A /\n20 *QU\n30 \"unreachable\"\n");
    assert_eq!(exec(&mut r), "\n000a\n<QUIT>");
}

#[test]
fn test_slash_after_expression_is_division() {
    let mut r = runtime("10 A=5/A=A*2??=A/\n20 *QU\n");
    assert_eq!(
        exec(&mut r),
        "DIVISION BY ZERO\nDIVISION BY ZERO\nffff<QUIT>"
    );
}

#[test]
fn test_print_forms() {
    let mut r = runtime(concat!(
        "10 \"dec:\" ?=-42 /\n",
        "20 \"hex:\" ??=255 /\n",
        "30 \"byte:\" ?$=$1234 /\n",
        "40 \"wide:\" ?(5)=42 \"|\" ?(-5)=42 \"|\" /\n",
        "50 \"char:\" $=65 $=\"z\" /\n",
        "60 \"sp:\" .=3 \"|\" .=-2 \"|\"\n",
    ));
    assert_eq!(
        exec(&mut r),
        "dec:-42\nhex:00ff\nbyte:34\nwide:   42|42   |\nchar:Az\nsp:   ||"
    );
}

#[test]
fn test_print_high_byte_char() {
    let mut r = runtime("10 $=233\n");
    assert_eq!(exec(&mut r), "\u{e9}");
}

#[test]
fn test_goto_fall_through() {
    let mut r = runtime("10 #=25\n20 \"no\"\n30 \"yes\"\n");
    assert_eq!(exec(&mut r), "yes");
}

#[test]
fn test_goto_computed() {
    let mut r = runtime("10 A=3 #=A*10+2\n20 \"no\"\n32 \"yes\"\n");
    assert_eq!(exec(&mut r), "yes");
}

#[test]
fn test_goto_past_last_line_ends() {
    let mut r = runtime("10 \"a\" #=99 \"b\"\n20 \"c\"\n");
    assert_eq!(exec(&mut r), "a");
}

#[test]
fn test_goto_rest_of_line_is_skipped() {
    let mut r = runtime("10 #=30 \"skipped\"\n20 \"no\"\n30 \"yes\"\n");
    assert_eq!(exec(&mut r), "yes");
}

#[test]
fn test_gosub_return() {
    let mut r = runtime(concat!(
        "10 !=100 \"WORLD\"/\n",
        "90 *QU\n",
        "100 \"HELLO \"\n",
        "110 ]\n",
    ));
    assert_eq!(exec(&mut r), "HELLO WORLD\n<QUIT>");
}

#[test]
fn test_return_with_empty_stack() {
    let mut r = runtime("10 \"a\" ] \"b\"\n20 ]\n30 \"c\"\n");
    assert_eq!(exec(&mut r), "abc");
}

#[test]
fn test_start_skips_comment_line() {
    let mut r = runtime("#!/usr/local/bin/miep\n10 \"hi\"\n");
    assert_eq!(exec(&mut r), "hi");
}

#[test]
fn test_first_line_runs_first_even_if_not_one() {
    let mut r = runtime("100 \"a\"\n200 \"b\"\n");
    assert_eq!(exec(&mut r), "ab");
}

#[test]
fn test_line_without_space_is_a_comment() {
    let mut r = runtime("10 \"a\"\n20REM \"b\"\n30 \"c\"\n");
    assert_eq!(exec(&mut r), "ac");
}

#[test]
fn test_blank_line_ends_program() {
    let mut r = runtime("10 \"a\"\n\n20 \"b\"\n");
    assert_eq!(exec(&mut r), "a");
}

#[test]
fn test_missing_trailing_newline() {
    let mut r = runtime("10 \"a\"\n20 ?=7");
    assert_eq!(exec(&mut r), "a7");
}

#[test]
fn test_crlf_source() {
    let mut r = runtime("10 \"a\"\r\n20 ?=1\r\n");
    assert_eq!(exec(&mut r), "a1");
}

#[test]
fn test_syntax_error_ends_run() {
    let mut r = runtime("10 \"a\"\n20 \"b\" & \"c\"\n30 \"d\"\n");
    assert_eq!(exec(&mut r), "ab?SYNTAX ERROR IN 20\n");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_bad_print_form_is_syntax_error() {
    let mut r = runtime("10 ?!1\n");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR IN 10\n");
}

#[test]
fn test_missing_equals_reports_and_continues() {
    let mut r = runtime("10 #30\n20 \"b\"\n30 \"c\"\n");
    assert_eq!(exec(&mut r), "SYNTAX ERROR IN 10\nc");
}

#[test]
fn test_missing_punctuation_keeps_the_line_running() {
    let mut r = runtime("10 ?=1 .3 ?=2\n20 \"next\"\n");
    assert_eq!(exec(&mut r), "1SYNTAX ERROR IN 10\n   2next");
    let mut r = runtime("10 ?=(1+2\n20 /\n");
    assert_eq!(exec(&mut r), "SYNTAX ERROR IN 10\n3\n");
}

#[test]
fn test_unterminated_string_reports_and_prints() {
    let mut r = runtime("10 \"a\"\n20 \"abc");
    assert_eq!(exec(&mut r), "aSYNTAX ERROR IN 20\nabc");
}

#[test]
fn test_string_bytes_print_as_characters() {
    let mut r = runtime("10 \"caf\u{e9}\"\n");
    assert_eq!(exec(&mut r), "caf\u{c3}\u{a9}");
}

#[test]
fn test_random_seed_repeats() {
    let mut r = runtime(concat!(
        "10 '=42 A='1000 B='1000 C='1000\n",
        "20 '=42 ?=A='1000 ?=B='1000 ?=C='1000\n",
    ));
    assert_eq!(exec(&mut r), "111");
}

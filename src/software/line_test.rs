extern crate std;

use std::vec::Vec;

use super::*;

fn feed_str(reader: &mut LineReader, text: &str) -> Vec<CommandLine> {
    text.bytes().filter_map(|b| reader.feed(b)).collect()
}

fn args(line: &CommandLine) -> Vec<&[u8]> {
    (0..line.arg_count()).map(|i| line.argument(i).unwrap()).collect()
}

#[test]
fn splits_keyword_and_arguments() {
    let line = CommandLine::new(b"COL 1 255 010 000");

    assert_eq!(line.keyword(), b"COL");
    assert_eq!(line.arg_count(), 4);
    assert_eq!(args(&line), [&b"1"[..], &b"255"[..], &b"010"[..], &b"000"[..]]);
    assert_eq!(line.argument(4), None);
}

#[test]
fn keyword_only() {
    let line = CommandLine::new(b"DIM");

    assert_eq!(line.keyword(), b"DIM");
    assert_eq!(line.arg_count(), 0);
    assert_eq!(line.argument(0), None);
}

#[test]
fn every_space_separates() {
    let line = CommandLine::new(b"BLNK  1 ");

    assert_eq!(line.keyword(), b"BLNK");
    assert_eq!(args(&line), [&b""[..], &b"1"[..], &b""[..]]);
}

#[test]
fn extra_arguments_are_dropped() {
    let line = CommandLine::new(b"X 0 1 2 3 4 5 6 7 8 9 10 11");

    assert_eq!(line.arg_count(), SERIAL_MAX_ARGS);
    assert_eq!(line.argument(9), Some(&b"9"[..]));
    assert_eq!(line.argument(10), None);
}

#[test]
fn reader_waits_for_newline() {
    let mut reader = LineReader::new();

    assert!(feed_str(&mut reader, "COL 1").is_empty());
    assert_eq!(reader.len(), 5);

    let lines = feed_str(&mut reader, " 001 002 003\nDIM\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].as_bytes(), b"COL 1 001 002 003");
    assert_eq!(lines[1].as_bytes(), b"DIM");
    assert!(reader.is_empty());
}

#[test]
fn empty_line() {
    let mut reader = LineReader::new();

    let lines = feed_str(&mut reader, "\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].keyword(), b"");
    assert_eq!(lines[0].arg_count(), 0);
}

#[test]
fn overflow_cuts_line_and_keeps_the_rest() {
    let mut reader = LineReader::new();
    let mut text = std::string::String::from("COL 1 ");
    text.extend(core::iter::repeat('9').take(SERIAL_BUF_SIZE - 6));
    text.push_str("XY\n");

    let lines = feed_str(&mut reader, &text);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].as_bytes().len(), SERIAL_BUF_SIZE);
    assert_eq!(lines[0].keyword(), b"COL");
    assert_eq!(lines[0].arg_count(), 2);
    assert_eq!(lines[1].as_bytes(), b"XY");
    assert!(reader.is_empty());
}

#[test]
fn exactly_full_line_then_newline() {
    let mut reader = LineReader::new();
    let mut text = std::string::String::from("DIM ");
    text.extend(core::iter::repeat('1').take(SERIAL_BUF_SIZE - 4));
    text.push('\n');

    let lines = feed_str(&mut reader, &text);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].as_bytes().len(), SERIAL_BUF_SIZE);
    assert_eq!(lines[0].keyword(), b"DIM");
    assert_eq!(lines[0].arg_count(), 1);
    assert!(reader.is_empty());
}

#[test]
fn new_truncates_long_input() {
    let bytes = [b'A'; SERIAL_BUF_SIZE + 10];
    let line = CommandLine::new(&bytes);

    assert_eq!(line.as_bytes().len(), SERIAL_BUF_SIZE);
    assert_eq!(line.arg_count(), 0);
}

use insta::assert_snapshot;
use juxta_diff_core::{DiffError, DiffWriter, EOS_MARKER, LineWriter, Palette, WriterStyle};
use juxta_testhelpers::{test, visible_escapes};

use crate::layout;

#[test]
fn wide_replacement_across_lines() {
    let mut writer = LineWriter::new(WriterStyle::Plain);
    writer.keep("name: ");
    writer.delete("漢字");
    writer.insert("kanji");
    writer.keep("\nok");
    writer.keep(EOS_MARKER);

    assert_snapshot!(layout(&writer.finish()), @r"
    actual  : name: 漢字     \n|
    diff    :       ----+++++  |
    expected: name:     kanji\n|
    actual  : ok\0|
    diff    :     |
    expected: ok\0|
    ");
}

#[test]
fn eight_color_spans() {
    let mut writer = LineWriter::new(WriterStyle::Ansi(&Palette::XTERM_8_COLOR));
    writer.keep("a");
    writer.delete("b");
    writer.keep(EOS_MARKER);
    let result = writer.finish();

    assert_snapshot!(
        visible_escapes(&result.actual_lines()[0]),
        @r"␛[39;49ma␛[0m␛[30;41mb␛[0m␛[39;49m\0␛[0m"
    );
    assert_snapshot!(
        visible_escapes(&result.expected_lines()[0]),
        @r"␛[39;49ma␛[0m␛[30;47m/␛[0m␛[39;49m\0␛[0m"
    );
}

#[test]
fn diff_writer_closes_once() {
    let mut writer = DiffWriter::new(WriterStyle::Plain);
    assert_eq!(writer.actual_lines(), Err(DiffError::WriterOpen));
    writer.keep("same").unwrap();
    writer.insert("\u{200b}").unwrap();
    writer.close().unwrap();

    assert!(writer.is_closed());
    assert_eq!(writer.insert("x"), Err(DiffError::WriterClosed));
    assert_eq!(writer.marker_lines().unwrap().unwrap(), &["    +"]);
    assert_eq!(writer.actual_lines().unwrap(), &["same "]);
}

#[test]
fn colored_padding_is_blank() {
    let mut writer = LineWriter::new(WriterStyle::Ansi(&Palette::XTERM_16_COLOR));
    writer.insert("ab\n");
    writer.keep("c");
    let result = writer.finish();

    assert!(result.actual_lines()[0].contains('\x1b'));
    assert!(result.is_blank(&result.actual_lines()[0]));
    assert!(!result.is_blank(&result.expected_lines()[0]));
    assert!(!result.is_blank(&result.actual_lines()[1]));
}

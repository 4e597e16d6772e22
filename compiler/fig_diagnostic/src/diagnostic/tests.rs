use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_code_message_and_position() {
    let diagnostic = Diagnostic::error(ErrorCode::E6017)
        .with_message("Division by zero")
        .with_label(SourcePosition::new(1, 3), "");
    assert_eq!(diagnostic.render(), "error[E6017]: Division by zero\n  --> 1:3");
}

#[test]
fn renders_label_messages_and_notes() {
    let diagnostic = Diagnostic::error(ErrorCode::E1001)
        .with_message("Unexpected token -- expected: ';', found: end of file")
        .with_label(SourcePosition::new(2, 7), "expected ';'")
        .with_note("every statement ends with ';'");
    assert_eq!(
        diagnostic.render(),
        "error[E1001]: Unexpected token -- expected: ';', found: end of file\n  \
         --> 2:7\n   | expected ';'\n   = note: every statement ends with ';'"
    );
}

#[test]
fn without_labels_renders_only_the_header() {
    let diagnostic = Diagnostic::error(ErrorCode::E6010).with_message("Break statement outside of loop");
    assert_eq!(diagnostic.render(), "error[E6010]: Break statement outside of loop");
    assert_eq!(diagnostic.primary_position(), None);
}

#[test]
fn primary_position_is_the_first_label() {
    let diagnostic = Diagnostic::error(ErrorCode::E0001)
        .with_label(SourcePosition::new(4, 1), "")
        .with_label(SourcePosition::new(5, 2), "");
    assert_eq!(diagnostic.primary_position(), Some(SourcePosition::new(4, 1)));
}

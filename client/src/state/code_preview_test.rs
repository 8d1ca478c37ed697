use super::*;

#[test]
fn typer_reveals_one_char_per_tick() {
    let mut typer = CodeTyper::new("ab\nc");
    assert_eq!(typer.current_line(), 0);
    assert!(typer.tick());
    assert_eq!(typer.displayed(), "a");
    assert_eq!(typer.current_line(), 1);
    typer.tick();
    typer.tick();
    assert_eq!(typer.displayed(), "ab\n");
    assert_eq!(typer.current_line(), 2);
    assert!(!typer.tick());
    assert!(typer.is_done());
    assert!(!typer.tick());
    assert_eq!(typer.displayed(), "ab\nc");
}

#[test]
fn typer_respects_multibyte_chars() {
    let mut typer = CodeTyper::new("✓🚀");
    typer.tick();
    assert_eq!(typer.displayed(), "✓");
    typer.tick();
    assert_eq!(typer.displayed(), "✓🚀");
}

#[test]
fn architect_snippet_types_to_completion() {
    let mut typer = CodeTyper::new(ARCHITECT_SNIPPET);
    let mut ticks = 0;
    while typer.tick() {
        ticks += 1;
    }
    assert_eq!(ticks + 1, ARCHITECT_SNIPPET.chars().count());
    assert_eq!(typer.current_line(), typer.total_lines());
}

#[test]
fn line_marks_relative_to_cursor() {
    assert_eq!(line_mark(3, 3), LineMark::Active);
    assert_eq!(line_mark(2, 3), LineMark::Typed);
    assert_eq!(line_mark(4, 3), LineMark::Pending);
    assert_eq!(line_mark(1, 0), LineMark::Pending);
}

#[test]
fn output_line_kinds() {
    assert_eq!(line_kind("✓ System Design: Ready"), OutputKind::Success);
    assert_eq!(line_kind("> Loading expertise modules..."), OutputKind::Info);
    assert_eq!(line_kind("\"Clean code\""), OutputKind::Plain);
}

#[test]
fn terminal_prints_every_line_then_stops() {
    let mut run = TerminalRun::new(ARCHITECT_OUTPUT);
    assert!(!run.tick());
    assert!(run.start());
    assert!(!run.start());
    for expected in 1..=ARCHITECT_OUTPUT.len() {
        assert!(run.tick());
        assert_eq!(run.output().len(), expected);
    }
    assert!(!run.tick());
    assert!(!run.is_running());
    assert_eq!(run.output().last(), ARCHITECT_OUTPUT.last());
}

#[test]
fn restart_clears_previous_output() {
    let mut run = TerminalRun::new(ARCHITECT_OUTPUT);
    run.start();
    while run.tick() {}
    assert!(run.start());
    assert!(run.output().is_empty());
}

use super::*;

#[test]
fn batch_merges_writes_and_drops_noops() {
    let mut batch = DisplayBatch::new();
    batch.write("ab");
    batch.write("");
    batch.write("c");
    batch.move_left(0);
    batch.erase_backward(0);
    batch.move_right(0);
    assert_eq!(batch.ops(), &[DisplayOp::Write("abc".to_string())]);
}

#[test]
fn encode_ansi_renders_each_op() {
    let ops = vec![
        DisplayOp::Write("ls".to_string()),
        DisplayOp::MoveLeft(2),
        DisplayOp::MoveRight(1),
        DisplayOp::EraseBackward(3),
        DisplayOp::ClearScreen,
    ];
    assert_eq!(
        encode_ansi(&ops),
        "ls\x1b[2D\x1b[1C\x1b[3D\x1b[K\x1b[2J\x1b[3J\x1b[H"
    );
}

#[test]
fn screen_overwrites_in_place_after_moving_left() {
    let mut screen = VirtualScreen::new();
    screen.apply(&[
        DisplayOp::Write("$ kubectl".to_string()),
        DisplayOp::MoveLeft(7),
        DisplayOp::Write("K".to_string()),
    ]);
    assert_eq!(screen.current_line(), "$ Kubectl");
    assert_eq!(screen.cursor_col(), 3);
}

#[test]
fn screen_erase_backward_truncates_the_line() {
    let mut screen = VirtualScreen::new();
    screen.apply(&[
        DisplayOp::Write("$ abcdef".to_string()),
        DisplayOp::EraseBackward(4),
    ]);
    assert_eq!(screen.current_line(), "$ ab");
    assert_eq!(screen.cursor_col(), 4);
}

#[test]
fn screen_moves_are_bounded() {
    let mut screen = VirtualScreen::new();
    screen.apply(&[
        DisplayOp::Write("ab".to_string()),
        DisplayOp::MoveRight(10),
        DisplayOp::MoveLeft(10),
    ]);
    assert_eq!(screen.cursor_col(), 0);
    screen.apply(&[DisplayOp::MoveRight(10)]);
    assert_eq!(screen.cursor_col(), 2);
}

#[test]
fn screen_commits_lines_and_skips_colour_codes() {
    let mut screen = VirtualScreen::new();
    screen.apply(&[DisplayOp::Write(
        "one\r\n\x1b[31mtwo\x1b[0m\r\n$ ".to_string(),
    )]);
    assert_eq!(screen.scrollback(), &["one".to_string(), "two".to_string()]);
    assert_eq!(screen.current_line(), "$ ");
}

#[test]
fn screen_clear_resets_everything() {
    let mut screen = VirtualScreen::new();
    screen.apply(&[
        DisplayOp::Write("a\r\nb".to_string()),
        DisplayOp::ClearScreen,
    ]);
    assert!(screen.scrollback().is_empty());
    assert_eq!(screen.current_line(), "");
    assert_eq!(screen.clear_count(), 1);
    assert_eq!(screen.transcript(), vec![String::new()]);
}

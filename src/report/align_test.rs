use crate::report::align::{center, len_chars, slack};

#[test]
fn even_slack_splits_equally() {
    assert_eq!(slack(8, 2), (3, 3));
    assert_eq!(slack(22, 6), (8, 8));
}

#[test]
fn odd_slack_goes_right() {
    assert_eq!(slack(8, 3), (2, 3));
    assert_eq!(slack(5, 2), (1, 2));
    assert_eq!(slack(4, 1), (1, 2));
}

#[test]
fn exact_fit_has_no_slack() {
    assert_eq!(slack(4, 4), (0, 0));
    assert_eq!(slack(0, 0), (0, 0));
}

#[test]
fn overflowing_text_gets_no_padding() {
    assert_eq!(slack(4, 7), (0, 0));
    assert_eq!(center("overflowing", 4), "overflowing");
}

#[test]
fn center_pads_to_width() {
    assert_eq!(center("ab", 8), "   ab   ");
    assert_eq!(center("abc", 8), "  abc   ");
    assert_eq!(center("7", 4), " 7  ");
    assert_eq!(center("", 2), "  ");
}

#[test]
fn center_measures_chars_not_bytes() {
    assert_eq!(center("\u{3bb}", 3), " \u{3bb} ");
    assert_eq!(len_chars("\u{3bb}x"), 2);
    assert_eq!(len_chars("plain"), 5);
}

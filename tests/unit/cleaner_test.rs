//! Unit tests for the cleanup pipeline

use ocrscrub::cleaner::{
    CollapseWhitespace, Dehyphenate, HeaderCase, Transform, TrimLines, BUILTIN_CORRECTIONS,
};
use ocrscrub::{clean, Cleaner};

#[test]
fn removes_page_number_between_blank_lines() {
    let cleaned = clean("before\n\n(12)\n\nafter");
    assert!(!cleaned.contains("(12)"));
    assert_eq!(cleaned, "before\nafter");
}

#[test]
fn title_cases_capitalized_header() {
    let cleaned = clean("Prologue.\n\nTHE VALLEY OF LOVE\n\nIn this valley love is fire.");
    assert!(cleaned.contains("The Valley of Love"));
    assert_eq!(
        cleaned,
        "Prologue.\n\nThe Valley of Love\n\nIn this valley love is fire."
    );
}

#[test]
fn joins_hyphenated_line_break() {
    assert_eq!(clean("for-\nward"), "forward");
}

#[test]
fn fixes_tilings() {
    assert_eq!(clean("he told tilings of old"), "he told things of old");
}

#[test]
fn fixes_both_dervish_misreads() {
    assert_eq!(clean("dervdsh"), "dervish");
    assert_eq!(clean("der\\ush"), "dervish");
}

#[test]
fn collapses_five_line_breaks_to_three() {
    assert_eq!(clean("first\n\n\n\n\nsecond"), "first\n\n\nsecond");
}

#[test]
fn cleans_sample_page_end_to_end() {
    let raw = "THE CONFERENCE OF THE BIRDS\n\n(3)\nOnce a   hoopoe-\ne poet told tilings of the w'orld.\nc\n\n";

    let cleaned = clean(raw);

    assert!(cleaned.starts_with("The Conference of the Birds\n\n"));
    assert!(!cleaned.contains("(3)"));
    assert!(!cleaned.contains("\nc\n"));
    assert!(cleaned.contains("Once a hoopoee poet told things of the world."));
}

#[test]
fn cleans_crlf_sample_page_like_lf() {
    let lf = "THE CONFERENCE OF THE BIRDS\n\n(3)\nOnce a   hoopoe-\ne poet told tilings of the w'orld.\nc\n\nNext page.\n";
    let crlf = lf.replace('\n', "\r\n");

    let cleaned = clean(&crlf);

    assert_eq!(cleaned, clean(lf));
    assert!(!cleaned.contains('\r'));
    assert!(!cleaned.contains("\nc\n"));
    assert!(cleaned.contains("\n\nNext page."));
}

#[test]
fn collapses_crlf_line_breaks_to_three() {
    assert_eq!(clean("first\r\n\r\n\r\n\r\n\r\nsecond"), "first\n\n\nsecond");
}

#[test]
fn treats_lone_carriage_returns_as_line_breaks() {
    assert_eq!(clean("first\r\r\r\r\rsecond"), "first\n\n\nsecond");
    assert_eq!(clean("text\rc\r\rNext\r"), "text\n\nNext\n");
}

#[test]
fn clean_text_is_left_alone() {
    let text = "The Valley of Love\n\nThe hoopoe spoke to the birds.\nThey listened.";
    assert_eq!(clean(text), text);
}

#[test]
fn cleaning_twice_matches_cleaning_once() {
    let samples = [
        "THE CONFERENCE OF THE BIRDS\n\n(3)\nOnce a   hoopoe-\ne poet told tilings.\nc\n\n",
        "intro\n\n\n\n\nTHE SEVEN VALLEYS\n   indented line   \nend",
        "a  b   c\n\n\n\n\n\nd",
    ];

    for sample in samples {
        let once = clean(sample);
        assert_eq!(clean(&once), once, "not stable for {:?}", sample);
    }
}

#[test]
fn late_steps_are_idempotent_in_isolation() {
    let input = "intro\nTHE END OF THE ROAD\n  a   b  \n\n\n\n\nz";
    let mut steps: Vec<Box<dyn Transform>> = vec![
        Box::new(HeaderCase),
        Box::new(CollapseWhitespace::default()),
        Box::new(TrimLines),
    ];

    for step in steps.iter_mut() {
        let mut once = input.to_string();
        step.transform(&mut once);
        let mut twice = once.clone();
        step.transform(&mut twice);
        assert_eq!(once, twice, "{} is not idempotent", step.name());
    }
}

#[test]
fn dehyphenate_only_joins_word_characters() {
    let mut text = String::from("-\nleading dash");
    Dehyphenate.transform(&mut text);
    assert_eq!(text, "-\nleading dash");
}

#[test]
fn builtin_corrections_keep_documented_order() {
    let froms: Vec<&str> = BUILTIN_CORRECTIONS.iter().map(|(from, _)| *from).collect();
    let caret = froms.iter().position(|f| *f == "^").unwrap();
    let world = froms.iter().position(|f| *f == "w'orld").unwrap();
    assert!(caret < world);
    assert_eq!(froms.last(), Some(&" 1 \""));
}

#[test]
fn configured_cleaner_uses_extra_corrections() {
    let mut cleaner =
        Cleaner::with_extra_corrections(vec![("Simurgh^s".to_string(), "nope".to_string())]);
    // The caret rule rewrites the text before the extra entry can see it.
    assert_eq!(cleaner.clean("the Simurgh^s feather"), "the Simurgh's feather");
}

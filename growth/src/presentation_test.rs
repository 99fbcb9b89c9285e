use super::*;

#[test]
fn only_exact_true_enables_embed() {
    assert!(Presentation::from_embed_param(Some("true")).embed);
    for value in [None, Some(""), Some("TRUE"), Some("1"), Some("yes"), Some(" true")] {
        assert!(!Presentation::from_embed_param(value).embed, "{value:?}");
    }
}

#[test]
fn embed_hides_decoration() {
    let embed = Presentation::from_embed_param(Some("true"));
    assert!(!embed.show_chrome());
    assert!(!embed.show_terminal());
    assert_eq!(embed.main_class(), "main main-compact");

    let full = Presentation::default();
    assert!(full.show_chrome());
    assert!(full.show_terminal());
    assert_eq!(full.page_class(), "page");
}

use super::*;

#[test]
fn frames_cover_every_prefix() {
    assert_eq!(typing_frames("Oi!"), vec!["", "O", "Oi", "Oi!"]);
}

#[test]
fn frames_split_on_characters_not_bytes() {
    let frames = typing_frames("Olá");
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[3], "Olá");
    assert_eq!(frames[2], "Ol");
}

#[test]
fn empty_title_has_single_empty_frame() {
    assert_eq!(typing_frames(""), vec![String::new()]);
}

#[test]
fn source_prefers_fulltext_attribute() {
    assert_eq!(title_source(Some("  Fale comigo "), Some("x")), "Fale comigo");
}

#[test]
fn source_falls_back_to_text_content() {
    assert_eq!(title_source(None, Some(" Contato\n")), "Contato");
    assert_eq!(title_source(Some("   "), Some("Contato")), "Contato");
    assert_eq!(title_source(None, None), "");
}

use super::*;

#[test]
fn flash_class_follows_tone() {
    assert_eq!(Flash::success("Match created!").class(), "message-box success");
    assert_eq!(Flash::error("Fill in all fields!").class(), "message-box error");
}


#[test]
fn into_parts_pairs_class_with_text() {
    let (class, text) = Flash::error("Nickname already taken").into_parts();
    assert_eq!(class, "message-box error");
    assert_eq!(text, "Nickname already taken");
}

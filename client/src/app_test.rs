use super::*;

#[test]
fn document_title_for_sign_in() {
    assert_eq!(document_title(routes::SIGN_IN_PATH), "Sign in | Sign-in Shell");
}

#[test]
fn document_title_for_unmapped_path_is_app_title() {
    assert_eq!(document_title("/"), APP_TITLE);
    assert_eq!(document_title("/user/signUp"), APP_TITLE);
}

use super::*;

#[test]
fn control_ids_match_bootstrap_markup() {
    assert_eq!(EMAIL_INPUT_ID, "exampleInputEmail1");
    assert_eq!(PASSWORD_INPUT_ID, "exampleInputPassword1");
    assert_eq!(CHECKBOX_ID, "exampleCheck1");
    assert_eq!(EMAIL_HELP_ID, "emailHelp");
}

#[test]
fn labels_are_stable() {
    assert_eq!(EMAIL_LABEL, "Email address");
    assert_eq!(EMAIL_HELP_TEXT, "We'll never share your email with anyone else.");
    assert_eq!(PASSWORD_LABEL, "Password");
    assert_eq!(CHECKBOX_LABEL, "Check me out");
    assert_eq!(SUBMIT_LABEL, "Submit");
}

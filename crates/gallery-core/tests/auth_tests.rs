// Host-side tests for the credential verification seam.

use gallery_core::{CredentialVerifier, StaticPasscodes};

#[test]
fn development_passcodes_are_accepted() {
    let verifier = StaticPasscodes::gallery_default();
    assert!(verifier.verify("1234"));
    assert!(verifier.verify("admin"));
}

#[test]
fn anything_else_is_rejected() {
    let verifier = StaticPasscodes::gallery_default();
    assert!(!verifier.verify("wrong"));
    assert!(!verifier.verify(""));
    assert!(!verifier.verify("12345"));
    assert!(!verifier.verify("ADMIN"));
    assert!(!verifier.verify(" 1234"));
}

#[test]
fn custom_passcode_lists_work_through_the_trait() {
    fn check(v: &dyn CredentialVerifier, code: &str) -> bool {
        v.verify(code)
    }
    let verifier = StaticPasscodes::new(&["open-sesame"]);
    assert!(check(&verifier, "open-sesame"));
    assert!(!check(&verifier, "1234"));
}

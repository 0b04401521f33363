//! Validation coverage for contact drafts.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        category: "battery".to_owned(),
        priority: "high".to_owned(),
        message: "Phone won't charge".to_owned(),
    }
}

fn violations_of(draft: &ContactDraft) -> Vec<ContactViolation> {
    draft
        .validate()
        .expect_err("draft should be rejected")
        .violations()
        .to_vec()
}

#[rstest]
fn valid_draft_produces_submission(valid_draft: ContactDraft) {
    let submission = valid_draft.validate().expect("valid draft");
    assert_eq!(submission.name(), "Jane Doe");
    assert_eq!(submission.email(), "jane@example.com");
    assert_eq!(submission.category(), ContactCategory::Battery);
    assert_eq!(submission.priority(), ContactPriority::High);
    assert_eq!(submission.message(), "Phone won't charge");
}

#[rstest]
fn fields_are_trimmed(valid_draft: ContactDraft) {
    let draft = ContactDraft {
        name: "\t Jane Doe \n".to_owned(),
        email: "  jane@example.com ".to_owned(),
        category: " battery ".to_owned(),
        priority: " high".to_owned(),
        message: "  Phone won't charge  ".to_owned(),
    };
    let submission = draft.validate().expect("valid after trimming");
    let expected = valid_draft.validate().expect("valid draft");
    assert_eq!(submission, expected);
}

#[rstest]
fn every_broken_field_is_reported() {
    let draft = ContactDraft {
        name: String::new(),
        email: "bad".to_owned(),
        category: "x".to_owned(),
        priority: "urgent".to_owned(),
        message: String::new(),
    };
    assert_eq!(
        violations_of(&draft),
        vec![
            ContactViolation::NameRequired,
            ContactViolation::EmailInvalid,
            ContactViolation::CategoryUnknown,
            ContactViolation::PriorityUnknown,
            ContactViolation::MessageRequired,
        ]
    );
}

#[rstest]
fn display_lists_one_violation_per_line() {
    let draft = ContactDraft {
        email: "jane@example.com".to_owned(),
        category: String::new(),
        priority: "low".to_owned(),
        ..ContactDraft::default()
    };
    let error = draft.validate().expect_err("name and message missing");
    assert_eq!(error.to_string(), "Name is required.\nMessage is required.");
}

#[rstest]
#[case::ascii(100, true)]
#[case::ascii_over(101, false)]
fn name_length_boundary(valid_draft: ContactDraft, #[case] length: usize, #[case] ok: bool) {
    let draft = ContactDraft {
        name: "a".repeat(length),
        ..valid_draft
    };
    assert_eq!(draft.validate().is_ok(), ok);
}

#[rstest]
fn name_length_counts_characters_not_bytes(valid_draft: ContactDraft) {
    let at_limit = ContactDraft {
        name: "é".repeat(NAME_MAX_CHARS),
        ..valid_draft.clone()
    };
    assert!(at_limit.validate().is_ok(), "200 bytes but 100 characters");

    let over_limit = ContactDraft {
        name: "界".repeat(NAME_MAX_CHARS + 1),
        ..valid_draft
    };
    assert_eq!(
        violations_of(&over_limit),
        vec![ContactViolation::NameTooLong]
    );
}

#[rstest]
fn message_length_boundary(valid_draft: ContactDraft) {
    let at_limit = ContactDraft {
        message: "m".repeat(MESSAGE_MAX_CHARS),
        ..valid_draft.clone()
    };
    assert!(at_limit.validate().is_ok());

    let over_limit = ContactDraft {
        message: "m".repeat(MESSAGE_MAX_CHARS + 1),
        ..valid_draft
    };
    assert_eq!(
        violations_of(&over_limit),
        vec![ContactViolation::MessageTooLong]
    );
}

#[rstest]
fn overlong_but_well_formed_email_is_too_long(valid_draft: ContactDraft) {
    let local = "a".repeat(EMAIL_MAX_CHARS);
    let draft = ContactDraft {
        email: format!("{local}@example.com"),
        ..valid_draft
    };
    assert_eq!(violations_of(&draft), vec![ContactViolation::EmailTooLong]);
}

#[rstest]
fn blank_email_is_required_not_invalid(valid_draft: ContactDraft) {
    let draft = ContactDraft {
        email: "   ".to_owned(),
        ..valid_draft
    };
    assert_eq!(violations_of(&draft), vec![ContactViolation::EmailRequired]);
}

#[rstest]
#[case("jane@example.com")]
#[case("jane.doe+support@mail.example.co.uk")]
#[case("o'brien@example.ie")]
#[case("x@a-b.io")]
fn accepts_well_formed_emails(#[case] email: &str) {
    assert!(is_valid_email(email), "{email} should be accepted");
}

#[rstest]
#[case("bad")]
#[case("jane@")]
#[case("@example.com")]
#[case("jane@example")]
#[case("jane doe@example.com")]
#[case("jane@@example.com")]
#[case(".jane@example.com")]
#[case("jane.@example.com")]
#[case("ja..ne@example.com")]
#[case("jane@-example.com")]
#[case("jane@example..com")]
fn rejects_malformed_emails(#[case] email: &str) {
    assert!(!is_valid_email(email), "{email} should be rejected");
}

#[rstest]
fn empty_category_means_unspecified(valid_draft: ContactDraft) {
    let draft = ContactDraft {
        category: String::new(),
        ..valid_draft
    };
    let submission = draft.validate().expect("empty category is allowed");
    assert_eq!(submission.category(), ContactCategory::Unspecified);
}

#[rstest]
fn categories_round_trip_through_wire_spelling() {
    for category in ContactCategory::ALL {
        let parsed: ContactCategory = category.as_str().parse().expect("known category");
        assert_eq!(parsed, category);
    }
}

#[rstest]
#[case("Battery")]
#[case("BATTERY")]
#[case("screen")]
fn category_matching_is_exact(#[case] raw: &str) {
    assert!(raw.parse::<ContactCategory>().is_err());
}

#[rstest]
#[case("")]
#[case("urgent")]
#[case("High")]
fn priority_outside_set_is_rejected(valid_draft: ContactDraft, #[case] raw: &str) {
    let draft = ContactDraft {
        priority: raw.to_owned(),
        ..valid_draft
    };
    assert_eq!(
        violations_of(&draft),
        vec![ContactViolation::PriorityUnknown]
    );
}

#[rstest]
fn violations_know_their_fields() {
    assert_eq!(ContactViolation::EmailTooLong.field(), ContactField::Email);
    assert_eq!(ContactViolation::CategoryUnknown.field(), ContactField::Category);
    assert_eq!(ContactViolation::MessageRequired.code(), "message_required");
}

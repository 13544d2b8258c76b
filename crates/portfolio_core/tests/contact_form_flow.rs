use portfolio_core::config::ContactConfig;
use portfolio_core::{ContactField, ContactForm, ContactFormError};

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new(ContactConfig::default());
    form.set_field(ContactField::Name, "Ada Lovelace");
    form.set_field(ContactField::Email, "ada@example.com");
    form.set_field(ContactField::Message, "Loved the projects section.");
    form
}

#[test]
fn submission_acknowledges_and_resets_draft() {
    let mut form = filled_form();
    let ticket = form.begin_submit().expect("draft should validate");
    assert_eq!(ticket.delay_ms, 2_000);
    assert!(form.is_submitting());

    let toast = form.complete_submit(ticket).expect("ticket should be current");
    assert_eq!(toast.title, "Message Sent!");
    assert_eq!(
        toast.description,
        "Thanks for reaching out. I'll get back to you soon!"
    );
    assert!(!form.is_submitting());
    assert!(form.draft().name.is_empty());
    assert!(form.draft().email.is_empty());
    assert!(form.draft().message.is_empty());
}

#[test]
fn second_submit_is_rejected_while_in_flight() {
    let mut form = filled_form();
    let ticket = form.begin_submit().expect("first submit");
    assert_eq!(
        form.begin_submit().unwrap_err(),
        ContactFormError::AlreadySubmitting
    );
    form.complete_submit(ticket).expect("complete first submit");
}

#[test]
fn stale_ticket_cannot_complete_again() {
    let mut form = filled_form();
    let first = form.begin_submit().expect("first submit");
    form.complete_submit(first).expect("complete first submit");

    assert_eq!(
        form.complete_submit(first).unwrap_err(),
        ContactFormError::UnknownTicket
    );

    form.set_field(ContactField::Name, "Ada");
    form.set_field(ContactField::Email, "ada@example.com");
    form.set_field(ContactField::Message, "Following up.");
    let second = form.begin_submit().expect("second submit");
    assert_ne!(first, second);
    assert_eq!(
        form.complete_submit(first).unwrap_err(),
        ContactFormError::UnknownTicket
    );
    assert!(form.is_submitting());
}

#[test]
fn invalid_draft_never_enters_submitting() {
    let mut form = ContactForm::new(ContactConfig {
        simulated_delay_ms: 10,
    });
    form.set_field(ContactField::Name, "   ");
    form.set_field(ContactField::Email, "ada@example.com");
    form.set_field(ContactField::Message, "hi");

    assert_eq!(
        form.begin_submit().unwrap_err(),
        ContactFormError::MissingField(ContactField::Name)
    );
    assert!(!form.is_submitting());
    assert_eq!(form.draft().email, "ada@example.com");
}

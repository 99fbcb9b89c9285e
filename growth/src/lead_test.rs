use super::*;

fn filled_flow() -> LeadFlow {
    let mut flow = LeadFlow::default();
    flow.form = LeadForm {
        url: "https://acme.example".into(),
        email: "owner@acme.example".into(),
        phone: "(555) 123-4567".into(),
    };
    flow
}

#[test]
fn starts_collecting_and_closed() {
    let flow = LeadFlow::default();
    assert_eq!(flow.phase(), &LeadPhase::Collecting);
    assert!(!flow.is_open());
    assert!(flow.summary().is_none());
}

#[test]
fn open_shows_modal_without_changing_phase() {
    let mut flow = filled_flow();
    flow.open();
    assert!(flow.is_open());
    assert_eq!(flow.phase(), &LeadPhase::Collecting);
}

#[test]
fn submit_requires_all_fields() {
    let mut flow = LeadFlow::default();
    flow.form.email = "owner@acme.example".into();
    let err = flow.submit().unwrap_err();
    assert_eq!(err, LeadError::MissingFields(vec!["url", "phone"]));
    assert_eq!(err.to_string(), "missing required fields: url, phone");
    assert_eq!(flow.phase(), &LeadPhase::Collecting);
}

#[test]
fn whitespace_only_fields_count_as_missing() {
    let mut flow = filled_flow();
    flow.form.phone = "   ".into();
    assert_eq!(flow.submit(), Err(LeadError::MissingFields(vec!["phone"])));
}

#[test]
fn submit_then_settle_reaches_ready() {
    let mut flow = filled_flow();
    flow.open();
    let ticket = flow.submit().unwrap();
    assert!(flow.is_submitting());
    assert!(flow.settle(ticket, "We see upside."));
    assert_eq!(flow.summary(), Some("We see upside."));
}

#[test]
fn settle_with_fallback_still_reaches_ready() {
    let mut flow = filled_flow();
    let ticket = flow.submit().unwrap();
    assert!(flow.settle(ticket, crate::summary::FALLBACK_SUMMARY));
    assert_eq!(flow.summary(), Some(crate::summary::FALLBACK_SUMMARY));
}

#[test]
fn duplicate_submit_is_refused_while_in_flight() {
    let mut flow = filled_flow();
    let ticket = flow.submit().unwrap();
    assert_eq!(flow.submit(), Err(LeadError::AlreadySubmitting));
    assert_eq!(flow.phase(), &LeadPhase::Submitting { ticket });
}

#[test]
fn ready_is_terminal() {
    let mut flow = filled_flow();
    let ticket = flow.submit().unwrap();
    flow.settle(ticket, "done");
    assert_eq!(flow.submit(), Err(LeadError::AlreadyReady));
    assert!(!flow.settle(ticket, "again"));
    assert_eq!(flow.summary(), Some("done"));
}

#[test]
fn dismiss_during_submit_discards_late_result() {
    let mut flow = filled_flow();
    flow.open();
    let stale = flow.submit().unwrap();
    flow.dismiss();
    assert!(!flow.is_open());
    assert_eq!(flow.phase(), &LeadPhase::Collecting);

    assert!(!flow.settle(stale, "late"));
    assert_eq!(flow.phase(), &LeadPhase::Collecting);
}

#[test]
fn resubmit_after_dismiss_uses_fresh_ticket() {
    let mut flow = filled_flow();
    let stale = flow.submit().unwrap();
    flow.dismiss();
    flow.open();
    let fresh = flow.submit().unwrap();
    assert_ne!(stale, fresh);
    assert!(!flow.settle(stale, "late"));
    assert!(flow.is_submitting());
    assert!(flow.settle(fresh, "current"));
    assert_eq!(flow.summary(), Some("current"));
}

#[test]
fn dismiss_keeps_form_and_ready_state() {
    let mut flow = filled_flow();
    let ticket = flow.submit().unwrap();
    flow.settle(ticket, "done");
    flow.open();
    flow.dismiss();
    assert!(!flow.is_open());
    assert_eq!(flow.summary(), Some("done"));
    assert_eq!(flow.form.url, "https://acme.example");
}

use field_builder_core::{ChoicesError, FieldDefinition, LabelError};
use field_builder_engine::{BuilderConfig, SubmitError, SubmitOutcome};
use field_builder_harness::{FailingSubmitter, TestSession, init_tracing};
use field_builder_storage::parse_snapshot;
use serde_json::{Value, json};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn filled_session() -> Result<TestSession, Box<dyn std::error::Error>> {
    let mut s = TestSession::new()?;
    s.builder.set_label("Favourite colour")?;
    s.builder.set_choices("red\ngreen\nblue")?;
    Ok(s)
}

#[test]
fn invalid_form_is_not_sent() -> TestResult {
    init_tracing();
    let mut s = TestSession::new()?;
    s.builder.set_choices("a\na")?;

    let outcome = s.builder.submit()?;
    assert_eq!(
        outcome,
        SubmitOutcome::Invalid {
            label_error: Some(LabelError::Required),
            choices_error: Some(ChoicesError::Duplicates),
        }
    );
    assert!(s.builder.submitter().sent.is_empty());
    assert!(!s.builder.is_submitting());
    Ok(())
}

#[test]
fn submit_validates_untouched_fields() -> TestResult {
    let mut s = TestSession::new()?;
    s.builder.set_label("Label only")?;

    let outcome = s.builder.submit()?;
    assert_eq!(
        outcome,
        SubmitOutcome::Invalid {
            label_error: None,
            choices_error: Some(ChoicesError::Empty),
        }
    );
    assert_eq!(s.builder.choices_error(), Some(&ChoicesError::Empty));
    Ok(())
}

#[test]
fn valid_form_is_sent_to_configured_endpoint() -> TestResult {
    let mut s = filled_session()?;
    s.builder.set_default_value("green")?;

    let (definition, response) = match s.builder.submit()? {
        SubmitOutcome::Accepted {
            definition,
            response,
            ..
        } => (definition, response),
        other => panic!("expected acceptance, got {other:?}"),
    };
    assert_eq!(response, json!({ "status": "created" }));
    assert_eq!(
        definition,
        FieldDefinition {
            label: "Favourite colour".into(),
            default_value: "green".into(),
            choices: vec!["red".into(), "green".into(), "blue".into()],
            ..FieldDefinition::default()
        }
    );

    let sent = &s.builder.submitter().sent;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, BuilderConfig::default().endpoint);
    assert_eq!(sent[0].1, definition);
    assert!(!s.builder.is_submitting());
    Ok(())
}

#[test]
fn auto_added_default_is_submitted_first() -> TestResult {
    let mut s = filled_session()?;
    s.builder.set_default_value("purple")?;

    assert!(s.builder.submit()?.is_accepted());
    let def = s.builder.submitter().last().unwrap();
    assert_eq!(def.choices, vec!["purple", "red", "green", "blue"]);
    assert_eq!(def.default_value, "purple");
    Ok(())
}

#[test]
fn default_removed_from_choices_is_restored() -> TestResult {
    let mut s = filled_session()?;
    s.builder.set_default_value("green")?;
    // user deletes the chosen default from the list afterwards
    s.builder.set_choices("red\nblue")?;

    assert!(s.builder.submit()?.is_accepted());
    let def = s.builder.submitter().last().unwrap();
    assert_eq!(def.choices, vec!["red", "blue", "green"]);

    // the draft text gains it at the head, and so does the snapshot
    assert_eq!(s.builder.draft().choices_text, "green\nred\nblue");
    let stored = parse_snapshot(&s.stored_json()?.unwrap())?;
    assert_eq!(stored.choices, vec!["green", "red", "blue"]);
    Ok(())
}

#[test]
fn submitter_failure_is_reported() -> TestResult {
    init_tracing();
    let failing = FailingSubmitter::new(SubmitError::Transport("connection refused".into()));
    let mut s = TestSession::with_submitter(BuilderConfig::default(), failing)?;
    s.builder.set_label("Colour")?;
    s.builder.set_choices("red")?;

    let error = match s.builder.submit()? {
        SubmitOutcome::Failed { error, .. } => error,
        other => panic!("expected failure, got {other:?}"),
    };
    assert_eq!(error.to_string(), "something went wrong: connection refused");
    assert_eq!(s.builder.submitter().attempts, 1);
    assert!(!s.builder.is_submitting());
    assert!(!s.builder.save_button().loading);

    // no retry; a second submit is a second attempt
    s.builder.submit()?;
    assert_eq!(s.builder.submitter().attempts, 2);
    Ok(())
}

#[test]
fn closure_submitter() -> TestResult {
    let submitter = |_endpoint: &str, def: &FieldDefinition| -> Result<Value, SubmitError> {
        if def.choices.len() > 1 {
            Ok(json!({ "id": 7 }))
        } else {
            Err(SubmitError::Rejected {
                status: 422,
                body: "need two choices".into(),
            })
        }
    };
    let mut s = TestSession::with_submitter(BuilderConfig::default(), submitter)?;
    s.builder.set_label("Colour")?;

    s.builder.set_choices("red")?;
    match s.builder.submit()? {
        SubmitOutcome::Failed { error, .. } => assert_eq!(
            error.to_string(),
            "endpoint rejected the field definition (422): need two choices"
        ),
        other => panic!("expected rejection, got {other:?}"),
    }

    s.builder.set_choices("red\nblue")?;
    match s.builder.submit()? {
        SubmitOutcome::Accepted { response, .. } => assert_eq!(response["id"], 7),
        other => panic!("expected acceptance, got {other:?}"),
    }
    Ok(())
}

#[test]
fn each_attempt_gets_its_own_id() -> TestResult {
    let mut s = filled_session()?;
    let first = s.builder.submit()?;
    let second = s.builder.submit()?;
    match (first, second) {
        (SubmitOutcome::Accepted { id: a, .. }, SubmitOutcome::Accepted { id: b, .. }) => {
            assert_ne!(a, b)
        }
        other => panic!("expected two acceptances, got {other:?}"),
    }
    assert_eq!(s.builder.submitter().sent.len(), 2);
    Ok(())
}

#[test]
fn submission_survives_reload() -> TestResult {
    let s = filled_session()?;
    let mut s = s.reopen()?;
    assert!(s.builder.submit()?.is_accepted());
    assert_eq!(
        s.builder.submitter().last().unwrap().choices,
        vec!["red", "green", "blue"]
    );
    Ok(())
}

// ============================================================================
// Default value normalization and healed lists
// ============================================================================

#[test]
fn padded_default_is_trimmed_before_submit() -> TestResult {
    let mut s = TestSession::new()?;
    s.builder.set_label("Colour")?;
    s.builder.set_choices("red\nblue")?;
    s.builder.set_default_value(" green ")?;
    assert_eq!(s.builder.draft().default_value, "green");
    assert_eq!(s.builder.draft().choices_text, "green\nred\nblue");

    for _ in 0..2 {
        assert!(s.builder.submit()?.is_accepted());
        let def = s.builder.submitter().last().unwrap();
        assert_eq!(def.choices, vec!["green", "red", "blue"]);
        assert_eq!(def.default_value, "green");
    }
    assert_eq!(s.builder.draft().choices_text, "green\nred\nblue");
    assert!(s.builder.choices_error().is_none());
    Ok(())
}

#[test]
fn padded_default_in_snapshot_matches_choice() -> TestResult {
    let s = TestSession::new()?;
    let mut s = s.write_raw(r#"{"label":"Colour","defaultValue":" red ","choices":["red","blue"]}"#)?;

    assert!(s.builder.submit()?.is_accepted());
    let def = s.builder.submitter().last().unwrap();
    assert_eq!(def.choices, vec!["red", "blue"]);
    assert_eq!(def.default_value, "red");
    Ok(())
}

#[test]
fn healed_list_over_limit_is_not_sent() -> TestResult {
    let mut s = TestSession::new()?;
    s.builder.set_label("Numbers")?;
    let full = (1..=50).map(|i| format!("c{i}")).collect::<Vec<_>>().join("\n");
    s.builder.set_choices(full)?;
    s.builder.set_default_value("c1")?;
    assert!(!s.builder.draft().default_auto_added);

    // drop the default and add another, still 50 typed choices
    let shifted = (2..=51).map(|i| format!("c{i}")).collect::<Vec<_>>().join("\n");
    s.builder.set_choices(shifted)?;
    assert!(s.builder.choices_error().is_none());

    let outcome = s.builder.submit()?;
    assert_eq!(
        outcome,
        SubmitOutcome::Invalid {
            label_error: None,
            choices_error: Some(ChoicesError::TooMany { max: 50 }),
        }
    );
    assert!(s.builder.submitter().sent.is_empty());
    assert!(!s.builder.is_submitting());
    assert_eq!(s.builder.choices_error(), Some(&ChoicesError::TooMany { max: 50 }));
    Ok(())
}

#[test]
fn healed_list_with_long_default_is_not_sent() -> TestResult {
    let long_default = "x".repeat(41);
    let json = format!(r#"{{"label":"Long","defaultValue":"{long_default}","choices":["a","b"]}}"#);
    let mut s = TestSession::new()?.write_raw(&json)?;
    assert!(s.builder.choices_error().is_none());

    match s.builder.submit()? {
        SubmitOutcome::Invalid { choices_error, .. } => assert_eq!(
            choices_error,
            Some(ChoicesError::TooLong { max: 40, count: 1 })
        ),
        other => panic!("expected invalid outcome, got {other:?}"),
    }
    assert!(s.builder.submitter().sent.is_empty());
    assert_eq!(s.builder.flagged_choices().to_vec(), vec![long_default]);
    Ok(())
}

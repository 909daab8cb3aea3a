// Integration tests (native) for the case flow state machine.
// These avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use love_autopsy_lab::catalog::{ORGANS, SECRET_ORGAN};
use love_autopsy_lab::flow::{ANSWER_COUNT, CaseFlow, FlowConfig, Screen};
use love_autopsy_lab::secret::SecretSequence;

/// Drive a fresh flow through intake onto the lab screen.
fn flow_on_lab() -> CaseFlow {
    let mut flow = CaseFlow::default();
    assert!(flow.begin_intake());
    flow.set_answer(0, "ghosted me on a Tuesday");
    flow.set_answer(1, "he said k");
    flow.set_answer(2, "he had potential");
    assert!(flow.submit_statement(), "valid statement must enter the lab");
    flow
}

#[test]
fn screens_advance_strictly_forward() {
    let mut flow = CaseFlow::default();
    assert_eq!(flow.screen(), Screen::Intro);
    assert!(!flow.submit_statement(), "cannot submit before intake");
    assert!(flow.begin_intake());
    assert_eq!(flow.screen(), Screen::Intake);
    assert!(!flow.begin_intake(), "intro transition is one-way");
    assert!(!flow.new_case(), "reset is only available from complete");
}

#[test]
fn collection_counts_distinct_ids_only() {
    let mut flow = flow_on_lab();
    for id in [1, 2, 2, 3, 1, 1, 2, 3, 3] {
        flow.inspect_organ(id);
    }
    assert_eq!(flow.collected(), &[1, 2, 3], "order preserved, no repeats");
}

#[test]
fn reinspecting_a_collected_organ_is_a_no_op() {
    let mut flow = flow_on_lab();
    assert!(flow.inspect_organ(1).is_some());
    flow.close_report();
    assert!(flow.inspect_organ(1).is_none());
    assert_eq!(flow.collected().len(), 1);
}

#[test]
fn inspect_is_lab_only_and_catalog_bound() {
    let mut flow = CaseFlow::default();
    assert!(flow.inspect_organ(1).is_none(), "no inspecting from intro");
    let mut flow = flow_on_lab();
    assert!(flow.inspect_organ(42).is_none(), "unknown id");
    assert!(
        flow.inspect_organ(SECRET_ORGAN.id).is_none(),
        "secret organ is not in play before the unlock"
    );
}

#[test]
fn statement_predicate_gates_intake() {
    let cases: &[([&str; 3], bool)] = &[
        (["", "", ""], false),
        (["ab", "abc", "abcd"], false),
        (["abc", "abc", "ab"], false),
        (["  abc  ", "def", "ghi"], true),
        (["   a   ", "abcd", "abcd"], false),
        (["\u{134d}\u{1245}\u{122d}", "ghosted", "he said k"], true),
        (["ghosted", "k", "potential"], false),
    ];
    for (answers, expect) in cases {
        let mut flow = CaseFlow::default();
        flow.begin_intake();
        for (i, a) in answers.iter().enumerate() {
            flow.set_answer(i, a);
        }
        assert_eq!(
            flow.statement_complete(),
            *expect,
            "predicate mismatch for {answers:?}"
        );
        assert_eq!(
            flow.submit_statement(),
            *expect,
            "transition outcome must follow the predicate for {answers:?}"
        );
        let want = if *expect { Screen::Lab } else { Screen::Intake };
        assert_eq!(flow.screen(), want);
    }
}

#[test]
fn set_answer_ignores_bad_slots_and_wrong_screens() {
    let mut flow = CaseFlow::default();
    flow.set_answer(0, "before intake");
    assert_eq!(flow.answers()[0], "", "answers are intake-screen only");
    flow.begin_intake();
    flow.set_answer(ANSWER_COUNT, "out of range");
    assert!(flow.answers().iter().all(String::is_empty));
}

#[test]
fn completion_needs_the_threshold() {
    let mut flow = flow_on_lab();
    for id in 1..=5 {
        flow.inspect_organ(id);
    }
    assert!(!flow.can_complete(), "five organs are not enough");
    assert!(!flow.complete_autopsy());
    flow.inspect_organ(6);
    assert!(flow.can_complete());
    assert!(flow.complete_autopsy());
    assert_eq!(flow.screen(), Screen::Complete);
}

#[test]
fn completion_fires_exactly_once() {
    let mut flow = flow_on_lab();
    for id in 1..=6 {
        flow.inspect_organ(id);
    }
    assert!(flow.complete_autopsy(), "first call closes the case");
    assert!(!flow.complete_autopsy(), "second call is a no-op");
    assert_eq!(flow.screen(), Screen::Complete);
}

#[test]
fn secret_unlock_raises_threshold_by_one() {
    let mut flow = flow_on_lab();
    assert_eq!(flow.threshold(), 6);
    assert_eq!(flow.active_organs().count(), ORGANS.len());
    assert!(flow.unlock_secret());
    assert!(!flow.unlock_secret(), "unlock is idempotent");
    assert_eq!(flow.threshold(), 7);
    assert_eq!(flow.active_organs().count(), ORGANS.len() + 1);

    for id in 1..=6 {
        flow.inspect_organ(id);
    }
    assert!(
        !flow.complete_autopsy(),
        "six collected no longer completes once the secret is in play"
    );
    assert!(flow.inspect_organ(SECRET_ORGAN.id).is_some());
    assert!(flow.complete_autopsy());
}

#[test]
fn reveal_advances_per_tick_and_stops_at_the_end() {
    let mut flow = flow_on_lab();
    let organ = flow.inspect_organ(4).expect("fresh organ");
    assert!(flow.report_open());
    assert_eq!(flow.revealed_report(), "");
    assert!(!flow.reveal_complete());

    for _ in 0..10 {
        assert!(flow.tick_reveal());
    }
    let prefix: String = organ.report.chars().take(10).collect();
    assert_eq!(flow.revealed_report(), prefix);

    let total = organ.report.chars().count();
    while flow.tick_reveal() {}
    assert!(flow.reveal_complete());
    assert_eq!(flow.revealed_report(), organ.report);
    assert_eq!(flow.revealed_report().chars().count(), total);
    assert!(!flow.tick_reveal(), "ticking past the end is inert");
}

#[test]
fn closing_the_report_resets_the_reveal() {
    let mut flow = flow_on_lab();
    flow.inspect_organ(2);
    for _ in 0..5 {
        flow.tick_reveal();
    }
    flow.close_report();
    assert!(!flow.report_open());
    assert_eq!(flow.revealed_report(), "");
    assert!(!flow.tick_reveal(), "no reveal without an open report");
    assert_eq!(flow.collected(), &[2], "closing keeps the evidence");
}

#[test]
fn reset_leaves_a_fresh_controller() {
    let mut flow = flow_on_lab();
    flow.unlock_secret();
    for id in 1..=7 {
        flow.inspect_organ(id);
    }
    flow.set_flash(true);
    assert!(flow.complete_autopsy());
    assert!(flow.new_case());
    assert_eq!(flow, CaseFlow::default());
    assert_eq!(flow.screen(), Screen::Intro);
    assert!(flow.collected().is_empty());
    assert!(flow.answers().iter().all(String::is_empty));
}

#[test]
fn configured_threshold_is_respected() {
    let cfg = FlowConfig {
        min_answer_chars: 1,
        base_threshold: 2,
    };
    let mut flow = CaseFlow::new(cfg);
    assert_eq!(flow.config(), cfg);
    flow.begin_intake();
    for i in 0..ANSWER_COUNT {
        flow.set_answer(i, "x");
    }
    assert!(flow.submit_statement());
    flow.inspect_organ(1);
    assert!(!flow.can_complete());
    flow.inspect_organ(2);
    assert!(flow.complete_autopsy());
}

#[test]
fn full_case_from_intro_to_complete() {
    // The canonical walkthrough: raw answers with a one-letter entry are
    // refused, padded answers pass, six organs close the case.
    let mut flow = CaseFlow::default();
    assert!(flow.begin_intake());
    flow.set_answer(0, "ghosted");
    flow.set_answer(1, "k");
    flow.set_answer(2, "potential");
    assert!(!flow.submit_statement(), "a one-letter answer blocks intake");
    assert_eq!(flow.screen(), Screen::Intake);

    flow.set_answer(1, "just said k");
    assert!(flow.submit_statement());
    assert_eq!(flow.screen(), Screen::Lab);

    for id in [4, 2, 6, 1, 5, 3] {
        assert!(flow.inspect_organ(id).is_some());
        flow.close_report();
    }
    assert_eq!(flow.collected().len(), 6);
    assert!(flow.can_complete());
    assert!(flow.complete_autopsy(), "celebration cue fires here");
    assert!(!flow.complete_autopsy(), "and never a second time");
}

#[test]
fn typed_secret_word_unlocks_the_ninth_organ() {
    // Keystrokes as they would arrive from the document listener, with
    // the secret word buried in surrounding noise.
    let mut flow = flow_on_lab();
    let mut keys = SecretSequence::new();
    let mut unlocked = false;
    for c in "who even types InJeRa mid game".chars() {
        if keys.push(c) {
            unlocked = flow.unlock_secret() || unlocked;
        }
    }
    assert!(unlocked, "detector must fire on the embedded word");
    assert!(flow.secret_unlocked());
    assert_eq!(flow.threshold(), 7);
    assert!(
        flow.active_organs().any(|o| o.id == SECRET_ORGAN.id),
        "secret organ joins the active catalog"
    );

    for id in 1..=6 {
        flow.inspect_organ(id);
    }
    assert!(
        !flow.complete_autopsy(),
        "six non-secret organs are refused at the raised threshold"
    );
    flow.inspect_organ(7);
    assert!(flow.complete_autopsy());
}

#[test]
fn rehydrate_restores_a_shared_case() {
    let answers = vec![
        "ghosted".to_string(),
        "he said k".to_string(),
        "potential".to_string(),
    ];
    let flow = CaseFlow::rehydrate(FlowConfig::default(), &answers, &[3, 1, 5])
        .expect("valid payload rehydrates");
    assert_eq!(flow.screen(), Screen::Lab);
    assert_eq!(flow.collected(), &[3, 1, 5], "collection order survives");
    assert_eq!(flow.answers(), answers.as_slice());
    assert!(!flow.secret_unlocked());
}

#[test]
fn rehydrate_infers_the_secret_from_its_id() {
    let answers = vec!["aaa".to_string(), "bbb".to_string(), "ccc".to_string()];
    let ids = [1, 2, 3, 4, 5, 6, SECRET_ORGAN.id];
    let flow =
        CaseFlow::rehydrate(FlowConfig::default(), &answers, &ids).expect("payload with secret");
    assert!(flow.secret_unlocked());
    assert_eq!(flow.threshold(), 7);
    assert_eq!(flow.collected().len(), 7);
    assert!(flow.can_complete());
}

#[test]
fn rehydrate_drops_junk_ids_and_rejects_bad_statements() {
    let answers = vec!["aaa".to_string(), "bbb".to_string(), "ccc".to_string()];
    let flow = CaseFlow::rehydrate(FlowConfig::default(), &answers, &[1, 99, 1, 2, 0])
        .expect("junk ids are dropped, not fatal");
    assert_eq!(flow.collected(), &[1, 2]);

    let short = vec!["a".to_string(), "bbb".to_string(), "ccc".to_string()];
    assert!(
        CaseFlow::rehydrate(FlowConfig::default(), &short, &[1]).is_none(),
        "a shared case always carries a complete statement"
    );
    let wrong_len = vec!["aaa".to_string(); 2];
    assert!(CaseFlow::rehydrate(FlowConfig::default(), &wrong_len, &[1]).is_none());
}

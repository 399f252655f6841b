use fuzzkit_core::host::{DetachedContext, Outcome, SubTestRunner};
use fuzzkit_core::random::seeded;
use fuzzkit_core::{
    HarnessError, StringSet, TestContext, bools, modify, run_bool_tests, run_string_tests,
    run_tests, strings,
};

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_plain_username(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[test]
fn bool_set_runs_two_named_sub_tests() {
    let mut t = SubTestRunner::new();
    let mut calls = Vec::new();

    run_bool_tests(&mut t, &bools::full(), |_, index, value| {
        calls.push((index, value));
    })
    .unwrap();

    assert_eq!(calls, vec![(0, true), (1, false)]);
    let names: Vec<&str> = t.reports().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["true", "false"]);
    t.assert_passed();
}

#[test]
fn html_tags_are_escaped_in_catalog_order() {
    let mut t = SubTestRunner::new();
    let tags = strings::html_tags();
    let mut indices = Vec::new();

    run_string_tests(&mut t, &tags, |t, index, tag| {
        indices.push(index);
        let escaped = escape_html(&tag);
        if escaped.contains('<') || escaped.contains('>') {
            t.error(&format!("unescaped markup left in {escaped:?}"));
        }
    })
    .unwrap();

    assert_eq!(indices, (0..tags.len()).collect::<Vec<_>>());
    let summary = t.finish().unwrap();
    assert_eq!(summary.total, tags.len());
    for (report, tag) in summary.reports.iter().zip(&tags) {
        assert_eq!(&report.name, tag);
    }
}

#[test]
fn failures_are_isolated_per_input() {
    let mut t = SubTestRunner::new();
    let set = strings::full_with(&mut seeded(1));

    run_string_tests(&mut t, &set, |_, _, value| {
        assert!(is_plain_username(&value), "rejected {value:?}");
    })
    .unwrap();

    let summary = t.summary();
    assert_eq!(summary.total, set.len());
    assert!(summary.failed > 0);
    assert!(summary.passed > 0);
    assert_eq!(summary.passed + summary.failed, summary.total);

    let failed: Vec<&str> = summary.failed_reports().map(|r| r.name.as_str()).collect();
    assert!(failed.contains(&"<script>"));
    assert!(failed.contains(&""));
    assert!(!failed.contains(&"MarvinJWendt"));

    assert!(matches!(
        t.finish(),
        Err(HarnessError::SubTestsFailed { .. })
    ));
}

#[test]
fn detached_context_reports_host_unavailable() {
    let mut ctx = DetachedContext::new();
    let mut invoked = 0;

    let result = run_tests(&mut ctx, &strings::email_addresses(), |_, _, _| invoked += 1);

    assert_eq!(result, Err(HarnessError::HostUnavailable));
    assert_eq!(invoked, 0);
    assert_eq!(
        ctx.errors(),
        ["cannot run without the builtin test runner".to_string()]
    );
}

#[test]
fn limited_and_modified_sets_feed_the_dispatcher() {
    let mut t = SubTestRunner::new();
    let set = modify(&strings::limit(strings::usernames(), 3), |index, value| {
        format!("{index}-{value}")
    });

    run_string_tests(&mut t, &set, |t, index, value| {
        if !value.starts_with(&format!("{index}-")) {
            t.error("index prefix does not match");
        }
    })
    .unwrap();

    let names: Vec<String> = t.reports().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["0-MarvinJWendt", "1-Zipper1337", "2-n00b"]);
    t.assert_passed();
}

#[test]
fn sub_tests_can_nest() {
    let mut t = SubTestRunner::new();

    run_bool_tests(&mut t, &bools::full(), |t, _, flag| {
        let numbers = strings::limit(StringSet::Numeric.generate(), 2);
        run_string_tests(t, &numbers, |t: &mut dyn TestContext, _, number| {
            if flag && number == "1" {
                t.error("rejected on purpose");
            }
        })
        .unwrap();
    })
    .unwrap();

    let names: Vec<&str> = t.reports().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["true", "true/0", "true/1", "false", "false/0", "false/1"]
    );

    let outcomes: Vec<bool> = t.reports().iter().map(|r| r.outcome.is_passed()).collect();
    assert_eq!(outcomes, vec![false, true, false, true, true, true]);
    assert_eq!(
        t.reports()[2].outcome,
        Outcome::Failed(vec!["rejected on purpose".to_string()])
    );
}

#[test]
fn long_inputs_run_with_compact_failure_names() {
    let mut t = SubTestRunner::new();
    let set = strings::long_with(&mut seeded(5));

    run_string_tests(&mut t, &set, |t, _, value| {
        if value.len() > 100 {
            t.error("too long");
        }
    })
    .unwrap();

    match t.check() {
        Err(HarnessError::SubTestsFailed { failed, names, .. }) => {
            assert_eq!(failed, 2);
            assert!(names.iter().all(|n| n.contains("[md5:")));
        }
        other => panic!("Expected SubTestsFailed, got {other:?}"),
    }
}

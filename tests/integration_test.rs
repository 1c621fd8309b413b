// tests/integration_test.rs
use git_reltag::git::MockRunner;
use git_reltag::pipeline::Pipeline;
use git_reltag::ReltagError;

fn repo(log: &str) -> MockRunner {
    let runner = MockRunner::new();
    runner.respond("log", log);
    runner.respond("rev-parse", "/home/dev/widget\n");
    runner.respond("shortlog", "Jane Doe (1):\n      Add feature\n\n");
    runner
}

fn tag_calls(runner: &MockRunner) -> Vec<String> {
    runner
        .calls()
        .into_iter()
        .filter(|call| call.starts_with("git tag "))
        .collect()
}

#[test]
fn test_first_release_from_empty_history() {
    let runner = repo("HEAD -> main\n\n");
    let mut pipeline = Pipeline::new(runner.clone());

    pipeline.run(&["bump-patch", "tag"]).unwrap();

    assert_eq!(pipeline.version().to_string(), "0.0.1");
    let created = &pipeline.context().created;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "v0.0.1");
    assert_eq!(created[0].target_commit, "HEAD");
    assert_eq!(
        created[0].message,
        "widget v0.0.1\n\nJane Doe (1):\n      Add feature\n\n"
    );

    assert!(runner.calls().contains(&"git shortlog HEAD".to_string()));
    let tags = tag_calls(&runner);
    assert_eq!(tags.len(), 1);
    assert!(tags[0].starts_with("git tag --annotate -m widget v0.0.1\n\n"));
    assert!(tags[0].ends_with(" v0.0.1 HEAD"));
}

#[test]
fn test_minor_release_with_build_metadata() {
    let runner = repo("HEAD -> main, tag: v1.4.2, origin/main\n\ntag: v1.4.1\n");
    let mut pipeline = Pipeline::new(runner.clone());

    pipeline
        .run(&["bump-minor", "set-build=ci42", "tag"])
        .unwrap();

    assert_eq!(pipeline.version().to_string(), "1.5.0+ci42");
    assert_eq!(pipeline.context().created[0].name, "v1.5.0+ci42");
    assert!(runner
        .calls()
        .contains(&"git shortlog v1.4.2..HEAD".to_string()));
    assert_eq!(tag_calls(&runner).len(), 1);
}

#[test]
fn test_unknown_operation_runs_nothing() {
    let runner = repo("tag: v1.0.0\n");
    let mut pipeline = Pipeline::new(runner.clone());

    let err = pipeline.run(&["frobnicate"]).unwrap_err();

    match &err {
        ReltagError::InvalidOperations { names } => {
            assert_eq!(names, &vec!["frobnicate".to_string()]);
        }
        other => panic!("expected InvalidOperations, got {:?}", other),
    }
    assert!(runner.calls().is_empty());
}

#[test]
fn test_unknown_operation_among_valid_ones_runs_nothing() {
    let runner = repo("tag: v1.0.0\n");
    let mut pipeline = Pipeline::new(runner.clone());

    let err = pipeline
        .run(&["bump-major", "frob", "tag", "twiddle=1"])
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid operations: frob, twiddle=");
    assert!(runner.calls().is_empty());
    assert_eq!(pipeline.version().to_string(), "0.0.0");
}

#[test]
fn test_dry_run_issues_no_tag_command() {
    let runner = repo("tag: v0.3.0\n");
    let mut pipeline = Pipeline::new(runner.clone()).dry_run(true);

    pipeline.run(&["bump-major", "tag"]).unwrap();

    assert_eq!(pipeline.context().created[0].name, "v1.0.0");
    assert!(runner.ran("shortlog"));
    assert!(tag_calls(&runner).is_empty());
}

#[test]
fn test_first_tag_wins_even_when_duplicated() {
    let runner = repo("tag: v2.0.0\nrelease, tag: v2.0.0\ntag: v1.9.0\n");
    let mut pipeline = Pipeline::new(runner);

    pipeline.run(&["bump-patch"]).unwrap();
    assert_eq!(pipeline.version().to_string(), "2.0.1");
}

#[test]
fn test_failure_keeps_earlier_changes_and_stops() {
    let runner = repo("tag: v1.0.0\n");
    let mut pipeline = Pipeline::new(runner.clone());

    let err = pipeline
        .run(&["bump-minor", "set-version=1.2", "tag"])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Operation \"set-version=1.2\" failed with: Invalid semantic version: 1.2"
    );
    assert_eq!(pipeline.version().to_string(), "1.1.0");
    assert!(tag_calls(&runner).is_empty());
}

#[test]
fn test_tag_creation_failure() {
    let runner = repo("tag: v1.0.0\n");
    runner.fail("tag", "tag 'v1.0.1' already exists");
    let mut pipeline = Pipeline::new(runner);

    let err = pipeline.run(&["bump-patch", "tag"]).unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("Operation \"tag\" failed with: Creating tag v1.0.1 failed:"));
    assert!(msg.contains("already exists"));
    assert!(pipeline.context().created.is_empty());
}

#[test]
fn test_explicit_version_prefix_commit_and_message() {
    let runner = repo("");
    let mut pipeline = Pipeline::new(runner.clone());

    pipeline
        .run(&[
            "git=/usr/bin/git",
            "set-tag-prefix=",
            "commit=abc1234",
            "set-version=2.0.0-rc.1",
            "message=Second release candidate",
            "tag",
        ])
        .unwrap();

    let created = &pipeline.context().created[0];
    assert_eq!(created.name, "2.0.0-rc.1");
    assert_eq!(created.target_commit, "abc1234");
    assert!(created.message.starts_with("Second release candidate\n\n"));
    assert!(runner
        .calls()
        .iter()
        .all(|call| call.starts_with("/usr/bin/git ")));
}

#[test]
fn test_separate_runs_do_not_share_state() {
    let runner = repo("tag: v1.0.0\n");

    let mut first = Pipeline::new(runner.clone());
    first.run(&["set-version=5.0.0", "bump-major"]).unwrap();

    let mut second = Pipeline::new(runner);
    second.run(&["bump-major"]).unwrap();

    assert_eq!(first.version().to_string(), "6.0.0");
    assert_eq!(second.version().to_string(), "2.0.0");
}

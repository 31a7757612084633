use release_resolve::descriptor::MockDescriptorReader;
use release_resolve::domain::SnapshotMode;
use release_resolve::error::ReleaseResolveError;
use release_resolve::publisher::{MockPublisher, DEVELOPMENT_VERSION_VAR, RELEASE_VERSION_VAR};
use release_resolve::workflow::{run, WorkflowOptions, WorkflowOutcome};
use release_resolve::Result;

fn run_workflow(
    current_version: &str,
    build_type: &str,
    no_snapshots: bool,
) -> (Result<WorkflowOutcome>, MockPublisher) {
    let reader = MockDescriptorReader::new(current_version);
    let mut publisher = MockPublisher::new();
    let options = WorkflowOptions {
        build_type: build_type.to_string(),
        snapshots: SnapshotMode::from_no_snapshots(no_snapshots),
        dry_run: false,
    };

    let outcome = run(&options, &reader, &mut publisher);
    (outcome, publisher)
}

fn assert_published(publisher: &MockPublisher, release: &str, development: &str) {
    let variables = publisher.last().expect("expected published variables");
    assert_eq!(variables.get(RELEASE_VERSION_VAR).unwrap(), release);
    assert_eq!(variables.get(DEVELOPMENT_VERSION_VAR).unwrap(), development);
    assert_eq!(variables.len(), 2);
}

#[test]
fn test_patch_version_increment() {
    let (outcome, publisher) = run_workflow("1.0.0", "patch", true);

    assert!(outcome.unwrap().published);
    assert_published(&publisher, "1.0.1", "1.0.1");
}

#[test]
fn test_patch_version_snapshots_increment() {
    let (outcome, publisher) = run_workflow("1.0.0", "patch", false);

    assert!(outcome.unwrap().published);
    assert_published(&publisher, "1.0.0", "1.0.1-SNAPSHOT");
}

#[test]
fn test_minor_version_increment() {
    let (outcome, publisher) = run_workflow("1.0.0", "minor", true);

    assert!(outcome.unwrap().published);
    assert_published(&publisher, "1.1.0", "1.1.0");
}

#[test]
fn test_minor_snapshots_version_increment() {
    let (outcome, publisher) = run_workflow("1.0.0", "minor", false);

    assert!(outcome.unwrap().published);
    assert_published(&publisher, "1.1.0", "1.1.1-SNAPSHOT");
}

#[test]
fn test_major_version_increment() {
    let (outcome, publisher) = run_workflow("1.0.0", "major", true);

    assert!(outcome.unwrap().published);
    assert_published(&publisher, "2.0.0", "2.0.0");
}

#[test]
fn test_major_snapshots_version_increment() {
    let (outcome, publisher) = run_workflow("1.0.0", "major", false);

    assert!(outcome.unwrap().published);
    assert_published(&publisher, "2.0.0", "2.0.1-SNAPSHOT");
}

#[test]
fn test_unknown_build_type() {
    let (outcome, publisher) = run_workflow("1.0.0", "ex", true);

    let err = outcome.unwrap_err();
    assert_eq!(err.to_string(), "Build type [ex] is not recognizable");
    assert!(publisher.published().is_empty());
}

#[test]
fn test_bug_fix_build_type_matches_patch() {
    let (outcome, publisher) = run_workflow("2.3.4", "bug-fix", false);

    assert!(outcome.is_ok());
    assert_published(&publisher, "2.3.4", "2.3.5-SNAPSHOT");
}

#[test]
fn test_invalid_current_version_publishes_nothing() {
    let (outcome, publisher) = run_workflow("one.two.three", "patch", true);

    assert!(matches!(
        outcome.unwrap_err(),
        ReleaseResolveError::InvalidVersion { .. }
    ));
    assert!(publisher.published().is_empty());
}

#[test]
fn test_unreadable_descriptor_publishes_nothing() {
    let reader = MockDescriptorReader::failing();
    let mut publisher = MockPublisher::new();
    let options = WorkflowOptions {
        build_type: "patch".to_string(),
        snapshots: SnapshotMode::Enabled,
        dry_run: false,
    };

    let outcome = run(&options, &reader, &mut publisher);

    assert!(matches!(
        outcome.unwrap_err(),
        ReleaseResolveError::DescriptorUnreadable { .. }
    ));
    assert!(publisher.published().is_empty());
}

#[test]
fn test_publisher_failure_propagates() {
    let reader = MockDescriptorReader::new("1.0.0");
    let mut publisher = MockPublisher::failing();
    let options = WorkflowOptions {
        build_type: "minor".to_string(),
        snapshots: SnapshotMode::Enabled,
        dry_run: false,
    };

    let outcome = run(&options, &reader, &mut publisher);

    assert!(matches!(
        outcome.unwrap_err(),
        ReleaseResolveError::Publish(_)
    ));
}

#[test]
fn test_dry_run_resolves_without_publishing() {
    let reader = MockDescriptorReader::new("1.0.0");
    let mut publisher = MockPublisher::new();
    let options = WorkflowOptions {
        build_type: "major".to_string(),
        snapshots: SnapshotMode::Disabled,
        dry_run: true,
    };

    let outcome = run(&options, &reader, &mut publisher).unwrap();

    assert!(!outcome.published);
    assert_eq!(outcome.resolution.release.to_string(), "2.0.0");
    assert!(publisher.published().is_empty());
}

#[test]
fn test_outcome_carries_descriptor_version() {
    let (outcome, _) = run_workflow("4.5.6-SNAPSHOT", "patch", false);

    let outcome = outcome.unwrap();
    assert_eq!(outcome.current_version, "4.5.6-SNAPSHOT");
    assert_eq!(outcome.resolution.release.to_string(), "4.5.6");
    assert_eq!(
        outcome.resolution.development.to_string(),
        "4.5.7-SNAPSHOT"
    );
}

#[test]
fn test_snapshot_label_stripped_from_release() {
    let (outcome, publisher) = run_workflow("1.0.0-SNAPSHOT", "minor", true);

    assert!(outcome.is_ok());
    assert_published(&publisher, "1.1.0", "1.1.0");
}

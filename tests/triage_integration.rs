use gh_triage::models::IssueRecord;
use gh_triage::triage::{deduplicate, Classifier, RuleTables, TriageRequest};

fn record(url: &str, updated_at: &str, labels: &[&str]) -> IssueRecord {
    IssueRecord {
        repository: "octo/repo".to_string(),
        url: url.to_string(),
        title: format!("Issue at {}", url),
        body: String::new(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: updated_at.to_string(),
        labels: labels.iter().map(|s| s.to_string()).collect(),
        comments: 0,
        total_reactions: 0,
    }
}

#[test]
fn test_dedup_then_classify_pipeline() {
    let stale = record("https://x/1", "2024-01-01T00:00:00Z", &["wontfix"]);
    let fresh = record("https://x/1", "2024-02-01T00:00:00Z", &["good first issue"]);
    let other = record("https://x/2", "2024-01-15T00:00:00Z", &["help wanted"]);

    let (canonical, errors) = deduplicate(vec![vec![stale, other], vec![fresh]]);
    assert!(errors.is_empty());
    assert_eq!(canonical.len(), 2);

    let classifier = Classifier::new(RuleTables::default());
    let request = TriageRequest {
        good_first_issue: true,
        accepting_prs: false,
    };

    // The canonical record for x/1 is the February version, whose labels now
    // qualify it as a good first issue.
    assert!(classifier.classify(&canonical["https://x/1"], request));
    assert!(!classifier.classify(&canonical["https://x/2"], request));
}

#[test]
fn test_dedup_commutes_over_batches() {
    let a = vec![
        record("https://x/1", "2024-01-01T00:00:00Z", &[]),
        record("https://x/2", "2024-03-01T00:00:00Z", &[]),
    ];
    let b = vec![
        record("https://x/1", "2024-02-01T00:00:00Z", &[]),
        record("https://x/3", "2024-01-01T00:00:00Z", &[]),
    ];

    let (forward, _) = deduplicate(vec![a.clone(), b.clone()]);
    let (reverse, _) = deduplicate(vec![b, a]);
    assert_eq!(forward, reverse);
}

#[test]
fn test_exclusion_dominates_every_request() {
    let classifier = Classifier::new(RuleTables::default());
    let excluded = [
        record("https://x/1", "2024-01-01T00:00:00Z", &["wontfix", "easy"]),
        record("https://x/2", "2024-01-01T00:00:00Z", &["Needs Triage"]),
        record("https://x/3", "2024-01-01T00:00:00Z", &["blocked-on-upstream"]),
    ];

    for rec in &excluded {
        for good_first_issue in [false, true] {
            for accepting_prs in [false, true] {
                let request = TriageRequest {
                    good_first_issue,
                    accepting_prs,
                };
                assert!(
                    !classifier.classify(rec, request),
                    "{} should be excluded under {:?}",
                    rec.url,
                    request
                );
            }
        }
    }
}

#[test]
fn test_unrestricted_request_keeps_unlabeled_issues() {
    let classifier = Classifier::new(RuleTables::default());
    let request = TriageRequest::default();
    assert!(classifier.classify(&record("https://x/1", "2024-01-01T00:00:00Z", &[]), request));
    assert!(classifier.classify(
        &record("https://x/2", "2024-01-01T00:00:00Z", &["bug", "backend"]),
        request
    ));
}

#[test]
fn test_snapshot_files_merge_end_to_end() {
    use gh_triage::storage::{read_snapshot, write_snapshot};

    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    write_snapshot(
        &first,
        &[
            record("https://x/1", "2024-01-01T00:00:00Z", &["easy"]),
            record("https://x/2", "2024-01-01T00:00:00Z", &[]),
        ],
    )
    .unwrap();
    write_snapshot(
        &second,
        &[record("https://x/1", "2024-02-01T00:00:00Z", &["easy", "stale"])],
    )
    .unwrap();

    let (batch_one, _) = read_snapshot(&first).unwrap();
    let (batch_two, _) = read_snapshot(&second).unwrap();
    let (canonical, errors) = deduplicate(vec![batch_one, batch_two]);

    assert!(errors.is_empty());
    assert_eq!(canonical.len(), 2);
    assert_eq!(canonical["https://x/1"].updated_at, "2024-02-01T00:00:00Z");

    // The freshest version picked up a "stale" label, so it no longer
    // classifies as open for work.
    let classifier = Classifier::new(RuleTables::default());
    assert!(!classifier.classify(&canonical["https://x/1"], TriageRequest::default()));
}

//! Integration tests for directory ingest.
//!
//! Plain-text exports stand in for PDFs so the tests do not depend on the
//! external `pdftotext` utility being installed.

use std::path::Path;

use cuervo_reports::{ingest_directory, load_index, IngestOutcome, ReportType};

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("failed to write fixture");
}

const HASHTAG_EXPORT: &str = "\
#margarita
TikTok Hashtag Analysis Presentation
December 10, 2025
Executive Summary
What You Searched
#margarita
Why You're Searching
Find summer cocktail angles.

Home bartenders want easy batch recipes for parties.
Audience Profile
Weekend hosts and brunch crowds.
NEEDS
Recipes that scale to a crowd.
OBJECTIONS
Sugar-heavy mixers.
DESIRES
Look effortless while hosting.
PAIN POINTS
Expensive bar tabs.
Content Trends
Frozen margs

Slushie machines at home are everywhere this summer.
";

#[test]
fn each_file_succeeds_or_fails_independently() {
    let input = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    write(input.path(), "a_margarita.txt", HASHTAG_EXPORT);
    write(
        input.path(),
        "b_board_deck.txt",
        "Quarterly Board Deck\nFinance\nMarch 2026\n",
    );
    write(input.path(), "c_notes.md", "ignored: not an export");

    let outcomes = ingest_directory(input.path(), reports.path()).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(
        matches!(&outcomes[0], IngestOutcome::Saved { report_type: ReportType::TiktokHashtag, identifier, .. } if identifier == "#margarita"),
        "expected saved hashtag report, got: {:?}",
        outcomes[0]
    );
    assert!(
        matches!(&outcomes[1], IngestOutcome::Failed { file, .. } if file == "b_board_deck.txt"),
        "expected failure for board deck, got: {:?}",
        outcomes[1]
    );
}

#[test]
fn ingested_reports_load_back_into_the_index() {
    let input = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    write(input.path(), "margarita.txt", HASHTAG_EXPORT);

    ingest_directory(input.path(), reports.path()).unwrap();
    let index = load_index(reports.path());

    let report = index
        .get(ReportType::TiktokHashtag, "margarita")
        .expect("report stored under its safe identifier");
    let conversation = report.as_conversation().unwrap();
    let summary = conversation.executive_summary.as_ref().unwrap();
    assert_eq!(summary.search_term, "#margarita");
    let nopd = conversation.audience_profile.as_ref().unwrap();
    assert_eq!(nopd.objections, vec!["Sugar-heavy mixers."]);
    assert_eq!(conversation.content_trends[0].title, "Frozen margs");
}

#[test]
fn missing_input_directory_is_an_error() {
    let reports = tempfile::tempdir().unwrap();
    let result = ingest_directory(&reports.path().join("missing"), reports.path());
    assert!(result.is_err(), "expected error, got: {result:?}");
}

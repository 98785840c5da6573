//! Qualitative report parsing and storage.
//!
//! Flattened text from vendor slide exports is classified by its title slide,
//! split on known section headings, and turned into typed
//! [`QualitativeReport`] records. Parsed reports are stored as one JSON file
//! per report and loaded back into a [`ReportIndex`] for querying.

pub mod detect;
pub mod error;
pub mod fields;
pub mod ingest;
pub mod nopd;
pub mod parser;
pub mod query;
pub mod sections;
pub mod store;
pub mod types;

pub use detect::{detect_title, TitleInfo};
pub use error::ReportError;
pub use ingest::{extract_pdf_text, ingest_directory, ingest_file, IngestOutcome};
pub use nopd::parse_nopd;
pub use parser::parse_report;
pub use sections::{split_sections, Sections};
pub use store::{load_index, read_report, safe_file_stem, save_report, ReportIndex};
pub use types::{
    BrandMention, ConversationMap, ConversationReport, CreatorArchetype, CreatorSummary,
    ExecutiveSummary, HashtagAnalysis, HowToWin, NewsReport, Nopd, ProfileReport,
    QualitativeReport, ReportBody, ReportType, Snapshot, SponsorshipSuggestion, Sponsorships,
    StatLine, SummaryStatistics, TitledBlock, TopPost, TopPosts,
};

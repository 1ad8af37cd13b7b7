//! Filing-index loading, filtering, and URL resolution.
//!
//! The Clerk of the House publishes a yearly financial-disclosure index as
//! XML (`<year>FD.xml`), one `<Member>` element per filing. This module
//! deserializes that index, keeps only periodic transaction reports
//! (FilingType `"P"`), and resolves each survivor into a [`ResolvedFiling`]
//! carrying its deterministic PDF URL and a reordered date label.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use url::Url;
//! use fdfetch::index::{DISCLOSURES_BASE_URL, load_plan};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse(DISCLOSURES_BASE_URL)?;
//! let plan = load_plan(Path::new("data/raw/2022FD.xml"), &base)?;
//! println!("{} filings to download", plan.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod record;

pub use error::IndexError;
pub use record::{FilingRecord, ResolvedFiling};

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

/// Production base address of the House disclosure service.
pub const DISCLOSURES_BASE_URL: &str = "https://disclosures-clerk.house.gov";

/// Filing-type code for periodic transaction reports, the only kind fetched.
pub const PTR_FILING_TYPE: &str = "P";

/// Root element of the yearly index document.
#[derive(Debug, Deserialize)]
struct FilingIndex {
    #[serde(rename = "Member", default)]
    members: Vec<FilingRecord>,
}

/// Reads the index file at `path` and resolves it into a download plan.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if the file cannot be read, and propagates
/// resolution errors from [`resolve_index`].
pub fn load_plan(path: &Path, base_url: &Url) -> Result<Vec<ResolvedFiling>, IndexError> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::io(path, source))?;
    let plan = resolve_index(&content, base_url)?;
    info!(path = %path.display(), filings = plan.len(), "loaded filing index");
    Ok(plan)
}

/// Resolves an index document into an ordered download plan.
///
/// Records whose FilingType is not exactly `"P"` are dropped without
/// diagnostic; the survivors keep their source order.
///
/// # Errors
///
/// Returns [`IndexError::Schema`] when the document does not deserialize
/// into the expected shape (including a missing required column), and
/// [`IndexError::Format`] when a retained record's year or filing date
/// cannot be interpreted.
pub fn resolve_index(xml: &str, base_url: &Url) -> Result<Vec<ResolvedFiling>, IndexError> {
    let index: FilingIndex = quick_xml::de::from_str(xml).map_err(IndexError::schema)?;
    let total = index.members.len();

    let mut plan = Vec::new();
    for record in index.members {
        if record.filing_type != PTR_FILING_TYPE {
            continue;
        }
        plan.push(ResolvedFiling::resolve(record, base_url)?);
    }

    debug!(total, retained = plan.len(), "filtered periodic transaction reports");
    Ok(plan)
}

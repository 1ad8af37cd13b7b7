//! Index record types and the pure derivations applied to them.

use serde::Deserialize;
use url::Url;

use super::error::IndexError;

/// One row of the yearly index, as shipped by the Clerk's office.
///
/// Prefix, Suffix, and StateDst are required by the index schema but are
/// projected away during resolution; they never reach [`ResolvedFiling`].
#[derive(Debug, Clone, Deserialize)]
pub struct FilingRecord {
    /// Honorific, e.g. `Hon.`. Present in the schema, not carried forward.
    #[serde(rename = "Prefix")]
    pub prefix: String,
    /// Filer's last name; becomes the filename stem.
    #[serde(rename = "Last")]
    pub last: String,
    /// Name suffix. Present in the schema, not carried forward.
    #[serde(rename = "Suffix")]
    pub suffix: String,
    /// Filing-type code; only `"P"` records are downloaded.
    #[serde(rename = "FilingType")]
    pub filing_type: String,
    /// State and district, e.g. `CA11`. Present in the schema, not carried
    /// forward.
    #[serde(rename = "StateDst")]
    pub state_dst: String,
    /// Reporting year as it appears in the source.
    #[serde(rename = "Year")]
    pub year: String,
    /// Document identifier; keyed into the PDF URL.
    #[serde(rename = "DocID")]
    pub doc_id: String,
    /// Filing date in `MM/DD/YYYY` shape. Never calendar-validated.
    #[serde(rename = "FilingDate")]
    pub filing_date: String,
}

/// A retained index record augmented with its download URL and date label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFiling {
    /// Filer's last name.
    pub last: String,
    /// Document identifier.
    pub doc_id: String,
    /// Reporting year, validated as a 4-digit number.
    pub year: u16,
    /// Filing date reordered to `YYYY-MM-DD` (fields verbatim, no padding).
    pub date_label: String,
    /// Download URL for the filing's PDF.
    pub url: Url,
}

impl ResolvedFiling {
    /// Resolves a retained record into a plan entry.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Format`] when the record's year or filing date
    /// cannot be interpreted.
    pub(crate) fn resolve(record: FilingRecord, base_url: &Url) -> Result<Self, IndexError> {
        let year = parse_year(&record.year)?;
        let date_label = reorder_date(&record.filing_date)?;
        let url = ptr_url(base_url, year, &record.doc_id)?;
        Ok(Self {
            last: record.last,
            doc_id: record.doc_id,
            year,
            date_label,
            url,
        })
    }

    /// Output filename for this filing, `<Last>_<YYYY-MM-DD>.pdf`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}_{}.pdf", self.last, self.date_label)
    }

    /// Collision-fallback filename carrying the document id,
    /// `<Last>_<YYYY-MM-DD>_<DocID>.pdf`.
    #[must_use]
    pub fn disambiguated_file_name(&self) -> String {
        format!("{}_{}_{}.pdf", self.last, self.date_label, self.doc_id)
    }
}

/// Validates the source year as a 4-digit calendar year.
pub(crate) fn parse_year(raw: &str) -> Result<u16, IndexError> {
    let trimmed = raw.trim();
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed
            .parse()
            .map_err(|_| IndexError::format("Year", raw))
    } else {
        Err(IndexError::format("Year", raw))
    }
}

/// Reorders a `MM/DD/YYYY` date string to `YYYY-MM-DD`.
///
/// Pure field reordering: the pieces are kept verbatim (no zero padding) and
/// never checked for calendar validity, so `13/40/2022` becomes `2022-13-40`.
pub(crate) fn reorder_date(raw: &str) -> Result<String, IndexError> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts[..] else {
        return Err(IndexError::format("FilingDate", raw));
    };
    Ok(format!("{year}-{month}-{day}"))
}

/// Derives the filing's PDF URL from the base address, year, and document id.
pub(crate) fn ptr_url(base: &Url, year: u16, doc_id: &str) -> Result<Url, IndexError> {
    base.join(&format!("public_disc/ptr-pdfs/{year}/{doc_id}.pdf"))
        .map_err(|_| IndexError::format("DocID", doc_id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> ResolvedFiling {
        ResolvedFiling {
            last: "Alpha".to_string(),
            doc_id: "12345".to_string(),
            year: 2022,
            date_label: "2022-1-15".to_string(),
            url: Url::parse("https://disclosures-clerk.house.gov/public_disc/ptr-pdfs/2022/12345.pdf")
                .unwrap(),
        }
    }

    #[test]
    fn test_parse_year_accepts_four_digits() {
        assert_eq!(parse_year("2022").unwrap(), 2022);
        assert_eq!(parse_year(" 2023 ").unwrap(), 2023);
    }

    #[test]
    fn test_parse_year_rejects_other_shapes() {
        for raw in ["22", "20222", "20x2", "", "-999"] {
            assert!(parse_year(raw).is_err(), "should reject {raw:?}");
        }
    }

    #[test]
    fn test_reorder_date_is_pure_field_reordering() {
        assert_eq!(reorder_date("01/15/2022").unwrap(), "2022-01-15");
        assert_eq!(reorder_date("1/15/2022").unwrap(), "2022-1-15");
    }

    #[test]
    fn test_reorder_date_skips_calendar_validation() {
        assert_eq!(reorder_date("13/40/2022").unwrap(), "2022-13-40");
    }

    #[test]
    fn test_reorder_date_rejects_wrong_field_count() {
        assert!(reorder_date("2022-01-15").is_err());
        assert!(reorder_date("1/15").is_err());
        assert!(reorder_date("1/15/2022/extra").is_err());
    }

    #[test]
    fn test_ptr_url_substitutes_year_and_doc_id() {
        let base = Url::parse("https://disclosures-clerk.house.gov").unwrap();
        let url = ptr_url(&base, 2022, "12345").unwrap();
        assert_eq!(
            url.as_str(),
            "https://disclosures-clerk.house.gov/public_disc/ptr-pdfs/2022/12345.pdf"
        );
    }

    #[test]
    fn test_file_name_uses_last_and_date_label() {
        assert_eq!(sample().file_name(), "Alpha_2022-1-15.pdf");
    }

    #[test]
    fn test_disambiguated_file_name_appends_doc_id() {
        assert_eq!(
            sample().disambiguated_file_name(),
            "Alpha_2022-1-15_12345.pdf"
        );
    }
}

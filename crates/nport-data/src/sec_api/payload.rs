//! Raw sec-api.io `form-nport` search payloads.
//!
//! Fields are optional at this layer so the reshape step can name exactly
//! which part of a filing was missing.

use serde::{Deserialize, Serialize};

/// Search request body.
///
/// `from` and `size` are strings because that is how the upstream query DSL
/// documents them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// Lucene-style query string
    pub query: String,
    /// Offset of the first result
    pub from: String,
    /// Number of results requested
    pub size: String,
    /// Sort clauses, applied in order
    pub sort: Vec<SortClause>,
}

/// Single sort clause: `{"<field>": {"order": "<asc|desc>"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortClause {
    /// Sort by filing timestamp
    #[serde(rename = "filedAt")]
    pub filed_at: SortOrder,
}

/// Sort direction wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOrder {
    /// `"asc"` or `"desc"`
    pub order: String,
}

/// Query field carrying the filer's CIK.
pub const CIK_FIELD: &str = "filerInfo.filer.issuerCredentials.cik";

impl SearchQuery {
    /// Most recent filing for a CIK: one result, newest `filedAt` first.
    ///
    /// The identifier is passed through verbatim.
    ///
    /// # Example
    /// ```
    /// use nport_data::sec_api::SearchQuery;
    ///
    /// let query = SearchQuery::latest_for_cik("0000884394");
    /// assert_eq!(query.query, "filerInfo.filer.issuerCredentials.cik:0000884394");
    /// assert_eq!(query.size, "1");
    /// ```
    pub fn latest_for_cik(cik: &str) -> Self {
        Self {
            query: format!("{CIK_FIELD}:{cik}"),
            from: "0".to_string(),
            size: "1".to_string(),
            sort: vec![SortClause {
                filed_at: SortOrder {
                    order: "desc".to_string(),
                },
            }],
        }
    }
}

/// Top-level search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResponse {
    /// Matching filings, newest first
    #[serde(default)]
    pub filings: Option<Vec<RawFiling>>,
}

/// One N-PORT filing as returned by the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFiling {
    /// General information block
    #[serde(default)]
    pub gen_info: Option<RawGenInfo>,
    /// Securities held by the fund
    #[serde(default)]
    pub invst_or_secs: Option<Vec<RawHolding>>,
}

/// General information block of a filing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGenInfo {
    /// Registrant name
    #[serde(default)]
    pub reg_name: Option<String>,
}

/// One entry of the `invstOrSecs` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHolding {
    /// Issuer or security name
    #[serde(default)]
    pub name: Option<String>,
    /// CUSIP identifier
    #[serde(default)]
    pub cusip: Option<String>,
    /// Units held (integral in some filings, fractional in others)
    #[serde(default)]
    pub balance: Option<f64>,
    /// Market value in US dollars
    #[serde(default, rename = "valUSD")]
    pub val_usd: Option<f64>,
}

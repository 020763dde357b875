//! Normalized filing summary and the reshape step that builds it.

use crate::error::{NportError, Result};
use crate::sec_api::{RawFiling, RawHolding, RawSearchResponse};
use serde::Serialize;

/// A single security position disclosed in a filing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    /// Issuer or security name
    pub name: String,
    /// CUSIP identifier
    pub cusip: String,
    /// Units held; may be fractional
    pub balance: f64,
    /// Market value in US dollars
    pub value: f64,
}

impl Holding {
    /// Map one upstream `invstOrSecs` entry, renaming `valUSD` to `value`.
    ///
    /// `position` is only used to point at the offending entry in errors.
    pub fn from_raw(raw: RawHolding, position: usize) -> Result<Self> {
        let missing = |field: &str| {
            NportError::malformed(format!("holding #{position} is missing `{field}`"))
        };

        Ok(Self {
            name: raw.name.ok_or_else(|| missing("name"))?,
            cusip: raw.cusip.ok_or_else(|| missing("cusip"))?,
            balance: raw.balance.ok_or_else(|| missing("balance"))?,
            value: raw.val_usd.ok_or_else(|| missing("valUSD"))?,
        })
    }
}

/// The relay's response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingSummary {
    /// Name of the fund or entity that filed
    pub registrant_name: String,
    /// Holdings in upstream order; always present, possibly empty
    pub holdings: Vec<Holding>,
}

impl FilingSummary {
    /// Reshape a single upstream filing.
    pub fn from_filing(filing: RawFiling) -> Result<Self> {
        let registrant_name = filing
            .gen_info
            .and_then(|info| info.reg_name)
            .ok_or_else(|| NportError::malformed("filing is missing `genInfo.regName`"))?;

        if registrant_name.trim().is_empty() {
            return Err(NportError::malformed("filing has an empty `genInfo.regName`"));
        }

        let holdings = filing
            .invst_or_secs
            .ok_or_else(|| NportError::malformed("filing is missing `invstOrSecs`"))?
            .into_iter()
            .enumerate()
            .map(|(position, raw)| Holding::from_raw(raw, position))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            registrant_name,
            holdings,
        })
    }

    /// Total reported market value across all holdings.
    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value).sum()
    }
}

/// Take the first (most recent) filing of a search response and reshape it.
///
/// An empty result set is reported as [`NportError::MalformedResult`].
pub fn summarize(cik: &str, response: RawSearchResponse) -> Result<FilingSummary> {
    let filing = response
        .filings
        .ok_or_else(|| NportError::malformed("upstream response is missing `filings`"))?
        .into_iter()
        .next()
        .ok_or_else(|| NportError::malformed(format!("no N-PORT filings found for CIK {cik}")))?;

    FilingSummary::from_filing(filing)
}

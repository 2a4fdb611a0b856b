//! The universe of quote field names accepted for projection.
//!
//! The list mirrors the provider's v7 quote payload. It is defined once and
//! never mutated; it serves purely as a validation oracle for
//! [`project`](crate::quote::project).

use crate::core::FinError;

/// All field names that may appear in a projection request.
pub const ACCEPTED_FIELDS: &[&str] = &[
    "language",
    "region",
    "quoteType",
    "quoteSourceName",
    "triggerable",
    "currency",
    "marketState",
    "tradeable",
    "fiftyTwoWeekRange",
    "fiftyTwoWeekHighChange",
    "fiftyTwoWeekHighChangePercent",
    "fiftyTwoWeekLow",
    "fiftyTwoWeekHigh",
    "earningsTimestamp",
    "earningsTimestampStart",
    "earningsTimestampEnd",
    "trailingAnnualDividendRate",
    "trailingAnnualDividendYield",
    "epsTrailingTwelveMonths",
    "epsForward",
    "epsCurrentYear",
    "priceEpsCurrentYear",
    "sharesOutstanding",
    "bookValue",
    "fiftyDayAverage",
    "fiftyDayAverageChange",
    "fiftyDayAverageChangePercent",
    "twoHundredDayAverage",
    "twoHundredDayAverageChange",
    "twoHundredDayAverageChangePercent",
    "marketCap",
    "forwardPE",
    "priceToBook",
    "sourceInterval",
    "exchangeDataDelayedBy",
    "exchange",
    "shortName",
    "longName",
    "messageBoardId",
    "exchangeTimezoneName",
    "exchangeTimezoneShortName",
    "gmtOffSetMilliseconds",
    "market",
    "esgPopulated",
    "priceHint",
    "postMarketChangePercent",
    "postMarketTime",
    "postMarketPrice",
    "postMarketChange",
    "regularMarketChange",
    "regularMarketChangePercent",
    "regularMarketTime",
    "regularMarketPrice",
    "regularMarketDayHigh",
    "regularMarketDayRange",
    "regularMarketDayLow",
    "regularMarketVolume",
    "regularMarketPreviousClose",
    "bid",
    "ask",
    "bidSize",
    "askSize",
    "fullExchangeName",
    "financialCurrency",
    "regularMarketOpen",
    "averageDailyVolume3Month",
    "averageDailyVolume10Day",
    "fiftyTwoWeekLowChange",
    "fiftyTwoWeekLowChangePercent",
    "dividendDate",
    "firstTradeDateMilliseconds",
    "displayName",
    "symbol",
];

/// Whether `name` belongs to the accepted quote field universe.
#[must_use]
pub fn accepted_field(name: &str) -> bool {
    ACCEPTED_FIELDS.contains(&name)
}

/// Fail with [`FinError::InvalidField`] on the first field that is not in
/// the accepted universe.
pub(crate) fn ensure_accepted(fields: &[&str]) -> Result<(), FinError> {
    for f in fields {
        if !accepted_field(f) {
            return Err(FinError::InvalidField((*f).to_string()));
        }
    }
    Ok(())
}

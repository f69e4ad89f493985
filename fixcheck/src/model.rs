use std::collections::HashSet;

use serde::Deserialize;

/// Listed-instrument record decoded from the JSON fixture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// ISIN-style identifier.
    pub isin: String,
    /// Display name (ticker).
    pub name: String,
    /// Exchange codes the instrument is listed on; unordered,
    /// membership-checked.
    pub exchanges: HashSet<String>,
    pub additional_info: AdditionalInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub trading_enabled: bool,
    pub has_options: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::from_json_slice;
    use crate::error::Error;

    #[test]
    fn test_instrument_deserializes_camel_case_fields() -> Result<(), Error> {
        let body = br#"{
            "isin": "US0378331005",
            "name": "AAPL",
            "exchanges": ["NASDAQ"],
            "additionalInfo": {"tradingEnabled": false, "hasOptions": true}
        }"#;
        let instrument: Instrument = from_json_slice(body)?;
        assert_eq!(instrument.isin, "US0378331005");
        assert_eq!(instrument.name, "AAPL");
        assert_eq!(instrument.exchanges.len(), 1);
        assert!(instrument.exchanges.contains("NASDAQ"));
        assert!(!instrument.additional_info.trading_enabled);
        assert!(instrument.additional_info.has_options);
        Ok(())
    }

    #[test]
    fn test_duplicate_exchange_codes_collapse() -> Result<(), Error> {
        let body = br#"{
            "isin": "US0000000000",
            "name": "DUP",
            "exchanges": ["NYSE", "NYSE"],
            "additionalInfo": {"tradingEnabled": true, "hasOptions": false}
        }"#;
        let instrument: Instrument = from_json_slice(body)?;
        assert_eq!(instrument.exchanges.len(), 1);
        Ok(())
    }
}

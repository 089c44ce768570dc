//! Wire model of the USD-BRL quotation.
//!
//! The same shape is served by the upstream API and re-served by our service,
//! so both processes decode it with these types. Every field is a string on
//! the wire and any of them may be missing; missing fields decode as empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationEnvelope {
    #[serde(rename = "USDBRL", default)]
    pub usdbrl: Quotation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quotation {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

impl QuotationEnvelope {
    pub fn bid(&self) -> &str {
        &self.usdbrl.bid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPSTREAM_BODY: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.4612","low":"5.4101","varBid":"0.0123","pctChange":"0.23","bid":"5.4301","ask":"5.4311","timestamp":"1729080000","create_date":"2024-10-16 09:00:00"}}"#;

    #[test]
    fn decodes_full_upstream_payload() {
        let env: QuotationEnvelope = serde_json::from_str(UPSTREAM_BODY).unwrap();

        assert_eq!(env.bid(), "5.4301");
        assert_eq!(env.usdbrl.var_bid, "0.0123");
        assert_eq!(env.usdbrl.pct_change, "0.23");
        assert_eq!(env.usdbrl.create_date, "2024-10-16 09:00:00");
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let env: QuotationEnvelope = serde_json::from_str(r#"{"USDBRL":{"bid":"5.43"}}"#).unwrap();

        assert_eq!(env.bid(), "5.43");
        assert!(env.usdbrl.code.is_empty());
        assert!(env.usdbrl.ask.is_empty());
    }

    #[test]
    fn serializes_with_upstream_field_names() {
        let env: QuotationEnvelope = serde_json::from_str(UPSTREAM_BODY).unwrap();
        let value = serde_json::to_value(&env).unwrap();

        assert_eq!(value["USDBRL"]["varBid"], "0.0123");
        assert_eq!(value["USDBRL"]["pctChange"], "0.23");
        assert_eq!(value["USDBRL"]["create_date"], "2024-10-16 09:00:00");
        assert!(value["USDBRL"].get("var_bid").is_none());
    }

    #[test]
    fn rejects_non_string_bid() {
        let res = serde_json::from_str::<QuotationEnvelope>(r#"{"USDBRL":{"bid":5.43}}"#);
        assert!(res.is_err());
    }
}

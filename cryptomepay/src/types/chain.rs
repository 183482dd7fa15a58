//! Supported settlement chains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Blockchain a payment settles on.
///
/// Identifiers the gateway adds later decode as [`ChainType::Other`] rather
/// than failing the whole response. Decoding from the wire is exact, so the
/// value re-encodes byte for byte; [`FromStr`] is case-insensitive for user
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChainType {
    Trc20,
    Bsc,
    Polygon,
    Eth,
    Arbitrum,
    Other(String),
}

impl ChainType {
    /// Returns the wire identifier (e.g., "BSC").
    pub fn as_str(&self) -> &str {
        match self {
            ChainType::Trc20 => "TRC20",
            ChainType::Bsc => "BSC",
            ChainType::Polygon => "POLYGON",
            ChainType::Eth => "ETH",
            ChainType::Arbitrum => "ARBITRUM",
            ChainType::Other(s) => s,
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "TRC20" => ChainType::Trc20,
            "BSC" => ChainType::Bsc,
            "POLYGON" => ChainType::Polygon,
            "ETH" => ChainType::Eth,
            "ARBITRUM" => ChainType::Arbitrum,
            _ => ChainType::Other(s.to_string()),
        })
    }
}

impl From<String> for ChainType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "TRC20" => ChainType::Trc20,
            "BSC" => ChainType::Bsc,
            "POLYGON" => ChainType::Polygon,
            "ETH" => ChainType::Eth,
            "ARBITRUM" => ChainType::Arbitrum,
            _ => ChainType::Other(s),
        }
    }
}

impl From<ChainType> for String {
    fn from(chain: ChainType) -> Self {
        chain.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_type_as_str() {
        assert_eq!(ChainType::Trc20.as_str(), "TRC20");
        assert_eq!(ChainType::Bsc.as_str(), "BSC");
        assert_eq!(ChainType::Polygon.as_str(), "POLYGON");
        assert_eq!(ChainType::Eth.as_str(), "ETH");
        assert_eq!(ChainType::Arbitrum.as_str(), "ARBITRUM");
    }

    #[test]
    fn test_chain_type_from_str_case_insensitive() {
        assert_eq!("bsc".parse::<ChainType>().unwrap(), ChainType::Bsc);
        assert_eq!("Polygon".parse::<ChainType>().unwrap(), ChainType::Polygon);
        assert_eq!(
            "SOLANA".parse::<ChainType>().unwrap(),
            ChainType::Other("SOLANA".to_string())
        );
    }

    #[test]
    fn test_chain_type_serde() {
        assert_eq!(serde_json::to_string(&ChainType::Trc20).unwrap(), "\"TRC20\"");

        let chain: ChainType = serde_json::from_str("\"ARBITRUM\"").unwrap();
        assert_eq!(chain, ChainType::Arbitrum);

        let chain: ChainType = serde_json::from_str("\"BASE\"").unwrap();
        assert_eq!(chain, ChainType::Other("BASE".to_string()));
        assert_eq!(serde_json::to_string(&chain).unwrap(), "\"BASE\"");
    }

    #[test]
    fn test_chain_type_wire_decoding_is_exact() {
        let chain: ChainType = serde_json::from_str("\"bsc\"").unwrap();
        assert_eq!(chain, ChainType::Other("bsc".to_string()));
        assert_eq!(chain.as_str(), "bsc");
    }
}

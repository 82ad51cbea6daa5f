//! Parameters of the NFT collection, and their encoding into the calldata
//! expected by the collection's initializer & the proxy's constructor

use std::{fs::File, path::Path, str::FromStr};

use contracts_common::{
    custom_serde::CalldataSerializable,
    hex::hex_to_felt,
    types::{EncodedString, PackedU256},
};
use eyre::{eyre, Result};
use ruint::aliases::U256;
use serde::Deserialize;
use starknet::core::{types::FieldElement, utils::get_selector_from_name};
use tracing::debug;

use crate::commands::utils::INITIALIZER_FN_NAME;

/// The denominator of royalty fees expressed in basis points
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;

/// The human-readable parameters of the NFT collection.
///
/// Any field missing from a config file takes its value from [`CollectionConfig::default`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionConfig {
    /// The collection name, at most 31 ASCII characters
    pub name: String,
    /// The collection symbol, at most 31 ASCII characters
    pub symbol: String,
    /// The owner of the collection, in hex form.
    /// Defaults to the deploying account.
    pub owner: Option<String>,
    /// The base URI of token metadata
    pub token_uri: String,
    /// The suffix appended to a token's URI
    pub token_uri_suffix: String,
    /// The maximum number of tokens, in decimal or `0x`-prefixed hex form
    pub max_supply: String,
    /// The royalty fee, in basis points
    pub fee_basis_points: u16,
    /// The URI of the collection-level metadata
    pub contract_uri: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: "Mystis OG Pass".to_string(),
            symbol: "MOGP".to_string(),
            owner: None,
            token_uri:
                "https://gateway.pinata.cloud/ipfs/QmNNhGMNGppvMhZ438m51qSJ5g6Q7kmXiFcbtnda6t3khh/"
                    .to_string(),
            token_uri_suffix: ".json".to_string(),
            max_supply: "555".to_string(),
            fee_basis_points: 750,
            contract_uri:
                "https://gateway.pinata.cloud/ipfs/QmUoW7druoHnJeaW1N6NuTWqZwbY8Hsb7HFu2qDYv4PwPN"
                    .to_string(),
        }
    }
}

impl CollectionConfig {
    /// Reads the config from a JSON file, or falls back to the defaults if no path is given
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!("Reading collection config from {path}...");
                Ok(serde_json::from_reader(File::open(Path::new(path))?)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Encodes the config into field elements.
    ///
    /// `default_owner` is used when the config does not name an owner.
    pub fn encode(&self, default_owner: FieldElement) -> Result<CollectionCalldata> {
        if self.fee_basis_points > MAX_FEE_BASIS_POINTS {
            return Err(eyre!(
                "fee of {} basis points exceeds {}",
                self.fee_basis_points,
                MAX_FEE_BASIS_POINTS
            ));
        }

        let owner = match &self.owner {
            Some(owner) => hex_to_felt(owner)?,
            None => default_owner,
        };

        let max_supply = U256::from_str(&self.max_supply)
            .map_err(|e| eyre!("invalid max supply {:?}: {e}", self.max_supply))?;

        Ok(CollectionCalldata {
            name: EncodedString::short(&self.name)?,
            symbol: EncodedString::short(&self.symbol)?,
            owner,
            token_uri: EncodedString::chunked(&self.token_uri)?,
            token_uri_suffix: EncodedString::short(&self.token_uri_suffix)?,
            max_supply: PackedU256::split(max_supply),
            fee_basis_points: FieldElement::from(self.fee_basis_points),
            contract_uri: EncodedString::chunked(&self.contract_uri)?,
        })
    }
}

/// The collection parameters, encoded for use as contract arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionCalldata {
    /// The encoded collection name
    pub name: EncodedString,
    /// The encoded collection symbol
    pub symbol: EncodedString,
    /// The address of the collection owner
    pub owner: FieldElement,
    /// The chunks of the token base URI
    pub token_uri: EncodedString,
    /// The encoded token URI suffix
    pub token_uri_suffix: EncodedString,
    /// The maximum supply, split into limbs
    pub max_supply: PackedU256,
    /// The royalty fee, in basis points
    pub fee_basis_points: FieldElement,
    /// The chunks of the collection metadata URI
    pub contract_uri: EncodedString,
}

impl CollectionCalldata {
    /// The arguments of the NFT `initializer`, in declared order
    pub fn initializer_calldata(&self) -> Vec<FieldElement> {
        [
            self.name.to_calldata(),
            self.symbol.to_calldata(),
            self.owner.to_calldata(),
            self.token_uri.to_calldata(),
            self.token_uri_suffix.to_calldata(),
            self.max_supply.to_calldata(),
            self.fee_basis_points.to_calldata(),
        ]
        .concat()
    }

    /// The arguments of the proxy constructor, which calls the NFT `initializer`
    /// on the given implementation class
    pub fn proxy_constructor_calldata(
        &self,
        implementation_class_hash: FieldElement,
    ) -> Result<Vec<FieldElement>> {
        let selector = get_selector_from_name(INITIALIZER_FN_NAME)?;
        Ok([
            vec![implementation_class_hash, selector],
            self.initializer_calldata().to_calldata(),
        ]
        .concat())
    }

    /// The arguments of `setContractURI`
    pub fn contract_uri_calldata(&self) -> Vec<FieldElement> {
        self.contract_uri.to_calldata()
    }
}

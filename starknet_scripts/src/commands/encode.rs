//! Script to print the calldata of a deployment without submitting it

use contracts_common::{
    encoding::{format_string_sequence_for_display, split_long_string},
    hex::{felt_to_hex, hex_to_felt},
};
use eyre::{eyre, Result};
use starknet::core::types::FieldElement;
use tracing::info;

use crate::{cli::EncodeArgs, config::CollectionConfig};

pub fn encode_calldata(args: EncodeArgs) -> Result<()> {
    let EncodeArgs {
        owner,
        nft_class_hash,
        collection_config,
    } = args;

    let mut config = CollectionConfig::load(collection_config.as_deref())?;
    if owner.is_some() {
        config.owner = owner;
    }
    if config.owner.is_none() {
        return Err(eyre!("an owner is required, either as an argument or in the config"));
    }

    // The owner is always set at this point, so the default is never used
    let collection = config.encode(FieldElement::ZERO)?;

    info!(
        "Token URI chunks: {}",
        format_string_sequence_for_display(&split_long_string(&config.token_uri)?)?
    );
    info!(
        "Contract URI chunks: {}",
        format_string_sequence_for_display(&split_long_string(&config.contract_uri)?)?
    );

    info!(
        "Initializer calldata:\n{}",
        format_calldata(&collection.initializer_calldata())
    );

    if let Some(nft_class_hash) = nft_class_hash {
        let calldata = collection.proxy_constructor_calldata(hex_to_felt(&nft_class_hash)?)?;
        info!("Proxy constructor calldata:\n{}", format_calldata(&calldata));
    }

    info!(
        "Contract URI calldata:\n{}",
        format_calldata(&collection.contract_uri_calldata())
    );

    Ok(())
}

/// Renders calldata one hex element per line
fn format_calldata(calldata: &[FieldElement]) -> String {
    calldata
        .iter()
        .map(felt_to_hex)
        .collect::<Vec<_>>()
        .join("\n")
}

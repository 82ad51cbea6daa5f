//! Script to deploy the NFT collection behind its proxy & configure it

use contracts_common::hex::hex_to_felt;
use eyre::{bail, Result};
use starknet::{
    accounts::Account,
    core::types::{FieldElement, InvokeTransactionResult},
};
use tracing::{debug, info};

use crate::{
    cli::DeployArgs,
    commands::utils::{
        artifact_paths, calculate_contract_address, call_contract, deploy, get_or_declare,
        invoke_contract, setup_account, wait_for_acceptance, GET_ADMIN_FN_NAME,
        NFT_CONTRACT_NAME, PROXY_CONTRACT_NAME, SET_CONTRACT_URI_FN_NAME,
    },
    config::CollectionConfig,
};

pub async fn deploy_and_configure(args: DeployArgs) -> Result<()> {
    let DeployArgs {
        address,
        private_key,
        network,
        rpc_url,
        artifacts_path,
        nft_class_hash,
        proxy_class_hash,
        salt,
        collection_config,
    } = args;

    // Setup account
    debug!("Setting up account...");
    let address_felt = hex_to_felt(&address)?;
    let account = setup_account(address_felt, &private_key, network, &rpc_url)?;

    let collection = CollectionConfig::load(collection_config.as_deref())?.encode(address_felt)?;

    // Declare NFT implementation
    let (nft_sierra_path, nft_casm_path) = artifact_paths(&artifacts_path, NFT_CONTRACT_NAME);
    let nft_class_hash_felt = get_or_declare(
        nft_class_hash.as_deref().map(hex_to_felt).transpose()?,
        nft_sierra_path,
        nft_casm_path,
        &account,
    )
    .await?;
    info!("NFT class hash: {:#x}", nft_class_hash_felt);

    // Declare proxy
    let (proxy_sierra_path, proxy_casm_path) =
        artifact_paths(&artifacts_path, PROXY_CONTRACT_NAME);
    let proxy_class_hash_felt = get_or_declare(
        proxy_class_hash.as_deref().map(hex_to_felt).transpose()?,
        proxy_sierra_path,
        proxy_casm_path,
        &account,
    )
    .await?;
    info!("Proxy class hash: {:#x}", proxy_class_hash_felt);

    // Deploy proxy, initializing the collection through it
    debug!("Deploying proxy contract...");
    let salt_felt = match salt {
        Some(salt) => hex_to_felt(&salt)?,
        None => FieldElement::ZERO,
    };
    let calldata = collection.proxy_constructor_calldata(nft_class_hash_felt)?;
    let InvokeTransactionResult {
        transaction_hash, ..
    } = deploy(&account, proxy_class_hash_felt, &calldata, salt_felt).await?;
    let proxy_address = calculate_contract_address(salt_felt, proxy_class_hash_felt, &calldata);
    info!(
        "Proxy contract deployed at {:#x}\n\
        Transaction hash: {:#x}",
        proxy_address, transaction_hash,
    );
    wait_for_acceptance(&account, transaction_hash).await?;

    // Check that the proxy admin is the deploying account
    let admin = call_contract(&account, proxy_address, GET_ADMIN_FN_NAME, vec![]).await?;
    match admin.first() {
        Some(admin) if *admin == account.address() => {
            info!("Proxy admin set to our account: {:#x}", admin)
        }
        Some(admin) => bail!(
            "proxy admin {:#x} is not the deploying account {:#x}",
            admin,
            account.address()
        ),
        None => bail!("{} returned no value", GET_ADMIN_FN_NAME),
    }

    // Set the collection-level metadata URI
    let InvokeTransactionResult {
        transaction_hash, ..
    } = invoke_contract(
        &account,
        proxy_address,
        SET_CONTRACT_URI_FN_NAME,
        collection.contract_uri_calldata(),
    )
    .await?;
    wait_for_acceptance(&account, transaction_hash).await?;

    info!(
        "NFT collection successfully deployed & configured!\n\
        Proxy contract address: {:#x}\n\
        NFT class hash: {:#x}\n\
        Proxy class hash: {:#x}\n\
        Contract URI transaction hash: {:#x}\n",
        proxy_address, nft_class_hash_felt, proxy_class_hash_felt, transaction_hash,
    );

    Ok(())
}

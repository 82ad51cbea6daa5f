use contracts_common::hex::{felt_to_hex, hex_to_felt};
use eyre::{bail, eyre, Result};
use starknet::{
    accounts::{Account, Call, ConnectedAccount, SingleOwnerAccount},
    contract::ContractFactory,
    core::{
        chain_id,
        crypto::compute_hash_on_elements,
        types::{
            contract::{CompiledClass, SierraClass},
            BlockId, BlockTag, DeclareTransactionResult, ExecutionResult, FieldElement,
            FunctionCall, InvokeTransactionResult, MaybePendingTransactionReceipt,
            TransactionReceipt,
        },
        utils::{cairo_short_string_to_felt, get_selector_from_name},
    },
    providers::{jsonrpc::HttpTransport, JsonRpcClient, Provider},
    signers::{LocalWallet, SigningKey},
};
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tokio::time::sleep;
use tracing::{debug, trace};
use url::Url;

use crate::cli::Network;

/// URL at which devnet is running
pub const DEVNET_HOST: &str = "http://localhost:5050";

/// Cairo string for "STARKNET_CONTRACT_ADDRESS"
const PREFIX_CONTRACT_ADDRESS: FieldElement = FieldElement::from_mont([
    3829237882463328880,
    17289941567720117366,
    8635008616843941496,
    533439743893157637,
]);

// 2 ** 251 - 256
const ADDR_BOUND: FieldElement = FieldElement::from_mont([
    18446743986131443745,
    160989183,
    18446744073709255680,
    576459263475590224,
]);

pub const NFT_CONTRACT_NAME: &str = "MystisOGPass";
pub const PROXY_CONTRACT_NAME: &str = "MystisProxy";

pub const SIERRA_FILE_EXTENSION: &str = "sierra.json";
pub const CASM_FILE_EXTENSION: &str = "casm.json";

pub const INITIALIZER_FN_NAME: &str = "initializer";
pub const GET_ADMIN_FN_NAME: &str = "getAdmin";
pub const SET_CONTRACT_URI_FN_NAME: &str = "setContractURI";

/// How long to wait between polls for a transaction receipt
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// How many times to poll for a transaction receipt before giving up
pub const MAX_RECEIPT_POLLS: usize = 120;

pub type ScriptAccount = SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>;

pub fn setup_account(
    address: FieldElement,
    private_key: &str,
    network: Network,
    rpc_url: &str,
) -> Result<ScriptAccount> {
    let provider = JsonRpcClient::new(HttpTransport::new(Url::parse(rpc_url)?));

    let signer = LocalWallet::from(SigningKey::from_secret_scalar(hex_to_felt(private_key)?));

    let chain_id = match network {
        Network::AlphaMainnet => chain_id::MAINNET,
        Network::AlphaGoerli => chain_id::TESTNET,
        Network::AlphaGoerli2 => chain_id::TESTNET2,
        Network::Localhost => cairo_short_string_to_felt("KATANA")?,
    };

    Ok(SingleOwnerAccount::new(provider, signer, address, chain_id))
}

/// The paths of the Sierra & casm artifacts of the given contract
pub fn artifact_paths(artifacts_path: &str, contract_name: &str) -> (PathBuf, PathBuf) {
    let dir = Path::new(artifacts_path);
    (
        dir.join(format!("{}.{}", contract_name, SIERRA_FILE_EXTENSION)),
        dir.join(format!("{}.{}", contract_name, CASM_FILE_EXTENSION)),
    )
}

pub async fn get_or_declare(
    class_hash: Option<FieldElement>,
    sierra_path: PathBuf,
    casm_path: PathBuf,
    account: &ScriptAccount,
) -> Result<FieldElement> {
    if let Some(class_hash) = class_hash {
        debug!("Using provided class hash: {:#x}", class_hash);
        Ok(class_hash)
    } else {
        let DeclareTransactionResult {
            transaction_hash,
            class_hash,
        } = declare(sierra_path, casm_path, account).await?;
        wait_for_acceptance(account, transaction_hash).await?;
        debug!("Declared contract with class hash: {:#x}", class_hash);
        Ok(class_hash)
    }
}

pub async fn declare(
    sierra_path: PathBuf,
    casm_path: PathBuf,
    account: &ScriptAccount,
) -> Result<DeclareTransactionResult> {
    let sierra_contract: SierraClass = serde_json::from_reader(File::open(sierra_path)?)?;
    let flattened_class = sierra_contract.flatten()?;

    let casm_contract: CompiledClass = serde_json::from_reader(File::open(casm_path)?)?;
    let casm_class_hash = casm_contract.class_hash()?;

    let result = account
        .declare(Arc::new(flattened_class), casm_class_hash)
        .send()
        .await?;

    trace!("Declaration result: {:?}", result);

    Ok(result)
}

pub async fn deploy(
    account: &ScriptAccount,
    class_hash: FieldElement,
    calldata: &[FieldElement],
    salt: FieldElement,
) -> Result<InvokeTransactionResult> {
    let contract_factory = ContractFactory::new(class_hash, account);
    let deploy_result = contract_factory
        .deploy(calldata, salt, false /* unique */)
        .send()
        .await?;

    trace!("Deploy result: {:?}", deploy_result);

    Ok(deploy_result)
}

pub async fn call_contract(
    account: &ScriptAccount,
    contract_address: FieldElement,
    entry_point: &str,
    calldata: Vec<FieldElement>,
) -> Result<Vec<FieldElement>> {
    debug!("Calling {} on contract...", entry_point);
    account
        .provider()
        .call(
            FunctionCall {
                contract_address,
                entry_point_selector: get_selector_from_name(entry_point)?,
                calldata,
            },
            BlockId::Tag(BlockTag::Latest),
        )
        .await
        .map_err(|e| eyre!("Error calling {}: {}", entry_point, e))
}

pub async fn invoke_contract(
    account: &ScriptAccount,
    contract_address: FieldElement,
    entry_point: &str,
    calldata: Vec<FieldElement>,
) -> Result<InvokeTransactionResult> {
    debug!("Invoking {} on contract...", entry_point);
    let invoke_result = account
        .execute(vec![Call {
            to: contract_address,
            selector: get_selector_from_name(entry_point)?,
            calldata,
        }])
        .send()
        .await
        .map_err(|e| eyre!("Error invoking {}: {}", entry_point, e))?;

    trace!("Invoke result: {:?}", invoke_result);

    Ok(invoke_result)
}

/// The state of a transaction, as far as its receipt tells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// The transaction has not yet made it into a block
    Pending,
    /// The transaction was included in a block and executed successfully
    Succeeded,
}

/// The execution result of a receipt, or `None` if the receipt is still pending
pub fn receipt_execution_result(
    receipt: &MaybePendingTransactionReceipt,
) -> Option<&ExecutionResult> {
    match receipt {
        MaybePendingTransactionReceipt::Receipt(receipt) => Some(match receipt {
            TransactionReceipt::Invoke(r) => &r.execution_result,
            TransactionReceipt::L1Handler(r) => &r.execution_result,
            TransactionReceipt::Declare(r) => &r.execution_result,
            TransactionReceipt::Deploy(r) => &r.execution_result,
            TransactionReceipt::DeployAccount(r) => &r.execution_result,
        }),
        MaybePendingTransactionReceipt::PendingReceipt(_) => None,
    }
}

/// Classifies a transaction by its execution result, failing if it reverted
pub fn transaction_status(
    transaction_hash: FieldElement,
    execution_result: Option<&ExecutionResult>,
) -> Result<TransactionStatus> {
    match execution_result {
        None => Ok(TransactionStatus::Pending),
        Some(ExecutionResult::Succeeded) => Ok(TransactionStatus::Succeeded),
        Some(ExecutionResult::Reverted { reason }) => {
            bail!(
                "transaction {} reverted: {}",
                felt_to_hex(&transaction_hash),
                reason
            )
        }
    }
}

/// Polls for the receipt of the given transaction until it is no longer pending,
/// failing if the transaction reverted
pub async fn wait_for_acceptance(
    account: &ScriptAccount,
    transaction_hash: FieldElement,
) -> Result<()> {
    debug!("Waiting for transaction {:#x} to be accepted...", transaction_hash);
    for attempt in 1..=MAX_RECEIPT_POLLS {
        match account
            .provider()
            .get_transaction_receipt(transaction_hash)
            .await
        {
            Ok(receipt) => {
                trace!("Transaction receipt: {:?}", receipt);
                let execution_result = receipt_execution_result(&receipt);
                if transaction_status(transaction_hash, execution_result)?
                    == TransactionStatus::Succeeded
                {
                    return Ok(());
                }
                trace!("Transaction still pending (attempt {attempt})");
            }
            // The node may not know of the transaction yet
            Err(e) => trace!("Receipt unavailable (attempt {attempt}): {:?}", e),
        }
        sleep(RECEIPT_POLL_INTERVAL).await;
    }

    Err(eyre!(
        "transaction {:#x} not accepted after {} polls",
        transaction_hash,
        MAX_RECEIPT_POLLS
    ))
}

// Taken from https://github.com/xJonathanLEI/starknet-rs/blob/master/starknet-accounts/src/factory/mod.rs
pub fn calculate_contract_address(
    salt: FieldElement,
    class_hash: FieldElement,
    constructor_calldata: &[FieldElement],
) -> FieldElement {
    compute_hash_on_elements(&[
        PREFIX_CONTRACT_ADDRESS,
        FieldElement::ZERO, /* deployer address */
        salt,
        class_hash,
        compute_hash_on_elements(constructor_calldata),
    ]) % ADDR_BOUND
}

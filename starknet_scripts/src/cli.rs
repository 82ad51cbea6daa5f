//! Command line interface for the Starknet scripts

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::utils::DEVNET_HOST;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploys the NFT collection behind an upgradeable proxy.
    /// This includes declaring the NFT & proxy classes, initializing the collection
    /// through the proxy constructor, and setting the contract URI.
    Deploy(DeployArgs),

    /// Prints the calldata the `deploy` command would submit, without touching the network.
    Encode(EncodeArgs),
}

#[derive(Args, Debug)]
pub struct DeployArgs {
    #[arg(short, long, long_help, env = "STARKNET_ACCOUNT_ADDRESS")]
    /// The account address from which to declare & deploy the contracts.
    /// Assumes this is the same address as the one associated with the private key.
    pub address: String,

    #[arg(short, long, long_help, env = "STARKNET_PRIVATE_KEY", hide_env_values = true)]
    /// The private key of the account from which to send the transactions, in hex form.
    pub private_key: String,

    #[arg(short, long, long_help)]
    /// Which network you'd like to use.
    pub network: Network,

    #[arg(long, long_help, env = "STARKNET_RPC_URL", default_value = DEVNET_HOST)]
    /// The URL of the JSON-RPC node through which to send transactions.
    pub rpc_url: String,

    #[arg(long, long_help)]
    /// The path to a folder containing the Sierra & casm artifacts of the
    /// NFT & proxy contracts.
    /// The files in this folder should be named:
    /// {MystisOGPass, MystisProxy}.{sierra.json, casm.json}
    pub artifacts_path: String,

    #[arg(long, long_help)]
    /// The class hash of an already-declared NFT implementation, in hex form.
    /// If omitted, the NFT class is declared from the artifacts.
    pub nft_class_hash: Option<String>,

    #[arg(long, long_help)]
    /// The class hash of an already-declared proxy, in hex form.
    /// If omitted, the proxy class is declared from the artifacts.
    pub proxy_class_hash: Option<String>,

    #[arg(long, long_help)]
    /// The salt with which to deploy the proxy, in hex form. Defaults to zero.
    pub salt: Option<String>,

    #[arg(short, long, long_help)]
    /// The path to a JSON file overriding the collection parameters.
    /// Parameters missing from the file keep their default values.
    pub collection_config: Option<String>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[arg(short, long, long_help)]
    /// The owner of the collection, in hex form.
    /// Overrides the owner in the collection config, if any.
    pub owner: Option<String>,

    #[arg(long, long_help)]
    /// The class hash of the NFT implementation, in hex form.
    /// If provided, the full proxy constructor calldata is printed as well.
    pub nft_class_hash: Option<String>,

    #[arg(short, long, long_help)]
    /// The path to a JSON file overriding the collection parameters.
    pub collection_config: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Network {
    AlphaMainnet,
    AlphaGoerli,
    AlphaGoerli2,
    Localhost,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{CliArgs, Commands, Network};

    #[test]
    fn test_parse_deploy() {
        let args = CliArgs::try_parse_from([
            "starknet_scripts",
            "deploy",
            "--address",
            "0x123",
            "--private-key",
            "0x321",
            "--network",
            "alpha-mainnet",
            "--artifacts-path",
            "target/dev",
            "--nft-class-hash",
            "0xabc",
        ])
        .unwrap();

        match args.command {
            Commands::Deploy(deploy_args) => {
                assert_eq!(deploy_args.address, "0x123");
                assert!(matches!(deploy_args.network, Network::AlphaMainnet));
                assert_eq!(deploy_args.nft_class_hash.as_deref(), Some("0xabc"));
                assert!(deploy_args.proxy_class_hash.is_none());
                assert!(deploy_args.salt.is_none());
            }
            Commands::Encode(_) => panic!("expected deploy command"),
        }
    }

    #[test]
    fn test_parse_encode() {
        let args =
            CliArgs::try_parse_from(["starknet_scripts", "encode", "--owner", "0x123"]).unwrap();

        match args.command {
            Commands::Encode(encode_args) => {
                assert_eq!(encode_args.owner.as_deref(), Some("0x123"));
                assert!(encode_args.collection_config.is_none());
            }
            Commands::Deploy(_) => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_unknown_network_rejected() {
        assert!(CliArgs::try_parse_from([
            "starknet_scripts",
            "deploy",
            "--address",
            "0x123",
            "--private-key",
            "0x321",
            "--network",
            "sepolia",
            "--artifacts-path",
            "target/dev",
        ])
        .is_err());
    }
}

//! Scripts for deploying & configuring the NFT collection contracts on Starknet

pub mod cli;
pub mod commands;
pub mod config;

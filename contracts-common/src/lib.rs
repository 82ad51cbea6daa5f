//! Common modules used by the deployment scripts, chiefly the encoding of
//! constructor & invocation arguments into Starknet field elements

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod constants;
pub mod custom_serde;
pub mod encoding;
pub mod errors;
pub mod hex;
pub mod types;

//! A capped-supply, pay-to-mint NFT smart contract.
//!
//! # Description
//! An instance of this smart contract issues a fixed maximum number of
//! uniquely numbered tokens. Anyone can buy tokens through the payable
//! `purchase` function: the attached amount must cover the price of the
//! requested quantity and is forwarded in full to the account that created
//! the instance. Token identifiers are assigned consecutively starting at 1,
//! so a purchase of several tokens always receives a contiguous range.
//!
//! Each token resolves to a metadata location built from a base URL and the
//! decimal token ID. The base URL can be repointed by the administrator at
//! any time and takes effect immediately for already issued tokens.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
//!
//! The contract has a `transfer` function for moving a token from one
//! address to another. Only the current owner of a token can transfer it.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, events::*, helper::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod helper;
mod impls;
mod structs;

#![no_std]
mod accounting;
mod contract;
mod error;
mod msg;
mod storage;

pub mod classify;
pub mod responses;
pub mod storage;

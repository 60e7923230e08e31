pub mod cascade;
pub mod quick;
pub mod state;
pub mod storage;

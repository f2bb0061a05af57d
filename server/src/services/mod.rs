pub mod gateway;
pub mod wallet;

pub mod db;
pub mod events;
pub mod storage;

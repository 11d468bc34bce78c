pub mod block;
pub mod intent;

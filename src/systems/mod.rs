pub mod contact;
pub mod pendant;

// Adapters layer: concrete implementations of the domain ports (ARM REST
// client, AAD token credential).

pub mod arm;
pub mod credential;

// Domain layer: the customer model and the provider port. Nothing here
// depends on clap or the config backends.

pub mod model;
pub mod ports;

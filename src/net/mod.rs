//! Network layer: the mail relay transport and its wire format.

pub mod relay;

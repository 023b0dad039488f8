//! Domain types shared by both checkout workflows, and the ports the
//! application layer talks through.

pub mod credentials;
pub mod payment;
pub mod ports;
pub mod session;

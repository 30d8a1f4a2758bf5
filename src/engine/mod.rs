//! Stateful engines behind the page's two interactive features.
//!
//! Both engines are generic over the capabilities they drive (DOM container,
//! carousel widget, mail relay) so they can be exercised with fakes; the
//! browser implementations live in `util::carousel_dom` and
//! [`crate::net::relay::HttpRelay`].

pub mod reflow;
pub mod submit;

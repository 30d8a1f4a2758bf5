//! Plain client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern so the engines and components can depend on
//! small focused models. Nothing here touches the DOM; the browser layer owns
//! instances (in signals or `Rc<RefCell<_>>`) and passes them by reference.

pub mod contact;
pub mod deck;
pub mod status;
pub mod theme;
pub mod viewport;

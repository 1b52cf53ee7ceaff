use crate::node::ValueKind;
use core::fmt::{self, Display, Formatter};
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Fatal reconciliation conditions.
///
/// None of these are retried internally. They propagate to whoever started the mount or update.
#[derive(Debug, Error)]
pub enum Error {
	#[error("Element type is invalid: expected a string (for built-in components) or a class/function (for composite components) but got: {found}.{owner}")]
	InvalidElementType { found: ValueKind, owner: DeclarationAddendum },

	#[error("Encountered invalid node of type {found}")]
	InvalidNode { found: ValueKind },

	/// The DOM was changed by something other than the reconciler.
	#[error("Missing closing comment for text component {dom_id}")]
	MissingClosingComment { dom_id: u64 },

	#[error("The instance has no native node (it is not mounted)")]
	NotMounted,

	#[error("Cannot create DOM nodes: the container has no owner document")]
	MissingOwnerDocument,

	#[error("Expected the node to have a parent node")]
	Detached,

	#[error("Raw HTML can only be set on elements")]
	NotAnElement,

	#[error("Expected to receive a {expected} node but got {found}")]
	UnexpectedUpdate { expected: &'static str, found: ValueKind },

	#[error("DOM operation failed: {0:?}")]
	Dom(JsValue),
}

/// The `" Check the render method of …"` hint appended to [`Error::InvalidElementType`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationAddendum(pub Option<Rc<str>>);
impl Display for DeclarationAddendum {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Some(name) if !name.is_empty() => write!(f, " Check the render method of `{}`.", name),
			_ => Ok(()),
		}
	}
}

use crate::{
	component_tree::{ComponentTree, NodeRegistry},
	lazy_tree::InsertionMode,
};
use std::rc::Rc;
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, Node};

/// How mounting should produce its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
	/// Create DOM nodes directly.
	CreateElement,
	/// Produce HTML that will never be reconciled again, so markers can be left out.
	StaticMarkup,
	/// Produce HTML that can later be taken over by a client-side reconciler.
	Markup,
}

/// Per-pass rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
	render_mode: RenderMode,
	insertion_mode: InsertionMode,
}
impl Transaction {
	#[must_use]
	pub fn new(render_mode: RenderMode, insertion_mode: InsertionMode) -> Self {
		Self { render_mode, insertion_mode }
	}

	/// A DOM-creating transaction for the current environment.
	#[must_use]
	pub fn create_element() -> Self {
		Self::new(RenderMode::CreateElement, InsertionMode::current())
	}

	/// A markup-producing transaction. The insertion mode is irrelevant here.
	#[must_use]
	pub fn markup(static_markup: bool) -> Self {
		Self::new(if static_markup { RenderMode::StaticMarkup } else { RenderMode::Markup }, InsertionMode::Immediate)
	}

	#[must_use]
	pub fn render_mode(&self) -> RenderMode {
		self.render_mode
	}

	#[must_use]
	pub fn insertion_mode(&self) -> InsertionMode {
		self.insertion_mode
	}
}

/// Hands out DOM IDs for markers within one container. Starts at 1 and never reuses an ID.
#[derive(Debug)]
pub struct DomIdCounter(u64);
impl Default for DomIdCounter {
	fn default() -> Self {
		Self::new()
	}
}
impl DomIdCounter {
	#[must_use]
	pub fn new() -> Self {
		Self(1)
	}

	pub fn next_id(&mut self) -> u64 {
		let id = self.0;
		self.0 += 1;
		id
	}

	/// The ID that will be handed out next.
	#[must_use]
	pub fn peek(&self) -> u64 {
		self.0
	}
}

/// Per mount root state.
#[derive(Debug)]
pub struct ContainerInfo {
	owner_document: Option<Document>,
	id_counter: DomIdCounter,
	registry: Rc<dyn NodeRegistry>,
}
impl ContainerInfo {
	/// `container` is the DOM node that is rendered into, if any (there is none when rendering to a string).
	#[must_use]
	pub fn new(container: Option<&Node>) -> Self {
		Self::with_registry(container, Rc::new(ComponentTree::new()))
	}

	#[must_use]
	pub fn with_registry(container: Option<&Node>, registry: Rc<dyn NodeRegistry>) -> Self {
		let owner_document = container.and_then(|container| {
			if container.node_type() == Node::DOCUMENT_NODE {
				container.dyn_ref::<Document>().cloned()
			} else {
				container.owner_document()
			}
		});
		trace!(has_owner_document = owner_document.is_some(), "New container.");
		Self {
			owner_document,
			id_counter: DomIdCounter::new(),
			registry,
		}
	}

	#[must_use]
	pub fn owner_document(&self) -> Option<&Document> {
		self.owner_document.as_ref()
	}

	pub fn next_dom_id(&mut self) -> u64 {
		self.id_counter.next_id()
	}

	#[must_use]
	pub fn id_counter(&self) -> &DomIdCounter {
		&self.id_counter
	}

	#[must_use]
	pub fn registry(&self) -> &Rc<dyn NodeRegistry> {
		&self.registry
	}
}

#[cfg(test)]
mod tests {
	use super::DomIdCounter;

	#[test]
	fn dom_ids_start_at_one_and_increase() {
		let mut counter = DomIdCounter::new();
		assert_eq!(counter.next_id(), 1);
		assert_eq!(counter.next_id(), 2);
		assert_eq!(counter.peek(), 3);
	}
}

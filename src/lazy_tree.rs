//! Deferred DOM subtree construction.
//!
//! In Internet Explorer (8 to 11) and legacy Edge, appending childless nodes is dramatically faster than appending full subtrees,
//! so there each node is attached to its parent *before* its own children are added to it.
//! In other engines, that order is slower or neutral, so children are attached right away.
//!
//! [`LazyTree`] hides which of the two happens: callers queue children, HTML or text,
//! and the queue is flushed by [`insert_tree_before`] or [`replace_child_with_tree`].

use crate::{dom_operations::set_text_content, Error, Result};
use core::cell::Cell;
use js_sys::Reflect;
use tracing::{instrument, trace, trace_span};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Node};

/// Whether DOM insertion is deferred until a subtree is attached.
///
/// This is an environment capability. Detect it once with [`InsertionMode::current`] and pass it along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionMode {
	/// Children are appended to their parent node as soon as they are queued.
	Immediate,
	/// Children are recorded and appended only once their parent is in place.
	Lazy,
}

thread_local! {
	static DETECTED: Cell<Option<InsertionMode>> = Cell::new(None);
}

impl InsertionMode {
	/// The insertion mode for the current environment, detected on first use.
	#[must_use]
	pub fn current() -> Self {
		DETECTED.with(|detected| {
			detected.get().unwrap_or_else(|| {
				let mode = Self::detect();
				detected.set(Some(mode));
				mode
			})
		})
	}

	/// Sniffs the global environment, without caching.
	///
	/// Outside of a browser window this is always [`InsertionMode::Immediate`].
	#[must_use]
	#[instrument]
	pub fn detect() -> Self {
		let window = match web_sys::window() {
			Some(window) => window,
			None => return Self::Immediate,
		};
		let has_document_mode = window
			.document()
			.and_then(|document| Reflect::get(&document, &JsValue::from_str("documentMode")).ok())
			.map_or(false, |document_mode| document_mode.as_f64().is_some());
		let user_agent = window.navigator().user_agent().ok();
		Self::from_environment(has_document_mode, user_agent.as_deref())
	}

	/// `has_document_mode` is true iff `document.documentMode` is a number, which is the case only in Internet Explorer.
	#[must_use]
	pub fn from_environment(has_document_mode: bool, user_agent: Option<&str>) -> Self {
		if has_document_mode || user_agent.map_or(false, is_legacy_edge) {
			Self::Lazy
		} else {
			Self::Immediate
		}
	}
}

/// Matches `\bEdge/\d`.
fn is_legacy_edge(user_agent: &str) -> bool {
	user_agent.match_indices("Edge/").any(|(i, matched)| {
		let word_boundary = user_agent[..i].chars().next_back().map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_'));
		let digit = user_agent[i + matched.len()..].chars().next().map_or(false, |c| c.is_ascii_digit());
		word_boundary && digit
	})
}

/// A DOM node together with content that may not have been attached to it yet.
///
/// Only one of children, HTML or text should be queued on the same tree.
#[derive(Debug)]
pub struct LazyTree {
	node: Node,
	children: Vec<LazyTree>,
	html: Option<String>,
	text: Option<String>,
}

impl LazyTree {
	#[must_use]
	pub fn new(node: impl Into<Node>) -> Self {
		Self {
			node: node.into(),
			children: Vec::new(),
			html: None,
			text: None,
		}
	}

	#[must_use]
	pub fn node(&self) -> &Node {
		&self.node
	}

	/// Children that are still waiting to be attached, in mount order.
	#[must_use]
	pub fn children(&self) -> &[LazyTree] {
		&self.children
	}

	#[must_use]
	pub fn html(&self) -> Option<&str> {
		self.html.as_deref()
	}

	#[must_use]
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Discards the builder, returning the DOM node.
	///
	/// Any content that is still queued is lost.
	#[must_use]
	pub fn into_node(self) -> Node {
		self.node
	}

	/// # Errors
	///
	/// [`Error::Dom`] iff appending `child` right away throws.
	pub fn queue_child(&mut self, mode: InsertionMode, child: LazyTree) -> Result<()> {
		debug_assert!(self.html.is_none() && self.text.is_none(), "Queued a child on a tree that already has HTML or text queued.");
		match mode {
			InsertionMode::Lazy => self.children.push(child),
			InsertionMode::Immediate => {
				self.node.append_child(&child.node).map_err(Error::Dom)?;
			}
		}
		Ok(())
	}

	/// # Errors
	///
	/// [`Error::NotAnElement`] iff this tree's node isn't an [`Element`].
	pub fn queue_html(&mut self, mode: InsertionMode, html: impl Into<String>) -> Result<()> {
		debug_assert!(self.children.is_empty() && self.text.is_none(), "Queued HTML on a tree that already has children or text queued.");
		let element = self.node.dyn_ref::<Element>().ok_or(Error::NotAnElement)?;
		match mode {
			InsertionMode::Lazy => self.html = Some(html.into()),
			InsertionMode::Immediate => element.set_inner_html(&html.into()),
		}
		Ok(())
	}

	pub fn queue_text(&mut self, mode: InsertionMode, text: impl Into<String>) {
		debug_assert!(self.children.is_empty() && self.html.is_none(), "Queued text on a tree that already has children or HTML queued.");
		match mode {
			InsertionMode::Lazy => self.text = Some(text.into()),
			InsertionMode::Immediate => set_text_content(&self.node, &text.into()),
		}
	}
}

fn insert_tree_children(mode: InsertionMode, tree: LazyTree) -> Result<()> {
	if mode != InsertionMode::Lazy {
		return Ok(());
	}

	let LazyTree { node, children, html, text } = tree;
	if !children.is_empty() {
		let span = trace_span!("Flushing queued children", count = children.len());
		let _enter = span.enter();
		for child in children {
			insert_tree_before(mode, &node, child, None)?;
		}
	} else if let Some(html) = html {
		trace!("Flushing queued HTML.");
		node.dyn_ref::<Element>().ok_or(Error::NotAnElement)?.set_inner_html(&html);
	} else if let Some(text) = text {
		trace!("Flushing queued text.");
		set_text_content(&node, &text);
	}
	Ok(())
}

/// Inserts `tree` into `parent_node` before `reference_node` (or at the end), then attaches all queued content.
///
/// A [***DocumentFragment***](https://developer.mozilla.org/en-US/docs/Web/API/DocumentFragment) is populated *before* insertion instead,
/// since its children move to `parent_node` on insertion and anything appended to it afterwards wouldn't show up in the document.
///
/// # Errors
///
/// [`Error::Dom`] if an insertion throws. The DOM is left partially updated in that case.
#[instrument(skip(tree), fields(node_type = tree.node.node_type()))]
pub fn insert_tree_before(mode: InsertionMode, parent_node: &Node, tree: LazyTree, reference_node: Option<&Node>) -> Result<()> {
	let node = tree.node.clone();
	if node.node_type() == Node::DOCUMENT_FRAGMENT_NODE {
		insert_tree_children(mode, tree)?;
		parent_node.insert_before(&node, reference_node).map_err(Error::Dom)?;
	} else {
		parent_node.insert_before(&node, reference_node).map_err(Error::Dom)?;
		insert_tree_children(mode, tree)?;
	}
	Ok(())
}

/// Swaps `old_node` for `new_tree`'s node, then attaches all queued content.
///
/// # Errors
///
/// [`Error::Detached`] iff `old_node` has no parent, [`Error::Dom`] if replacing or flushing throws.
#[instrument(skip(new_tree), fields(node_type = new_tree.node.node_type()))]
pub fn replace_child_with_tree(mode: InsertionMode, old_node: &Node, new_tree: LazyTree) -> Result<()> {
	let parent_node = old_node.parent_node().ok_or(Error::Detached)?;
	parent_node.replace_child(&new_tree.node, old_node).map_err(Error::Dom)?;
	insert_tree_children(mode, new_tree)
}

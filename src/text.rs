//! Text content wrapped in comment markers.
//!
//! Text nodes break two assumptions the reconciler makes about what it mounts:
//! Adjacent text nodes are merged by the browser when markup is parsed, and text nodes can't be looked up again by ID.
//! [`TextComponent`] therefore renders its text between two comments,
//! `<!-- react-text: 1 -->` and `<!-- /react-text -->`, which lets it be reconciled like any other node.

use crate::{
	component::{Context, InternalComponent, MountImage, NativeNode},
	component_tree::{InstanceId, NodeRegistry},
	container::{ContainerInfo, RenderMode, Transaction},
	dom_operations::replace_delimited_text,
	escape::escape_text_content,
	lazy_tree::LazyTree,
	node::{Node, TextContent},
	Error, Result,
};
use std::rc::Rc;
use tracing::{error, instrument, trace, trace_span};

pub const CLOSING_DELIMITER: &str = " /react-text ";

#[must_use]
pub fn opening_delimiter(dom_id: u64) -> String {
	format!(" react-text: {} ", dom_id)
}

#[derive(Debug)]
pub struct TextComponent {
	id: InstanceId,
	current_value: TextContent,
	string_text: String,
	dom_id: Option<u64>,
	native_parent: Option<InstanceId>,
	registry: Option<Rc<dyn NodeRegistry>>,
	closing_comment: Option<web_sys::Node>,
	comment_nodes: Option<[web_sys::Node; 2]>,
}

impl TextComponent {
	#[must_use]
	pub fn new(text: TextContent) -> Self {
		Self {
			id: InstanceId::next(),
			string_text: text.to_string(),
			current_value: text,
			dom_id: None,
			native_parent: None,
			registry: None,
			closing_comment: None,
			comment_nodes: None,
		}
	}

	#[must_use]
	pub fn id(&self) -> InstanceId {
		self.id
	}

	#[must_use]
	pub fn current_value(&self) -> &TextContent {
		&self.current_value
	}

	#[must_use]
	pub fn string_text(&self) -> &str {
		&self.string_text
	}

	/// Assigned on mount.
	#[must_use]
	pub fn dom_id(&self) -> Option<u64> {
		self.dom_id
	}

	#[must_use]
	pub fn native_parent(&self) -> Option<InstanceId> {
		self.native_parent
	}

	/// Updates the rendered text.
	///
	/// Nothing happens if `next` equals the current value,
	/// and the DOM is left alone if only the value but not its string form changed.
	///
	/// # Errors
	///
	/// Iff the markers can't be resolved or the DOM update fails.
	#[instrument(skip(self, next), fields(id = self.id.get()))]
	pub fn receive_text(&mut self, next: TextContent) -> Result<()> {
		if next == self.current_value {
			trace!("Unchanged.");
			return Ok(());
		}

		let next_string_text = next.to_string();
		self.current_value = next;
		if next_string_text == self.string_text {
			trace!("String form unchanged. Skipping DOM update.");
			return Ok(());
		}

		if cfg!(feature = "dangerous-logging") {
			trace!("Replacing {:?} with {:?}.", self.string_text, next_string_text);
		}
		self.string_text = next_string_text;
		let [opening_comment, closing_comment] = self.comment_nodes()?;
		replace_delimited_text(&opening_comment, &closing_comment, &self.string_text)
	}

	/// The opening and closing marker, resolved once and then cached until unmount.
	///
	/// # Errors
	///
	/// [`Error::NotMounted`] if there is no cached opening comment,
	/// [`Error::MissingClosingComment`] if no closing comment follows it.
	pub fn comment_nodes(&mut self) -> Result<[web_sys::Node; 2]> {
		if let Some(comment_nodes) = &self.comment_nodes {
			return Ok(comment_nodes.clone());
		}

		let dom_id = self.dom_id.ok_or(Error::NotMounted)?;
		let opening_comment = self
			.registry
			.as_ref()
			.and_then(|registry| registry.get_node_from_instance(self.id))
			.ok_or(Error::NotMounted)?;

		let closing_comment = if let Some(closing_comment) = self.closing_comment.clone() {
			closing_comment
		} else {
			let span = trace_span!("Searching closing comment", dom_id);
			let _enter = span.enter();
			let closing_comment = find_closing_comment(&opening_comment).ok_or_else(|| {
				error!("Missing closing comment. The DOM was modified by something other than the reconciler.");
				Error::MissingClosingComment { dom_id }
			})?;
			self.closing_comment = Some(closing_comment.clone());
			closing_comment
		};

		let comment_nodes = [opening_comment, closing_comment];
		self.comment_nodes = Some(comment_nodes.clone());
		Ok(comment_nodes)
	}
}

fn find_closing_comment(opening_comment: &web_sys::Node) -> Option<web_sys::Node> {
	let mut node = opening_comment.next_sibling();
	while let Some(current) = node {
		if current.node_type() == web_sys::Node::COMMENT_NODE && current.node_value().as_deref() == Some(CLOSING_DELIMITER) {
			return Some(current);
		}
		node = current.next_sibling();
	}
	None
}

impl InternalComponent for TextComponent {
	#[instrument(skip(self, container, _context), fields(id = self.id.get()))]
	fn mount_component(&mut self, transaction: &Transaction, native_parent: Option<InstanceId>, container: &mut ContainerInfo, _context: &Context) -> Result<MountImage> {
		let dom_id = container.next_dom_id();
		let opening_value = opening_delimiter(dom_id);
		self.dom_id = Some(dom_id);
		self.native_parent = native_parent;
		self.registry = Some(Rc::clone(container.registry()));
		trace!(dom_id, "Allocated DOM ID.");

		match transaction.render_mode() {
			RenderMode::CreateElement => {
				let document = container.owner_document().ok_or(Error::MissingOwnerDocument)?;
				let mode = transaction.insertion_mode();
				let opening_comment = document.create_comment(&opening_value);
				let closing_comment = document.create_comment(CLOSING_DELIMITER);

				let mut lazy_tree = LazyTree::new(document.create_document_fragment());
				lazy_tree.queue_child(mode, LazyTree::new(opening_comment.clone()))?;
				if !self.string_text.is_empty() {
					lazy_tree.queue_child(mode, LazyTree::new(document.create_text_node(&self.string_text)))?;
				}
				lazy_tree.queue_child(mode, LazyTree::new(closing_comment.clone()))?;

				container.registry().precache_node(self.id, opening_comment.as_ref());
				self.closing_comment = Some(closing_comment.into());
				Ok(MountImage::Tree(lazy_tree))
			}

			// Nothing will look for this node again, so the markers can be left out.
			RenderMode::StaticMarkup => Ok(MountImage::Markup(escape_text_content(&self.string_text).into_owned())),

			RenderMode::Markup => Ok(MountImage::Markup(format!(
				"<!--{}-->{}<!--{}-->",
				opening_value,
				escape_text_content(&self.string_text),
				CLOSING_DELIMITER
			))),
		}
	}

	fn receive_component(&mut self, next: &Node, _transaction: &Transaction, _context: &Context) -> Result<()> {
		match next {
			Node::Text(text) => self.receive_text(text.clone()),
			other => Err(Error::UnexpectedUpdate {
				expected: "text",
				found: other.kind(),
			}),
		}
	}

	fn get_native_node(&mut self) -> Result<NativeNode> {
		self.comment_nodes().map(NativeNode::Delimited)
	}

	#[instrument(skip(self), fields(id = self.id.get()))]
	fn unmount_component(&mut self) {
		self.closing_comment = None;
		self.comment_nodes = None;
		if let Some(registry) = self.registry.take() {
			registry.uncache_node(self.id);
		}
	}
}

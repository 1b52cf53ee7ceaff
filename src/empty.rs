use crate::{
	component::{Context, InternalComponent, MountImage, NativeNode},
	component_tree::{InstanceId, NodeRegistry},
	container::{ContainerInfo, RenderMode, Transaction},
	lazy_tree::LazyTree,
	node::Node,
	Error, Result,
};
use std::rc::Rc;
use tracing::{instrument, trace};

/// What `null` and `false` render as: a single placeholder comment, `<!-- react-empty: 1 -->`.
#[derive(Debug)]
pub struct EmptyComponent {
	id: InstanceId,
	dom_id: Option<u64>,
	native_parent: Option<InstanceId>,
	registry: Option<Rc<dyn NodeRegistry>>,
}
impl Default for EmptyComponent {
	fn default() -> Self {
		Self::new()
	}
}
impl EmptyComponent {
	#[must_use]
	pub fn new() -> Self {
		Self {
			id: InstanceId::next(),
			dom_id: None,
			native_parent: None,
			registry: None,
		}
	}

	#[must_use]
	pub fn id(&self) -> InstanceId {
		self.id
	}

	#[must_use]
	pub fn dom_id(&self) -> Option<u64> {
		self.dom_id
	}

	#[must_use]
	pub fn native_parent(&self) -> Option<InstanceId> {
		self.native_parent
	}
}

impl InternalComponent for EmptyComponent {
	#[instrument(skip(self, container, _context), fields(id = self.id.get()))]
	fn mount_component(&mut self, transaction: &Transaction, native_parent: Option<InstanceId>, container: &mut ContainerInfo, _context: &Context) -> Result<MountImage> {
		let dom_id = container.next_dom_id();
		let value = format!(" react-empty: {} ", dom_id);
		self.dom_id = Some(dom_id);
		self.native_parent = native_parent;
		self.registry = Some(Rc::clone(container.registry()));

		match transaction.render_mode() {
			RenderMode::CreateElement => {
				let document = container.owner_document().ok_or(Error::MissingOwnerDocument)?;
				let comment = document.create_comment(&value);
				container.registry().precache_node(self.id, comment.as_ref());
				Ok(MountImage::Tree(LazyTree::new(comment)))
			}
			RenderMode::StaticMarkup => Ok(MountImage::Markup(String::new())),
			RenderMode::Markup => Ok(MountImage::Markup(format!("<!--{}-->", value))),
		}
	}

	fn receive_component(&mut self, _next: &Node, _transaction: &Transaction, _context: &Context) -> Result<()> {
		trace!("Nothing to do for empty component.");
		Ok(())
	}

	fn get_native_node(&mut self) -> Result<NativeNode> {
		self.registry
			.as_ref()
			.and_then(|registry| registry.get_node_from_instance(self.id))
			.map(NativeNode::Single)
			.ok_or(Error::NotMounted)
	}

	#[instrument(skip(self), fields(id = self.id.get()))]
	fn unmount_component(&mut self) {
		if let Some(registry) = self.registry.take() {
			registry.uncache_node(self.id);
		}
	}
}
